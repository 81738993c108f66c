// ==========================================
// 季节性生产排程引擎 - 排程 API
// ==========================================
// 职责: 串联 快照加载 → 排程 → 导出，供命令行与外部调用方使用
// 红线: 不含排程规则，规则全部在 engine 层
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::factory::{CapacityOverride, FactoryProfile};
use crate::domain::product::ProductForecast;
use crate::domain::schedule::ScheduleEntry;
use crate::engine::{ScheduleOrchestrator, ScheduleResult};
use crate::exporter::CsvExporter;
use crate::importer::SnapshotLoader;
use std::path::Path;

/// 加载后的输入快照
#[derive(Debug, Clone)]
pub struct InputSnapshot {
    pub forecasts: Vec<ProductForecast>,
    pub factory: FactoryProfile,
}

// ==========================================
// ScheduleApi - 排程 API
// ==========================================
pub struct ScheduleApi {
    orchestrator: ScheduleOrchestrator,
}

impl ScheduleApi {
    pub fn new() -> Self {
        Self {
            orchestrator: ScheduleOrchestrator::new(),
        }
    }

    /// 读取输入快照
    pub fn load_snapshot(
        &self,
        forecast_path: &Path,
        factory_path: &Path,
    ) -> ApiResult<InputSnapshot> {
        let forecasts = SnapshotLoader::load_forecast(forecast_path)?;
        let factory = SnapshotLoader::load_factory_profile(factory_path)?;
        Ok(InputSnapshot { forecasts, factory })
    }

    /// 基于已解析的输入生成排程
    pub fn generate(
        &self,
        snapshot: &InputSnapshot,
        overrides: Option<&CapacityOverride>,
    ) -> ApiResult<ScheduleResult> {
        Ok(self
            .orchestrator
            .execute(&snapshot.forecasts, &snapshot.factory, overrides)?)
    }

    /// 从文件读取输入并生成排程
    pub fn generate_from_files(
        &self,
        forecast_path: &Path,
        factory_path: &Path,
        overrides: Option<&CapacityOverride>,
    ) -> ApiResult<(InputSnapshot, ScheduleResult)> {
        let snapshot = self.load_snapshot(forecast_path, factory_path)?;
        let result = self.generate(&snapshot, overrides)?;
        Ok((snapshot, result))
    }

    /// 导出排程为 CSV
    pub fn export_csv(&self, entries: &[ScheduleEntry], output_path: &Path) -> ApiResult<usize> {
        Ok(CsvExporter::export_to_path(entries, output_path)?)
    }
}

impl Default for ScheduleApi {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 季节性生产排程引擎 - 引擎编排器
// ==========================================
// 用途: 协调 校验 → 需求展开 → 日产能 → 优先级分配 → 组装
// 红线: 纯计算、单线程、同输入同输出
// ==========================================

use crate::domain::capacity::DailyCapacityPool;
use crate::domain::factory::{CapacityOverride, CapacityParameters, FactoryProfile};
use crate::domain::product::ProductForecast;
use crate::domain::schedule::{ScheduleEntry, SkippedDemand};
use crate::engine::assembler::ScheduleAssembler;
use crate::engine::capacity_calculator::CapacityCalculator;
use crate::engine::error::EngineResult;
use crate::engine::validation::{resolve_products, validate_capacity_parameters};
use crate::engine::{CapacityFiller, DemandExpander, PrioritySorter};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// ScheduleResult - 排程结果
// ==========================================

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResult {
    /// 本次运行标识（仅用于日志关联，不参与计算）
    pub run_id: String,

    // 组装输出（日期升序，当日按优先级）
    pub entries: Vec<ScheduleEntry>,

    // 每个有需求的日期一条
    pub daily_pools: Vec<DailyCapacityPool>,

    // 未获分配的需求及原因
    pub skipped: Vec<SkippedDemand>,
}

// ==========================================
// ScheduleOrchestrator - 引擎编排器
// ==========================================

pub struct ScheduleOrchestrator {
    expander: DemandExpander,
    sorter: PrioritySorter,
    filler: CapacityFiller,
}

impl ScheduleOrchestrator {
    /// 创建新的编排器实例
    pub fn new() -> Self {
        Self {
            expander: DemandExpander::new(),
            sorter: PrioritySorter::new(),
            filler: CapacityFiller::new(),
        }
    }

    /// 执行完整排程流程
    ///
    /// # 参数
    /// - forecasts: 产品预测列表（声明顺序即同优先级决胜顺序）
    /// - factory: 工厂档案（含约束表与停机日历）
    /// - overrides: 调用方提供的产能覆写参数
    ///
    /// # 返回
    /// - Ok(ScheduleResult): 完整排程
    /// - Err(ScheduleError): 校验失败，未执行任何分配
    pub fn execute(
        &self,
        forecasts: &[ProductForecast],
        factory: &FactoryProfile,
        overrides: Option<&CapacityOverride>,
    ) -> EngineResult<ScheduleResult> {
        let run_id = Uuid::new_v4().to_string();

        info!(
            run_id = %run_id,
            factory_id = factory.factory_id,
            products_count = forecasts.len(),
            has_override = overrides.map_or(false, |o| !o.is_empty()),
            "开始执行排程流程"
        );

        // ==========================================
        // 步骤1: 参数合并与校验
        // ==========================================
        debug!("步骤1: 参数合并与校验");

        let params = CapacityParameters::from_profile(factory, overrides);
        validate_capacity_parameters(&params)?;
        let products = resolve_products(forecasts, &factory.constraint_table())?;

        // ==========================================
        // 步骤2: 需求窗口展开
        // ==========================================
        debug!("步骤2: 需求窗口展开");

        let calendar = self.expander.expand(&products);
        let days_count = calendar.day_count();
        let (days, mut targets) = (calendar.days, calendar.targets);

        // ==========================================
        // 步骤3: 逐日计算产能并按优先级分配
        // ==========================================
        debug!("步骤3: 逐日分配");

        let calculator = CapacityCalculator::from_parameters(&params);
        let mut assembler = ScheduleAssembler::new();

        // BTreeMap 按日期升序迭代
        for (date, entries) in days {
            let mut pool = calculator.open_pool(date);
            let sorted = self.sorter.sort(entries);
            let day = self.filler.fill_single_day(&mut pool, &sorted, &mut targets);
            assembler.append_day(pool, day);
        }

        // ==========================================
        // 步骤4: 组装结果
        // ==========================================
        let (entries, daily_pools, skipped) = assembler.finish();

        info!(
            run_id = %run_id,
            days_count,
            entries_count = entries.len(),
            skipped_count = skipped.len(),
            nominal_capacity = calculator.nominal_capacity(),
            "排程流程完成"
        );

        Ok(ScheduleResult {
            run_id,
            entries,
            daily_pools,
            skipped,
        })
    }
}

impl Default for ScheduleOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// 生成排程（仅返回有序排程行）
pub fn generate_schedule(
    forecasts: &[ProductForecast],
    factory: &FactoryProfile,
    overrides: Option<&CapacityOverride>,
) -> EngineResult<Vec<ScheduleEntry>> {
    ScheduleOrchestrator::new()
        .execute(forecasts, factory, overrides)
        .map(|result| result.entries)
}

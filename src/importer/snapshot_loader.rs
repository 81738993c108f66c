// ==========================================
// 季节性生产排程引擎 - 输入快照加载
// ==========================================
// 支持: forecast.json（产品预测）/ factory_info.json（工厂档案）
// 红线: 只负责解析，不做排程判断
// ==========================================

use crate::domain::factory::FactoryProfile;
use crate::domain::product::ProductForecast;
use crate::importer::error::{ImportError, ImportResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// 设备效率大于该值时按百分比解释（如 90 → 0.9）
const EFFICIENCY_PERCENT_THRESHOLD: f64 = 1.0;

/// forecast.json 顶层结构
#[derive(Debug, Deserialize)]
struct ForecastDocument {
    #[serde(default)]
    year: Option<i32>,
    products: Vec<ProductForecast>,
}

// ==========================================
// SnapshotLoader - 快照加载器
// ==========================================
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// 读取产品预测文件
    pub fn load_forecast(path: &Path) -> ImportResult<Vec<ProductForecast>> {
        let raw = Self::read_json_file(path)?;
        Self::parse_forecast_named(&raw, &path.display().to_string())
    }

    /// 读取工厂档案文件
    pub fn load_factory_profile(path: &Path) -> ImportResult<FactoryProfile> {
        let raw = Self::read_json_file(path)?;
        Self::parse_factory_profile_named(&raw, &path.display().to_string())
    }

    /// 解析产品预测 JSON 文本
    pub fn parse_forecast(raw: &str) -> ImportResult<Vec<ProductForecast>> {
        Self::parse_forecast_named(raw, "<memory>")
    }

    /// 解析工厂档案 JSON 文本
    pub fn parse_factory_profile(raw: &str) -> ImportResult<FactoryProfile> {
        Self::parse_factory_profile_named(raw, "<memory>")
    }

    // ==========================================
    // 内部实现
    // ==========================================

    fn parse_forecast_named(raw: &str, source_name: &str) -> ImportResult<Vec<ProductForecast>> {
        let doc: ForecastDocument =
            serde_json::from_str(raw).map_err(|e| json_error(source_name, e))?;

        info!(
            source = source_name,
            year = ?doc.year,
            products_count = doc.products.len(),
            "产品预测加载完成"
        );
        Ok(doc.products)
    }

    fn parse_factory_profile_named(raw: &str, source_name: &str) -> ImportResult<FactoryProfile> {
        let mut profile: FactoryProfile =
            serde_json::from_str(raw).map_err(|e| json_error(source_name, e))?;

        profile.machine_efficiency = normalize_efficiency(profile.machine_efficiency)?;

        info!(
            source = source_name,
            factory_id = profile.factory_id,
            downtime_count = profile.downtime_schedule.len(),
            constraints_count = profile.product_constraints.len(),
            "工厂档案加载完成"
        );
        Ok(profile)
    }

    fn read_json_file(path: &Path) -> ImportResult<String> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => {}
            Some(ext) => return Err(ImportError::UnsupportedFormat(ext.to_string())),
            None => return Err(ImportError::UnsupportedFormat(String::new())),
        }

        debug!(path = %path.display(), "读取快照文件");
        Ok(fs::read_to_string(path)?)
    }
}

fn json_error(source_name: &str, err: serde_json::Error) -> ImportError {
    ImportError::JsonParseError {
        source_name: source_name.to_string(),
        message: err.to_string(),
    }
}

/// 统一设备效率口径为小数
///
/// - [0, 1]: 原样保留
/// - (1, 100]: 视为百分比，除以 100
/// - 其他: 报错
pub fn normalize_efficiency(value: f64) -> ImportResult<f64> {
    if (0.0..=EFFICIENCY_PERCENT_THRESHOLD).contains(&value) {
        return Ok(value);
    }
    if value > EFFICIENCY_PERCENT_THRESHOLD && value <= 100.0 {
        warn!(value, "设备效率按百分比解释");
        return Ok(value / 100.0);
    }
    Err(ImportError::ValueRangeError {
        field: "machine_efficiency".to_string(),
        value,
        min: 0.0,
        max: 100.0,
    })
}

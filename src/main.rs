// ==========================================
// 季节性生产排程引擎 - 命令行入口
// ==========================================
// 用法: production-scheduler [forecast.json] [factory_info.json] [output.csv]
// 位置参数优先于配置文件与环境变量
// ==========================================

use anyhow::{Context, Result};
use production_scheduler::config::ConfigManager;
use production_scheduler::{logging, ScheduleApi, ScheduleReport};
use std::path::PathBuf;

/// 启动日志中展示的排程行数
const PREVIEW_ROWS: usize = 5;

fn main() -> Result<()> {
    let mut manager = ConfigManager::load_default()
        .map_err(|e| anyhow::anyhow!("配置加载失败: {}", e))?;
    manager.apply_env_overrides();

    // 位置参数覆写
    let args: Vec<String> = std::env::args().skip(1).collect();
    {
        let config = manager.config_mut();
        if let Some(v) = args.first() {
            config.forecast_path = PathBuf::from(v);
        }
        if let Some(v) = args.get(1) {
            config.factory_path = PathBuf::from(v);
        }
        if let Some(v) = args.get(2) {
            config.output_path = PathBuf::from(v);
        }
    }

    logging::init(&manager.config().log_filter, manager.config().log_format);

    tracing::info!("==================================================");
    tracing::info!("{}", production_scheduler::APP_NAME);
    tracing::info!("系统版本: {}", production_scheduler::VERSION);
    tracing::info!("==================================================");

    let snapshot = manager
        .get_config_snapshot()
        .map_err(|e| anyhow::anyhow!("配置快照生成失败: {}", e))?;
    tracing::debug!(config = %snapshot, "生效配置");

    let config = manager.into_config();
    let api = ScheduleApi::new();

    let (input, result) = api
        .generate_from_files(
            &config.forecast_path,
            &config.factory_path,
            config.capacity_override.as_ref(),
        )
        .with_context(|| {
            format!(
                "排程生成失败 (forecast={}, factory={})",
                config.forecast_path.display(),
                config.factory_path.display()
            )
        })?;

    api.export_csv(&result.entries, &config.output_path)
        .with_context(|| format!("CSV 导出失败: {}", config.output_path.display()))?;

    for entry in result.entries.iter().take(PREVIEW_ROWS) {
        tracing::info!(
            date = %entry.date,
            product_id = entry.product_id,
            product_name = %entry.product_name,
            scheduled_units = entry.scheduled_units,
            "排程预览"
        );
    }

    for summary in ScheduleReport::product_summaries(&result.entries, &input.forecasts) {
        tracing::info!(
            product_id = summary.product_id,
            product_name = %summary.product_name,
            target_units = summary.target_units,
            scheduled_units = summary.scheduled_units,
            shortfall_units = summary.shortfall_units,
            "产品汇总"
        );
    }

    tracing::info!(
        run_id = %result.run_id,
        rows = result.entries.len(),
        output = %config.output_path.display(),
        "排程完成"
    );

    Ok(())
}

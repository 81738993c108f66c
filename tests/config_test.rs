// ==========================================
// 配置加载集成测试
// ==========================================

mod helpers;

use helpers::test_data_builder::{assemble, FactoryBuilder, ProductBuilder};
use production_scheduler::config::{config_keys, ConfigManager};
use production_scheduler::engine::generate_schedule;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_file_override_drives_schedule() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
  "output_path": "out/schedule.csv",
  "capacity_override": { "max_daily_capacity": 30 }
}"#,
    )
    .unwrap();

    let manager = ConfigManager::load(&path).unwrap();
    let config = manager.config();
    assert_eq!(config.output_path, PathBuf::from("out/schedule.csv"));
    // 未出现的键保持默认值
    assert_eq!(config.forecast_path, PathBuf::from("forecast.json"));

    let (forecasts, factory) = assemble(vec![ProductBuilder::new(1).cap(80.0)], FactoryBuilder::new(100.0));
    let entries = generate_schedule(&forecasts, &factory, config.capacity_override.as_ref()).unwrap();
    assert_eq!(entries[0].scheduled_units, 30);
}

#[test]
fn test_override_lookup_precedence_over_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "log_filter": "warn" }"#).unwrap();

    let mut manager = ConfigManager::load(&path).unwrap();
    let env: HashMap<&str, &str> = [
        (config_keys::LOG_FILTER, "debug"),
        (config_keys::FACTORY_PATH, "  "),
    ]
    .into_iter()
    .collect();
    manager.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(manager.config().log_filter, "debug");
    // 空白值不覆写
    assert_eq!(manager.config().factory_path, PathBuf::from("factory_info.json"));
}

#[test]
fn test_malformed_config_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(ConfigManager::load(&path).is_err());
}

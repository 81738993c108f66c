// ==========================================
// 季节性生产排程引擎 - 核心库
// ==========================================
// 系统定位: 单次批量计算（给定输入快照 → 逐日排程）
// 核心: 需求展开 → 停机折算产能 → 按优先级贪心分配 → 组装
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排程算法
pub mod engine;

// 导入层 - JSON 输入快照
pub mod importer;

// 导出层 - CSV 排程结果
pub mod exporter;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CapacityOverride, DowntimeEntry, FactoryProfile, ProductConstraint, ProductForecast,
    ProductId, ScheduleEntry,
};

// 引擎
pub use engine::{
    generate_schedule, ScheduleError, ScheduleOrchestrator, ScheduleReport, ScheduleResult,
};

// API
pub use api::{ApiError, ScheduleApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "季节性生产排程引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

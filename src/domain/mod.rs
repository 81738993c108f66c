// ==========================================
// 季节性生产排程引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含文件读写逻辑,不含引擎逻辑
// ==========================================

pub mod capacity;
pub mod factory;
pub mod product;
pub mod schedule;
pub mod types;

// 重导出核心类型
pub use capacity::{CapacityConstraint, DailyCapacityPool};
pub use factory::{CapacityOverride, CapacityParameters, DowntimeEntry, FactoryProfile};
pub use product::{Product, ProductConstraint, ProductForecast};
pub use schedule::{DemandEntry, ScheduleEntry, SkippedDemand, TargetHandle};
pub use types::{ProductId, SkipReason};

// ==========================================
// 季节性生产排程引擎 - 引擎层
// ==========================================
// 职责: 实现排程算法,不读写文件
// 红线: 所有未分配的需求必须输出原因
// ==========================================

pub mod assembler;
pub mod capacity_calculator;
pub mod capacity_filler;
pub mod demand;
pub mod error;
pub mod orchestrator;
pub mod priority;
pub mod report;
pub mod validation;

// 重导出核心引擎
pub use assembler::ScheduleAssembler;
pub use capacity_calculator::CapacityCalculator;
pub use capacity_filler::{CapacityFiller, FillSingleDayResult};
pub use demand::{DemandCalendar, DemandExpander, RemainingTargets};
pub use error::{EngineResult, ScheduleError};
pub use orchestrator::{generate_schedule, ScheduleOrchestrator, ScheduleResult};
pub use priority::PrioritySorter;
pub use report::{DailyUtilization, ProductSummary, ScheduleReport};

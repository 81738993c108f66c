// ==========================================
// 季节性生产排程引擎 - API 层
// ==========================================
// 职责: 面向调用方的业务接口
// ==========================================

pub mod error;
pub mod schedule_api;

pub use error::{ApiError, ApiResult};
pub use schedule_api::{InputSnapshot, ScheduleApi};

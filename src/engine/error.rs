// ==========================================
// 季节性生产排程引擎 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 校验失败在分配开始前整体中止，不返回部分结果
// ==========================================

use crate::domain::types::ProductId;
use chrono::NaiveDate;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    // ===== 输入关联错误 =====
    #[error("产品缺少约束记录: product_id={product_id}")]
    MissingConstraint { product_id: ProductId },

    #[error("预测表中产品重复: product_id={product_id}")]
    DuplicateProduct { product_id: ProductId },

    // ===== 参数校验错误 =====
    #[error("产能参数无效 (field={field}, value={value}): {message}")]
    InvalidCapacityParameter {
        field: &'static str,
        value: f64,
        message: &'static str,
    },

    #[error("停机工时无效 (date={date}): {hours}")]
    InvalidDowntime { date: NaiveDate, hours: f64 },

    #[error("产品参数无效 (product_id={product_id}, field={field}): {value}")]
    InvalidProductParameter {
        product_id: ProductId,
        field: &'static str,
        value: f64,
    },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, ScheduleError>;

// ==========================================
// 季节性生产排程引擎 - 排程领域模型
// ==========================================
// DemandEntry: 派生数据，每个产品在季节窗口内每日一条
// ScheduleEntry: 输出数据，写入后不可修改
// ==========================================

use crate::domain::types::{ProductId, SkipReason};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 剩余目标计数器句柄
///
/// 同一产品的所有 DemandEntry 持有同一个句柄，
/// 计数器本身由单次排程运行持有。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetHandle(pub(crate) usize);

impl TargetHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

// ==========================================
// DemandEntry - 日需求记录
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct DemandEntry {
    pub product_id: ProductId,
    pub product_name: String,
    pub daily_cap: f64,
    pub priority_level: i32,
    pub declaration_index: usize,
    pub target: TargetHandle,
}

// ==========================================
// ScheduleEntry - 排程结果行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub product_id: ProductId,
    pub product_name: String,
    pub scheduled_units: u64,
}

// ==========================================
// SkippedDemand - 未获分配的需求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedDemand {
    pub date: NaiveDate,
    pub product_id: ProductId,
    pub reason: SkipReason,
}

// ==========================================
// 季节性生产排程引擎 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 产品标识（与预测表、约束表共用的键）
pub type ProductId = u32;

// ==========================================
// 跳过原因 (Skip Reason)
// ==========================================
// 某产品在某日未获分配时给出的显式原因
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    CapacityExhausted, // 当日产能已耗尽
    TargetReached,     // 季度目标已完成
    NoDailyCap,        // 日产上限为零
    RoundedToZero,     // 分配量不足半个单位
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::CapacityExhausted => write!(f, "CAPACITY_EXHAUSTED"),
            SkipReason::TargetReached => write!(f, "TARGET_REACHED"),
            SkipReason::NoDailyCap => write!(f, "NO_DAILY_CAP"),
            SkipReason::RoundedToZero => write!(f, "ROUNDED_TO_ZERO"),
        }
    }
}

impl std::str::FromStr for SkipReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CAPACITY_EXHAUSTED" => Ok(SkipReason::CapacityExhausted),
            "TARGET_REACHED" => Ok(SkipReason::TargetReached),
            "NO_DAILY_CAP" => Ok(SkipReason::NoDailyCap),
            "ROUNDED_TO_ZERO" => Ok(SkipReason::RoundedToZero),
            other => Err(format!("未知跳过原因: {}", other)),
        }
    }
}

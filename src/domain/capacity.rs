// ==========================================
// 季节性生产排程引擎 - 日产能池领域模型
// ==========================================
// 红线: 当日所有产品共用一个产能池
// 用途: 记录单日停机折算后的产能与已分配量
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// DailyCapacityPool - 日产能池
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCapacityPool {
    pub plan_date: NaiveDate,   // 排产日期
    pub adjusted_capacity: f64, // 停机折算后产能
    pub used_capacity: f64,     // 已分配产能（未取整）
}

impl DailyCapacityPool {
    pub fn new(plan_date: NaiveDate, adjusted_capacity: f64) -> Self {
        Self {
            plan_date,
            adjusted_capacity: adjusted_capacity.max(0.0),
            used_capacity: 0.0,
        }
    }

    /// 消耗产能（按未取整的分配量）
    pub fn consume(&mut self, units: f64) {
        self.used_capacity += units;
    }
}

// ==========================================
// Trait: CapacityConstraint
// ==========================================
// 用途: Capacity Filler 约束检查接口
pub trait CapacityConstraint {
    /// 检查是否可继续分配
    fn can_allocate(&self, units: f64) -> bool;

    /// 计算剩余产能
    fn remaining_capacity(&self) -> f64;

    /// 产能是否已耗尽
    fn is_exhausted(&self) -> bool;

    /// 计算产能利用率
    fn utilization_ratio(&self) -> f64;
}

// ==========================================
// CapacityConstraint trait 实现
// ==========================================
impl CapacityConstraint for DailyCapacityPool {
    /// 检查是否可继续分配
    ///
    /// # 参数
    /// - `units`: 拟分配数量
    ///
    /// # 返回
    /// - `true`: 分配后不超过 adjusted_capacity
    /// - `false`: 分配后会超过 adjusted_capacity
    fn can_allocate(&self, units: f64) -> bool {
        self.used_capacity + units <= self.adjusted_capacity
    }

    /// 计算剩余产能
    ///
    /// # 返回
    /// 剩余产能，不小于 0
    fn remaining_capacity(&self) -> f64 {
        (self.adjusted_capacity - self.used_capacity).max(0.0)
    }

    fn is_exhausted(&self) -> bool {
        self.remaining_capacity() <= 0.0
    }

    /// 计算产能利用率
    ///
    /// # 返回
    /// 利用率（0.0 - 1.0）；当日产能为 0 时返回 0.0
    fn utilization_ratio(&self) -> f64 {
        if self.adjusted_capacity <= 0.0 {
            return 0.0;
        }
        (self.used_capacity / self.adjusted_capacity).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(capacity: f64) -> DailyCapacityPool {
        DailyCapacityPool::new(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(), capacity)
    }

    #[test]
    fn test_remaining_capacity_after_consume() {
        let mut p = pool(60.0);
        p.consume(50.0);
        assert_eq!(p.remaining_capacity(), 10.0);
        assert!(p.can_allocate(10.0));
        assert!(!p.can_allocate(10.5));
        assert!(!p.is_exhausted());
    }

    #[test]
    fn test_negative_capacity_clamped() {
        let p = pool(-5.0);
        assert_eq!(p.adjusted_capacity, 0.0);
        assert!(p.is_exhausted());
        assert_eq!(p.utilization_ratio(), 0.0);
    }

    #[test]
    fn test_utilization_ratio() {
        let mut p = pool(80.0);
        p.consume(20.0);
        assert!((p.utilization_ratio() - 0.25).abs() < 1e-12);
    }
}

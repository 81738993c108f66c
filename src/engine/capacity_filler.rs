// ==========================================
// 季节性生产排程引擎 - 产能池填充引擎
// ==========================================
// 红线: 产能约束、日产上限、剩余目标三者同时满足
// ==========================================
// 职责: 单日按优先级贪心分配折算产能
// 输入: 排序后的当日需求 + 当日产能池 + 剩余目标计数器
// 输出: 当日排程行 + 未获分配的需求及原因
// ==========================================

use crate::domain::capacity::{CapacityConstraint, DailyCapacityPool};
use crate::domain::schedule::{DemandEntry, ScheduleEntry, SkippedDemand};
use crate::domain::types::SkipReason;
use crate::engine::demand::RemainingTargets;
use tracing::{debug, instrument};

/// 低于该值的分配量视为 0（吸收浮点扣减残差）
pub const ALLOCATION_EPSILON: f64 = 1e-9;

// ==========================================
// CapacityFiller - 产能池填充引擎
// ==========================================
pub struct CapacityFiller {
    // 无状态引擎，不需要注入依赖
}

/// 单日填充结果
#[derive(Debug, Clone, Default)]
pub struct FillSingleDayResult {
    pub entries: Vec<ScheduleEntry>,
    pub skipped: Vec<SkippedDemand>,
}

impl CapacityFiller {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 CapacityFiller 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 填充产能池（单日）
    ///
    /// 规则：
    /// 1) 按传入顺序（已按优先级排序）逐条处理
    /// 2) candidate = min(日产上限, 剩余产能, 剩余目标)
    /// 3) candidate > 0 时，上报值为四舍五入后的整数；
    ///    产能池与剩余目标按未取整的 candidate 扣减，避免跨日累积误差
    /// 4) candidate <= 0 时跳过，不产生排程行
    ///
    /// # 参数
    /// - `capacity_pool`: 当日产能池（会被修改）
    /// - `candidates`: 已排序的当日需求
    /// - `targets`: 本次运行的剩余目标计数器（会被修改）
    #[instrument(skip(self, candidates, targets), fields(
        plan_date = %capacity_pool.plan_date,
        adjusted_capacity = capacity_pool.adjusted_capacity,
        candidates_count = candidates.len()
    ))]
    pub fn fill_single_day(
        &self,
        capacity_pool: &mut DailyCapacityPool,
        candidates: &[DemandEntry],
        targets: &mut RemainingTargets,
    ) -> FillSingleDayResult {
        let mut result = FillSingleDayResult::default();
        let plan_date = capacity_pool.plan_date;

        for demand in candidates {
            let remaining_target = targets.remaining(demand.target);
            let remaining_capacity = capacity_pool.remaining_capacity();
            let candidate = demand.daily_cap.min(remaining_capacity).min(remaining_target);

            if candidate <= ALLOCATION_EPSILON {
                let reason = self.skip_reason(demand, remaining_capacity, remaining_target);
                debug!(
                    product_id = demand.product_id,
                    reason = %reason,
                    "需求未获分配"
                );
                result.skipped.push(SkippedDemand {
                    date: plan_date,
                    product_id: demand.product_id,
                    reason,
                });
                continue;
            }

            // 按未取整数量扣减
            capacity_pool.consume(candidate);
            targets.consume(demand.target, candidate);

            let rounded = self.reported_units(candidate, demand.daily_cap);
            let units = targets.record_reported(demand.target, rounded);
            if units == 0 {
                result.skipped.push(SkippedDemand {
                    date: plan_date,
                    product_id: demand.product_id,
                    reason: SkipReason::RoundedToZero,
                });
                continue;
            }

            result.entries.push(ScheduleEntry {
                date: plan_date,
                product_id: demand.product_id,
                product_name: demand.product_name.clone(),
                scheduled_units: units,
            });
        }

        result
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 上报数量：四舍五入（半数进位），且不超过日产上限的整数部分
    fn reported_units(&self, candidate: f64, daily_cap: f64) -> u64 {
        let rounded = candidate.round() as u64;
        rounded.min(daily_cap.floor() as u64)
    }

    /// 判定跳过原因（按 日产上限 → 剩余目标 → 产能 的顺序）
    fn skip_reason(
        &self,
        demand: &DemandEntry,
        remaining_capacity: f64,
        remaining_target: f64,
    ) -> SkipReason {
        if demand.daily_cap <= ALLOCATION_EPSILON {
            SkipReason::NoDailyCap
        } else if remaining_target <= ALLOCATION_EPSILON {
            SkipReason::TargetReached
        } else {
            debug_assert!(remaining_capacity <= ALLOCATION_EPSILON);
            SkipReason::CapacityExhausted
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for CapacityFiller {
    fn default() -> Self {
        Self::new()
    }
}

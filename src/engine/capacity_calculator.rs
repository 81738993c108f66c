// ==========================================
// 季节性生产排程引擎 - 日产能计算
// ==========================================
// 职责: 名义产能 + 停机日历 → 指定日期的折算产能
// 公式: adjusted = nominal × (H - min(D, H)) / H
//   nominal = max_daily_capacity × machine_efficiency
//   H       = shifts_per_day × hours_per_shift（只计算一次）
// ==========================================

use crate::domain::capacity::DailyCapacityPool;
use crate::domain::factory::CapacityParameters;
use chrono::NaiveDate;
use std::collections::BTreeMap;

// ==========================================
// CapacityCalculator - 日产能计算器
// ==========================================
#[derive(Debug, Clone)]
pub struct CapacityCalculator {
    nominal_capacity: f64,
    total_available_hours: f64,
    downtime: BTreeMap<NaiveDate, f64>,
}

impl CapacityCalculator {
    pub fn new(
        nominal_capacity: f64,
        total_available_hours: f64,
        downtime: BTreeMap<NaiveDate, f64>,
    ) -> Self {
        Self {
            nominal_capacity,
            total_available_hours,
            downtime,
        }
    }

    /// 由生效的产能参数构造
    pub fn from_parameters(params: &CapacityParameters) -> Self {
        Self::new(
            params.nominal_capacity(),
            params.total_available_hours(),
            params.downtime_calendar(),
        )
    }

    pub fn nominal_capacity(&self) -> f64 {
        self.nominal_capacity
    }

    pub fn total_available_hours(&self) -> f64 {
        self.total_available_hours
    }

    /// 计算指定日期的折算产能
    ///
    /// # 返回
    /// - 无停机记录: 名义产能
    /// - 有停机记录: 按可用工时比例折算，停机工时截断到总工时，结果不为负
    pub fn adjusted_capacity(&self, date: NaiveDate) -> f64 {
        let downtime_hours = match self.downtime.get(&date) {
            Some(hours) => *hours,
            None => return self.nominal_capacity,
        };

        if self.total_available_hours <= 0.0 {
            return 0.0;
        }

        let clamped = downtime_hours.clamp(0.0, self.total_available_hours);
        let available = (self.total_available_hours - clamped).max(0.0);
        self.nominal_capacity * available / self.total_available_hours
    }

    /// 打开指定日期的产能池
    pub fn open_pool(&self, date: NaiveDate) -> DailyCapacityPool {
        DailyCapacityPool::new(date, self.adjusted_capacity(date))
    }
}

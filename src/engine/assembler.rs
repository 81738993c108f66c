// ==========================================
// 季节性生产排程引擎 - 排程结果组装
// ==========================================
// 顺序约定: 外层日期升序，内层当日优先级顺序
// 该顺序是输出契约的一部分
// ==========================================

use crate::domain::capacity::DailyCapacityPool;
use crate::domain::schedule::{ScheduleEntry, SkippedDemand};
use crate::engine::capacity_filler::FillSingleDayResult;
use chrono::NaiveDate;

#[derive(Debug, Default)]
pub struct ScheduleAssembler {
    entries: Vec<ScheduleEntry>,
    daily_pools: Vec<DailyCapacityPool>,
    skipped: Vec<SkippedDemand>,
    last_date: Option<NaiveDate>,
}

impl ScheduleAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一天的填充结果
    ///
    /// 调用方必须按日期升序调用；单日内的顺序原样保留
    pub fn append_day(&mut self, pool: DailyCapacityPool, day: FillSingleDayResult) {
        debug_assert!(
            self.last_date.map_or(true, |last| last < pool.plan_date),
            "日期必须严格升序追加"
        );
        self.last_date = Some(pool.plan_date);
        self.entries.extend(day.entries);
        self.skipped.extend(day.skipped);
        self.daily_pools.push(pool);
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn finish(self) -> (Vec<ScheduleEntry>, Vec<DailyCapacityPool>, Vec<SkippedDemand>) {
        (self.entries, self.daily_pools, self.skipped)
    }
}

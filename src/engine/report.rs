// ==========================================
// 季节性生产排程引擎 - 排程汇总报表
// ==========================================
// 职责: 基于排程结果生成只读汇总
// - 产品维度: 目标 / 已排 / 缺口 / 完成率
// - 月度维度: (年, 月) → 产品 → 数量
// - 日维度: 指定日期的排程行、产能利用率
// ==========================================

use crate::domain::capacity::CapacityConstraint;
use crate::domain::product::ProductForecast;
use crate::domain::schedule::ScheduleEntry;
use crate::domain::types::ProductId;
use crate::engine::orchestrator::ScheduleResult;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// 产品维度汇总
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub product_id: ProductId,
    pub product_name: String,
    pub target_units: f64,
    pub scheduled_units: u64,
    pub shortfall_units: f64,
    pub fulfillment_ratio: f64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// 日产能利用率
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyUtilization {
    pub date: NaiveDate,
    pub adjusted_capacity: f64,
    pub used_capacity: f64,
    pub utilization_ratio: f64,
}

pub struct ScheduleReport;

impl ScheduleReport {
    /// 产品维度汇总（按预测表声明顺序）
    pub fn product_summaries(
        entries: &[ScheduleEntry],
        forecasts: &[ProductForecast],
    ) -> Vec<ProductSummary> {
        let mut totals: HashMap<ProductId, (u64, NaiveDate, NaiveDate)> = HashMap::new();
        for entry in entries {
            totals
                .entry(entry.product_id)
                .and_modify(|(units, first, last)| {
                    *units += entry.scheduled_units;
                    *first = (*first).min(entry.date);
                    *last = (*last).max(entry.date);
                })
                .or_insert((entry.scheduled_units, entry.date, entry.date));
        }

        forecasts
            .iter()
            .map(|forecast| {
                let (scheduled, first, last) = match totals.get(&forecast.product_id) {
                    Some((units, first, last)) => (*units, Some(*first), Some(*last)),
                    None => (0, None, None),
                };
                let scheduled_f = scheduled as f64;
                let fulfillment_ratio = if forecast.total_units > 0.0 {
                    scheduled_f / forecast.total_units
                } else {
                    1.0
                };

                ProductSummary {
                    product_id: forecast.product_id,
                    product_name: forecast.product_name.clone(),
                    target_units: forecast.total_units,
                    scheduled_units: scheduled,
                    shortfall_units: (forecast.total_units - scheduled_f).max(0.0),
                    fulfillment_ratio,
                    first_date: first,
                    last_date: last,
                }
            })
            .collect()
    }

    /// 月度汇总: (年, 月) → 产品名称 → 数量
    pub fn monthly_totals(
        entries: &[ScheduleEntry],
    ) -> BTreeMap<(i32, u32), BTreeMap<String, u64>> {
        let mut months: BTreeMap<(i32, u32), BTreeMap<String, u64>> = BTreeMap::new();
        for entry in entries {
            *months
                .entry((entry.date.year(), entry.date.month()))
                .or_default()
                .entry(entry.product_name.clone())
                .or_insert(0) += entry.scheduled_units;
        }
        months
    }

    /// 指定日期的排程行（保持输出顺序）
    pub fn entries_on(entries: &[ScheduleEntry], date: NaiveDate) -> Vec<&ScheduleEntry> {
        entries.iter().filter(|e| e.date == date).collect()
    }

    /// 逐日产能利用率
    pub fn utilization(result: &ScheduleResult) -> Vec<DailyUtilization> {
        result
            .daily_pools
            .iter()
            .map(|pool| DailyUtilization {
                date: pool.plan_date,
                adjusted_capacity: pool.adjusted_capacity,
                used_capacity: pool.used_capacity,
                utilization_ratio: pool.utilization_ratio(),
            })
            .collect()
    }
}

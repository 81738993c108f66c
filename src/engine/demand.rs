// ==========================================
// 季节性生产排程引擎 - 需求窗口展开
// ==========================================
// 职责: 把每个产品的季节窗口展开为逐日需求记录
// 输入: 已关联约束的产品列表
// 输出: 日期 → 当日需求列表 + 本次运行的剩余目标计数器
// ==========================================

use crate::domain::product::Product;
use crate::domain::schedule::{DemandEntry, TargetHandle};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

// ==========================================
// RemainingTargets - 剩余目标计数器
// ==========================================
// 单次排程运行持有，不跨运行共享
#[derive(Debug, Clone, Default)]
pub struct RemainingTargets {
    remaining: Vec<f64>,
    // 已上报（取整后）的累计数量与上报上限
    reported: Vec<u64>,
    report_limit: Vec<u64>,
}

impl RemainingTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个产品的季度目标，返回其计数器句柄
    pub fn register(&mut self, total_units: f64) -> TargetHandle {
        let handle = TargetHandle(self.remaining.len());
        self.remaining.push(total_units);
        self.reported.push(0);
        // 负数目标饱和为 0
        self.report_limit.push(total_units.floor() as u64);
        handle
    }

    pub fn remaining(&self, handle: TargetHandle) -> f64 {
        self.remaining[handle.0]
    }

    /// 扣减剩余目标（未取整的分配量）
    pub fn consume(&mut self, handle: TargetHandle, units: f64) {
        self.remaining[handle.0] -= units;
    }

    /// 登记上报数量，返回实际可上报的数量
    ///
    /// 累计上报量不超过 floor(total_units)，保证取整后也不超产
    pub fn record_reported(&mut self, handle: TargetHandle, units: u64) -> u64 {
        let i = handle.0;
        let allowed = self.report_limit[i].saturating_sub(self.reported[i]);
        let granted = units.min(allowed);
        self.reported[i] += granted;
        granted
    }

    pub fn reported(&self, handle: TargetHandle) -> u64 {
        self.reported[handle.0]
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

// ==========================================
// DemandCalendar - 逐日需求日历
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct DemandCalendar {
    pub days: BTreeMap<NaiveDate, Vec<DemandEntry>>,
    pub targets: RemainingTargets,
}

impl DemandCalendar {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn entries_on(&self, date: NaiveDate) -> &[DemandEntry] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ==========================================
// DemandExpander - 需求窗口展开器
// ==========================================
pub struct DemandExpander {
    // 无状态引擎，不需要注入依赖
}

impl DemandExpander {
    pub fn new() -> Self {
        Self {}
    }

    /// 展开所有产品的季节窗口
    ///
    /// 规则:
    /// 1) 每个产品在 [season_start, season_end] 内每日一条 DemandEntry
    /// 2) 同一产品的所有记录共享一个剩余目标计数器（初值为 total_units）
    /// 3) 季节窗口倒置的产品不产生需求（不是错误）
    /// 4) 同一日期内的记录保持产品声明顺序
    #[instrument(skip(self, products), fields(products_count = products.len()))]
    pub fn expand(&self, products: &[Product]) -> DemandCalendar {
        let mut calendar = DemandCalendar::default();

        for product in products {
            let handle = calendar.targets.register(product.total_units);

            if !product.has_valid_season() {
                debug!(
                    product_id = product.product_id,
                    season_start = %product.season_start,
                    season_end = %product.season_end,
                    "季节窗口倒置，忽略该产品需求"
                );
                continue;
            }

            for date in product.season_start.iter_days() {
                if date > product.season_end {
                    break;
                }
                calendar.days.entry(date).or_default().push(DemandEntry {
                    product_id: product.product_id,
                    product_name: product.product_name.clone(),
                    daily_cap: product.max_units_per_day,
                    priority_level: product.priority_level,
                    declaration_index: product.declaration_index,
                    target: handle,
                });
            }
        }

        debug!(
            days_count = calendar.day_count(),
            targets_count = calendar.targets.len(),
            "需求窗口展开完成"
        );
        calendar
    }
}

impl Default for DemandExpander {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn product(id: u32, start: u32, end: u32, index: usize) -> Product {
        Product {
            product_id: id,
            product_name: format!("P{}", id),
            total_units: 90.0,
            season_start: date(start),
            season_end: date(end),
            priority_level: 1,
            max_units_per_day: 30.0,
            declaration_index: index,
        }
    }

    #[test]
    fn test_expand_inclusive_window() {
        let calendar = DemandExpander::new().expand(&[product(1, 1, 3, 0)]);
        assert_eq!(calendar.day_count(), 3);
        assert_eq!(calendar.entries_on(date(1)).len(), 1);
        assert_eq!(calendar.entries_on(date(3)).len(), 1);
        assert!(calendar.entries_on(date(4)).is_empty());
    }

    #[test]
    fn test_entries_share_target_handle() {
        let calendar = DemandExpander::new().expand(&[product(1, 1, 3, 0)]);
        let handles: Vec<_> = calendar.days.values().map(|v| v[0].target).collect();
        assert!(handles.iter().all(|h| *h == handles[0]));
        assert_eq!(calendar.targets.remaining(handles[0]), 90.0);
    }

    #[test]
    fn test_inverted_window_contributes_nothing() {
        let calendar = DemandExpander::new().expand(&[product(1, 5, 2, 0), product(2, 1, 1, 1)]);
        assert_eq!(calendar.day_count(), 1);
        assert_eq!(calendar.entries_on(date(1))[0].product_id, 2);
        // 倒置窗口的产品仍登记计数器，句柄按声明顺序分配
        assert_eq!(calendar.targets.len(), 2);
    }

    #[test]
    fn test_overlapping_windows_keep_declaration_order() {
        let calendar = DemandExpander::new().expand(&[product(7, 1, 2, 0), product(3, 2, 3, 1)]);
        let ids: Vec<_> = calendar.entries_on(date(2)).iter().map(|e| e.product_id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn test_record_reported_caps_at_floor_of_target() {
        let mut targets = RemainingTargets::new();
        let h = targets.register(10.6);
        assert_eq!(targets.record_reported(h, 6), 6);
        assert_eq!(targets.record_reported(h, 6), 4);
        assert_eq!(targets.record_reported(h, 1), 0);
        assert_eq!(targets.reported(h), 10);
    }

    #[test]
    fn test_consume_tracks_unrounded_amount() {
        let mut targets = RemainingTargets::new();
        let h = targets.register(10.0);
        targets.consume(h, 2.4);
        targets.consume(h, 2.4);
        assert!((targets.remaining(h) - 5.2).abs() < 1e-9);
    }
}

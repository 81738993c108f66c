// ==========================================
// 季节性生产排程引擎 - 输入校验
// ==========================================
// 职责: 分配开始前的快速失败校验
// 1) 预测表与约束表按 product_id 关联（缺失即报错）
// 2) 产能参数、停机工时、产品数值合法性
// ==========================================

use crate::domain::factory::CapacityParameters;
use crate::domain::product::{Product, ProductConstraint, ProductForecast};
use crate::domain::types::ProductId;
use crate::engine::error::{EngineResult, ScheduleError};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 关联预测表与约束表
///
/// # 参数
/// - `forecasts`: 产品预测列表（声明顺序即同优先级的决胜顺序）
/// - `constraints`: 按 product_id 索引的约束表
///
/// # 返回
/// - Ok(Vec<Product>): 与输入顺序一致的产品列表
/// - Err(MissingConstraint): 某产品在约束表中无记录
/// - Err(DuplicateProduct): 预测表中 product_id 重复
pub fn resolve_products(
    forecasts: &[ProductForecast],
    constraints: &HashMap<ProductId, ProductConstraint>,
) -> EngineResult<Vec<Product>> {
    let mut seen = HashSet::with_capacity(forecasts.len());
    let mut products = Vec::with_capacity(forecasts.len());

    for (index, forecast) in forecasts.iter().enumerate() {
        if !seen.insert(forecast.product_id) {
            return Err(ScheduleError::DuplicateProduct {
                product_id: forecast.product_id,
            });
        }

        let constraint = constraints.get(&forecast.product_id).ok_or(
            ScheduleError::MissingConstraint {
                product_id: forecast.product_id,
            },
        )?;

        validate_product_value(forecast.product_id, "total_units", forecast.total_units)?;
        validate_product_value(
            forecast.product_id,
            "max_units_per_day",
            constraint.max_units_per_day,
        )?;

        products.push(Product::from_parts(forecast, constraint, index));
    }

    debug!(products_count = products.len(), "产品关联完成");
    Ok(products)
}

fn validate_product_value(product_id: ProductId, field: &'static str, value: f64) -> EngineResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScheduleError::InvalidProductParameter {
            product_id,
            field,
            value,
        })
    }
}

/// 校验生效的产能参数
///
/// 规则:
/// - 名义日产能、每班工时: 有限且 >= 0
/// - 设备效率: 有限且位于 [0, 1]
/// - 每日可用总工时 > 0
/// - 停机工时: 有限且 >= 0
pub fn validate_capacity_parameters(params: &CapacityParameters) -> EngineResult<()> {
    if !params.max_daily_capacity.is_finite() || params.max_daily_capacity < 0.0 {
        return Err(ScheduleError::InvalidCapacityParameter {
            field: "max_daily_capacity",
            value: params.max_daily_capacity,
            message: "必须为非负有限数",
        });
    }

    if !params.machine_efficiency.is_finite()
        || !(0.0..=1.0).contains(&params.machine_efficiency)
    {
        return Err(ScheduleError::InvalidCapacityParameter {
            field: "machine_efficiency",
            value: params.machine_efficiency,
            message: "必须位于 [0, 1] 区间（百分比需先换算为小数）",
        });
    }

    if !params.hours_per_shift.is_finite() || params.hours_per_shift < 0.0 {
        return Err(ScheduleError::InvalidCapacityParameter {
            field: "hours_per_shift",
            value: params.hours_per_shift,
            message: "必须为非负有限数",
        });
    }

    let total_hours = params.total_available_hours();
    if total_hours <= 0.0 {
        return Err(ScheduleError::InvalidCapacityParameter {
            field: "total_available_hours",
            value: total_hours,
            message: "班次 × 每班工时必须大于 0",
        });
    }

    for entry in &params.downtime_schedule {
        let hours = entry.expected_downtime_hours;
        if !hours.is_finite() || hours < 0.0 {
            return Err(ScheduleError::InvalidDowntime {
                date: entry.date,
                hours,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory::DowntimeEntry;
    use chrono::NaiveDate;

    fn forecast(id: ProductId) -> ProductForecast {
        ProductForecast {
            product_id: id,
            product_name: format!("P{}", id),
            total_units: 100.0,
            season_start: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            season_end: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
        }
    }

    fn constraint(id: ProductId, priority_level: i32) -> (ProductId, ProductConstraint) {
        (
            id,
            ProductConstraint {
                product_id: id,
                max_units_per_day: 40.0,
                priority_level,
            },
        )
    }

    fn params() -> CapacityParameters {
        CapacityParameters {
            max_daily_capacity: 100.0,
            machine_efficiency: 0.9,
            available_shifts_per_day: 3,
            hours_per_shift: 8.0,
            downtime_schedule: vec![],
        }
    }

    #[test]
    fn test_resolve_keeps_declaration_order() {
        let table: HashMap<_, _> = vec![constraint(10, 1), constraint(3, 2)].into_iter().collect();
        let products = resolve_products(&[forecast(3), forecast(10)], &table).unwrap();
        assert_eq!(products[0].product_id, 3);
        assert_eq!(products[0].declaration_index, 0);
        assert_eq!(products[1].product_id, 10);
        assert_eq!(products[1].priority_level, 1);
    }

    #[test]
    fn test_resolve_does_not_use_positional_ids() {
        // 非连续 ID 也必须按键关联
        let table: HashMap<_, _> = vec![constraint(42, 5)].into_iter().collect();
        let products = resolve_products(&[forecast(42)], &table).unwrap();
        assert_eq!(products[0].priority_level, 5);
    }

    #[test]
    fn test_missing_constraint() {
        let table: HashMap<_, _> = vec![constraint(1, 1)].into_iter().collect();
        let err = resolve_products(&[forecast(1), forecast(2)], &table).unwrap_err();
        assert_eq!(err, ScheduleError::MissingConstraint { product_id: 2 });
    }

    #[test]
    fn test_duplicate_product() {
        let table: HashMap<_, _> = vec![constraint(1, 1)].into_iter().collect();
        let err = resolve_products(&[forecast(1), forecast(1)], &table).unwrap_err();
        assert_eq!(err, ScheduleError::DuplicateProduct { product_id: 1 });
    }

    #[test]
    fn test_non_finite_target_rejected() {
        let table: HashMap<_, _> = vec![constraint(1, 1)].into_iter().collect();
        let mut f = forecast(1);
        f.total_units = f64::NAN;
        assert!(matches!(
            resolve_products(&[f], &table),
            Err(ScheduleError::InvalidProductParameter { field: "total_units", .. })
        ));
    }

    #[test]
    fn test_valid_parameters() {
        assert!(validate_capacity_parameters(&params()).is_ok());
    }

    #[test]
    fn test_efficiency_as_percentage_rejected() {
        let mut p = params();
        p.machine_efficiency = 90.0;
        assert!(matches!(
            validate_capacity_parameters(&p),
            Err(ScheduleError::InvalidCapacityParameter { field: "machine_efficiency", .. })
        ));
    }

    #[test]
    fn test_zero_hours_rejected() {
        let mut p = params();
        p.available_shifts_per_day = 0;
        assert!(matches!(
            validate_capacity_parameters(&p),
            Err(ScheduleError::InvalidCapacityParameter { field: "total_available_hours", .. })
        ));
    }

    #[test]
    fn test_negative_downtime_rejected() {
        let mut p = params();
        let date = NaiveDate::from_ymd_opt(2025, 7, 2).unwrap();
        p.downtime_schedule.push(DowntimeEntry {
            date,
            reason: String::new(),
            expected_downtime_hours: -1.0,
        });
        assert_eq!(
            validate_capacity_parameters(&p),
            Err(ScheduleError::InvalidDowntime { date, hours: -1.0 })
        );
    }
}

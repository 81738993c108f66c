// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use production_scheduler::domain::{
    DowntimeEntry, FactoryProfile, ProductConstraint, ProductForecast,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ==========================================
// ProductBuilder - 预测 + 约束
// ==========================================

pub struct ProductBuilder {
    product_id: u32,
    product_name: String,
    total_units: f64,
    season_start: NaiveDate,
    season_end: NaiveDate,
    max_units_per_day: f64,
    priority_level: i32,
}

impl ProductBuilder {
    pub fn new(product_id: u32) -> Self {
        Self {
            product_id,
            product_name: format!("Product {}", product_id),
            total_units: 1_000_000.0,
            season_start: date(2025, 7, 1),
            season_end: date(2025, 7, 1),
            max_units_per_day: 100.0,
            priority_level: 1,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.product_name = name.to_string();
        self
    }

    pub fn total(mut self, units: f64) -> Self {
        self.total_units = units;
        self
    }

    pub fn season(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.season_start = start;
        self.season_end = end;
        self
    }

    pub fn cap(mut self, units: f64) -> Self {
        self.max_units_per_day = units;
        self
    }

    pub fn priority(mut self, level: i32) -> Self {
        self.priority_level = level;
        self
    }

    pub fn build(self) -> (ProductForecast, ProductConstraint) {
        (
            ProductForecast {
                product_id: self.product_id,
                product_name: self.product_name,
                total_units: self.total_units,
                season_start: self.season_start,
                season_end: self.season_end,
            },
            ProductConstraint {
                product_id: self.product_id,
                max_units_per_day: self.max_units_per_day,
                priority_level: self.priority_level,
            },
        )
    }
}

// ==========================================
// FactoryBuilder - 工厂档案
// ==========================================

pub struct FactoryBuilder {
    max_daily_capacity: f64,
    machine_efficiency: f64,
    available_shifts_per_day: u32,
    hours_per_shift: f64,
    downtime_schedule: Vec<DowntimeEntry>,
    product_constraints: Vec<ProductConstraint>,
}

impl FactoryBuilder {
    /// 默认: 效率 1.0，3 班 × 8 小时，无停机
    pub fn new(max_daily_capacity: f64) -> Self {
        Self {
            max_daily_capacity,
            machine_efficiency: 1.0,
            available_shifts_per_day: 3,
            hours_per_shift: 8.0,
            downtime_schedule: Vec::new(),
            product_constraints: Vec::new(),
        }
    }

    pub fn efficiency(mut self, efficiency: f64) -> Self {
        self.machine_efficiency = efficiency;
        self
    }

    pub fn shifts(mut self, shifts: u32, hours_per_shift: f64) -> Self {
        self.available_shifts_per_day = shifts;
        self.hours_per_shift = hours_per_shift;
        self
    }

    pub fn downtime(mut self, date: NaiveDate, hours: f64) -> Self {
        self.downtime_schedule.push(DowntimeEntry {
            date,
            reason: "Maintenance".to_string(),
            expected_downtime_hours: hours,
        });
        self
    }

    pub fn constraint(mut self, constraint: ProductConstraint) -> Self {
        self.product_constraints.push(constraint);
        self
    }

    pub fn build(self) -> FactoryProfile {
        FactoryProfile {
            factory_id: 101,
            factory_name: "Test Processing Plant".to_string(),
            max_daily_capacity: self.max_daily_capacity,
            machine_efficiency: self.machine_efficiency,
            available_shifts_per_day: self.available_shifts_per_day,
            hours_per_shift: self.hours_per_shift,
            downtime_schedule: self.downtime_schedule,
            product_constraints: self.product_constraints,
        }
    }
}

/// 拆分构建结果为预测列表，并把约束登记到工厂
pub fn assemble(
    products: Vec<ProductBuilder>,
    factory: FactoryBuilder,
) -> (Vec<ProductForecast>, FactoryProfile) {
    let mut factory = factory;
    let mut forecasts = Vec::new();
    for builder in products {
        let (forecast, constraint) = builder.build();
        forecasts.push(forecast);
        factory = factory.constraint(constraint);
    }
    (forecasts, factory.build())
}

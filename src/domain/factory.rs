// ==========================================
// 季节性生产排程引擎 - 工厂领域模型
// ==========================================
// 职责: 工厂产能参数、停机日历、产品约束表
// 红线: 只读输入，单次排程期间不可修改
// ==========================================

use crate::domain::product::ProductConstraint;
use crate::domain::types::ProductId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// ==========================================
// DowntimeEntry - 计划停机
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DowntimeEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub reason: String,
    pub expected_downtime_hours: f64,
}

// ==========================================
// FactoryProfile - 工厂档案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryProfile {
    #[serde(default)]
    pub factory_id: u32,
    #[serde(default)]
    pub factory_name: String,

    // ===== 产能参数 =====
    pub max_daily_capacity: f64,     // 名义日产能 (件)
    pub machine_efficiency: f64,     // 设备效率 (0.0 - 1.0)
    pub available_shifts_per_day: u32, // 每日班次
    pub hours_per_shift: f64,        // 每班工时

    // ===== 停机日历 =====
    #[serde(default)]
    pub downtime_schedule: Vec<DowntimeEntry>,

    // ===== 产品约束表 =====
    #[serde(default)]
    pub product_constraints: Vec<ProductConstraint>,
}

impl FactoryProfile {
    /// 按 product_id 建立约束查找表
    ///
    /// 同一 product_id 出现多次时，后出现的记录覆盖先出现的记录
    pub fn constraint_table(&self) -> HashMap<ProductId, ProductConstraint> {
        self.product_constraints
            .iter()
            .map(|c| (c.product_id, *c))
            .collect()
    }
}

// ==========================================
// CapacityOverride - 调用方提供的产能覆写
// ==========================================
// 任一字段为 Some 时整体替换档案中的对应值
// （停机列表为整体替换，不按日期合并）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityOverride {
    pub max_daily_capacity: Option<f64>,
    pub machine_efficiency: Option<f64>,
    pub available_shifts_per_day: Option<u32>,
    pub hours_per_shift: Option<f64>,
    pub downtime_schedule: Option<Vec<DowntimeEntry>>,
}

impl CapacityOverride {
    pub fn is_empty(&self) -> bool {
        self.max_daily_capacity.is_none()
            && self.machine_efficiency.is_none()
            && self.available_shifts_per_day.is_none()
            && self.hours_per_shift.is_none()
            && self.downtime_schedule.is_none()
    }
}

// ==========================================
// CapacityParameters - 生效的产能参数
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityParameters {
    pub max_daily_capacity: f64,
    pub machine_efficiency: f64,
    pub available_shifts_per_day: u32,
    pub hours_per_shift: f64,
    pub downtime_schedule: Vec<DowntimeEntry>,
}

impl CapacityParameters {
    /// 合并工厂档案与覆写参数
    pub fn from_profile(profile: &FactoryProfile, overrides: Option<&CapacityOverride>) -> Self {
        let mut params = Self {
            max_daily_capacity: profile.max_daily_capacity,
            machine_efficiency: profile.machine_efficiency,
            available_shifts_per_day: profile.available_shifts_per_day,
            hours_per_shift: profile.hours_per_shift,
            downtime_schedule: profile.downtime_schedule.clone(),
        };

        if let Some(o) = overrides {
            if let Some(v) = o.max_daily_capacity {
                params.max_daily_capacity = v;
            }
            if let Some(v) = o.machine_efficiency {
                params.machine_efficiency = v;
            }
            if let Some(v) = o.available_shifts_per_day {
                params.available_shifts_per_day = v;
            }
            if let Some(v) = o.hours_per_shift {
                params.hours_per_shift = v;
            }
            if let Some(v) = &o.downtime_schedule {
                params.downtime_schedule = v.clone();
            }
        }

        params
    }

    /// 名义产能 = 最大日产能 × 设备效率
    pub fn nominal_capacity(&self) -> f64 {
        self.max_daily_capacity * self.machine_efficiency
    }

    /// 每日可用总工时 = 班次 × 每班工时
    pub fn total_available_hours(&self) -> f64 {
        f64::from(self.available_shifts_per_day) * self.hours_per_shift
    }

    /// 停机日历（同一日期的多条停机记录累加）
    pub fn downtime_calendar(&self) -> BTreeMap<NaiveDate, f64> {
        let mut calendar = BTreeMap::new();
        for entry in &self.downtime_schedule {
            *calendar.entry(entry.date).or_insert(0.0) += entry.expected_downtime_hours;
        }
        calendar
    }
}

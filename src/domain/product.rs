// ==========================================
// 季节性生产排程引擎 - 产品领域模型
// ==========================================
// 预测表 (ProductForecast) 与约束表 (ProductConstraint) 分开输入，
// 按 product_id 关联后得到排程使用的 Product
// ==========================================

use crate::domain::types::ProductId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductForecast - 产品季度预测
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForecast {
    pub product_id: ProductId,   // 产品ID
    pub product_name: String,    // 产品名称
    pub total_units: f64,        // 季度目标产量
    pub season_start: NaiveDate, // 季节开始日期
    pub season_end: NaiveDate,   // 季节结束日期 (含)
}

impl ProductForecast {
    /// 季节窗口是否有效（结束日期不早于开始日期）
    pub fn has_valid_season(&self) -> bool {
        self.season_end >= self.season_start
    }

    /// 季节窗口天数（含首尾）；窗口倒置时为 0
    pub fn season_days(&self) -> i64 {
        if !self.has_valid_season() {
            return 0;
        }
        (self.season_end - self.season_start).num_days() + 1
    }
}

// ==========================================
// ProductConstraint - 产品生产约束
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductConstraint {
    pub product_id: ProductId,
    pub max_units_per_day: f64, // 日产上限
    pub priority_level: i32,    // 优先级 (数值越小越优先)
}

// ==========================================
// Product - 关联后的产品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub total_units: f64,
    pub season_start: NaiveDate,
    pub season_end: NaiveDate,
    pub priority_level: i32,
    pub max_units_per_day: f64,

    /// 在输入预测表中的声明顺序，同优先级时据此决胜
    pub declaration_index: usize,
}

impl Product {
    /// 由预测记录与约束记录组装
    pub fn from_parts(
        forecast: &ProductForecast,
        constraint: &ProductConstraint,
        declaration_index: usize,
    ) -> Self {
        Self {
            product_id: forecast.product_id,
            product_name: forecast.product_name.clone(),
            total_units: forecast.total_units,
            season_start: forecast.season_start,
            season_end: forecast.season_end,
            priority_level: constraint.priority_level,
            max_units_per_day: constraint.max_units_per_day,
            declaration_index,
        }
    }

    pub fn has_valid_season(&self) -> bool {
        self.season_end >= self.season_start
    }
}

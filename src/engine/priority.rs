// ==========================================
// 季节性生产排程引擎 - 优先级排序引擎
// ==========================================
// 职责: 同一日期内争用产能的需求排序
// 输入: 当日需求列表
// 输出: 排序后的需求列表
// ==========================================

use crate::domain::schedule::DemandEntry;
use std::cmp::Ordering;

// ==========================================
// PrioritySorter - 优先级排序引擎
// ==========================================
pub struct PrioritySorter {
    // 无状态引擎,不需要注入依赖
}

impl PrioritySorter {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 PrioritySorter 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排序当日需求
    ///
    /// 排序键:
    /// 1) priority_level 升序 (数值越小越优先)
    /// 2) declaration_index 升序 (输入声明顺序)
    ///
    /// 使用稳定排序，结果与输入的原始排列无关，保证可复现。
    pub fn sort(&self, mut entries: Vec<DemandEntry>) -> Vec<DemandEntry> {
        entries.sort_by(|a, b| self.compare(a, b));
        entries
    }

    /// 比较两条需求的优先级
    ///
    /// # 返回
    /// Ordering::Less 表示 a 优先于 b
    fn compare(&self, a: &DemandEntry, b: &DemandEntry) -> Ordering {
        match a.priority_level.cmp(&b.priority_level) {
            Ordering::Equal => {}
            other => return other,
        }
        a.declaration_index.cmp(&b.declaration_index)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PrioritySorter {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 季节性生产排程引擎 - 导入层
// ==========================================
// 职责: 读取 JSON 输入快照，转换为领域对象
// ==========================================

pub mod error;
pub mod snapshot_loader;

pub use error::{ImportError, ImportResult};
pub use snapshot_loader::{normalize_efficiency, SnapshotLoader};

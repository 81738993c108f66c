// ==========================================
// 季节性生产排程引擎 - 导出层
// ==========================================

pub mod csv_exporter;
pub mod error;

pub use csv_exporter::{CsvExporter, CSV_HEADERS};
pub use error::{ExportError, ExportResult};

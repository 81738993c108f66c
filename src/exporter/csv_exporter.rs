// ==========================================
// 季节性生产排程引擎 - CSV 导出
// ==========================================
// 列: date,product_id,product_name,scheduled_units
// 行序: 与排程输出顺序一致
// ==========================================

use crate::domain::schedule::ScheduleEntry;
use crate::exporter::error::ExportResult;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub const CSV_HEADERS: [&str; 4] = ["date", "product_id", "product_name", "scheduled_units"];

pub struct CsvExporter;

impl CsvExporter {
    /// 导出到文件（覆盖已有文件）
    pub fn export_to_path(entries: &[ScheduleEntry], path: &Path) -> ExportResult<usize> {
        let file = File::create(path)?;
        let rows = Self::export_to_writer(entries, file)?;
        info!(path = %path.display(), rows, "排程 CSV 导出完成");
        Ok(rows)
    }

    /// 导出到任意写入端
    ///
    /// # 返回
    /// 写入的数据行数（不含表头）
    pub fn export_to_writer<W: Write>(entries: &[ScheduleEntry], writer: W) -> ExportResult<usize> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
        wtr.write_record(CSV_HEADERS)?;

        for entry in entries {
            wtr.write_record(&[
                entry.date.format("%Y-%m-%d").to_string(),
                entry.product_id.to_string(),
                entry.product_name.clone(),
                entry.scheduled_units.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(entries.len())
    }
}

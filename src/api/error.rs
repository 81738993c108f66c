// ==========================================
// 季节性生产排程引擎 - API层错误类型
// ==========================================
// 职责: 汇总导入、引擎、导出各层错误，供调用方统一展示
// ==========================================

use crate::engine::error::ScheduleError;
use crate::exporter::error::ExportError;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("输入加载失败: {0}")]
    Import(#[from] ImportError),

    #[error("排程失败: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("结果导出失败: {0}")]
    Export(#[from] ExportError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

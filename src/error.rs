//! # 统一错误处理模块
//!
//! 定义 dosband 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// dosband 统一错误类型
#[derive(Error, Debug)]
pub enum DosbandError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid file pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("No DOS samples between {min} and {max} eV in: {folder}")]
    EmptyPlotWindow { folder: String, min: f64, max: f64 },

    #[error("No usable high-symmetry points in: {path}")]
    EmptyTicks { path: String },

    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("{failed} of {total} folder(s) failed")]
    BatchFailed { failed: usize, total: usize },

    // ─────────────────────────────────────────────────────────────
    // 交互输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid choice: '{0}' (expected 1, 2 or 3)")]
    InvalidChoice(String),

    #[error("Failed to read console input")]
    InputError {
        #[source]
        source: std::io::Error,
    },
}

impl DosbandError {
    /// 将 plotters 的绘图错误统一包装
    pub fn render<E: std::fmt::Debug>(err: E) -> Self {
        DosbandError::RenderError(format!("{:?}", err))
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DosbandError>;

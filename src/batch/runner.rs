//! # 批量执行器
//!
//! 逐个目录顺序执行绘图流程。
//!
//! ## 功能
//! - 进度条显示
//! - 单个目录失败不影响后续目录
//! - 结果汇总与表格报告
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `tabled` 输出汇总表

use crate::utils::progress;

use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 单个流程的处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessResult {
    /// 已生成图片
    Success(Vec<PathBuf>),
    /// 跳过（如缺少输入文件）
    Skipped(String),
    /// 处理失败
    Failed(String),
}

impl ProcessResult {
    fn status(&self) -> String {
        match self {
            ProcessResult::Success(paths) => format!("saved {}", paths.len()),
            ProcessResult::Skipped(reason) => format!("skipped: {}", reason),
            ProcessResult::Failed(err) => format!("FAILED: {}", err),
        }
    }
}

/// 单个目录的处理报告
#[derive(Debug, Clone, PartialEq)]
pub struct FolderReport {
    pub folder: PathBuf,
    /// DOS 流程结果，未运行时为 None
    pub dos: Option<ProcessResult>,
    /// 能带流程结果，未运行时为 None
    pub band: Option<ProcessResult>,
}

impl FolderReport {
    pub fn new(folder: &Path) -> Self {
        FolderReport {
            folder: folder.to_path_buf(),
            dos: None,
            band: None,
        }
    }

    fn results(&self) -> impl Iterator<Item = &ProcessResult> {
        self.dos.iter().chain(self.band.iter())
    }

    pub fn has_failure(&self) -> bool {
        self.results()
            .any(|r| matches!(r, ProcessResult::Failed(_)))
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 生成的图片数量
    pub saved: usize,
    /// 跳过的流程数量
    pub skipped: usize,
    /// 失败的流程数量
    pub failed: usize,
    /// 各目录报告
    pub reports: Vec<FolderReport>,
}

impl BatchResult {
    /// 合并单个目录的报告
    pub fn merge(&mut self, report: FolderReport) {
        for result in report.results() {
            match result {
                ProcessResult::Success(paths) => self.saved += paths.len(),
                ProcessResult::Skipped(_) => self.skipped += 1,
                ProcessResult::Failed(_) => self.failed += 1,
            }
        }
        self.reports.push(report);
    }

    /// 失败的目录数量
    pub fn failed_folders(&self) -> usize {
        self.reports.iter().filter(|r| r.has_failure()).count()
    }

    /// 汇总表
    pub fn summary_table(&self) -> Table {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Folder")]
            folder: String,
            #[tabled(rename = "DOS")]
            dos: String,
            #[tabled(rename = "Band structure")]
            band: String,
        }

        let status = |r: &Option<ProcessResult>| {
            r.as_ref()
                .map(ProcessResult::status)
                .unwrap_or_else(|| "-".to_string())
        };

        let rows: Vec<SummaryRow> = self
            .reports
            .iter()
            .map(|r| SummaryRow {
                folder: r
                    .folder
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| r.folder.display().to_string()),
                dos: status(&r.dos),
                band: status(&r.band),
            })
            .collect();

        Table::new(rows)
    }
}

/// 顺序批量执行器
pub struct FolderRunner;

impl FolderRunner {
    /// 逐个处理目录
    ///
    /// 处理期间暂停进度条，使流程内的输出不被打断。
    pub fn run<F>(folders: &[PathBuf], mut processor: F) -> BatchResult
    where
        F: FnMut(&Path) -> FolderReport,
    {
        let pb = progress::create_progress_bar(folders.len() as u64, "Processing");
        let mut batch_result = BatchResult::default();

        for folder in folders {
            let report = pb.suspend(|| processor(folder));
            batch_result.merge(report);
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_counts() {
        let mut result = BatchResult::default();

        let mut ok = FolderReport::new(Path::new("/runs/Si"));
        ok.dos = Some(ProcessResult::Success(vec![
            PathBuf::from("/runs/Si/Si_DOS.png"),
            PathBuf::from("/runs/Si/Si_DOS_noE.png"),
        ]));
        ok.band = Some(ProcessResult::Skipped("missing files".to_string()));

        let mut bad = FolderReport::new(Path::new("/runs/GaAs"));
        bad.dos = Some(ProcessResult::Failed("empty window".to_string()));

        result.merge(ok);
        result.merge(bad);

        assert_eq!(result.saved, 2);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.failed_folders(), 1);

        let table = result.summary_table().to_string();
        assert!(table.contains("GaAs"));
        assert!(table.contains("FAILED: empty window"));
    }

    #[test]
    fn test_runner_visits_every_folder_in_order() {
        let folders = vec![PathBuf::from("/runs/a"), PathBuf::from("/runs/b")];
        let mut seen = Vec::new();

        let result = FolderRunner::run(&folders, |folder| {
            seen.push(folder.to_path_buf());
            FolderReport::new(folder)
        });

        assert_eq!(seen, folders);
        assert_eq!(result.reports.len(), 2);
        assert_eq!(result.failed, 0);
    }
}

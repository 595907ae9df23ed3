//! # 命令执行模块
//!
//! 按交互得到的执行计划运行绘图流程。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/session.rs` 的 `Plan`
//! - 使用 `batch/` 处理多目录
//! - 子模块: dos, band

pub mod band;
pub mod dos;

use crate::batch::{FolderCollector, FolderReport, FolderRunner, ProcessResult};
use crate::cli::session::{FolderMode, Pipeline, Plan};
use crate::error::{DosbandError, Result};
use crate::utils::output;

use std::path::Path;

/// 执行计划
pub fn run(plan: &Plan) -> Result<()> {
    match plan.mode {
        FolderMode::Single => run_single(&plan.root, plan.pipeline),
        FolderMode::Batch => run_batch(&plan.root, plan.pipeline),
    }
}

/// 单目录模式：错误直接返回
fn run_single(folder: &Path, pipeline: Pipeline) -> Result<()> {
    if pipeline.runs_dos() {
        dos::execute(folder)?;
    }
    if pipeline.runs_band() {
        band::execute(folder)?;
    }
    Ok(())
}

/// 批量模式：逐个子目录处理，失败的目录记录后继续
fn run_batch(root: &Path, pipeline: Pipeline) -> Result<()> {
    let folders = FolderCollector::new(root).collect()?;

    if folders.is_empty() {
        output::print_warning(&format!("No subfolders found under {}", root.display()));
        return Ok(());
    }

    output::print_info(&format!(
        "Found {} folder(s), plotting {}",
        folders.len(),
        pipeline
    ));

    let result = FolderRunner::run(&folders, |folder| process_folder(folder, pipeline));

    output::print_header("Summary");
    println!("{}", result.summary_table());
    output::print_separator();

    let failed = result.failed_folders();
    if failed > 0 {
        return Err(DosbandError::BatchFailed {
            failed,
            total: result.reports.len(),
        });
    }

    output::print_success(&format!(
        "{} plot(s) saved, {} step(s) skipped",
        result.saved, result.skipped
    ));
    Ok(())
}

/// 处理单个目录，两个流程互不影响
fn process_folder(folder: &Path, pipeline: Pipeline) -> FolderReport {
    output::print_header(&format!("Processing folder: {}", folder.display()));

    let mut report = FolderReport::new(folder);
    if pipeline.runs_dos() {
        report.dos = Some(settle(folder, dos::execute(folder)));
    }
    if pipeline.runs_band() {
        report.band = Some(settle(folder, band::execute(folder)));
    }
    report
}

fn settle(folder: &Path, result: Result<ProcessResult>) -> ProcessResult {
    result.unwrap_or_else(|e| {
        output::print_error(&format!("{}: {}", folder.display(), e));
        ProcessResult::Failed(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn plan(root: &Path, mode: FolderMode, pipeline: Pipeline) -> Plan {
        Plan {
            root: root.to_path_buf(),
            mode,
            pipeline,
        }
    }

    #[test]
    fn test_single_folder_without_inputs() {
        let dir = tempfile::tempdir().unwrap();
        run(&plan(dir.path(), FolderMode::Single, Pipeline::All)).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("GaAs");
        let empty = dir.path().join("Si");
        fs::create_dir(&broken).unwrap();
        fs::create_dir(&empty).unwrap();
        fs::write(broken.join("DOS-total.csv"), "Energy,DOS,IDOS\n-20,1.0,0.1\n").unwrap();

        let report = process_folder(&broken, Pipeline::All);
        assert!(report.has_failure());
        assert!(matches!(report.band, Some(ProcessResult::Skipped(_))));

        let err = run(&plan(dir.path(), FolderMode::Batch, Pipeline::Dos)).unwrap_err();
        assert!(matches!(
            err,
            DosbandError::BatchFailed {
                failed: 1,
                total: 2
            }
        ));
    }

    #[test]
    fn test_single_folder_propagates_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("DOS-total.csv"), "Energy,DOS,IDOS\n5,1.0,0.1\n").unwrap();

        let err = run(&plan(dir.path(), FolderMode::Single, Pipeline::Dos)).unwrap_err();
        assert!(matches!(err, DosbandError::EmptyPlotWindow { .. }));
    }
}

//! # CLI 模块
//!
//! 程序不接受行为参数，全部选项通过交互式提问获得；`clap` 只提供
//! `--help` 与 `--version`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: session (交互式状态机)

pub mod session;

use clap::Parser;

/// dosband - DOS 与能带图绘制工具
#[derive(Parser)]
#[command(name = "dosband")]
#[command(version)]
#[command(about = "Plot density of states and band structures from DFT post-processing CSVs")]
#[command(
    long_about = "Plot density of states and band structures from DFT post-processing CSVs.\n\n\
                  Run without arguments and answer the prompts: the results directory, whether it \
                  holds one structure per subfolder, and which plots to draw."
)]
pub struct Cli {}

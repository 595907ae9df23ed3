//! # dosband - DOS 与能带图绘制工具
//!
//! 读取 DFT 后处理得到的 CSV 文件，绘制态密度 (DOS) 图与能带图。
//!
//! ## 流程
//! 1. 交互式询问根目录、是否批量处理、要运行的流程
//! 2. DOS: `DOS-*.csv` -> `<目录名>_DOS.png`, `<目录名>_DOS_noE.png`
//! 3. 能带: `band_structure_points.csv` + `band_structure.csv`
//!    -> `<结构名>_bandstructure.png`
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行元信息与交互状态机)
//!   ├── commands/   (流程执行逻辑)
//!   │     ├── parsers/   (CSV 解析器)
//!   │     ├── plot/      (图表渲染)
//!   │     └── models/    (数据模型)
//!   ├── batch/      (多目录处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod plot;
mod utils;

use clap::Parser;
use cli::session::{collect_plan, ConsolePrompt};
use cli::Cli;
use error::DosbandError;

const CLOSING_MESSAGE: &str = "Thank you for using the plotter!";

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    Cli::parse();

    let result = collect_plan(&mut ConsolePrompt::new()).and_then(|plan| commands::run(&plan));

    match result {
        Ok(()) => utils::output::print_done(CLOSING_MESSAGE),
        Err(e @ DosbandError::InvalidChoice(_)) => {
            utils::output::print_error(&format!("{}", e));
            utils::output::print_done(CLOSING_MESSAGE);
        }
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}

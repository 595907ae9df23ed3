//! # 交互式会话
//!
//! 依次询问根目录、是否批量处理、要运行的流程，生成执行计划。
//!
//! ## 状态机
//! ```text
//! SelectRoot -> SelectMode -> SelectPipeline -> Execute(Plan)
//! ```
//! 每一步的非法输入返回类型化错误，不会直接退出进程。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 计划交给 `commands/` 执行
//! - 使用 `console` 读取终端输入

use crate::error::{DosbandError, Result};
use crate::utils::output;

use console::Term;
use std::path::PathBuf;
use std::str::FromStr;

/// 输入方式抽象，便于测试时注入预设回答
pub trait Prompt {
    /// 显示问题并读取一行回答
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// 终端输入
pub struct ConsolePrompt {
    term: Term,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        ConsolePrompt {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for ConsolePrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.term
            .write_str(&output::prompt_line(question))
            .and_then(|_| self.term.read_line())
            .map_err(|e| DosbandError::InputError { source: e })
    }
}

/// 目录处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderMode {
    /// 根目录本身就是一个结构
    Single,
    /// 根目录下每个子目录是一个结构
    Batch,
}

impl FolderMode {
    fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" => FolderMode::Batch,
            _ => FolderMode::Single,
        }
    }
}

/// 要运行的绘图流程
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// 1. DOS
    Dos,
    /// 2. 能带
    BandStructure,
    /// 3. 全部
    All,
}

impl Pipeline {
    pub fn runs_dos(self) -> bool {
        matches!(self, Pipeline::Dos | Pipeline::All)
    }

    pub fn runs_band(self) -> bool {
        matches!(self, Pipeline::BandStructure | Pipeline::All)
    }
}

impl FromStr for Pipeline {
    type Err = DosbandError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Pipeline::Dos),
            "2" => Ok(Pipeline::BandStructure),
            "3" => Ok(Pipeline::All),
            other => Err(DosbandError::InvalidChoice(other.to_string())),
        }
    }
}

impl std::fmt::Display for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pipeline::Dos => write!(f, "DOS"),
            Pipeline::BandStructure => write!(f, "band structure"),
            Pipeline::All => write!(f, "DOS + band structure"),
        }
    }
}

/// 执行计划
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub root: PathBuf,
    pub mode: FolderMode,
    pub pipeline: Pipeline,
}

/// 会话状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    SelectRoot,
    SelectMode { root: PathBuf },
    SelectPipeline { root: PathBuf, mode: FolderMode },
    Execute(Plan),
}

const ROOT_QUESTION: &str = "Enter the directory path: ";
const MODE_QUESTION: &str = "Would you like to process a folder of different structures? (y/n): ";
const BATCH_PIPELINE_QUESTION: &str =
    "Choose an option for all folders: 1. Plot DOS, 2. Plot band structure, 3. Plot all of the above: ";
const SINGLE_PIPELINE_QUESTION: &str =
    "Choose an option: 1. Plot DOS, 2. Plot band structure, 3. Plot all of the above: ";

impl Stage {
    /// 前进一步
    pub fn advance<P: Prompt>(self, prompt: &mut P) -> Result<Stage> {
        match self {
            Stage::SelectRoot => {
                let root = PathBuf::from(prompt.ask(ROOT_QUESTION)?.trim());
                if !root.is_dir() {
                    return Err(DosbandError::DirectoryNotFound {
                        path: root.display().to_string(),
                    });
                }
                Ok(Stage::SelectMode { root })
            }
            Stage::SelectMode { root } => {
                let mode = FolderMode::from_answer(&prompt.ask(MODE_QUESTION)?);
                Ok(Stage::SelectPipeline { root, mode })
            }
            Stage::SelectPipeline { root, mode } => {
                let question = match mode {
                    FolderMode::Batch => BATCH_PIPELINE_QUESTION,
                    FolderMode::Single => SINGLE_PIPELINE_QUESTION,
                };
                let pipeline: Pipeline = prompt.ask(question)?.parse()?;
                Ok(Stage::Execute(Plan {
                    root,
                    mode,
                    pipeline,
                }))
            }
            Stage::Execute(plan) => Ok(Stage::Execute(plan)),
        }
    }
}

/// 运行会话直到得到执行计划
pub fn collect_plan<P: Prompt>(prompt: &mut P) -> Result<Plan> {
    let mut stage = Stage::SelectRoot;
    loop {
        stage = match stage.advance(prompt)? {
            Stage::Execute(plan) => return Ok(plan),
            next => next,
        };
    }
}

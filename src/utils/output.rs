//! # 终端输出
//!
//! 所有面向用户的消息都带一个彩色前缀，如 `[OK]`、`[SKIP]`、`[?]`。
//!
//! ## 依赖关系
//! - 被 `commands/`, `parsers/`, `batch/`, `cli/session.rs` 与 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// 消息前缀
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Ok,
    Error,
    Warn,
    Info,
    Skip,
    Done,
    Ask,
}

impl Tag {
    fn label(self) -> ColoredString {
        match self {
            Tag::Ok => "[OK]".green().bold(),
            Tag::Error => "[ERR]".red().bold(),
            Tag::Warn => "[WARN]".yellow().bold(),
            Tag::Info => "[*]".blue().bold(),
            Tag::Skip => "[SKIP]".dimmed(),
            Tag::Done => "[DONE]".green().bold(),
            Tag::Ask => "[?]".cyan().bold(),
        }
    }
}

/// 带前缀的一行消息
pub fn tagged(tag: Tag, msg: &str) -> String {
    format!("{} {}", tag.label(), msg)
}

pub fn print_success(msg: &str) {
    println!("{}", tagged(Tag::Ok, msg));
}

/// 错误输出到 stderr
pub fn print_error(msg: &str) {
    eprintln!("{}", tagged(Tag::Error, msg));
}

pub fn print_warning(msg: &str) {
    println!("{}", tagged(Tag::Warn, msg));
}

pub fn print_info(msg: &str) {
    println!("{}", tagged(Tag::Info, msg));
}

pub fn print_skip(msg: &str) {
    println!("{}", tagged(Tag::Skip, msg));
}

pub fn print_done(msg: &str) {
    println!("{}", tagged(Tag::Done, msg));
}

/// 报告已写出的图片
pub fn print_saved(path: &Path) {
    print_success(&format!("{} {}", "Plot saved to:".dimmed(), path.display()));
}

/// 交互提问（不换行，由调用方读取回答）
pub fn prompt_line(question: &str) -> String {
    tagged(Tag::Ask, question)
}

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

/// 标题栏：上下各一条分隔线
pub fn print_header(title: &str) {
    println!("\n{}", rule().dimmed());
    println!("  {}", title.bold());
    println!("{}\n", rule().dimmed());
}

pub fn print_separator() {
    println!("{}", rule().dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_plain_text() {
        colored::control::set_override(false);
        assert_eq!(tagged(Tag::Skip, "No DOS files found"), "[SKIP] No DOS files found");
        assert_eq!(
            prompt_line("Enter the directory path: "),
            "[?] Enter the directory path: "
        );
        assert_eq!(rule().chars().count(), RULE_WIDTH);
    }
}

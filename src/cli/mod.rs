//! 命令行控制台
//!
//! 在公开 API 之上的交互式驱动，不引入任何持久化格式

pub mod commands;
pub mod printer;

pub use commands::{Command, CommandResult, Console};
pub use printer::{PrintMode, Printer};

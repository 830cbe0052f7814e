//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权重
///
/// 权重原样保存，不做校验（负数、NaN 均可写入）。
pub type Weight = f64;

/// 方向标记
///
/// 有向边 A→B 在 A 的邻接表中记为 `Finish`（A 是起点，指向终点），
/// 在 B 的邻接表中记为 `Start`（A 是 B 的起点）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Start,
    Finish,
}

impl Direction {
    /// 翻转方向
    pub fn flip(self) -> Self {
        match self {
            Direction::Start => Direction::Finish,
            Direction::Finish => Direction::Start,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Start => "start",
            Direction::Finish => "finish",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! 图算法模块
//!
//! 包含 Bellman-Ford 最短路径

mod bellman_ford;

pub use bellman_ford::{PathFinder, ShortestPathTree};

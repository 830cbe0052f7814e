//! AdjGraph - 内存图抽象数据类型
//!
//! 支持有向图和无向图：
//! - 顶点/边的增删（无效输入静默忽略，返回 `Mutation` 说明结果）
//! - 邻居、邻接矩阵、诱导子图、转置等结构查询
//! - Bellman-Ford 单源最短路径

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{PathFinder, ShortestPathTree};
pub use error::{Error, Result};
pub use graph::{
    AdjacencyMatrix, Edge, Graph, Ignored, Link, Mutation, SharedGraph, Vertex, VertexId,
};
pub use types::{Direction, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构

mod edge;
mod graph;
mod matrix;
mod mutation;
mod vertex;

pub use edge::{Edge, Link};
pub use graph::{Graph, SharedGraph};
pub use matrix::AdjacencyMatrix;
pub use mutation::{Ignored, Mutation};
pub use vertex::{Vertex, VertexId};

//! 变更结果
//!
//! 所有变更操作都不会失败：无效输入被静默忽略。返回的 `Mutation`
//! 记录变更是否生效以及被忽略的原因；`strict()` 把忽略转换为错误。

use crate::error::{Error, Result};
use crate::graph::vertex::VertexId;
use std::fmt;

/// 被忽略的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ignored {
    /// 顶点已存在，保留原载荷
    DuplicateVertex(VertexId),
    /// 引用了不存在的顶点
    MissingVertex(VertexId),
    /// 边的方向性与图不一致
    DirectionMismatch { graph: bool, edge: bool },
    /// 两点之间没有边
    NoSuchEdge(VertexId, VertexId),
    /// 无向图上的 reverse
    Undirected,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignored::DuplicateVertex(id) => write!(f, "顶点已存在: {}", id),
            Ignored::MissingVertex(id) => write!(f, "顶点不存在: {}", id),
            Ignored::DirectionMismatch { graph, edge } => {
                write!(f, "边方向性不一致: 图 directed={}, 边 directed={}", graph, edge)
            }
            Ignored::NoSuchEdge(a, b) => write!(f, "边不存在: {} - {}", a, b),
            Ignored::Undirected => write!(f, "无向图不支持翻转"),
        }
    }
}

/// 变更结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    Ignored(Ignored),
}

impl Mutation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Mutation::Applied)
    }

    pub fn is_ignored(&self) -> bool {
        !self.is_applied()
    }

    /// 严格模式：忽略视为错误
    pub fn strict(self) -> Result<()> {
        match self {
            Mutation::Applied => Ok(()),
            Mutation::Ignored(reason) => Err(reason.into()),
        }
    }
}

impl From<Ignored> for Error {
    fn from(reason: Ignored) -> Self {
        match reason {
            Ignored::DuplicateVertex(id) => Error::VertexAlreadyExists(id.0),
            Ignored::MissingVertex(id) => Error::VertexNotFound(id.0),
            Ignored::DirectionMismatch { graph, edge } => Error::DirectionMismatch { graph, edge },
            Ignored::NoSuchEdge(a, b) => Error::EdgeNotFound(format!("{} - {}", a, b)),
            Ignored::Undirected => Error::NotDirected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_applied() {
        assert!(Mutation::Applied.strict().is_ok());
    }

    #[test]
    fn test_strict_ignored() {
        let m = Mutation::Ignored(Ignored::MissingVertex(VertexId::from("q")));
        assert!(m.is_ignored());
        match m.strict() {
            Err(Error::VertexNotFound(id)) => assert_eq!(id, "q"),
            other => panic!("unexpected: {:?}", other),
        }

        let m = Mutation::Ignored(Ignored::DirectionMismatch {
            graph: false,
            edge: true,
        });
        assert!(matches!(
            m.strict(),
            Err(Error::DirectionMismatch {
                graph: false,
                edge: true
            })
        ));
    }
}

//! 顶点定义

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// 顶点 ID（图内唯一）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub String);

impl VertexId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VertexId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 顶点
///
/// 创建后不可变；payload 由调用方提供，原样返回。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex<T> {
    id: VertexId,
    payload: T,
}

impl<T> Vertex<T> {
    pub fn new(id: VertexId, payload: T) -> Self {
        Self { id, payload }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> &VertexId {
        &self.id
    }

    /// 获取载荷
    pub fn payload(&self) -> &T {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_lookup_by_str() {
        let mut map = std::collections::HashMap::new();
        map.insert(VertexId::from("a"), 1);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(VertexId::new("b").to_string(), "b");
    }

    #[test]
    fn test_vertex_accessors() {
        let v = Vertex::new(VertexId::from("x"), 42u32);
        assert_eq!(v.id().as_str(), "x");
        assert_eq!(*v.payload(), 42);
    }
}

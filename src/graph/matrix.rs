//! 邻接矩阵

use crate::graph::vertex::VertexId;
use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 邻接矩阵
///
/// 行列顺序与 `ids` 一致（顶点插入顺序）。单元格为两点之间的边权重，
/// 无边为 `0`。权重为 0 的边因此与"无边"无法区分。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    ids: Vec<VertexId>,
    rows: Vec<Vec<Weight>>,
}

impl AdjacencyMatrix {
    pub(crate) fn new(ids: Vec<VertexId>, rows: Vec<Vec<Weight>>) -> Self {
        Self { ids, rows }
    }

    /// 行/列对应的顶点 ID
    pub fn ids(&self) -> &[VertexId] {
        &self.ids
    }

    pub fn rows(&self) -> &[Vec<Weight>] {
        &self.rows
    }

    /// 矩阵维度
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// 按顶点 ID 取单元格
    pub fn get(&self, row: &str, column: &str) -> Option<Weight> {
        let i = self.position(row)?;
        let j = self.position(column)?;
        Some(self.rows[i][j])
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|v| v.as_str() == id)
    }

    pub fn into_rows(self) -> Vec<Vec<Weight>> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_lookup() {
        let m = AdjacencyMatrix::new(
            vec![VertexId::from("x"), VertexId::from("y")],
            vec![vec![0.0, 7.0], vec![7.0, 0.0]],
        );
        assert_eq!(m.len(), 2);
        assert_eq!(m.get("x", "y"), Some(7.0));
        assert_eq!(m.get("y", "y"), Some(0.0));
        assert_eq!(m.get("x", "z"), None);
    }
}

//! Bellman-Ford 最短路径
//!
//! 固定执行 V 轮松弛（不提前退出），每轮按顶点插入顺序扫描所有出边
//! （带 `Finish` 标记的链接）。不检测负环。

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::types::Weight;
use serde::Serialize;
use tracing::{debug, trace, warn};

/// 最短路径树
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathTree {
    /// 顶点 ID（图的插入顺序）
    ids: Vec<VertexId>,
    /// 源点下标
    source: usize,
    /// 到各顶点的距离，不可达为正无穷
    distances: Vec<Weight>,
    /// 前驱下标
    parents: Vec<Option<usize>>,
    /// 成功松弛次数
    relaxations: usize,
}

impl ShortestPathTree {
    /// 源点
    pub fn source(&self) -> &VertexId {
        &self.ids[self.source]
    }

    /// 到 `id` 的最短距离；不可达或顶点不存在时为 None
    pub fn distance(&self, id: &str) -> Option<Weight> {
        let d = self.distances[self.index(id)?];
        (d != Weight::INFINITY).then_some(d)
    }

    /// `id` 的前驱
    pub fn predecessor(&self, id: &str) -> Option<&VertexId> {
        let parent = self.parents[self.index(id)?]?;
        Some(&self.ids[parent])
    }

    /// 成功松弛次数
    pub fn relaxations(&self) -> usize {
        self.relaxations
    }

    /// 重构到 `target` 的路径
    ///
    /// 从 `target` 沿前驱回溯，直到遇到没有前驱的顶点。`target` 不可达时
    /// 结果为 `[target]`。回溯最多走 V 步，负环时路径在此截断。
    pub fn path_to(&self, target: &str) -> Result<Vec<VertexId>> {
        let mut current = self
            .index(target)
            .ok_or_else(|| Error::VertexNotFound(target.to_string()))?;

        let mut path = Vec::new();
        let mut hops = 0;
        while let Some(parent) = self.parents[current] {
            if hops == self.ids.len() {
                warn!(vertex = target, hops, "前驱回溯超过顶点数，可能存在负环");
                break;
            }
            path.push(self.ids[current].clone());
            current = parent;
            hops += 1;
        }
        path.push(self.ids[current].clone());
        path.reverse();
        Ok(path)
    }

    fn index(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|v| v.as_str() == id)
    }
}

/// 路径查找器
pub struct PathFinder<'g, T> {
    graph: &'g Graph<T>,
}

impl<'g, T> PathFinder<'g, T> {
    /// 创建路径查找器
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self { graph }
    }

    /// 单源最短路径树
    pub fn shortest_path_tree(&self, source: &str) -> Result<ShortestPathTree> {
        let source_index = self
            .graph
            .index_of(source)
            .ok_or_else(|| Error::VertexNotFound(source.to_string()))?;

        let edges = self.outgoing_edges();
        let n = self.graph.vertex_count();
        let mut distances = vec![Weight::INFINITY; n];
        let mut parents = vec![None; n];
        distances[source_index] = 0.0;

        let mut relaxations = 0;
        for round in 0..n {
            for &(start, finish, weight) in &edges {
                if distances[start] == Weight::INFINITY {
                    continue;
                }
                let candidate = distances[start] + weight;
                if candidate < distances[finish] {
                    trace!(round, start, finish, candidate, "松弛");
                    distances[finish] = candidate;
                    parents[finish] = Some(start);
                    relaxations += 1;
                }
            }
        }

        debug!(
            source,
            rounds = n,
            edges = edges.len(),
            relaxations,
            "最短路径计算完成"
        );

        Ok(ShortestPathTree {
            ids: self.graph.vertex_ids().cloned().collect(),
            source: source_index,
            distances,
            parents,
            relaxations,
        })
    }

    /// 单源单目标最短路径
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<Vec<VertexId>> {
        if !self.graph.contains_vertex(target) {
            return Err(Error::VertexNotFound(target.to_string()));
        }
        self.shortest_path_tree(source)?.path_to(target)
    }

    /// 收集所有出边 (起点下标, 终点下标, 权重)
    fn outgoing_edges(&self) -> Vec<(usize, usize, Weight)> {
        let mut edges = Vec::new();
        for (start, (_, links)) in self.graph.adjacency().enumerate() {
            for (neighbour, link) in links {
                if !link.is_outgoing() {
                    continue;
                }
                if let Some(finish) = self.graph.index_of(neighbour.as_str()) {
                    edges.push((start, finish, link.weight()));
                }
            }
        }
        edges
    }
}

//! 图数据结构
//!
//! 以顶点 ID 为键的邻接表。一条逻辑边在两个端点的邻接表中各存一份
//! `Link`，两份权重一致；有向图中方向标记互补（A→B 在 A 侧为
//! `Finish`，在 B 侧为 `Start`），无向图中没有方向标记。每次变更后
//! 这一镜像关系都必须成立。

use super::edge::{Edge, Link};
use super::matrix::AdjacencyMatrix;
use super::mutation::{Ignored, Mutation};
use super::vertex::{Vertex, VertexId};
use crate::algorithm::{PathFinder, ShortestPathTree};
use crate::error::{Error, Result};
use crate::types::{Direction, Weight};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// 多线程共享的图（整体加读写锁）
pub type SharedGraph<T> = Arc<RwLock<Graph<T>>>;

/// 邻接表：邻居 ID -> 链接（保持插入顺序）
pub(crate) type Links = IndexMap<VertexId, Link>;

#[derive(Debug, Clone)]
struct VertexEntry<T> {
    vertex: Vertex<T>,
    links: Links,
}

/// 内存图
///
/// 方向性在创建时确定，之后不可更改。顶点按插入顺序保存，
/// 邻接矩阵的行列顺序与之一致。
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: IndexMap<VertexId, VertexEntry<T>>,
    directed: bool,
}

impl<T> Graph<T> {
    /// 创建空图
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: IndexMap::new(),
            directed,
        }
    }

    /// 创建有向图
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// 创建无向图
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 转为可跨线程共享的图
    pub fn into_shared(self) -> SharedGraph<T> {
        Arc::new(RwLock::new(self))
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// ID 已存在时不做任何修改，保留原载荷。
    pub fn add_vertex(&mut self, id: impl Into<VertexId>, payload: T) -> Mutation {
        let id = id.into();
        if self.vertices.contains_key(&id) {
            trace!(vertex = %id, "顶点已存在，忽略");
            return Mutation::Ignored(Ignored::DuplicateVertex(id));
        }

        debug!(vertex = %id, "添加顶点");
        let entry = VertexEntry {
            vertex: Vertex::new(id.clone(), payload),
            links: Links::new(),
        };
        self.vertices.insert(id, entry);
        Mutation::Applied
    }

    /// 删除顶点及所有指向它的链接
    pub fn remove_vertex(&mut self, id: &str) -> Mutation {
        let Some(entry) = self.vertices.shift_remove(id) else {
            trace!(vertex = id, "删除顶点：顶点不存在");
            return Mutation::Ignored(Ignored::MissingVertex(id.into()));
        };

        // 镜像关系保证只需遍历自身的邻接表
        for neighbour in entry.links.keys() {
            if let Some(other) = self.vertices.get_mut(neighbour) {
                other.links.shift_remove(id);
            }
        }

        debug!(vertex = id, degree = entry.links.len(), "删除顶点");
        Mutation::Applied
    }

    /// 获取顶点载荷
    pub fn get_vertex(&self, id: &str) -> Option<&T> {
        self.vertex(id).map(Vertex::payload)
    }

    /// 获取顶点
    pub fn vertex(&self, id: &str) -> Option<&Vertex<T>> {
        self.vertices.get(id).map(|e| &e.vertex)
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 按插入顺序返回所有顶点 ID
    pub fn vertex_ids(&self) -> impl Iterator<Item = &VertexId> + '_ {
        self.vertices.keys()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 要求两个顶点都存在，且 `directed` 与图的方向性一致；否则忽略。
    /// 同一对顶点之间已有的边会被覆盖。
    pub fn add_edge(&mut self, id1: &str, id2: &str, weight: Weight, directed: bool) -> Mutation {
        if directed != self.directed {
            trace!(from = id1, to = id2, directed, "边方向性与图不一致，忽略");
            return Mutation::Ignored(Ignored::DirectionMismatch {
                graph: self.directed,
                edge: directed,
            });
        }
        let key1 = match self.key(id1) {
            Some(k) => k,
            None => return Mutation::Ignored(Ignored::MissingVertex(id1.into())),
        };
        let key2 = match self.key(id2) {
            Some(k) => k,
            None => return Mutation::Ignored(Ignored::MissingVertex(id2.into())),
        };

        let (forward, backward) = if directed {
            (Some(Direction::Finish), Some(Direction::Start))
        } else {
            (None, None)
        };

        // 自环时第二次写入覆盖第一次
        if let Some(entry) = self.vertices.get_mut(id1) {
            entry.links.insert(key2, Link::new(weight, forward));
        }
        if let Some(entry) = self.vertices.get_mut(id2) {
            entry.links.insert(key1, Link::new(weight, backward));
        }

        debug!(from = id1, to = id2, weight, directed, "添加边");
        Mutation::Applied
    }

    /// 删除边（两侧镜像链接一并删除）
    pub fn remove_edge(&mut self, id1: &str, id2: &str) -> Mutation {
        for id in [id1, id2] {
            if !self.vertices.contains_key(id) {
                return Mutation::Ignored(Ignored::MissingVertex(id.into()));
            }
        }

        let mut removed = false;
        if let Some(entry) = self.vertices.get_mut(id1) {
            removed |= entry.links.shift_remove(id2).is_some();
        }
        if let Some(entry) = self.vertices.get_mut(id2) {
            removed |= entry.links.shift_remove(id1).is_some();
        }

        if removed {
            debug!(from = id1, to = id2, "删除边");
            Mutation::Applied
        } else {
            trace!(from = id1, to = id2, "删除边：边不存在");
            Mutation::Ignored(Ignored::NoSuchEdge(id1.into(), id2.into()))
        }
    }

    /// 获取边
    ///
    /// 顶点不存在、两点之间无边或 `id1 == id2` 时返回 None。
    /// 无向图约定 `start = id1`，`finish = id2`。
    pub fn get_edge(&self, id1: &str, id2: &str) -> Option<Edge<'_, T>> {
        if id1 == id2 {
            return None;
        }
        let first = self.vertices.get(id1)?;
        let second = self.vertices.get(id2)?;
        let link = first.links.get(id2)?;

        let (start, finish) = match link.direction() {
            Some(Direction::Start) => (second, first),
            _ => (first, second),
        };
        Some(Edge::new(
            &start.vertex,
            &finish.vertex,
            link.weight(),
            self.directed,
        ))
    }

    /// 获取边权重
    pub fn get_edge_weight(&self, id1: &str, id2: &str) -> Result<Weight> {
        self.get_edge(id1, id2)
            .map(|e| e.weight())
            .ok_or_else(|| Error::EdgeNotFound(format!("{} - {}", id1, id2)))
    }

    /// 获取 `id1` 一侧存储的链接
    pub fn link(&self, id1: &str, id2: &str) -> Option<&Link> {
        self.vertices.get(id1)?.links.get(id2)
    }

    /// 顶点自身的邻接表（只读）
    pub fn links(&self, id: &str) -> impl Iterator<Item = (&VertexId, &Link)> + '_ {
        self.vertices
            .get(id)
            .into_iter()
            .flat_map(|e| e.links.iter())
    }

    /// 获取逻辑边数量（镜像的两份计一次）
    pub fn edge_count(&self) -> usize {
        let mut mirrored = 0;
        let mut loops = 0;
        for (id, entry) in &self.vertices {
            for neighbour in entry.links.keys() {
                if neighbour == id {
                    loops += 1;
                } else {
                    mirrored += 1;
                }
            }
        }
        mirrored / 2 + loops
    }

    /// 翻转所有边的方向（转置图），仅对有向图生效
    pub fn reverse(&mut self) -> Mutation {
        if !self.directed {
            trace!("无向图 reverse，忽略");
            return Mutation::Ignored(Ignored::Undirected);
        }
        for entry in self.vertices.values_mut() {
            for link in entry.links.values_mut() {
                link.flip();
            }
        }
        debug!(vertices = self.vertices.len(), "翻转图");
        Mutation::Applied
    }

    // ==================== 邻居查询 ====================

    /// 获取邻居载荷
    ///
    /// 扫描其他所有顶点的邻接表，收集其中含有 `id` 的顶点（按顶点插入
    /// 顺序，不含自身）。由于链接成对存储，有向图中前驱和后继都会返回；
    /// 区分方向请用 `successors` / `predecessors`。
    pub fn neighbours(&self, id: &str) -> Vec<&T> {
        if !self.vertices.contains_key(id) {
            return Vec::new();
        }
        self.vertices
            .iter()
            .filter(|(other, entry)| other.as_str() != id && entry.links.contains_key(id))
            .map(|(_, entry)| entry.vertex.payload())
            .collect()
    }

    /// 后继（出边指向的顶点）；无向图返回所有相邻顶点
    pub fn successors(&self, id: &str) -> Vec<&T> {
        self.adjacent_by(id, |link| link.direction() != Some(Direction::Start))
    }

    /// 前驱（入边来源的顶点）；无向图返回所有相邻顶点
    pub fn predecessors(&self, id: &str) -> Vec<&T> {
        self.adjacent_by(id, |link| link.direction() != Some(Direction::Finish))
    }

    fn adjacent_by(&self, id: &str, keep: impl Fn(&Link) -> bool) -> Vec<&T> {
        self.links(id)
            .filter(|(_, link)| keep(link))
            .filter_map(|(neighbour, _)| self.get_vertex(neighbour.as_str()))
            .collect()
    }

    // ==================== 派生 ====================

    /// 邻接矩阵（行列按顶点插入顺序）
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let ids: Vec<VertexId> = self.vertices.keys().cloned().collect();
        let rows = self
            .vertices
            .values()
            .map(|entry| {
                ids.iter()
                    .map(|column| entry.links.get(column).map_or(0.0, Link::weight))
                    .collect()
            })
            .collect();
        AdjacencyMatrix::new(ids, rows)
    }

    /// 诱导子图
    ///
    /// 只保留 `ids` 中存在于本图的顶点，以及两个端点都在 `ids` 中的链接。
    /// 新图与原图独立，方向性相同。
    pub fn subgraph<I, S>(&self, ids: I) -> Graph<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        T: Clone,
    {
        let keep: HashSet<String> = ids.into_iter().map(|s| s.as_ref().to_string()).collect();

        let vertices: IndexMap<VertexId, VertexEntry<T>> = self
            .vertices
            .iter()
            .filter(|(id, _)| keep.contains(id.as_str()))
            .map(|(id, entry)| {
                let links = entry
                    .links
                    .iter()
                    .filter(|(neighbour, _)| keep.contains(neighbour.as_str()))
                    .map(|(neighbour, link)| (neighbour.clone(), *link))
                    .collect();
                let copy = VertexEntry {
                    vertex: entry.vertex.clone(),
                    links,
                };
                (id.clone(), copy)
            })
            .collect();

        debug!(
            requested = keep.len(),
            vertices = vertices.len(),
            "提取子图"
        );
        Graph {
            vertices,
            directed: self.directed,
        }
    }

    // ==================== 最短路径 ====================

    /// 单源单目标最短路径
    ///
    /// 只松弛带 `Finish` 标记的链接，因此无向图上没有可松弛的边，
    /// 结果只会是 `[target]`（或 `source == target` 时的 `[source]`）。
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<Vec<VertexId>> {
        PathFinder::new(self).shortest_path(source, target)
    }

    /// 单源最短路径树
    pub fn shortest_path_tree(&self, source: &str) -> Result<ShortestPathTree> {
        PathFinder::new(self).shortest_path_tree(source)
    }

    // ==================== 内部访问 ====================

    /// 按插入顺序遍历 (顶点 ID, 邻接表)
    pub(crate) fn adjacency(&self) -> impl Iterator<Item = (&VertexId, &Links)> + '_ {
        self.vertices.iter().map(|(id, entry)| (id, &entry.links))
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.vertices.get_index_of(id)
    }

    fn key(&self, id: &str) -> Option<VertexId> {
        self.vertices.get_key_value(id).map(|(k, _)| k.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc(directed: bool) -> Graph<&'static str> {
        let mut graph = Graph::new(directed);
        graph.add_vertex("A", "a");
        graph.add_vertex("B", "b");
        graph.add_vertex("C", "c");
        graph
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph = Graph::undirected();
        assert!(graph.add_vertex("x", 1).is_applied());
        assert_eq!(
            graph.add_vertex("x", 2),
            Mutation::Ignored(Ignored::DuplicateVertex(VertexId::from("x")))
        );
        assert_eq!(graph.get_vertex("x"), Some(&1));
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.get_vertex("y"), None);
    }

    #[test]
    fn test_add_edge_directed_mirror() {
        let mut graph = abc(true);
        assert!(graph.add_edge("A", "B", 3.0, true).is_applied());

        let ab = graph.link("A", "B").unwrap();
        let ba = graph.link("B", "A").unwrap();
        assert_eq!(ab.weight(), 3.0);
        assert_eq!(ba.weight(), 3.0);
        assert_eq!(ab.direction(), Some(Direction::Finish));
        assert_eq!(ba.direction(), Some(Direction::Start));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_rejections() {
        let mut graph = abc(false);
        assert_eq!(
            graph.add_edge("A", "B", 1.0, true),
            Mutation::Ignored(Ignored::DirectionMismatch {
                graph: false,
                edge: true
            })
        );
        assert!(graph.get_edge("A", "B").is_none());

        assert_eq!(
            graph.add_edge("A", "Z", 1.0, false),
            Mutation::Ignored(Ignored::MissingVertex(VertexId::from("Z")))
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_overwrites() {
        let mut graph = abc(true);
        graph.add_edge("A", "B", 1.0, true);
        graph.add_edge("B", "A", 9.0, true);

        let edge = graph.get_edge("A", "B").unwrap();
        assert_eq!(*edge.start_payload(), "b");
        assert_eq!(*edge.finish_payload(), "a");
        assert_eq!(edge.weight(), 9.0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_get_edge_orientation() {
        let mut graph = abc(true);
        graph.add_edge("A", "B", 2.0, true);

        let forward = graph.get_edge("A", "B").unwrap();
        let backward = graph.get_edge("B", "A").unwrap();
        assert_eq!(forward.start().id().as_str(), "A");
        assert_eq!(backward.start().id().as_str(), "A");
        assert_eq!(backward.finish().id().as_str(), "B");
        assert!(forward.directed());

        let mut undirected = abc(false);
        undirected.add_edge("A", "B", 2.0, false);
        let e = undirected.get_edge("B", "A").unwrap();
        assert_eq!(e.start().id().as_str(), "B");
        assert_eq!(e.finish().id().as_str(), "A");
        assert!(!e.directed());
    }

    #[test]
    fn test_self_loop() {
        let mut graph = abc(true);
        assert!(graph.add_edge("A", "A", 4.0, true).is_applied());

        assert!(graph.get_edge("A", "A").is_none());
        assert_eq!(
            graph.link("A", "A").unwrap().direction(),
            Some(Direction::Start)
        );
        assert_eq!(graph.adjacency_matrix().get("A", "A"), Some(4.0));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.neighbours("A").is_empty());

        assert!(graph.remove_vertex("A").is_applied());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edge_weight_not_found() {
        let mut graph = abc(false);
        graph.add_edge("A", "B", 4.0, false);
        assert_eq!(graph.get_edge_weight("A", "B").unwrap(), 4.0);
        assert_eq!(graph.get_edge_weight("B", "A").unwrap(), 4.0);
        assert!(matches!(
            graph.get_edge_weight("A", "C"),
            Err(Error::EdgeNotFound(_))
        ));
        assert!(matches!(
            graph.get_edge_weight("A", "A"),
            Err(Error::EdgeNotFound(_))
        ));
    }

    #[test]
    fn test_remove_vertex_clears_links() {
        let mut graph = abc(true);
        graph.add_edge("A", "B", 1.0, true);
        graph.add_edge("C", "B", 1.0, true);
        graph.add_edge("A", "C", 1.0, true);

        assert!(graph.remove_vertex("B").is_applied());
        assert!(graph.get_vertex("B").is_none());
        for id in ["A", "C"] {
            assert!(graph.links(id).all(|(n, _)| n.as_str() != "B"));
        }
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(
            graph.remove_vertex("B"),
            Mutation::Ignored(Ignored::MissingVertex(VertexId::from("B")))
        );
        let ids: Vec<&str> = graph.vertex_ids().map(|v| v.as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = abc(false);
        graph.add_edge("A", "B", 1.0, false);

        assert!(graph.remove_edge("B", "A").is_applied());
        assert!(graph.link("A", "B").is_none());
        assert!(graph.link("B", "A").is_none());
        assert_eq!(
            graph.remove_edge("A", "B"),
            Mutation::Ignored(Ignored::NoSuchEdge(VertexId::from("A"), VertexId::from("B")))
        );
        assert!(graph.remove_edge("A", "Q").is_ignored());
    }

    #[test]
    fn test_reverse() {
        let mut graph = abc(true);
        graph.add_edge("A", "B", 1.0, true);
        assert!(graph.reverse().is_applied());

        let edge = graph.get_edge("A", "B").unwrap();
        assert_eq!(edge.start().id().as_str(), "B");
        assert_eq!(graph.link("A", "B").unwrap().direction(), Some(Direction::Start));

        let mut undirected = abc(false);
        undirected.add_edge("A", "B", 1.0, false);
        assert_eq!(undirected.reverse(), Mutation::Ignored(Ignored::Undirected));
        assert_eq!(undirected.link("A", "B").unwrap().direction(), None);
    }

    #[test]
    fn test_neighbours_scan() {
        let mut graph = abc(true);
        graph.add_edge("A", "B", 1.0, true);
        graph.add_edge("C", "A", 1.0, true);

        assert_eq!(graph.neighbours("A"), vec![&"b", &"c"]);
        assert_eq!(graph.neighbours("B"), vec![&"a"]);
        assert!(graph.neighbours("Z").is_empty());

        assert_eq!(graph.successors("A"), vec![&"b"]);
        assert_eq!(graph.predecessors("A"), vec![&"c"]);
    }

    #[test]
    fn test_adjacency_matrix_order() {
        let mut graph = Graph::undirected();
        graph.add_vertex("X", ());
        graph.add_vertex("Y", ());
        graph.add_vertex("Z", ());
        graph.add_edge("X", "Y", 7.0, false);

        let matrix = graph.adjacency_matrix();
        let ids: Vec<&str> = matrix.ids().iter().map(|v| v.as_str()).collect();
        assert_eq!(ids, vec!["X", "Y", "Z"]);
        assert_eq!(
            matrix.into_rows(),
            vec![
                vec![0.0, 7.0, 0.0],
                vec![7.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0]
            ]
        );
    }

    #[test]
    fn test_subgraph() {
        let mut graph = abc(true);
        graph.add_edge("A", "B", 1.0, true);
        graph.add_edge("B", "C", 2.0, true);

        let sub = graph.subgraph(["B", "C", "missing"]);
        assert!(sub.is_directed());
        assert_eq!(sub.vertex_count(), 2);
        assert!(sub.get_vertex("A").is_none());
        assert!(sub.link("B", "A").is_none());
        assert_eq!(sub.link("B", "C"), graph.link("B", "C"));
        assert_eq!(sub.link("C", "B"), graph.link("C", "B"));

        // 原图不受影响
        graph.remove_vertex("C");
        assert_eq!(sub.get_vertex("C"), Some(&"c"));
    }

    #[test]
    fn test_shared_graph() {
        let shared = abc(false).into_shared();
        let worker = {
            let shared = shared.clone();
            std::thread::spawn(move || {
                shared.write().add_edge("A", "C", 5.0, false);
            })
        };
        worker.join().unwrap();
        assert_eq!(shared.read().get_edge_weight("C", "A").unwrap(), 5.0);
    }
}

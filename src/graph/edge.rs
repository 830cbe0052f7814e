//! 边定义
//!
//! `Link` 是邻接表中实际存储的条目；`Edge` 是查询时按需构造的值。

use crate::graph::vertex::Vertex;
use crate::types::{Direction, Weight};
use serde::{Deserialize, Serialize};

/// 邻接表条目
///
/// 一条逻辑边在两个端点各存一份：权重相同，有向时方向标记互补，
/// 无向时没有方向标记。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    weight: Weight,
    direction: Option<Direction>,
}

impl Link {
    pub(crate) fn new(weight: Weight, direction: Option<Direction>) -> Self {
        Self { weight, direction }
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 获取方向标记（无向图为 None）
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// 是否为从当前顶点出发的边
    pub fn is_outgoing(&self) -> bool {
        self.direction == Some(Direction::Finish)
    }

    pub(crate) fn flip(&mut self) {
        self.direction = self.direction.map(Direction::flip);
    }
}

/// 边（查询结果）
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Edge<'g, T> {
    start: &'g Vertex<T>,
    finish: &'g Vertex<T>,
    weight: Weight,
    directed: bool,
}

impl<'g, T> Edge<'g, T> {
    pub(crate) fn new(
        start: &'g Vertex<T>,
        finish: &'g Vertex<T>,
        weight: Weight,
        directed: bool,
    ) -> Self {
        Self {
            start,
            finish,
            weight,
            directed,
        }
    }

    /// 起点顶点
    pub fn start(&self) -> &'g Vertex<T> {
        self.start
    }

    /// 终点顶点
    pub fn finish(&self) -> &'g Vertex<T> {
        self.finish
    }

    /// 起点载荷
    pub fn start_payload(&self) -> &'g T {
        self.start.payload()
    }

    /// 终点载荷
    pub fn finish_payload(&self) -> &'g T {
        self.finish.payload()
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn directed(&self) -> bool {
        self.directed
    }
}

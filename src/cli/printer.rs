//! 结果打印器
//!
//! 提供表格和 JSON 格式的结果输出

use crate::error::Result;
use crate::graph::{AdjacencyMatrix, Edge, Mutation, VertexId};
use prettytable::{format, row, Cell, Row, Table};
use serde_json::json;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印变更结果
    pub fn print_mutation(&self, mutation: &Mutation) -> Result<String> {
        match self.mode {
            PrintMode::Table => Ok(match mutation {
                Mutation::Applied => "OK\n".to_string(),
                Mutation::Ignored(reason) => format!("已忽略: {}\n", reason),
            }),
            PrintMode::Json => {
                let value = match mutation {
                    Mutation::Applied => json!({ "applied": true }),
                    Mutation::Ignored(reason) => {
                        json!({ "applied": false, "reason": reason.to_string() })
                    }
                };
                Self::to_json(&value)
            }
        }
    }

    /// 打印载荷列表
    pub fn print_payloads(&self, title: &str, payloads: &[&String]) -> Result<String> {
        match self.mode {
            PrintMode::Table => {
                if payloads.is_empty() {
                    return Ok("Empty set\n".to_string());
                }
                let mut table = Self::table();
                table.set_titles(Row::new(vec![Cell::new(title)]));
                for payload in payloads {
                    table.add_row(Row::new(vec![Cell::new(payload)]));
                }
                Ok(format!("{}{} row(s) in set\n", table, payloads.len()))
            }
            PrintMode::Json => Self::to_json(&json!({ title: payloads })),
        }
    }

    /// 打印单个载荷
    pub fn print_payload(&self, id: &str, payload: Option<&String>) -> Result<String> {
        match self.mode {
            PrintMode::Table => Ok(match payload {
                Some(p) => format!("{} => {}\n", id, p),
                None => format!("未找到顶点: {}\n", id),
            }),
            PrintMode::Json => Self::to_json(&json!({ "id": id, "payload": payload })),
        }
    }

    /// 打印边
    pub fn print_edge(&self, edge: Option<&Edge<'_, String>>) -> Result<String> {
        match self.mode {
            PrintMode::Table => {
                let Some(edge) = edge else {
                    return Ok("Empty set\n".to_string());
                };
                let mut table = Self::table();
                table.set_titles(row!["Start", "Finish", "Weight", "Directed"]);
                table.add_row(row![
                    edge.start().id(),
                    edge.finish().id(),
                    edge.weight(),
                    edge.directed()
                ]);
                Ok(table.to_string())
            }
            PrintMode::Json => Self::to_json(&json!({ "edge": edge })),
        }
    }

    /// 打印权重
    pub fn print_weight(&self, weight: f64) -> Result<String> {
        match self.mode {
            PrintMode::Table => Ok(format!("{}\n", weight)),
            PrintMode::Json => Self::to_json(&json!({ "weight": weight })),
        }
    }

    /// 打印邻接矩阵
    pub fn print_matrix(&self, matrix: &AdjacencyMatrix) -> Result<String> {
        match self.mode {
            PrintMode::Table => {
                if matrix.is_empty() {
                    return Ok("Empty graph\n".to_string());
                }
                let mut table = Self::table();
                let mut header = vec![Cell::new("")];
                header.extend(matrix.ids().iter().map(|id| Cell::new(id.as_str())));
                table.set_titles(Row::new(header));

                for (id, row) in matrix.ids().iter().zip(matrix.rows()) {
                    let mut cells = vec![Cell::new(id.as_str())];
                    cells.extend(row.iter().map(|w| Cell::new(&w.to_string())));
                    table.add_row(Row::new(cells));
                }
                Ok(table.to_string())
            }
            PrintMode::Json => Self::to_json(matrix),
        }
    }

    /// 打印路径
    pub fn print_path(&self, path: &[VertexId]) -> Result<String> {
        match self.mode {
            PrintMode::Table => {
                let hops: Vec<&str> = path.iter().map(|v| v.as_str()).collect();
                Ok(format!("{}\n", hops.join(" -> ")))
            }
            PrintMode::Json => Self::to_json(&json!({ "path": path })),
        }
    }

    /// 打印统计信息
    pub fn print_stats(
        &self,
        vertex_count: usize,
        edge_count: usize,
        directed: bool,
    ) -> Result<String> {
        match self.mode {
            PrintMode::Table => {
                let mut table = Self::table();
                table.set_titles(row!["Property", "Value"]);
                table.add_row(row!["Vertex Count", vertex_count.to_string()]);
                table.add_row(row!["Edge Count", edge_count.to_string()]);
                table.add_row(row!["Directed", directed.to_string()]);
                Ok(table.to_string())
            }
            PrintMode::Json => Self::to_json(&json!({
                "vertices": vertex_count,
                "edges": edge_count,
                "directed": directed,
            })),
        }
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
命令:
  add <id> [payload]       添加顶点（payload 缺省为 id）
  link <a> <b> <w> [d|u]   添加边（缺省与图的方向性一致）
  unlink <a> <b>           删除边
  drop <id>                删除顶点
  get <id>                 查看顶点载荷
  edge <a> <b>             查看边
  weight <a> <b>           查看边权重
  neighbours <id>          邻居（所有相邻顶点）
  successors <id>          后继
  predecessors <id>        前驱
  matrix                   邻接矩阵
  subgraph <id>...         子图的邻接矩阵
  reverse                  翻转所有边（仅有向图）
  path <a> <b>             最短路径
  stats                    统计信息
  help, h, ?               显示帮助
  quit, exit, q            退出
"#
        .to_string()
    }

    fn table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }

    fn to_json<S: serde::Serialize + ?Sized>(value: &S) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
    }
}

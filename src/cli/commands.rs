//! 控制台命令处理
//!
//! 解析一行命令并在 `Graph<String>` 上执行

use crate::cli::printer::{PrintMode, Printer};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Weight;
use std::str::FromStr;

/// 控制台命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Stats,
    AddVertex { id: String, payload: String },
    Link {
        from: String,
        to: String,
        weight: Weight,
        directed: Option<bool>,
    },
    Unlink { from: String, to: String },
    Drop { id: String },
    Get { id: String },
    Edge { from: String, to: String },
    Weight { from: String, to: String },
    Neighbours { id: String },
    Successors { id: String },
    Predecessors { id: String },
    Matrix,
    Subgraph { ids: Vec<String> },
    Reverse,
    Path { from: String, to: String },
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((head, args)) = parts.split_first() else {
            return Err(Error::ParseError("空命令".to_string()));
        };

        let command = match head.to_lowercase().as_str() {
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "stats" | "info" => Command::Stats,
            "add" => {
                let id = arg(args, 0, "add <id> [payload]")?;
                let payload = if args.len() > 1 {
                    args[1..].join(" ")
                } else {
                    id.clone()
                };
                Command::AddVertex { id, payload }
            }
            "link" => {
                let usage = "link <a> <b> <weight> [d|u]";
                let weight = arg(args, 2, usage)?;
                let weight = weight
                    .parse::<Weight>()
                    .map_err(|_| Error::ParseError(format!("无效的权重: {}", weight)))?;
                let directed = match args.get(3).copied() {
                    None => None,
                    Some("d" | "directed") => Some(true),
                    Some("u" | "undirected") => Some(false),
                    Some(other) => {
                        return Err(Error::ParseError(format!("无效的方向: {}", other)));
                    }
                };
                Command::Link {
                    from: arg(args, 0, usage)?,
                    to: arg(args, 1, usage)?,
                    weight,
                    directed,
                }
            }
            "unlink" => {
                let (from, to) = pair(args, "unlink <a> <b>")?;
                Command::Unlink { from, to }
            }
            "drop" => Command::Drop {
                id: arg(args, 0, "drop <id>")?,
            },
            "get" | "vertex" | "v" => Command::Get {
                id: arg(args, 0, "get <id>")?,
            },
            "edge" | "e" => {
                let (from, to) = pair(args, "edge <a> <b>")?;
                Command::Edge { from, to }
            }
            "weight" | "w" => {
                let (from, to) = pair(args, "weight <a> <b>")?;
                Command::Weight { from, to }
            }
            "neighbours" | "neighbors" | "n" => Command::Neighbours {
                id: arg(args, 0, "neighbours <id>")?,
            },
            "successors" | "out" => Command::Successors {
                id: arg(args, 0, "successors <id>")?,
            },
            "predecessors" | "in" => Command::Predecessors {
                id: arg(args, 0, "predecessors <id>")?,
            },
            "matrix" | "m" => Command::Matrix,
            "subgraph" | "sub" => {
                if args.is_empty() {
                    return Err(Error::ParseError("用法: subgraph <id>...".to_string()));
                }
                Command::Subgraph {
                    ids: args.iter().map(|s| s.to_string()).collect(),
                }
            }
            "reverse" => Command::Reverse,
            "path" | "shortest" => {
                let (from, to) = pair(args, "path <a> <b>")?;
                Command::Path { from, to }
            }
            other => return Err(Error::ParseError(format!("未知命令: {}", other))),
        };
        Ok(command)
    }
}

fn arg(args: &[&str], index: usize, usage: &str) -> Result<String> {
    args.get(index)
        .map(|s| s.to_string())
        .ok_or_else(|| Error::ParseError(format!("用法: {}", usage)))
}

fn pair(args: &[&str], usage: &str) -> Result<(String, String)> {
    Ok((arg(args, 0, usage)?, arg(args, 1, usage)?))
}

/// 控制台命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
}

/// 控制台
pub struct Console {
    graph: Graph<String>,
    printer: Printer,
}

impl Console {
    pub fn new(directed: bool, mode: PrintMode) -> Self {
        Self {
            graph: Graph::new(directed),
            printer: Printer::new(mode),
        }
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// 解析并执行一行输入
    pub fn execute(&mut self, line: &str) -> Result<CommandResult> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(CommandResult::Continue);
        }
        let command: Command = line.parse()?;
        self.run(command)
    }

    /// 执行命令
    pub fn run(&mut self, command: Command) -> Result<CommandResult> {
        let graph = &mut self.graph;
        let printer = &self.printer;

        let output = match command {
            Command::Quit => return Ok(CommandResult::Exit),
            Command::Help => Printer::print_help(),
            Command::Stats => {
                printer.print_stats(graph.vertex_count(), graph.edge_count(), graph.is_directed())?
            }
            Command::AddVertex { id, payload } => {
                printer.print_mutation(&graph.add_vertex(id, payload))?
            }
            Command::Link {
                from,
                to,
                weight,
                directed,
            } => {
                let directed = directed.unwrap_or(graph.is_directed());
                printer.print_mutation(&graph.add_edge(&from, &to, weight, directed))?
            }
            Command::Unlink { from, to } => printer.print_mutation(&graph.remove_edge(&from, &to))?,
            Command::Drop { id } => printer.print_mutation(&graph.remove_vertex(&id))?,
            Command::Get { id } => printer.print_payload(&id, graph.get_vertex(&id))?,
            Command::Edge { from, to } => printer.print_edge(graph.get_edge(&from, &to).as_ref())?,
            Command::Weight { from, to } => printer.print_weight(graph.get_edge_weight(&from, &to)?)?,
            Command::Neighbours { id } => printer.print_payloads("neighbours", &graph.neighbours(&id))?,
            Command::Successors { id } => printer.print_payloads("successors", &graph.successors(&id))?,
            Command::Predecessors { id } => {
                printer.print_payloads("predecessors", &graph.predecessors(&id))?
            }
            Command::Matrix => printer.print_matrix(&graph.adjacency_matrix())?,
            Command::Subgraph { ids } => {
                printer.print_matrix(&graph.subgraph(&ids).adjacency_matrix())?
            }
            Command::Reverse => printer.print_mutation(&graph.reverse())?,
            Command::Path { from, to } => printer.print_path(&graph.shortest_path(&from, &to)?)?,
        };
        Ok(CommandResult::Message(output))
    }
}

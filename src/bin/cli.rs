//! AdjGraph CLI 工具
//!
//! 交互式命令行界面

use adjgraph::cli::{CommandResult, Console, PrintMode, Printer};
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adjgraph-cli")]
#[command(about = "AdjGraph 命令行工具", version)]
struct Args {
    /// 使用无向图（默认有向图）
    #[arg(short, long)]
    undirected: bool,

    /// 执行以 ';' 分隔的命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 以 JSON 格式输出
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mode = if args.json {
        PrintMode::Json
    } else {
        PrintMode::Table
    };
    let mut console = Console::new(!args.undirected, mode);

    // 脚本模式
    if let Some(script) = args.execute {
        for line in script.split(';') {
            if !run_line(&mut console, line)? {
                break;
            }
        }
        return Ok(());
    }

    println!("AdjGraph CLI v{}", adjgraph::VERSION);
    println!(
        "{} 图，输入 'help' 查看命令列表，'quit' 退出\n",
        if args.undirected { "无向" } else { "有向" }
    );

    let stdin = io::stdin();
    loop {
        print!("adjgraph> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !run_line(&mut console, &line)? {
            break;
        }
    }

    println!("再见！");
    Ok(())
}

/// 执行一行命令，返回是否继续
fn run_line(console: &mut Console, line: &str) -> io::Result<bool> {
    match console.execute(line) {
        Ok(CommandResult::Exit) => return Ok(false),
        Ok(CommandResult::Continue) => {}
        Ok(CommandResult::Message(output)) => {
            print!("{}", output);
            io::stdout().flush()?;
        }
        Err(adjgraph::Error::ParseError(msg)) => {
            eprintln!("{} {}", "错误:".red().bold(), msg);
            eprintln!("{}", Printer::print_help().dimmed());
        }
        Err(e) => eprintln!("{} {}", "错误:".red().bold(), e),
    }
    Ok(true)
}

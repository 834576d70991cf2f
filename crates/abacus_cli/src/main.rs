use abacus_driver::{evaluate_line, Session, SessionConfig};
use abacus_eval::OperationRegistry;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "abacus")]
#[command(about = "Abacus 计算器 - 简洁、规范、清晰", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// 关闭彩色诊断
    #[arg(long, global = true)]
    no_color: bool,

    /// 输出调试日志 (stderr)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 交互式计算 (默认)
    Repl {
        /// 不输出欢迎语和提示符
        #[arg(short, long)]
        quiet: bool,

        /// 不回显输入行
        #[arg(long)]
        no_echo: bool,

        /// 结果的小数位数 (默认: 6)
        #[arg(short, long, default_value_t = abacus_driver::config::DEFAULT_PRECISION)]
        precision: usize,

        /// 自定义提示符 (--quiet 时忽略)
        #[arg(long, value_name = "TEXT")]
        prompt: Option<String>,
    },

    /// 计算单个表达式
    Eval {
        /// 表达式，如 "1 + 2"
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// 结果的小数位数 (默认: 6)
        #[arg(short, long, default_value_t = abacus_driver::config::DEFAULT_PRECISION)]
        precision: usize,
    },

    /// 列出支持的运算符
    Ops,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let colors = !cli.no_color;
    match cli.command {
        None => cmd_repl(SessionConfig::default().with_colors(colors))?,
        Some(Commands::Repl {
            quiet,
            no_echo,
            precision,
            prompt,
        }) => {
            let mut config = SessionConfig::default()
                .with_echo(!no_echo)
                .with_colors(colors)
                .with_precision(precision);
            if let Some(prompt) = prompt {
                config = config.with_prompt(prompt);
            }
            if quiet {
                config = config.quiet();
            }
            cmd_repl(config)?
        }
        Some(Commands::Eval {
            expression,
            precision,
        }) => cmd_eval(&expression, precision, colors)?,
        Some(Commands::Ops) => cmd_ops(),
    }

    Ok(())
}

/// 日志只写 stderr；RUST_LOG 优先
fn setup_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("warn,abacus_cli=debug,abacus_driver=debug,abacus_eval=trace")
        } else {
            EnvFilter::new("warn")
        }
    });

    fmt::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// 交互命令
fn cmd_repl(config: SessionConfig) -> Result<()> {
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let summary = session.run(stdin.lock(), &mut stdout, &mut stderr)?;
    tracing::debug!(?summary, "repl finished");
    Ok(())
}

/// 单次求值命令
fn cmd_eval(expression: &str, precision: usize, colors: bool) -> Result<()> {
    match evaluate_line(expression, precision) {
        Ok(result) => {
            println!("= {}", result);
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            e.emit(Some(expression), colors, &mut io::stderr())?;
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// 列出运算符命令
fn cmd_ops() {
    let registry = OperationRegistry::new();
    for entry in registry.operators() {
        println!("  {}  {}", entry.token, entry.op.name());
    }
}

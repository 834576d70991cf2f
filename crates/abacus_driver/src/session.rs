//! 交互会话
//!
//! 逐行读取表达式并输出结果，直到读到 `q` 或输入结束。
//! 单行求值失败只报告诊断，不会结束会话。

use crate::config::SessionConfig;
use crate::error::{DriverError, DriverResult};
use crate::format::format_result;
use abacus_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
use abacus_eval::{evaluate, OperationLookup, OperationRegistry};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// 退出命令
pub const QUIT_COMMAND: &str = "q";

const BANNER: [&str; 2] = [
    "Hello! This is a simple calculator.",
    "Input q to quit or an operation to calculate the result.",
];

/// 处理一行之后的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 会话统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// 成功求值的行数
    pub evaluated: usize,
    /// 求值失败的行数
    pub failed: usize,
    /// 结果不是有限数的行数（已计入 evaluated）
    pub warned: usize,
}

/// 交互会话
pub struct Session<L = OperationRegistry> {
    config: SessionConfig,
    ops: L,
    emitter: Emitter,
    /// 只保存当前行的诊断
    sink: DiagnosticSink,
    evaluated: usize,
    failed: usize,
    warned: usize,
}

impl Session<OperationRegistry> {
    /// 使用内置运算注册表创建会话
    pub fn new(config: SessionConfig) -> Self {
        Self::with_lookup(config, OperationRegistry::new())
    }
}

impl<L: OperationLookup> Session<L> {
    /// 使用任意运算查找表创建会话
    pub fn with_lookup(config: SessionConfig, ops: L) -> Self {
        let emitter = Emitter::with_colors(config.colors);
        Self {
            config,
            ops,
            emitter,
            sink: DiagnosticSink::new(),
            evaluated: 0,
            failed: 0,
            warned: 0,
        }
    }

    /// 最近一行产生的诊断
    pub fn last_diagnostics(&self) -> &DiagnosticSink {
        &self.sink
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            evaluated: self.evaluated,
            failed: self.failed,
            warned: self.warned,
        }
    }

    /// 运行读取-求值-输出循环
    ///
    /// 结果写入 `out`，诊断写入 `err`。只有 IO 错误会提前结束循环；
    /// 不是 UTF-8 的行报告后跳过。
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> DriverResult<SessionSummary>
    where
        R: BufRead,
        W: Write + ?Sized,
        E: Write + ?Sized,
    {
        if self.config.banner {
            for line in BANNER {
                writeln!(out, "{}", line)?;
            }
        }

        let mut buffer = Vec::new();
        let mut line_no = 0;
        loop {
            if !self.config.prompt.is_empty() {
                write!(out, "{}", self.config.prompt)?;
                out.flush()?;
            }

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("end of input");
                break;
            }
            line_no += 1;

            let flow = match std::str::from_utf8(&buffer) {
                Ok(text) => {
                    let line = text.trim_end_matches(&['\n', '\r'][..]);
                    self.handle_line(line, out, err)?
                }
                Err(source) => {
                    self.reject_line(DriverError::InvalidUtf8 { line: line_no, source }, err)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        let summary = self.summary();
        info!(
            evaluated = summary.evaluated,
            failed = summary.failed,
            warned = summary.warned,
            "session finished"
        );
        Ok(summary)
    }

    /// 处理单行输入
    pub fn handle_line<W, E>(&mut self, line: &str, out: &mut W, err: &mut E) -> DriverResult<Flow>
    where
        W: Write + ?Sized,
        E: Write + ?Sized,
    {
        self.sink.clear();
        if line == QUIT_COMMAND {
            debug!("quit requested");
            return Ok(Flow::Quit);
        }

        if self.config.echo {
            writeln!(out, "{}", line)?;
        }

        match evaluate(line, &self.ops) {
            Ok(value) => {
                self.evaluated += 1;
                debug!(line, value, "evaluated line");
                writeln!(out, "= {}", format_result(value, self.config.precision))?;
                if !value.is_finite() {
                    self.sink.add(
                        Diagnostic::warning("result is not finite")
                            .with_note("division by zero or overflow produces an infinite or NaN result"),
                    );
                }
            }
            Err(e) => {
                debug!(line, error = %e, "evaluation failed");
                DriverError::from(e).collect_to_sink(&mut self.sink);
            }
        }
        out.flush()?;
        self.report(line, err)?;

        Ok(Flow::Continue)
    }

    /// 跳过无法解码的行
    fn reject_line<E: Write + ?Sized>(&mut self, error: DriverError, err: &mut E) -> DriverResult<()> {
        self.sink.clear();
        warn!(error = %error, "skipping undecodable line");
        error.collect_to_sink(&mut self.sink);
        self.report("", err)
    }

    /// 输出当前行的诊断并累计统计
    fn report<E: Write + ?Sized>(&mut self, source: &str, err: &mut E) -> DriverResult<()> {
        for diag in self.sink.diagnostics() {
            self.emitter.emit_with_source(diag, source, err)?;
        }
        if self.sink.has_errors() {
            self.failed += 1;
        } else if self.sink.warning_count() > 0 {
            self.warned += 1;
        }
        Ok(())
    }
}

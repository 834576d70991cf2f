//! Driver Errors
//!
//! 驱动层的错误类型，集成统一诊断系统

use abacus_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
use abacus_eval::EvalError;
use std::io::{self, Write};
use std::str::Utf8Error;
use thiserror::Error;

/// 驱动错误
#[derive(Debug, Error)]
pub enum DriverError {
    /// 求值错误
    #[error("{0}")]
    Eval(#[from] EvalError),

    /// 输入行不是合法的 UTF-8
    #[error("input line {line} is not valid UTF-8")]
    InvalidUtf8 {
        line: usize,
        #[source]
        source: Utf8Error,
    },

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DriverError {
    /// 转换为诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            DriverError::Eval(err) => err.to_diagnostic(),
            DriverError::InvalidUtf8 { line, source } => Diagnostic::error(self.to_string())
                .with_note(format!(
                    "invalid byte sequence after {} valid byte(s) on line {}",
                    source.valid_up_to(),
                    line
                ))
                .suggest("the line was skipped; re-enter it as plain text"),
            DriverError::Io(err) => Diagnostic::error(format!("IO error: {}", err)),
        }
    }

    /// 收集到 DiagnosticSink
    pub fn collect_to_sink(&self, sink: &mut DiagnosticSink) {
        sink.add(self.to_diagnostic());
    }

    /// 使用统一诊断系统输出错误
    pub fn emit<W: Write + ?Sized>(
        &self,
        source: Option<&str>,
        colors: bool,
        out: &mut W,
    ) -> io::Result<()> {
        let emitter = Emitter::with_colors(colors);
        let diag = self.to_diagnostic();
        match source {
            Some(src) => emitter.emit_with_source(&diag, src, out),
            None => emitter.emit(&diag, out),
        }
    }

    /// 只影响当前行，会话可以继续
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DriverError::Eval(_) | DriverError::InvalidUtf8 { .. })
    }
}

/// 驱动结果类型
pub type DriverResult<T> = Result<T, DriverError>;

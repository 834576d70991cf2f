//! Evaluation Error Types
//!
//! 求值错误定义。每种错误都可恢复，由调用方报告后继续处理下一行。

use abacus_diagnostics::{Diagnostic, Span, Suggestion};
use std::fmt;
use thiserror::Error;

/// 操作数位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// 求值错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// 表达式不足三部分
    #[error("malformed expression: expected '<operand> <operator> <operand>', found {parts} part(s)")]
    MalformedExpression { parts: usize, span: Span },

    /// 操作数不是数字
    #[error("invalid {side} operand '{text}'")]
    InvalidOperand { side: Side, text: String, span: Span },

    /// 未注册的运算符
    #[error("unknown operator '{token}'")]
    UnknownOperator {
        token: String,
        expected: Vec<String>,
        span: Span,
    },
}

impl EvalError {
    /// 获取错误在输入行中的位置
    pub fn span(&self) -> &Span {
        match self {
            Self::MalformedExpression { span, .. } => span,
            Self::InvalidOperand { span, .. } => span,
            Self::UnknownOperator { span, .. } => span,
        }
    }

    /// 转换为诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string()).span(self.span().clone());

        match self {
            Self::MalformedExpression { parts, .. } => {
                let diag = diag
                    .label(format!("{} of 3 parts", parts))
                    .with_note("operands and operator must be separated by single spaces");
                diag.with_suggestion(
                    Suggestion::new("write the expression as three parts").with_replacement("1 + 2"),
                )
            }
            Self::InvalidOperand { text, .. } => diag
                .label("not a number")
                .with_note(format!("'{}' is not a decimal floating-point literal", text))
                .suggest("use a number such as 1, -2.5 or 1E5"),
            Self::UnknownOperator { expected, .. } => {
                let diag = diag.label("not a supported operator");
                if expected.is_empty() {
                    diag
                } else {
                    diag.with_note(format!("supported operators: {}", expected.join(" ")))
                }
            }
        }
    }
}

/// 求值结果类型
pub type EvalResult<T> = Result<T, EvalError>;

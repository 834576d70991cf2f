//! 表达式切分与操作数解析
//!
//! 输入行的形状为 `<left> <op> <right>`：去掉首尾空白后按单个空格切成至多三段，
//! 第二个空格之后的全部内容都属于右操作数。

use crate::error::{EvalError, EvalResult, Side};
use abacus_diagnostics::{Span, SpanExt};

/// 输入行中的一段文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part<'a> {
    pub text: &'a str,
    /// 相对原始输入行的字节范围
    pub span: Span,
}

/// 切分后尚未解析的表达式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExpression<'a> {
    pub lhs: Part<'a>,
    pub operator: Part<'a>,
    pub rhs: Part<'a>,
}

/// 解析后的表达式，仅存在于一次求值期间
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression<'a> {
    pub lhs: f64,
    pub operator: &'a str,
    pub rhs: f64,
}

/// 切分输入行
pub fn split_expression(line: &str) -> EvalResult<RawExpression<'_>> {
    let offset = line.len() - line.trim_start().len();
    let trimmed = line.trim();

    let mut cursor = offset;
    let mut parts = trimmed.splitn(3, ' ').map(|text| {
        let part = Part {
            text,
            span: Span::at(cursor, text.len()),
        };
        cursor += text.len() + 1;
        part
    });

    match (parts.next(), parts.next(), parts.next()) {
        (Some(lhs), Some(operator), Some(rhs)) => Ok(RawExpression { lhs, operator, rhs }),
        (first, second, _) => {
            let found = if trimmed.is_empty() {
                0
            } else {
                usize::from(first.is_some()) + usize::from(second.is_some())
            };
            Err(EvalError::MalformedExpression {
                parts: found,
                span: Span::at(offset, trimmed.len()),
            })
        }
    }
}

/// 解析操作数
///
/// 接受十进制浮点字面量（`1`、`-2.5`、`1E5`、`inf`），忽略两侧空白；NaN 不算操作数。
pub fn parse_operand(part: &Part<'_>, side: Side) -> EvalResult<f64> {
    match part.text.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(EvalError::InvalidOperand {
            side,
            text: part.text.to_string(),
            span: part.span.clone(),
        }),
    }
}

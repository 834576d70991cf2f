//! 表达式求值
//!
//! 顺序：切分 → 查找运算符 → 解析左操作数 → 解析右操作数 → 执行运算。
//! 不做舍入，不保留任何状态。

use crate::error::{EvalError, EvalResult, Side};
use crate::expr::{parse_operand, split_expression, Expression};
use crate::operation::OperationLookup;
use tracing::trace;

/// 对一行输入求值
///
/// # Arguments
/// * `line` - 原始输入行，如 `"1 / 4"`
/// * `ops` - 运算查找表
///
/// # Returns
/// * `Ok(f64)` - 运算结果
/// * `Err(EvalError)` - 表达式不完整、运算符未知或操作数不是数字
///
/// # Example
/// ```
/// use abacus_eval::{evaluate, OperationRegistry};
///
/// let registry = OperationRegistry::new();
/// assert_eq!(evaluate("1 / 4", &registry).unwrap(), 0.25);
/// ```
pub fn evaluate<L: OperationLookup + ?Sized>(line: &str, ops: &L) -> EvalResult<f64> {
    let raw = split_expression(line)?;

    let operation = ops
        .lookup(raw.operator.text)
        .ok_or_else(|| EvalError::UnknownOperator {
            token: raw.operator.text.to_string(),
            expected: ops.tokens().into_iter().map(str::to_string).collect(),
            span: raw.operator.span.clone(),
        })?;

    let expr = Expression {
        lhs: parse_operand(&raw.lhs, Side::Left)?,
        operator: raw.operator.text,
        rhs: parse_operand(&raw.rhs, Side::Right)?,
    };

    let result = operation.apply(expr.lhs, expr.rhs);
    trace!(lhs = expr.lhs, operator = expr.operator, rhs = expr.rhs, result, "evaluated");
    Ok(result)
}

//! Abacus Evaluator
//!
//! 计算器核心：运算注册表与表达式求值。
//!
//! - [`OperationRegistry`] 把 `+ - * / ^` 绑定到对应的二元运算，构造后不可变
//! - [`evaluate`] 把 `"<left> <op> <right>"` 形式的一行输入求值为 `f64`
//!
//! 求值器只依赖 [`OperationLookup`]，任何实现了它的类型都可以替代内置注册表。

pub mod error;
pub mod evaluator;
pub mod expr;
pub mod operation;

pub use error::{EvalError, EvalResult, Side};
pub use evaluator::evaluate;
pub use expr::{parse_operand, split_expression, Expression, Part, RawExpression};
pub use operation::{ArithmeticOp, Operation, OperationLookup, OperationRegistry, OperatorEntry};

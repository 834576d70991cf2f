//! Abacus Driver
//!
//! 把求值核心接到行式输入输出上：交互会话、单次求值、结果格式化。

pub mod config;
pub mod error;
pub mod format;
pub mod session;

pub use config::SessionConfig;
pub use error::{DriverError, DriverResult};
pub use format::format_result;
pub use session::{Flow, Session, SessionSummary, QUIT_COMMAND};

use abacus_eval::{evaluate, OperationRegistry};

/// 单次求值并格式化
///
/// # Example
/// ```
/// assert_eq!(abacus_driver::evaluate_line("2 ^ 4", 6).unwrap(), "16.000000");
/// ```
pub fn evaluate_line(line: &str, precision: usize) -> DriverResult<String> {
    let registry = OperationRegistry::new();
    let value = evaluate(line, &registry)?;
    Ok(format_result(value, precision))
}

//! Abacus Diagnostics
//!
//! 统一的诊断系统，为计算器的每一行输入提供清晰的错误报告。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器
//! - [`Span`] - 输入行中的位置
//!
//! # 示例
//!
//! ```rust
//! use abacus_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
//!
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(
//!     Diagnostic::error("unknown operator '%'")
//!         .span(2..3)
//!         .with_note("supported operators: + - * / ^")
//! );
//!
//! let emitter = Emitter::without_colors();
//! for diag in sink.diagnostics() {
//!     emitter.emit_with_source(diag, "1 % 2", &mut std::io::stderr()).unwrap();
//! }
//! sink.clear();
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::{Diagnostic, Suggestion};
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::{Span, SpanExt};

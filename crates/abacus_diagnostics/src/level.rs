//! DiagnosticLevel - 诊断级别
//!
//! 计算器每处理一行只会产生两类诊断：无法求值（错误），
//! 或者得到了结果但结果不是有限数（警告）。

use ariadne::{Color, ReportKind};
use colored::{ColoredString, Colorize};
use std::fmt;

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// 该行没有结果，计入失败行数
    Error,
    /// 该行已输出结果，仅提示
    Warning,
}

impl DiagnosticLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// 单行输出时的级别前缀
    pub fn colored_name(&self) -> ColoredString {
        match self {
            Self::Error => self.name().red().bold(),
            Self::Warning => self.name().yellow().bold(),
        }
    }

    /// 带源码渲染时的报告类型与标注颜色
    pub fn report_style(&self) -> (ReportKind<'static>, Color) {
        match self {
            Self::Error => (ReportKind::Error, Color::Red),
            Self::Warning => (ReportKind::Warning, Color::Yellow),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_error_counts_as_failure() {
        assert!(DiagnosticLevel::Error.is_error());
        assert!(!DiagnosticLevel::Warning.is_error());
    }

    #[test]
    fn test_report_style_follows_level() {
        assert!(matches!(
            DiagnosticLevel::Error.report_style(),
            (ReportKind::Error, Color::Red)
        ));
        assert!(matches!(
            DiagnosticLevel::Warning.report_style(),
            (ReportKind::Warning, Color::Yellow)
        ));
    }

    #[test]
    fn test_display_is_plain_prefix() {
        assert_eq!(DiagnosticLevel::Error.to_string(), "error");
        assert_eq!(format!("{}: x", DiagnosticLevel::Warning), "warning: x");
    }
}

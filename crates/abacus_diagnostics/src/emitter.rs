//! Emitter - 诊断输出器
//!
//! 将诊断信息格式化写入调用方提供的输出流。
//! 有源码时使用 ariadne 渲染带标注的报告，否则输出简洁的单行格式。

use crate::diagnostic::Diagnostic;
use crate::span::SpanExt;
use ariadne::{Config, Label, Report, Source};
use colored::*;
use std::io::{self, Write};

/// 诊断输出器
#[derive(Debug, Clone, Copy)]
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建带颜色的输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    /// 输出单个诊断
    pub fn emit<W: Write + ?Sized>(&self, diagnostic: &Diagnostic, out: &mut W) -> io::Result<()> {
        if self.use_colors {
            self.emit_colored(diagnostic, out)
        } else {
            self.emit_plain(diagnostic, out)
        }
    }

    /// 结合输入行输出诊断
    ///
    /// 诊断没有位置或输入行为空白时退化为 [`Emitter::emit`]。
    pub fn emit_with_source<W: Write + ?Sized>(
        &self,
        diagnostic: &Diagnostic,
        source: &str,
        out: &mut W,
    ) -> io::Result<()> {
        let span = match &diagnostic.span {
            Some(span) if !source.trim().is_empty() => span.to_char_span(source),
            _ => return self.emit(diagnostic, out),
        };

        let (kind, color) = diagnostic.level.report_style();

        let mut label = Label::new(span.clone()).with_color(color);
        if let Some(text) = &diagnostic.label {
            label = label.with_message(text);
        }

        let mut report = Report::build(kind, (), span.start)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message)
            .with_label(label);

        // ariadne 每个报告只渲染一条 note 和一条 help
        if !diagnostic.notes.is_empty() {
            report = report.with_note(diagnostic.notes.join("; "));
        }
        if !diagnostic.suggestions.is_empty() {
            let help = diagnostic
                .suggestions
                .iter()
                .map(|s| match &s.replacement {
                    Some(replacement) => format!("{} (try: {})", s.message, replacement),
                    None => s.message.clone(),
                })
                .collect::<Vec<_>>()
                .join("; ");
            report = report.with_help(help);
        }

        report.finish().write(Source::from(source.to_string()), out)
    }

    fn emit_colored<W: Write + ?Sized>(&self, diagnostic: &Diagnostic, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{}: {}",
            diagnostic.level.colored_name(),
            diagnostic.message.bold()
        )?;

        if let Some(span) = &diagnostic.span {
            writeln!(out, "  {} {:?}", "-->".blue().bold(), span)?;
        }

        for note in &diagnostic.notes {
            writeln!(
                out,
                "  {} {}",
                "=".blue().bold(),
                format!("note: {}", note).bright_black()
            )?;
        }

        for suggestion in &diagnostic.suggestions {
            writeln!(
                out,
                "  {} {}",
                "=".green().bold(),
                format!("help: {}", suggestion.message).green()
            )?;
            if let Some(replacement) = &suggestion.replacement {
                writeln!(out, "        try: {}", replacement.green().italic())?;
            }
        }
        Ok(())
    }

    fn emit_plain<W: Write + ?Sized>(&self, diagnostic: &Diagnostic, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}: {}", diagnostic.level, diagnostic.message)?;

        if let Some(span) = &diagnostic.span {
            writeln!(out, "  --> {:?}", span)?;
        }

        for note in &diagnostic.notes {
            writeln!(out, "  = note: {}", note)?;
        }

        for suggestion in &diagnostic.suggestions {
            writeln!(out, "  = help: {}", suggestion.message)?;
            if let Some(replacement) = &suggestion.replacement {
                writeln!(out, "        try: {}", replacement)?;
            }
        }
        Ok(())
    }
}

//! Session Configuration
//!
//! 交互会话的可调项，由命令行参数构造

/// 默认提示符
pub const DEFAULT_PROMPT: &str = "Input an operation: ";

/// 默认保留的小数位数
pub const DEFAULT_PRECISION: usize = 6;

/// 会话配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// 每次读取前输出的提示符，空字符串表示不输出
    pub prompt: String,
    /// 是否输出欢迎语
    pub banner: bool,
    /// 是否回显输入行
    pub echo: bool,
    /// 诊断是否带颜色
    pub colors: bool,
    /// 结果的小数位数
    pub precision: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
            echo: true,
            colors: true,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SessionConfig {
    /// 关闭欢迎语和提示符，适合管道输入
    pub fn quiet(mut self) -> Self {
        self.banner = false;
        self.prompt.clear();
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.prompt, "Input an operation: ");
        assert!(config.banner);
        assert!(config.echo);
        assert!(config.colors);
        assert_eq!(config.precision, 6);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::default()
            .quiet()
            .with_echo(false)
            .with_colors(false)
            .with_precision(2);

        assert!(config.prompt.is_empty());
        assert!(!config.banner);
        assert!(!config.echo);
        assert!(!config.colors);
        assert_eq!(config.precision, 2);
    }
}

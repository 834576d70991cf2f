//! 运算注册表
//!
//! 使用表驱动方法管理运算符记号到二元运算的映射。
//! 注册表构造后不可变，可在线程间无锁共享。

use std::fmt;

/// 二元运算
///
/// 两个 `f64` 到一个 `f64` 的纯函数
pub trait Operation {
    fn apply(&self, lhs: f64, rhs: f64) -> f64;
}

impl<F> Operation for F
where
    F: Fn(f64, f64) -> f64,
{
    fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        self(lhs, rhs)
    }
}

/// 运算查找能力
///
/// 求值器只依赖这个 trait，测试中可以替换为桩实现。
pub trait OperationLookup {
    /// 按记号查找运算，未知记号返回 `None`
    fn lookup(&self, token: &str) -> Option<&dyn Operation>;

    /// 支持的记号（用于诊断提示）
    fn tokens(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl<T: OperationLookup + ?Sized> OperationLookup for &T {
    fn lookup(&self, token: &str) -> Option<&dyn Operation> {
        (**self).lookup(token)
    }

    fn tokens(&self) -> Vec<&str> {
        (**self).tokens()
    }
}

/// 内置算术运算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl ArithmeticOp {
    /// 所有内置运算
    pub const ALL: [ArithmeticOp; 5] = [
        ArithmeticOp::Add,
        ArithmeticOp::Sub,
        ArithmeticOp::Mul,
        ArithmeticOp::Div,
        ArithmeticOp::Pow,
    ];

    /// 运算符记号
    pub fn token(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
            Self::Pow => "exponentiation",
        }
    }

    /// 计算结果
    ///
    /// 除法与乘方遵循 IEEE-754：除零得到带符号的无穷，`0 / 0` 得到 NaN，
    /// `0 ^ 0` 为 1，负底数配小数指数为 NaN。
    pub fn eval(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            // 减法 = 加上取负的右操作数
            Self::Sub => lhs + -rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

impl Operation for ArithmeticOp {
    fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        self.eval(lhs, rhs)
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// 注册表条目
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorEntry {
    pub token: &'static str,
    pub op: ArithmeticOp,
}

/// 运算注册表
///
/// 集中管理所有运算符记号到运算的绑定
#[derive(Debug, Clone)]
pub struct OperationRegistry {
    entries: Vec<OperatorEntry>,
}

impl OperationRegistry {
    /// 创建注册表（包含所有内置运算）
    pub fn new() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(ArithmeticOp::ALL.len()),
        };
        registry.register_builtins();
        registry
    }

    fn register_builtins(&mut self) {
        for op in ArithmeticOp::ALL {
            self.add(op.token(), op);
        }
    }

    fn add(&mut self, token: &'static str, op: ArithmeticOp) {
        self.entries.push(OperatorEntry { token, op });
    }

    /// 所有条目（按注册顺序）
    pub fn operators(&self) -> &[OperatorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationLookup for OperationRegistry {
    fn lookup(&self, token: &str) -> Option<&dyn Operation> {
        self.entries
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| &entry.op as &dyn Operation)
    }

    fn tokens(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.token).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(token: &str, lhs: f64, rhs: f64) -> f64 {
        let registry = OperationRegistry::new();
        registry
            .lookup(token)
            .unwrap_or_else(|| panic!("operator '{}' should be registered", token))
            .apply(lhs, rhs)
    }

    #[test]
    fn test_builtin_tokens() {
        let registry = OperationRegistry::new();
        assert_eq!(registry.tokens(), vec!["+", "-", "*", "/", "^"]);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(apply("+", 1.0, 2.0), 3.0);
        assert_eq!(apply("-", 5.0, 3.0), 2.0);
        assert_eq!(apply("*", 2.0, 4.0), 8.0);
        assert_eq!(apply("/", 1.0, 4.0), 0.25);
        assert_eq!(apply("^", 2.0, 4.0), 16.0);
    }

    #[test]
    fn test_subtraction_is_not_reversed() {
        assert_eq!(apply("-", 1.0, 10.0), -9.0);
        assert_eq!(apply("-", -2.5, -2.5), 0.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(apply("/", 1.0, 0.0), f64::INFINITY);
        assert_eq!(apply("/", -1.0, 0.0), f64::NEG_INFINITY);
        assert!(apply("/", 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_power_edge_cases() {
        assert_eq!(apply("^", 0.0, 0.0), 1.0);
        assert_eq!(apply("^", 4.0, 0.5), 2.0);
        assert_eq!(apply("^", 2.0, -1.0), 0.5);
        assert!(apply("^", -8.0, 1.0 / 3.0).is_nan());
    }

    #[test]
    fn test_unknown_tokens_are_absent() {
        let registry = OperationRegistry::new();
        for token in ["%", "", "x", "++", " +", "**", "q"] {
            assert!(registry.lookup(token).is_none(), "'{}' should be absent", token);
        }
    }

    #[test]
    fn test_operators_listing() {
        let registry = OperationRegistry::new();
        let listed: Vec<_> = registry
            .operators()
            .iter()
            .map(|entry| (entry.token, entry.op.name()))
            .collect();
        assert_eq!(listed[3], ("/", "division"));
        assert_eq!(listed[4].0, ArithmeticOp::Pow.token());
        assert_eq!(listed.len(), ArithmeticOp::ALL.len());
    }

    #[test]
    fn test_closure_is_operation() {
        let hypot = |a: f64, b: f64| (a * a + b * b).sqrt();
        assert_eq!(hypot.apply(3.0, 4.0), 5.0);
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OperationRegistry>();

        let registry = OperationRegistry::new();
        std::thread::scope(|s| {
            for i in 0..4 {
                let registry = &registry;
                s.spawn(move || {
                    let n = i as f64;
                    assert_eq!(registry.lookup("*").unwrap().apply(n, 2.0), n * 2.0);
                });
            }
        });
    }
}

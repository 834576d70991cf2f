//! 结果格式化

/// 按固定小数位格式化结果
///
/// 非有限值输出为 `Infinity`、`-Infinity`、`NaN`。
pub fn format_result(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{:.*}", precision, value)
    }
}

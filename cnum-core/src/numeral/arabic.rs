//! 阿拉伯数字解析与输出
//!
//! 解析字符串开头的十进制数（行为与 JavaScript 的 parseFloat 一致：
//! 跳过前导空白，可带符号、小数和指数），以及把结果格式化为十进制字符串。

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("valid leading float regex")
});

/// 解析字符串开头的十进制数
///
/// 返回数值和（包括前导空白在内）消耗的字节数；开头不是数字时返回 `None`。
pub fn parse_leading_float(text: &str) -> Option<(f64, usize)> {
    let body = text.trim_start();
    let skipped = text.len() - body.len();

    let m = LEADING_FLOAT_RE.find(body)?;
    let value = m.as_str().parse::<f64>().ok()?;

    Some((value, skipped + m.end()))
}

/// 整个字符串（去掉首尾空白后）是否为一个普通的阿拉伯数字
pub fn parse_plain_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    match parse_leading_float(trimmed) {
        Some((value, consumed)) if consumed == trimmed.len() => Some(value),
        _ => None,
    }
}

/// 格式化转换结果：整数不带小数点，小数使用最短的往返表示
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

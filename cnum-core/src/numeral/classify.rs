//! 字符分类
//!
//! 判断单个字符是否为阿拉伯数字、中文数字、数字内分隔符或大单位。
//! 字符串版本要求参数恰好是一个字符，否则返回 `InvalidInput`。

use crate::error::{NumeralError, NumeralResult};
use crate::numeral::table::{self, NumeralValue};

/// 数字内部允许出现的分隔符（如 6,000、6 000、3.5）
const SEPARATORS: &[char] = &[',', '.', ' '];

/// 是否为阿拉伯数字（半角 0-9 或全角 ０-９）
pub fn is_arabic_digit(ch: char) -> bool {
    ch.is_ascii_digit() || ('０'..='９').contains(&ch)
}

/// 是否为数字表中的中文数字字符（数字或乘数）
pub fn is_chinese_numeral(ch: char) -> bool {
    table::lookup(ch).is_some()
}

/// 是否为数字内部的分隔符（逗号、句点、空格）
pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(&ch)
}

/// 是否为大单位（萬、万、億、亿）
pub fn is_large_unit(ch: char) -> bool {
    table::lookup(ch).map_or(false, NumeralValue::is_large_unit)
}

/// 是否可能属于一个数字（数字本身，或逗号、句点、空白）
pub fn is_numeral_or_separator(ch: char) -> bool {
    ch.is_ascii_digit() || ch == ',' || ch == '.' || ch.is_whitespace() || is_chinese_numeral(ch)
}

/// 去掉数字中的逗号和空白（保留句点作为小数点），如 "4,000,000"、"4 000 000"
pub fn strip_separators(text: &str) -> String {
    text.chars()
        .filter(|&ch| ch != ',' && !ch.is_whitespace())
        .collect()
}

/// 检查参数恰好为一个字符
fn single_char(function: &'static str, text: &str) -> NumeralResult<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(NumeralError::InvalidInput {
            function,
            length: text.chars().count(),
        }),
    }
}

/// 判断字符是否为阿拉伯数字
pub fn is_arabic_number(character: &str) -> NumeralResult<bool> {
    single_char("is_arabic_number", character).map(is_arabic_digit)
}

/// 判断字符是否为中文数字（包括全角数字 ０-９）
pub fn is_chinese_number(character: &str) -> NumeralResult<bool> {
    single_char("is_chinese_number", character).map(is_chinese_numeral)
}

/// 判断字符是否为逗号、句点或空格
pub fn is_comma_dot_or_space(character: &str) -> NumeralResult<bool> {
    single_char("is_comma_dot_or_space", character).map(is_separator)
}

/// 判断字符是数字的一部分，还是无关文本
pub fn is_number_or_space(character: &str) -> NumeralResult<bool> {
    single_char("is_number_or_space", character).map(is_numeral_or_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_arabic_number() {
        assert!(is_arabic_number("0").unwrap());
        assert!(is_arabic_number("9").unwrap());
        assert!(is_arabic_number("５").unwrap());
        assert!(!is_arabic_number("五").unwrap());
        assert!(!is_arabic_number("a").unwrap());
    }

    #[test]
    fn test_is_chinese_number() {
        assert!(is_chinese_number("五").unwrap());
        assert!(is_chinese_number("萬").unwrap());
        assert!(is_chinese_number("５").unwrap());
        assert!(!is_chinese_number("5").unwrap());
        assert!(!is_chinese_number("參").unwrap());
        assert!(!is_chinese_number("龍").unwrap());
    }

    #[test]
    fn test_is_comma_dot_or_space() {
        assert!(is_comma_dot_or_space(",").unwrap());
        assert!(is_comma_dot_or_space(".").unwrap());
        assert!(is_comma_dot_or_space(" ").unwrap());
        assert!(!is_comma_dot_or_space("，").unwrap());
        assert!(!is_comma_dot_or_space("1").unwrap());
    }

    #[test]
    fn test_is_number_or_space() {
        assert!(is_number_or_space("7").unwrap());
        assert!(is_number_or_space("\t").unwrap());
        assert!(is_number_or_space("億").unwrap());
        assert!(!is_number_or_space("x").unwrap());
    }

    #[test]
    fn test_invalid_input() {
        for result in [
            is_arabic_number(""),
            is_chinese_number("一二"),
            is_comma_dot_or_space(", "),
            is_number_or_space("abc"),
        ] {
            assert!(matches!(result, Err(NumeralError::InvalidInput { .. })));
        }

        match is_chinese_number("一二") {
            Err(NumeralError::InvalidInput { function, length }) => {
                assert_eq!(function, "is_chinese_number");
                assert_eq!(length, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("4,000,000"), "4000000");
        assert_eq!(strip_separators("4 000 000"), "4000000");
        assert_eq!(strip_separators("3.5 萬"), "3.5萬");
    }

    #[test]
    fn test_is_large_unit() {
        assert!(is_large_unit('萬'));
        assert!(is_large_unit('万'));
        assert!(is_large_unit('億'));
        assert!(is_large_unit('亿'));
        assert!(!is_large_unit('千'));
        assert!(!is_large_unit('8'));
    }
}

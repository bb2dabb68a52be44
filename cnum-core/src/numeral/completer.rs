//! 单位补全
//!
//! 把省略了单位的数字补全，例如 "8千3" → "8千3百"、"萬五" → "萬五千"。
//! 只看当前字符及其前后各一个字符，不递归。

use crate::numeral::table::{self, NumeralValue};

/// 单位补全器
pub struct UnitCompleter;

impl UnitCompleter {
    /// 补全省略的单位
    ///
    /// 当前字符为 1-9 的数字、前一个字符是 百/千/萬（不含 十），
    /// 并且当前字符位于末尾或后一个字符的量级更大时，
    /// 在当前字符后插入比前一个单位小一级的单位。
    ///
    /// # 示例
    /// ```
    /// # use cnum_core::numeral::UnitCompleter;
    /// assert_eq!(UnitCompleter::complete("8千3"), "8千3百");
    /// assert_eq!(UnitCompleter::complete("8千3萬"), "8千3百萬");
    /// assert_eq!(UnitCompleter::complete("十五"), "十五");
    /// ```
    pub fn complete(text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut result = String::with_capacity(text.len() + 3);

        for (i, &ch) in chars.iter().enumerate() {
            result.push(ch);

            // 第一个字符前面没有单位可参考
            if i == 0 {
                continue;
            }

            if let Some(unit) = Self::missing_unit(ch, chars[i - 1], chars.get(i + 1).copied()) {
                tracing::trace!("单位补全: {}{} 后插入 {}", chars[i - 1], ch, unit);
                result.push(unit);
            }
        }

        result
    }

    /// 计算应在 `current` 之后插入的单位
    fn missing_unit(current: char, previous: char, next: Option<char>) -> Option<char> {
        let digit = Self::digit_value(current)?;
        if !(1..=9).contains(&digit) {
            return None;
        }

        let previous_unit = Self::unit_magnitude(previous)?;
        // 十五 之类的数字不需要补全
        if previous_unit == 10 {
            return None;
        }

        let next_is_larger = match next {
            None => true,
            Some(next) => previous_unit < Self::table_magnitude(next),
        };
        if !next_is_larger {
            return None;
        }

        table::unit_for_magnitude(previous_unit / 10)
    }

    /// 字符的数字值（半角阿拉伯数字或数字表中的数字）
    fn digit_value(ch: char) -> Option<u32> {
        if let Some(d) = ch.to_digit(10) {
            return Some(d);
        }
        match table::lookup(ch) {
            Some(NumeralValue::Digit(d)) => Some(u32::from(d)),
            _ => None,
        }
    }

    /// 可用于补全的单位量级（十、百、千、萬）
    fn unit_magnitude(ch: char) -> Option<u64> {
        match table::lookup(ch) {
            Some(NumeralValue::Multiplier(m)) if table::unit_for_magnitude(m).is_some() => Some(m),
            _ => None,
        }
    }

    /// 数字表中的取值，不在表中时为 0
    fn table_magnitude(ch: char) -> u64 {
        match table::lookup(ch) {
            Some(NumeralValue::Digit(d)) => u64::from(d),
            Some(NumeralValue::Multiplier(m)) => m,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_digit_after_thousand() {
        assert_eq!(UnitCompleter::complete("8千3"), "8千3百");
        assert_eq!(UnitCompleter::complete("八千三"), "八千三百");
    }

    #[test]
    fn test_digit_before_larger_unit() {
        assert_eq!(UnitCompleter::complete("8千3萬"), "8千3百萬");
    }

    #[test]
    fn test_explicit_unit_is_left_alone() {
        assert_eq!(UnitCompleter::complete("8千4百萬"), "8千4百萬");
        assert_eq!(UnitCompleter::complete("兩百四十五"), "兩百四十五");
    }

    #[test]
    fn test_after_man() {
        assert_eq!(UnitCompleter::complete("萬五"), "萬五千");
        assert_eq!(UnitCompleter::complete("二萬五"), "二萬五千");
        assert_eq!(UnitCompleter::complete("3萬5"), "3萬5千");
    }

    #[test]
    fn test_after_ten_is_not_completed() {
        assert_eq!(UnitCompleter::complete("十五"), "十五");
        assert_eq!(UnitCompleter::complete("二十二"), "二十二");
    }

    #[test]
    fn test_zero_and_first_character() {
        assert_eq!(UnitCompleter::complete("貳佰零伍"), "貳佰零伍");
        assert_eq!(UnitCompleter::complete("五"), "五");
        assert_eq!(UnitCompleter::complete(""), "");
    }

    #[test]
    fn test_yi_is_not_a_completion_unit() {
        assert_eq!(UnitCompleter::complete("2億5"), "2億5");
    }

    #[test]
    fn test_non_numeral_follower() {
        assert_eq!(UnitCompleter::complete("8千3元"), "8千3元");
    }
}

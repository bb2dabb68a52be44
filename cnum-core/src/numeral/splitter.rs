//! 大单位（萬/億）边界拆分
//!
//! 找到最后一个大单位，把它前面的部分递归转换为阿拉伯数字，
//! 例如 "一百六十八萬五千" → "168萬五千"，然后把开头的阿拉伯数字
//! 提取为 leading number，留给 [`PairAccumulator`](super::PairAccumulator) 在最后乘回去。

use crate::error::NumeralResult;
use crate::numeral::arabic;
use crate::numeral::chinese_number::ChineseNumberConverter;
use crate::numeral::classify;

/// 前缀递归转换的最大层数
///
/// 正常的数字最多只有两三个大单位，超过后剩余部分直接交给累加器
pub const MAX_SPLIT_DEPTH: usize = 8;

/// 拆分结果
#[derive(Debug, Clone, PartialEq)]
pub struct ManSplit {
    /// 去掉开头阿拉伯数字后剩下的字符串
    pub text: String,
    /// 开头的阿拉伯数字（如 "83萬" 中的 83，"3.5萬" 中的 3.5）
    pub leading_number: Option<f64>,
}

impl ManSplit {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            leading_number: None,
        }
    }
}

/// 大单位边界拆分器
pub struct ManBoundarySplitter;

impl ManBoundarySplitter {
    /// 在最后一个大单位处拆分
    ///
    /// 大单位前为空时按 1 处理（"萬五" 即 "一萬五千"）。
    /// 没有大单位时原样返回。
    pub fn split(text: &str) -> NumeralResult<ManSplit> {
        Self::split_at_depth(text, 0)
    }

    pub(crate) fn split_at_depth(text: &str, depth: usize) -> NumeralResult<ManSplit> {
        if depth >= MAX_SPLIT_DEPTH {
            tracing::debug!("大单位拆分层数超过 {}，不再拆分", MAX_SPLIT_DEPTH);
            return Ok(ManSplit::unchanged(text));
        }

        let Some(position) = Self::last_large_unit(text) else {
            return Ok(ManSplit::unchanged(text));
        };

        let prefix = &text[..position];
        let prefix_value = if prefix.trim().is_empty() {
            1.0
        } else {
            ChineseNumberConverter::to_integer_at_depth(prefix, depth + 1)?
        };

        // 溢出为无穷大时无法再格式化为数字串
        if !prefix_value.is_finite() {
            return Ok(ManSplit {
                text: text[position..].to_string(),
                leading_number: Some(prefix_value),
            });
        }

        let rewritten = format!("{}{}", arabic::format_value(prefix_value), &text[position..]);
        tracing::debug!("大单位拆分: {} → {}", text, rewritten);

        Ok(match arabic::parse_leading_float(&rewritten) {
            Some((value, consumed)) => ManSplit {
                text: rewritten[consumed..].to_string(),
                leading_number: Some(value),
            },
            None => ManSplit {
                text: rewritten,
                leading_number: None,
            },
        })
    }

    /// 从末尾向前查找最后一个大单位的字节位置
    ///
    /// 末尾的阿拉伯数字不会提前结束查找，"1000萬800" 仍在 萬 处拆分。
    fn last_large_unit(text: &str) -> Option<usize> {
        text.char_indices()
            .rev()
            .find(|&(_, ch)| classify::is_large_unit(ch))
            .map(|(pos, _)| pos)
    }
}

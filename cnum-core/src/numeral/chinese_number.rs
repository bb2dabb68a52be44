//! 中文数字转换模块
//!
//! 将单个中文数字表达转换为阿拉伯数字
//!
//! 支持大写数字（壹贰叁…）、全角数字（０-９）、口语数字（两、仨、幺、洞）
//! 以及 萬/億 大单位，例如 "一百六十八萬五千兩百四十五"、"3.5萬"、"2千萬"。

use crate::error::{NumeralError, NumeralResult};
use crate::numeral::accumulator::PairAccumulator;
use crate::numeral::arabic;
use crate::numeral::classify;
use crate::numeral::completer::UnitCompleter;
use crate::numeral::engine::NumeralEngine;
use crate::numeral::splitter::ManBoundarySplitter;

/// 中文数字转换器
pub struct ChineseNumberConverter;

impl ChineseNumberConverter {
    /// 将中文数字字符串转换为数值
    ///
    /// # 参数
    /// - `source`: 数字文本（例如："一千萬"、"3萬5"、"345"）
    ///
    /// # 返回
    /// - `Ok(f64)`: 转换结果；不含任何数字时为 0
    /// - `Err(EmptyInput)`: 输入为空字符串
    ///
    /// # 示例
    /// ```
    /// # use cnum_core::numeral::ChineseNumberConverter;
    /// assert_eq!(ChineseNumberConverter::to_integer("一千萬").unwrap(), 10_000_000.0);
    /// assert_eq!(ChineseNumberConverter::to_integer("萬五").unwrap(), 15_000.0);
    /// ```
    pub fn to_integer(source: &str) -> NumeralResult<f64> {
        Self::to_integer_at_depth(source, 0)
    }

    /// `depth` 为大单位拆分的递归层数，超过上限后不再拆分
    pub(crate) fn to_integer_at_depth(source: &str, depth: usize) -> NumeralResult<f64> {
        if source.is_empty() {
            return Err(NumeralError::EmptyInput);
        }

        // 去掉逗号和空白，"4,000,000"、"4 000 000" 都视为 4000000
        let stripped = classify::strip_separators(source);

        // 纯阿拉伯数字，直接返回
        if let Some(value) = arabic::parse_plain_number(&stripped) {
            return Ok(value);
        }

        // 不含中文数字（如 "345 abc"），按阿拉伯数字尽量解析
        if !Self::contains_chinese_number(&stripped) {
            let value = arabic::parse_leading_float(&stripped).map_or(0.0, |(value, _)| value);
            tracing::trace!("无中文数字: {:?} → {}", source, value);
            return Ok(value);
        }

        let completed = UnitCompleter::complete(&stripped);
        let split = ManBoundarySplitter::split_at_depth(&completed, depth)?;
        let value = PairAccumulator::accumulate(&split.text, split.leading_number);

        tracing::debug!("中文数字转换: {:?} → {}", source, value);
        Ok(value)
    }

    /// 转换为十进制字符串
    ///
    /// ```
    /// # use cnum_core::numeral::ChineseNumberConverter;
    /// assert_eq!(ChineseNumberConverter::convert("貳佰零伍").unwrap(), "205");
    /// ```
    pub fn convert(source: &str) -> NumeralResult<String> {
        Self::to_integer(source).map(arabic::format_value)
    }

    /// 文本中是否含有中文数字字符
    pub fn contains_chinese_number(text: &str) -> bool {
        text.chars().any(classify::is_chinese_numeral)
    }

    /// 文本是否完全由中文数字字符组成
    pub fn is_chinese_number(text: &str) -> bool {
        !text.is_empty() && text.chars().all(classify::is_chinese_numeral)
    }
}

/// 一个待转换的数字字符串
///
/// ```
/// # use cnum_core::ChineseNumber;
/// let number = ChineseNumber::new("***貳佰零伍元***");
/// assert_eq!(number.to_integer().unwrap(), 205.0);
/// assert_eq!(number.to_arabic_string(1), "***205元***");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChineseNumber {
    source: String,
}

impl ChineseNumber {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// 把整个字符串当作一个数字转换
    pub fn to_integer(&self) -> NumeralResult<f64> {
        ChineseNumberConverter::to_integer(&self.source)
    }

    /// 把字符串中的每个数字替换为阿拉伯数字
    ///
    /// `minimum_characters` 为数字的最少字符数，设为 2 可避免把 "九龍站" 转成 "9龍站"。
    pub fn to_arabic_string(&self, minimum_characters: usize) -> String {
        NumeralEngine::with_minimum_characters(minimum_characters)
            .process(&self.source)
            .text
    }
}

impl From<&str> for ChineseNumber {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

/// 转换单个数字表达，见 [`ChineseNumberConverter::to_integer`]
pub fn to_integer(source: &str) -> NumeralResult<f64> {
    ChineseNumberConverter::to_integer(source)
}

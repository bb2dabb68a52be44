//! Numeral Engine - 文本级转换主管道
//!
//! 找出文本中的所有数字片段，逐个转换为阿拉伯数字后拼回原文，
//! 并记录每处变更以便回滚。

use std::ops::Range;

use crate::config::ConverterConfig;
use crate::numeral::arabic;
use crate::numeral::chinese_number::ChineseNumberConverter;
use crate::numeral::matcher::{NumeralSpan, SpanMatcher};

/// 变更记录（用于回滚）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralChange {
    /// 原始文本中的范围
    pub original_span: Range<usize>,
    /// 转换后文本中的范围
    pub normalized_span: Range<usize>,
    /// 原始文本
    pub original_text: String,
    /// 转换后的文本
    pub normalized_text: String,
}

/// 转换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// 转换后的文本
    pub text: String,
    /// 变更记录列表
    pub changes: Vec<NumeralChange>,
}

/// 数字转换引擎
#[derive(Debug, Clone, Default)]
pub struct NumeralEngine {
    config: ConverterConfig,
}

impl NumeralEngine {
    /// 创建新的引擎
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// 指定最少字符数创建引擎
    pub fn with_minimum_characters(minimum_characters: usize) -> Self {
        Self::new(ConverterConfig { minimum_characters })
    }

    /// 处理文本
    pub fn process(&self, text: &str) -> ConversionResult {
        let mut output = String::with_capacity(text.len());
        let mut changes = Vec::new();
        let mut last_end = 0;

        for span in self.find_numerals(text) {
            output.push_str(&text[last_end..span.span.start]);
            last_end = span.span.end;

            let Some(normalized) = Self::convert_span(&span) else {
                output.push_str(&span.content);
                continue;
            };

            let start = output.len();
            output.push_str(&normalized);

            if normalized != span.content {
                changes.push(NumeralChange {
                    original_span: span.span.clone(),
                    normalized_span: start..output.len(),
                    original_text: span.content,
                    normalized_text: normalized,
                });
            }
        }
        output.push_str(&text[last_end..]);

        if !changes.is_empty() {
            tracing::debug!("数字转换: {} 处变更", changes.len());
        }

        ConversionResult {
            text: output,
            changes,
        }
    }

    /// 找出满足最少字符数的数字片段
    pub fn find_numerals(&self, text: &str) -> Vec<NumeralSpan> {
        let minimum = self.minimum_characters();
        SpanMatcher::find_spans(text)
            .into_iter()
            .filter(|span| span.char_count() >= minimum)
            .collect()
    }

    /// 按顺序提取文本中所有数字的值
    pub fn extract_numbers(&self, text: &str) -> Vec<f64> {
        self.find_numerals(text)
            .iter()
            .filter_map(|span| ChineseNumberConverter::to_integer(&span.stripped()).ok())
            .collect()
    }

    fn convert_span(span: &NumeralSpan) -> Option<String> {
        match ChineseNumberConverter::to_integer(&span.stripped()) {
            Ok(value) if value.is_finite() => Some(arabic::format_value(value)),
            Ok(value) => {
                tracing::warn!("数字片段超出范围 {:?}: {}", span.content, value);
                None
            }
            Err(e) => {
                tracing::warn!("数字片段转换失败 {:?}: {}", span.content, e);
                None
            }
        }
    }

    /// 最少字符数（0 按 1 处理）
    pub fn minimum_characters(&self) -> usize {
        self.config.minimum_characters.max(1)
    }

    /// 设置最少字符数
    pub fn set_minimum_characters(&mut self, minimum_characters: usize) {
        self.config.minimum_characters = minimum_characters;
    }

    /// 获取当前配置
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// 回滚转换结果
    ///
    /// 从后往前把每处变更替换回原文，前面的偏移量不受影响
    pub fn rollback(result: &ConversionResult) -> String {
        let mut text = result.text.clone();

        for change in result.changes.iter().rev() {
            text.replace_range(change.normalized_span.clone(), &change.original_text);
        }

        text
    }
}

/// 把文本中的所有数字替换为阿拉伯数字
///
/// ```
/// # use cnum_core::to_arabic_string;
/// assert_eq!(to_arabic_string("***貳佰零伍元***", 1), "***205元***");
/// assert_eq!(to_arabic_string("九龍站", 2), "九龍站");
/// ```
pub fn to_arabic_string(source: &str, minimum_characters: usize) -> String {
    NumeralEngine::with_minimum_characters(minimum_characters)
        .process(source)
        .text
}

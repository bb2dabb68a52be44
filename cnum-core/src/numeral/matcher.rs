//! 数字片段匹配
//!
//! 在任意文本中找出所有数字片段（Span），为后续替换做准备。
//!
//! 一个片段由两部分组成：
//! - 可选的阿拉伯数字串，数字组之间最多夹一个分隔符（"4,000,000"、"4 000 000"、"34.5"）
//! - 紧随其后的一个或多个中文数字或阿拉伯数字
//!
//! 片段不以 '0' 开头，例如 "sample0123" 只匹配 "123"。

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::numeral::classify;
use crate::numeral::table::NUMERAL_CHARACTERS;

static NUMBER_IN_STRING_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?:[0-9]+(?:[.,\s][0-9]+)*)?[0-9{}]+",
        regex::escape(NUMERAL_CHARACTERS)
    );
    Regex::new(&pattern).expect("valid numeral span regex")
});

/// 文本中的一个数字片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralSpan {
    /// 在原始文本中的字节范围
    pub span: Range<usize>,
    /// 片段原文
    pub content: String,
}

impl NumeralSpan {
    pub fn new(span: Range<usize>, content: String) -> Self {
        Self { span, content }
    }

    /// 去掉逗号和空白后的片段，用于转换
    pub fn stripped(&self) -> String {
        classify::strip_separators(&self.content)
    }

    /// 去掉分隔符后的字符数
    pub fn char_count(&self) -> usize {
        self.stripped().chars().count()
    }
}

/// 数字片段匹配器
pub struct SpanMatcher;

impl SpanMatcher {
    /// 找出文本中所有的数字片段（按出现顺序，互不重叠）
    pub fn find_spans(text: &str) -> Vec<NumeralSpan> {
        let mut spans = Vec::new();
        let mut start = 0;

        while let Some(m) = NUMBER_IN_STRING_RE.find_at(text, start) {
            // 不从 '0' 开始匹配，跳过这个 '0' 后继续
            if m.as_str().starts_with('0') {
                start = m.start() + 1;
                continue;
            }

            spans.push(NumeralSpan::new(m.range(), m.as_str().to_string()));
            start = m.end();
        }

        tracing::trace!("找到 {} 个数字片段", spans.len());
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(text: &str) -> Vec<String> {
        SpanMatcher::find_spans(text)
            .into_iter()
            .map(|span| span.content)
            .collect()
    }

    #[test]
    fn test_chinese_span() {
        let spans = SpanMatcher::find_spans("***貳佰零伍元***");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "貳佰零伍");
        assert_eq!(spans[0].span, 3..15);
    }

    #[test]
    fn test_grouped_arabic() {
        assert_eq!(contents("4 000 000 RMB"), vec!["4 000 000"]);
        assert_eq!(contents("4,000,000"), vec!["4,000,000"]);
        assert_eq!(contents("3, 5 and 4"), vec!["3", "5", "4"]);
    }

    #[test]
    fn test_arabic_followed_by_chinese() {
        assert_eq!(
            contents("這款車的價格從34.5萬港幣到55.4萬港幣。"),
            vec!["34.5萬", "55.4萬"]
        );
        // 分隔符后必须是阿拉伯数字
        assert_eq!(contents("345 萬"), vec!["345", "萬"]);
    }

    #[test]
    fn test_single_digit_groups_split() {
        // 最左优先匹配：最后一组只有一位时无法留给后半部分，只能逐个匹配
        assert_eq!(contents("1.2.3"), vec!["1", "2", "3"]);
        assert_eq!(contents("3.5"), vec!["3", "5"]);
        assert_eq!(contents("12.34"), vec!["12.34"]);
    }

    #[test]
    fn test_arabic_after_chinese_is_one_span() {
        assert_eq!(contents("1000萬800呎"), vec!["1000萬800"]);
    }

    #[test]
    fn test_leading_zeros_are_skipped() {
        assert_eq!(contents("sample0123@example.com"), vec!["123"]);
        assert_eq!(contents("007"), vec!["7"]);
        assert_eq!(contents("000"), Vec::<String>::new());
    }

    #[test]
    fn test_no_numbers() {
        assert!(SpanMatcher::find_spans("haha no numbers here").is_empty());
        assert!(SpanMatcher::find_spans("參").is_empty());
        assert!(SpanMatcher::find_spans("").is_empty());
    }

    #[test]
    fn test_span_char_count() {
        let span = NumeralSpan::new(0..9, "4 000 000".to_string());
        assert_eq!(span.stripped(), "4000000");
        assert_eq!(span.char_count(), 7);
    }
}

//! 中文数字转换模块
//!
//! 字符表 → 字符分类 → 单位补全 → 大单位拆分 → 配对累加，
//! 以及在任意文本中查找并替换数字片段

pub mod table;
pub mod classify;
pub mod arabic;
pub mod completer;
pub mod splitter;
pub mod accumulator;
pub mod chinese_number;
pub mod matcher;
pub mod engine;

// 导出核心类型
pub use table::NumeralValue;
pub use classify::{is_arabic_number, is_chinese_number, is_comma_dot_or_space, is_number_or_space};
pub use completer::UnitCompleter;
pub use splitter::{ManBoundarySplitter, ManSplit};
pub use accumulator::{ConversionState, Pair, PairAccumulator};
pub use chinese_number::{to_integer, ChineseNumber, ChineseNumberConverter};
pub use matcher::{NumeralSpan, SpanMatcher};
pub use engine::{to_arabic_string, ConversionResult, NumeralChange, NumeralEngine};

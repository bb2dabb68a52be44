//! cnum Core
//!
//! 中文数字（大写、全角、萬/億 大单位）到阿拉伯数字的转换引擎

#![warn(rust_2018_idioms)]

pub mod numeral;
pub mod config;
pub mod error;

// Re-export key types
pub use error::{NumeralError, NumeralResult};
pub use config::ConverterConfig;
pub use numeral::{
    is_arabic_number, is_chinese_number, is_comma_dot_or_space, is_number_or_space,
    to_arabic_string, to_integer, ChineseNumber, ConversionResult, NumeralChange, NumeralEngine,
    NumeralSpan,
};

/// 初始化日志系统
///
/// 默认静默；使用 --features debug-logs 编译后按 CNUM_LOG 过滤（默认 warn）
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("CNUM_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // try_init() 在已初始化时返回错误，忽略即可
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}

//! 数字转换性能测试
//!
//! 运行：cargo run --release --example numeral_performance

use std::time::Instant;

use cnum_core::numeral::{ChineseNumberConverter, NumeralEngine};

fn main() {
    println!("=== cnum 性能测试 ===\n");

    let numbers = vec![
        "一百六十八萬五千兩百四十五",
        "8千3萬",
        "3.5萬",
        "二〇一二",
        "345",
    ];
    let iterations = 10_000u32;

    println!("【单个数字 ({} 次)】\n", iterations);
    for (i, text) in numbers.iter().enumerate() {
        let start = Instant::now();
        for _ in 0..iterations {
            let _ = ChineseNumberConverter::to_integer(text);
        }
        let avg = start.elapsed() / iterations;
        println!("#{} \"{}\" 平均: {:.3}μs", i + 1, text, avg.as_secs_f64() * 1e6);
    }

    let engine = NumeralEngine::default();
    let paragraph = "這款車的價格從34.5萬港幣到55.4萬港幣。".repeat(50);

    println!("\n【文本转换 ({} 字符, {} 次)】\n", paragraph.chars().count(), iterations / 10);
    let start = Instant::now();
    for _ in 0..iterations / 10 {
        let _ = engine.process(&paragraph);
    }
    let total = start.elapsed();
    println!("总时间: {:.3}ms", total.as_secs_f64() * 1000.0);
    println!("平均时间: {:.3}μs", (total / (iterations / 10)).as_secs_f64() * 1e6);

    println!("\n=== 性能测试完成 ===");
}

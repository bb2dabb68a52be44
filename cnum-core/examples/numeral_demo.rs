//! 数字转换演示程序
//!
//! 演示单个数字转换和文本转换（含变更记录与回滚）
//!
//! 运行：cargo run --example numeral_demo --features debug-logs

use cnum_core::numeral::{ChineseNumberConverter, NumeralEngine};
use cnum_core::ConverterConfig;

fn main() {
    cnum_core::init_logging();

    println!("=== cnum 数字转换演示 ===\n");

    // 单个数字
    let numbers = vec![
        ("兩百四十五", "245"),
        ("一百六十八萬五千兩百四十五", "1685245"),
        ("萬五", "15000"),
        ("3.5萬", "35000"),
        ("8千3萬", "83000000"),
        ("二〇一二", "2012"),
        ("貳佰零伍", "205"),
    ];

    println!("【单个数字】\n");
    for (i, (input, expected)) in numbers.iter().enumerate() {
        match ChineseNumberConverter::convert(input) {
            Ok(output) => {
                let status = if output.as_str() == *expected { "✓" } else { "✗" };
                println!("#{} {} \"{}\" → {} (期望 {})", i + 1, status, input, output, expected);
            }
            Err(e) => println!("#{} ✗ \"{}\" 转换失败: {}", i + 1, input, e),
        }
    }

    // 文本（使用 ~/.config/cnum/config.toml，不存在时为默认配置）
    let config = match ConverterConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("加载配置失败，使用默认配置: {}", e);
            ConverterConfig::default()
        }
    };
    println!("\n配置文件: {:?}", ConverterConfig::config_path());
    let engine = NumeralEngine::new(config);
    let sentences = vec![
        "***貳佰零伍元***",
        "這款車的價格從34.5萬港幣到55.4萬港幣。",
        "三到四百萬",
        "4 000 000 RMB",
        "sample0123@example.com",
    ];

    println!("\n【文本转换】\n");
    for (i, text) in sentences.iter().enumerate() {
        let result = engine.process(text);
        println!("#{} 原始: \"{}\"", i + 1, text);
        println!("   输出: \"{}\"", result.text);
        println!("   变更: {} 处", result.changes.len());
        for change in &result.changes {
            println!("     - \"{}\" → \"{}\"", change.original_text, change.normalized_text);
        }
    }

    // 最少字符数
    println!("\n【最少字符数】\n");
    let text = "九龍站有二十個出口";
    for minimum in [1, 2] {
        let engine = NumeralEngine::with_minimum_characters(minimum);
        println!("minimum_characters = {}: \"{}\"", minimum, engine.process(text).text);
    }

    // 回滚
    println!("\n【回滚】\n");
    let result = engine.process("三到四百萬");
    println!("规范化后: \"{}\"", result.text);
    println!("回滚结果: \"{}\"", NumeralEngine::rollback(&result));

    println!("\n=== 演示完成 ===");
}

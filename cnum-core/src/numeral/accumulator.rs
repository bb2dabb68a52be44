//! 数字/乘数配对累加
//!
//! 从左到右扫描（已补全单位、已拆分大单位的）字符串，
//! 把数字和后面的乘数组成 `Pair`，最后求 Σ magnitude × multiplier。

use crate::numeral::table::{self, NumeralValue};

/// 一个待求和的项：magnitude × multiplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    pub magnitude: f64,
    pub multiplier: f64,
}

impl Pair {
    pub fn new(magnitude: f64, multiplier: f64) -> Self {
        Self {
            magnitude,
            multiplier,
        }
    }

    pub fn value(&self) -> f64 {
        self.magnitude * self.multiplier
    }
}

/// 单次转换的扫描状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionState {
    /// 已完成的项
    pairs: Vec<Pair>,
    /// 正在拼接的数字（逐位拼接，"二〇一二" → 2012）
    magnitude: Option<f64>,
    /// 大单位拆分时提取的开头数字，只乘一次
    leading_number: Option<f64>,
}

impl ConversionState {
    pub fn new(leading_number: Option<f64>) -> Self {
        Self {
            leading_number,
            ..Self::default()
        }
    }

    /// 处理第 `index` 个字符，返回新状态
    pub fn step(mut self, index: usize, ch: char) -> Self {
        if let Some(digit) = ch.to_digit(10) {
            self.push_digit(digit);
            return self;
        }

        match table::lookup(ch) {
            Some(NumeralValue::Digit(digit)) => self.push_digit(u32::from(digit)),
            Some(value @ NumeralValue::Multiplier(multiplier)) => {
                self.apply_multiplier(index, value, multiplier as f64)
            }
            // 非数字字符
            None => {}
        }

        self
    }

    fn push_digit(&mut self, digit: u32) {
        let digit = f64::from(digit);
        self.magnitude = Some(match self.magnitude {
            Some(current) => current * 10.0 + digit,
            None => digit,
        });
    }

    fn apply_multiplier(&mut self, index: usize, value: NumeralValue, multiplier: f64) {
        // 第一个字符就是乘数，说明前面的数字已提取为 leading number（如 "2千萬"）
        if index == 0 {
            self.pairs.push(Pair::new(multiplier, 1.0));
            return;
        }

        if let Some(magnitude) = self.magnitude.take() {
            self.pairs.push(Pair::new(magnitude, multiplier));
        } else if !value.is_large_unit() {
            // 十二 中的 十
            self.pairs.push(Pair::new(1.0, multiplier));
        } else {
            // 一千萬 中的 萬：前面累计的全部乘以大单位
            let mut total = Self::sum(&self.pairs);
            if let Some(leading) = self.leading_number.take() {
                total *= leading;
            }
            self.pairs = vec![Pair::new(total, multiplier)];
        }
    }

    fn sum(pairs: &[Pair]) -> f64 {
        pairs.iter().fold(0.0, |acc, pair| acc + pair.value())
    }

    /// 结束扫描并求和
    pub fn finish(mut self) -> f64 {
        // 以 1-9 结尾，如 二十二 的最后一个 二
        if let Some(magnitude) = self.magnitude.take() {
            self.pairs.push(Pair::new(magnitude, 1.0));
        }

        if let (Some(leading), Some(first)) = (self.leading_number.take(), self.pairs.first_mut()) {
            first.magnitude *= leading;
        }

        let result = Self::sum(&self.pairs);
        tracing::trace!("配对结果: {:?} = {}", self.pairs, result);
        result
    }
}

/// 配对累加器
pub struct PairAccumulator;

impl PairAccumulator {
    /// 扫描整个字符串并求值
    pub fn accumulate(text: &str, leading_number: Option<f64>) -> f64 {
        text.chars()
            .enumerate()
            .fold(ConversionState::new(leading_number), |state, (index, ch)| {
                state.step(index, ch)
            })
            .finish()
    }
}

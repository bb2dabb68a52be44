//! 数字字符表
//!
//! 每个可识别的字符对应一个数字值（0-9）或一个乘数（十、百、千、萬、億……）
//!
//! 注意：以下字符故意不收录
//! - "參"：旧式大写的 3，但在普通文本中多为常用字（参加、参考），容易误转
//! - "呀"：口语中偶尔代替"十"，但更常见的是句末语气词

/// 单个数字字符的取值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralValue {
    /// 基础数字 0-9
    Digit(u8),
    /// 乘数（10、20、30、40、100、200、1000、10000、100000000）
    Multiplier(u64),
}

impl NumeralValue {
    /// 大单位（萬/億）的最小量级
    pub const LARGE_UNIT_THRESHOLD: u64 = 10_000;

    /// 是否为大单位乘数
    pub fn is_large_unit(self) -> bool {
        matches!(self, NumeralValue::Multiplier(m) if m >= Self::LARGE_UNIT_THRESHOLD)
    }
}

/// 所有中文数字字符（包括全角阿拉伯数字）
pub const NUMERAL_CHARACTERS: &str = "零〇０洞壹一幺１貳贰二两兩倆俩２叁三仨３肆四４伍五５陸陆六６柒七拐７捌八８玖九勾９拾十廿卅卌佰百皕仟千萬万億亿";

/// 查询字符对应的数值
pub fn lookup(ch: char) -> Option<NumeralValue> {
    use NumeralValue::{Digit, Multiplier};

    let value = match ch {
        '零' | '〇' | '０' | '洞' => Digit(0),
        '壹' | '一' | '幺' | '１' => Digit(1),
        '貳' | '贰' | '二' | '两' | '兩' | '倆' | '俩' | '２' => Digit(2),
        '叁' | '三' | '仨' | '３' => Digit(3),
        '肆' | '四' | '４' => Digit(4),
        '伍' | '五' | '５' => Digit(5),
        '陸' | '陆' | '六' | '６' => Digit(6),
        '柒' | '七' | '拐' | '７' => Digit(7),
        '捌' | '八' | '８' => Digit(8),
        '玖' | '九' | '勾' | '９' => Digit(9),

        '拾' | '十' => Multiplier(10),
        '廿' => Multiplier(20),
        '卅' => Multiplier(30),
        '卌' => Multiplier(40),
        '佰' | '百' => Multiplier(100),
        '皕' => Multiplier(200),
        '仟' | '千' => Multiplier(1_000),
        '萬' | '万' => Multiplier(10_000),
        '億' | '亿' => Multiplier(100_000_000),

        _ => return None,
    };

    Some(value)
}

/// 单位补全时使用的反查表：量级 → 单位字符
pub fn unit_for_magnitude(magnitude: u64) -> Option<char> {
    match magnitude {
        10 => Some('十'),
        100 => Some('百'),
        1_000 => Some('千'),
        10_000 => Some('萬'),
        _ => None,
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumeralError {
    // 转换错误
    #[error("Empty strings cannot be converted")]
    EmptyInput,

    // 字符判断错误
    #[error("{function} expects exactly one character, got {length}")]
    InvalidInput { function: &'static str, length: usize },

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config serialize error: {0}")]
    ConfigSerialize(String),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NumeralResult<T> = Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NumeralError::EmptyInput.to_string(),
            "Empty strings cannot be converted"
        );

        let err = NumeralError::InvalidInput {
            function: "is_arabic_number",
            length: 3,
        };
        assert_eq!(
            err.to_string(),
            "is_arabic_number expects exactly one character, got 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: NumeralError = io.into();
        assert!(matches!(err, NumeralError::Io(_)));
    }
}

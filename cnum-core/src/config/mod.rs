//! cnum 配置模块
//!
//! 文本转换的配置，默认从 ~/.config/cnum/config.toml 加载

use crate::error::{NumeralError, NumeralResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 文本转换配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// 数字片段的最少字符数（不含分隔符）
    ///
    /// 设为 2 可避免把地名中的单个数字字符（如 "九龍站"）转换掉
    pub minimum_characters: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            minimum_characters: 1,
        }
    }
}

impl ConverterConfig {
    /// 加载配置文件，不存在时使用默认配置
    pub fn load() -> NumeralResult<Self> {
        let Some(config_path) = Self::config_path() else {
            tracing::warn!("无法获取配置目录，使用默认配置");
            return Ok(Self::default());
        };

        Self::load_or_default(&config_path)
    }

    /// 从指定路径加载配置文件，不存在时使用默认配置
    pub fn load_or_default(path: &Path) -> NumeralResult<Self> {
        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", path);
            return Ok(Self::default());
        }

        Self::load_from(path)
    }

    /// 从指定路径加载配置文件
    pub fn load_from(path: &Path) -> NumeralResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|e| NumeralError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("加载配置成功: {:?}", path);
        Ok(config)
    }

    /// 解析 TOML 字符串
    pub fn from_toml_str(content: &str) -> NumeralResult<Self> {
        toml::from_str(content).map_err(|e| NumeralError::ConfigParse {
            path: "<string>".to_string(),
            reason: e.to_string(),
        })
    }

    /// 保存配置文件
    pub fn save_to(&self, path: &Path) -> NumeralResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| NumeralError::ConfigSerialize(e.to_string()))?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 获取默认配置文件路径
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cnum").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(ConverterConfig::default().minimum_characters, 1);
    }

    #[test]
    fn test_from_toml_str() {
        let config = ConverterConfig::from_toml_str("minimum_characters = 2").unwrap();
        assert_eq!(config.minimum_characters, 2);

        // 缺省字段使用默认值
        let config = ConverterConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = ConverterConfig::from_toml_str("minimum_characters = \"two\"");
        assert!(matches!(result, Err(NumeralError::ConfigParse { .. })));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = ConverterConfig {
            minimum_characters: 3,
        };
        config.save_to(&path).unwrap();

        let loaded = ConverterConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cnum").join("config.toml");

        // 文件不存在时使用默认配置
        assert_eq!(
            ConverterConfig::load_or_default(&path).unwrap(),
            ConverterConfig::default()
        );

        let config = ConverterConfig {
            minimum_characters: 2,
        };
        config.save_to(&path).unwrap();
        assert_eq!(ConverterConfig::load_or_default(&path).unwrap(), config);
    }

    #[test]
    fn test_config_path() {
        if let Some(path) = ConverterConfig::config_path() {
            assert!(path.ends_with("cnum/config.toml"));
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConverterConfig::load_from(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(NumeralError::Io(_))));
    }
}

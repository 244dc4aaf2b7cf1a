//! 语言包目录配置，YAML 格式，支持环境变量替换
//!
//! ```yaml
//! dir: ${I18N_DIR:./locales}
//! default_lang: en
//! ```

use dotenvy::dotenv;
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

const DEFAULT_LANG: &str = "en";

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
    #[error("default_lang must not be empty")]
    EmptyDefaultLang,
}

/// 语言包目录配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct I18nConfig {
    /// 存放 `*.json` 语言包的目录
    pub dir: PathBuf,
    /// 默认语言代码
    #[serde(default = "default_lang")]
    pub default_lang: String,
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

impl I18nConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            default_lang: default_lang(),
        }
    }

    pub fn default_lang(mut self, code: impl Into<String>) -> Self {
        self.default_lang = code.into();
        self
    }

    /// 从 YAML 文件读取配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// 解析 YAML 配置，先替换其中的环境变量占位符
    pub fn from_yaml(yaml_content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(&expand_env(yaml_content))?;
        if config.default_lang.is_empty() {
            return Err(ConfigError::EmptyDefaultLang);
        }
        Ok(config)
    }
}

/// 展开 `${VAR}` / `${VAR:default}`，变量未设置且没有默认值时替换为空串
fn expand_env(yaml_content: &str) -> String {
    // 生产环境可能没有 .env 文件
    let _ = dotenv();

    static ENV_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = ENV_REGEX.get_or_init(|| {
        Regex::new(r"\$\{([A-Z0-9_]+)(?::([^\}]*))?\}").expect("Invalid regex pattern")
    });

    re.replace_all(yaml_content, |caps: &regex::Captures| match env::var(&caps[1]) {
        Ok(val) => val,
        Err(_) => caps.get(2).map_or("", |m| m.as_str()).to_string(),
    })
    .into_owned()
}

/// 编译时嵌入语言包目录配置
#[macro_export]
macro_rules! include_config {
    ($path:expr) => {
        $crate::config::I18nConfig::from_yaml(include_str!($path))
    };
}

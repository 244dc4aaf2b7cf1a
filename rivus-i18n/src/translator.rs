//! 单一语言的翻译器
//!
//! 语言包是一个扁平的 `{"key": "value"}` JSON 对象，与前端 vue-i18n 共用同一份文件。
//! 保留键 `_.code` 与 `_.name` 分别记录语言代码和语言名称。

use crate::error::I18nError;
use crate::value::Value;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

pub const CODE_KEY: &str = "_.code";
pub const NAME_KEY: &str = "_.name";

/// 嵌套参数展开的最大轮数，超过后视为循环引用
const MAX_NESTING_DEPTH: usize = 100;

fn param_regex() -> &'static Regex {
    static PARAM_REGEX: OnceLock<Regex> = OnceLock::new();
    PARAM_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\{([a-z0-9\-.]+)\}").expect("Invalid regex pattern")
    })
}

/// 基于语言映射表的翻译器
///
/// 构造后 `code` 与 `name` 固定不变，`entries` 只能通过 [`Translator::load`] 合并新增或覆盖。
/// 所有翻译方法都只需要 `&self`，缺失的键不会报错，而是返回键名本身。
#[derive(Debug, Clone)]
pub struct Translator {
    code: String,
    name: String,
    entries: HashMap<String, String>,
}

fn decode(bytes: &[u8]) -> Result<HashMap<String, String>, I18nError> {
    Ok(serde_json::from_slice(bytes)?)
}

fn required(entries: &HashMap<String, String>, key: &'static str) -> Result<String, I18nError> {
    entries
        .get(key)
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or(I18nError::MissingField(key))
}

impl Translator {
    /// 从 JSON 语言包字节构造翻译器
    pub fn new(bytes: &[u8]) -> Result<Self, I18nError> {
        let entries = decode(bytes)?;
        let code = required(&entries, CODE_KEY)?;
        let name = required(&entries, NAME_KEY)?;

        debug!("Loaded language {} ({}) with {} entries", code, name, entries.len());
        Ok(Self {
            code,
            name,
            entries,
        })
    }

    /// 从文件读取 JSON 语言包并构造翻译器
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, I18nError> {
        let bytes = fs::read(path)?;
        Self::new(&bytes)
    }

    /// 合并另一份语言包，冲突的键以新值为准
    ///
    /// 保留键不是必需的；即使新文档包含 `_.code` / `_.name`，也只作为普通条目存储，
    /// 不会改变构造时确定的语言代码和名称。解析失败时现有条目保持不变。
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), I18nError> {
        let entries = decode(bytes)?;
        debug!("Merging {} entries into language {}", entries.len(), self.code);
        self.entries.extend(entries);
        Ok(())
    }

    /// 从文件读取语言包并合并
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), I18nError> {
        let bytes = fs::read(path)?;
        self.load(&bytes)
    }

    /// 语言代码，如 `en`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// 语言名称，如 `English`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 将当前完整的映射表编码为 JSON，键的顺序不固定
    pub fn to_json(&self) -> Result<Vec<u8>, I18nError> {
        serde_json::to_vec(&self.entries).map_err(I18nError::Encode)
    }

    /// 返回键对应的翻译（单数形式），不做参数替换
    pub fn t(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(s) => singular(s).to_string(),
            None => key.to_string(),
        }
    }

    /// 按数量选择单复数形式，`n > 1` 时取复数
    pub fn tc(&self, key: &str, n: i64) -> String {
        let Some(s) = self.entries.get(key) else {
            return key.to_string();
        };

        if n > 1 {
            plural(s).to_string()
        } else {
            singular(s).to_string()
        }
    }

    /// 单数形式
    pub fn s(&self, key: &str) -> String {
        self.tc(key, 1)
    }

    /// 复数形式
    pub fn p(&self, key: &str) -> String {
        self.tc(key, 2)
    }

    /// 翻译并替换 `{name}` 参数
    ///
    /// `params` 为名称、值交替出现的扁平列表（见 [`params!`](crate::params)），
    /// 长度为奇数时返回 `"<key>: invalid arguments"`。
    /// 参数值中如果包含 `{other.key}`，会先按翻译表展开；
    /// 没有提供的占位符原样保留。
    pub fn ts(&self, key: &str, params: &[Value]) -> String {
        if params.len() % 2 != 0 {
            return format!("{}: invalid arguments", key);
        }

        let Some(s) = self.entries.get(key) else {
            return key.to_string();
        };

        let mut result = singular(s).to_string();
        for pair in params.chunks_exact(2) {
            let name = pair[0].to_string();
            let val = self.expand_nested(&pair[1]);
            result = result.replace(&format!("{{{}}}", name), &val);
        }
        result
    }

    /// 递归展开参数值中的 `{key}`，直到不再包含可替换的占位符
    fn expand_nested(&self, value: &Value) -> String {
        let mut s = value.to_string();
        let re = param_regex();

        for _ in 0..MAX_NESTING_DEPTH {
            if !s.contains('{') {
                return s;
            }

            let expanded = re
                .replace_all(&s, |caps: &regex::Captures| self.t(&caps[1]))
                .into_owned();
            if expanded == s {
                return s;
            }
            s = expanded;
        }

        warn!(
            "Nested translation exceeded {} levels in language {}, possible cycle: {}",
            MAX_NESTING_DEPTH, self.code, s
        );
        s
    }
}

/// `单数 | 复数` 中的单数部分
fn singular(s: &str) -> &str {
    match s.split_once('|') {
        Some((first, _)) => first.trim(),
        None => s,
    }
}

/// `单数 | 复数` 中的复数部分
fn plural(s: &str) -> &str {
    if !s.contains('|') {
        return s;
    }

    let chunks: Vec<&str> = s.split('|').collect();
    if chunks.len() == 2 {
        return chunks[1].trim();
    }

    // 多于两段时退回第一段，与前端共用的语言包保持同样的取值结果
    chunks[0].trim()
}

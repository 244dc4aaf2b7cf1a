use thiserror::Error;

/// 语言包加载与目录管理错误
///
/// 翻译查询本身不会返回错误，缺失的键直接以键名本身作为结果。
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("missing {0} field in language file")]
    MissingField(&'static str),
    #[error("language already registered: {0}")]
    DuplicateLanguage(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

impl I18nError {
    /// 是否为文档格式错误（非 JSON 或值不是字符串）
    pub fn is_decode(&self) -> bool {
        matches!(self, I18nError::Decode(_))
    }

    /// 是否为缺少保留字段（`_.code` / `_.name`）
    pub fn is_missing_field(&self) -> bool {
        matches!(self, I18nError::MissingField(_))
    }
}

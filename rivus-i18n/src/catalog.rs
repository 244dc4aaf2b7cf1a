//! 多语言目录：按语言代码管理多个 [`Translator`]
//!
//! 各语言之间没有回退关系，某个语言缺少的键由该语言的翻译器按键名原样返回。

use crate::config::I18nConfig;
use crate::error::I18nError;
use crate::translator::Translator;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;
use tracing::{error, info};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    translators: HashMap<String, Translator>,
    default_lang: Option<String>,
}

fn read_locale_file(path: &Path) -> Option<Vec<u8>> {
    if path.extension()? != "json" {
        return None;
    }

    fs::read(path)
        .inspect_err(|e| error!("Failed to read i18n file {}: {}", path.display(), e))
        .ok()
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加载目录下所有 `*.json` 语言包
    ///
    /// 无法读取或解析的文件会记录错误并跳过；语言代码相同的多个文件依次合并，
    /// 文件名按字典序处理，靠后的文件覆盖靠前的同名键。
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, I18nError> {
        let dir = dir.as_ref();
        let mut paths: Vec<_> = fs::read_dir(dir)
            .inspect_err(|e| error!("Failed to read i18n directory {}: {}", dir.display(), e))?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .collect();
        paths.sort();

        let mut catalog = Self::new();
        for path in paths {
            let Some(bytes) = read_locale_file(&path) else {
                continue;
            };
            if let Err(e) = catalog.add_source(&bytes) {
                error!("Failed to parse i18n file {}: {}", path.display(), e);
            }
        }
        Ok(catalog)
    }

    /// 按配置加载目录并设置默认语言
    pub fn from_config(config: &I18nConfig) -> Result<Self, I18nError> {
        let mut catalog = Self::load_dir(&config.dir)?;
        catalog.set_default(&config.default_lang)?;
        Ok(catalog)
    }

    /// 从内嵌的 `(文件名, JSON 内容)` 列表构造，通常配合 `embed_languages!` 使用
    pub fn from_sources(sources: &[(&str, &str)]) -> Result<Self, I18nError> {
        let mut catalog = Self::new();
        for (_, content) in sources {
            catalog.add_source(content.as_bytes())?;
        }
        Ok(catalog)
    }

    /// 解析一份语言包；代码已存在时合并到现有翻译器
    fn add_source(&mut self, bytes: &[u8]) -> Result<(), I18nError> {
        let translator = Translator::new(bytes)?;
        match self.translators.entry(translator.code().to_string()) {
            Entry::Occupied(mut existing) => existing.get_mut().load(bytes)?,
            Entry::Vacant(slot) => {
                info!("Loaded i18n for lang: {}", translator.code());
                slot.insert(translator);
            }
        }
        Ok(())
    }

    /// 注册一个翻译器，语言代码重复时报错
    pub fn insert(&mut self, translator: Translator) -> Result<(), I18nError> {
        match self.translators.entry(translator.code().to_string()) {
            Entry::Occupied(existing) => Err(I18nError::DuplicateLanguage(existing.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(translator);
                Ok(())
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&Translator> {
        self.translators.get(code)
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut Translator> {
        self.translators.get_mut(code)
    }

    /// 设置默认语言，语言必须已加载
    pub fn set_default(&mut self, code: &str) -> Result<(), I18nError> {
        if !self.translators.contains_key(code) {
            return Err(I18nError::UnknownLanguage(code.to_string()));
        }
        self.default_lang = Some(code.to_string());
        Ok(())
    }

    pub fn default_translator(&self) -> Option<&Translator> {
        self.default_lang.as_deref().and_then(|code| self.get(code))
    }

    /// 已加载语言的 `(代码, 名称)` 列表，按代码排序
    pub fn languages(&self) -> Vec<(&str, &str)> {
        let mut langs: Vec<_> = self
            .translators
            .values()
            .map(|t| (t.code(), t.name()))
            .collect();
        langs.sort();
        langs
    }

    pub fn len(&self) -> usize {
        self.translators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = r#"{"_.code": "en", "_.name": "English", "hello": "Hello"}"#;
    const ZH: &str = r#"{"_.code": "zh", "_.name": "中文", "hello": "你好"}"#;
    const EN_EXTRA: &str = r#"{"_.code": "en", "_.name": "English", "bye": "Bye", "hello": "Hi"}"#;

    #[test]
    fn test_from_sources() {
        let catalog = Catalog::from_sources(&[("en", EN), ("zh", ZH)]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.languages(), vec![("en", "English"), ("zh", "中文")]);
        assert_eq!(catalog.get("zh").unwrap().t("hello"), "你好");
        assert!(catalog.get("fr").is_none());
        assert!(catalog.default_translator().is_none());
    }

    #[test]
    fn test_same_code_is_merged() {
        let catalog = Catalog::from_sources(&[("en", EN), ("en-extra", EN_EXTRA)]).unwrap();
        assert_eq!(catalog.len(), 1);
        let en = catalog.get("en").unwrap();
        assert_eq!(en.t("hello"), "Hi");
        assert_eq!(en.t("bye"), "Bye");
    }

    #[test]
    fn test_invalid_source() {
        let err = Catalog::from_sources(&[("bad", "{")]).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_insert_and_default() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        catalog.insert(Translator::new(EN.as_bytes()).unwrap()).unwrap();

        let err = catalog
            .insert(Translator::new(EN_EXTRA.as_bytes()).unwrap())
            .unwrap_err();
        assert!(matches!(err, I18nError::DuplicateLanguage(ref code) if code == "en"));

        let err = catalog.set_default("fr").unwrap_err();
        assert!(matches!(err, I18nError::UnknownLanguage(_)));

        catalog.set_default("en").unwrap();
        assert_eq!(catalog.default_translator().unwrap().name(), "English");

        catalog.get_mut("en").unwrap().load(br#"{"new": "New"}"#).unwrap();
        assert_eq!(catalog.get("en").unwrap().t("new"), "New");
    }
}

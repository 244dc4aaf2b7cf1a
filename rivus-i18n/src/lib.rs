//! 基于扁平 JSON 语言包的翻译库
//!
//! 语言包格式与前端 vue-i18n 保持一致，同一份文件可以在前后端共用：
//!
//! ```
//! use rivus_i18n::{Translator, params};
//!
//! let tr = Translator::new(br#"{
//!     "_.code": "en",
//!     "_.name": "English",
//!     "page": "Single page|Many pages",
//!     "pageVars": "The page is named {name} and has {count} items"
//! }"#).unwrap();
//!
//! assert_eq!(tr.t("page"), "Single page");
//! assert_eq!(tr.p("page"), "Many pages");
//! assert_eq!(
//!     tr.ts("pageVars", &params!["name", "Foo", "count", 1234]),
//!     "The page is named Foo and has 1234 items"
//! );
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod translator;
pub mod value;

pub use catalog::Catalog;
pub use config::{ConfigError, I18nConfig};
pub use error::I18nError;
pub use translator::Translator;
pub use value::Value;

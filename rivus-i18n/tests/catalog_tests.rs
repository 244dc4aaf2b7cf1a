use rivus_i18n::{Catalog, I18nConfig, I18nError, params};
use std::fs;
use std::path::PathBuf;

fn locales_dir() -> String {
    format!("{}/tests/locales", env!("CARGO_MANIFEST_DIR"))
}

fn temp_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "rivus_i18n_catalog_test_{}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        suffix
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_load_fixture_dir() {
    let catalog = Catalog::load_dir(locales_dir()).unwrap();

    assert_eq!(catalog.languages(), vec![("en", "English"), ("zh", "中文")]);
    let zh = catalog.get("zh").unwrap();
    assert_eq!(zh.p("page"), "多页");
    assert_eq!(
        zh.ts("nestedParams", &params!["appName", "{app.name}"]),
        "欢迎使用 我的应用"
    );
    // 缺少的键不会回退到其他语言
    assert_eq!(zh.t("foo"), "foo");
}

#[test]
fn test_load_dir_skips_bad_files_and_merges_overlays() {
    let dir = temp_dir("overlay");
    fs::write(dir.join("en.json"), r#"{"_.code": "en", "_.name": "English", "ok": "Ok"}"#).unwrap();
    fs::write(
        dir.join("en.override.json"),
        r#"{"_.code": "en", "_.name": "English", "ok": "Okay", "extra": "Extra"}"#,
    )
    .unwrap();
    fs::write(dir.join("fr.json"), r#"{"_.code": "fr", "_.name": "Français", "ok": 1}"#).unwrap();
    fs::write(dir.join("de.json"), r#"{"_.name": "Deutsch"}"#).unwrap();
    fs::write(dir.join("ignore.txt"), "200 = \"Ignored\"\n").unwrap();

    let catalog = Catalog::load_dir(&dir).unwrap();
    assert_eq!(catalog.len(), 1);
    let en = catalog.get("en").unwrap();
    assert_eq!(en.t("ok"), "Okay");
    assert_eq!(en.t("extra"), "Extra");
    assert!(catalog.get("fr").is_none());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_load_missing_dir() {
    let err = Catalog::load_dir("/this/path/should/not/exist").unwrap_err();
    assert!(matches!(err, I18nError::Io(_)));
}

#[test]
fn test_from_config_file() {
    let dir = temp_dir("config");
    let config_path = dir.join("i18n.yaml");
    unsafe {
        std::env::set_var("RIVUS_I18N_CATALOG_DIR", locales_dir());
    }
    fs::write(
        &config_path,
        "dir: ${RIVUS_I18N_CATALOG_DIR}\ndefault_lang: ${RIVUS_I18N_CATALOG_LANG:zh}\n",
    )
    .unwrap();

    let config = I18nConfig::from_file(&config_path).unwrap();
    let catalog = Catalog::from_config(&config).unwrap();
    assert_eq!(catalog.default_translator().unwrap().code(), "zh");

    let err = Catalog::from_config(&I18nConfig::new(locales_dir()).default_lang("fr")).unwrap_err();
    assert!(matches!(err, I18nError::UnknownLanguage(ref code) if code == "fr"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_from_embedded_config() {
    let config = rivus_i18n::include_config!("i18n.yaml").unwrap();
    assert_eq!(config.dir, PathBuf::from("tests/locales"));

    let catalog = Catalog::from_config(&config).unwrap();
    let en = catalog.default_translator().unwrap();
    assert_eq!(en.tc("page", 5), "Many pages");
}

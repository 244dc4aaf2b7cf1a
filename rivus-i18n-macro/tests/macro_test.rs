use rivus_i18n::{Catalog, params};
use rivus_i18n_macro::embed_languages;

static LANGUAGES: &[(&str, &str)] = embed_languages!("tests/locales");

#[test]
fn test_embedded_sources() {
    let stems: Vec<_> = LANGUAGES.iter().map(|(stem, _)| *stem).collect();
    assert_eq!(stems, vec!["en", "ja"]);
}

#[test]
fn test_catalog_from_embedded() {
    let catalog = Catalog::from_sources(LANGUAGES).unwrap();
    assert_eq!(catalog.languages(), vec![("en", "English"), ("ja", "日本語")]);

    let en = catalog.get("en").unwrap();
    assert_eq!(en.ts("greeting", &params!["name", "Alice"]), "Hello, Alice!");
    assert_eq!(en.tc("item", 3), "items");

    let ja = catalog.get("ja").unwrap();
    assert_eq!(ja.ts("greeting", &params!["name", "Alice"]), "こんにちは、Aliceさん！");
    assert_eq!(ja.p("item"), "アイテム");
}

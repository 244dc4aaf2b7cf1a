use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::HashMap;
use std::path::Path;
use syn::{LitStr, parse_macro_input};

/// 编译时嵌入语言包目录
///
/// 目录相对于调用方的 `CARGO_MANIFEST_DIR`，展开为按文件名排序的
/// `&'static [(&'static str, &'static str)]`，元素为 `(文件名, JSON 内容)`，
/// 可直接传给 `rivus_i18n::Catalog::from_sources`。
#[proc_macro]
pub fn embed_languages(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("Failed to get manifest dir");

    match expand(&Path::new(&manifest_dir).join(lit.value()), lit.span()) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// 目录不存在时报错位置指向宏参数，单个文件的问题报在调用处
fn expand(dir_path: &Path, lit_span: Span) -> Result<proc_macro2::TokenStream, syn::Error> {
    if !dir_path.is_dir() {
        return Err(syn::Error::new(
            lit_span,
            format!("i18n directory not found: {}", dir_path.display()),
        ));
    }

    let full_pattern = format!("{}/*.json", dir_path.display());
    let paths = glob::glob(&full_pattern).map_err(|e| {
        call_site_error(format!("Invalid glob pattern {}: {}", full_pattern, e))
    })?;

    let mut sources = Vec::new();
    for entry in paths {
        let path = match entry {
            Ok(path) if path.is_file() => path,
            Ok(_) => continue,
            Err(e) => return Err(call_site_error(format!("Path error: {}", e))),
        };

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };

        // 在编译期校验，避免运行时才发现语言包损坏
        validate(&path).map_err(|msg| call_site_error(format!("{}: {}", path.display(), msg)))?;

        let abs_path = path
            .canonicalize()
            .map_err(|e| call_site_error(format!("{}: {}", path.display(), e)))?;
        sources.push((stem, abs_path.to_string_lossy().into_owned()));
    }
    sources.sort();

    // include_str! 同时让编译器监视文件，修改 JSON 会触发重新编译
    let entries = sources.iter().map(|(stem, abs_path)| {
        quote! { (#stem, include_str!(#abs_path)) }
    });

    Ok(quote! {
        {
            const SOURCES: &[(&str, &str)] = &[ #(#entries),* ];
            SOURCES
        }
    })
}

fn validate(path: &Path) -> Result<(), String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("Read error: {}", e))?;
    let kv: HashMap<String, String> =
        serde_json::from_str(&content).map_err(|e| format!("JSON error: {}", e))?;

    for key in ["_.code", "_.name"] {
        if kv.get(key).is_none_or(|v| v.is_empty()) {
            return Err(format!("missing {} field in language file", key));
        }
    }
    Ok(())
}

fn call_site_error(msg: String) -> syn::Error {
    syn::Error::new(Span::call_site(), msg)
}

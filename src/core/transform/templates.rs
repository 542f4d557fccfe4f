//! Source templates for the code the transform inserts.

use std::collections::HashSet;

use crate::utils::camel_case;

/// Identifier the generated translation index is imported as.
pub const TRANSLATION_INDEX_IMPORT_ID: &str = "__shopify__i18n_translations";

/// Identifier the generated translation dictionary is imported as.
pub const TRANSLATION_DICTIONARY_IMPORT_ID: &str = "__shopify__i18n_dictionary";

/// How the generated `translations(locale)` loader finds its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationsLoader {
    /// Lazily import `./<dir>/<locale>.json` for the listed locales.
    AsyncImport {
        translation_dir: String,
        locales: Vec<String>,
    },
    /// Look the locale up in an imported object.
    Lookup { import_id: String },
}

/// Arguments for one rewritten i18n call.
#[derive(Debug, Clone)]
pub struct I18nCallTemplate<'a> {
    pub binding_name: &'a str,
    pub id: &'a str,
    /// Identifier of the imported fallback translations, if any.
    pub fallback_id: Option<&'a str>,
    pub loader: TranslationsLoader,
}

/// `import <id> from "<from>";`
pub fn import_statement(id: &str, from: &str) -> String {
    format!("import {} from {};", id, js_string(from))
}

/// Quote a string as a JS double-quoted literal.
fn js_string(value: &str) -> String {
    // JSON string syntax is valid JS string syntax
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

impl I18nCallTemplate<'_> {
    /// Render the call. Continuation lines are prefixed with `indent`.
    pub fn render(&self, indent: &str) -> String {
        let mut lines = vec![format!("{}({{", self.binding_name)];
        lines.push(format!("  id: {},", js_string(self.id)));
        if let Some(fallback_id) = self.fallback_id {
            lines.push(format!("  fallback: {},", fallback_id));
        }
        lines.push("  translations(locale) {".to_string());

        match &self.loader {
            TranslationsLoader::AsyncImport {
                translation_dir,
                locales,
            } => {
                let locales_array =
                    serde_json::to_string(locales).unwrap_or_else(|_| "[]".to_string());
                lines.push(format!("    if ({}.indexOf(locale) < 0) {{", locales_array));
                lines.push("      return Promise.resolve();".to_string());
                lines.push("    }".to_string());
                lines.push(format!(
                    "    return import(/* webpackChunkName: {}, webpackMode: \"lazy-once\" */ `./{}/${{locale}}.json`).then(dict => dict && dict.default);",
                    js_string(&format!("{}-i18n", self.id)),
                    translation_dir
                ));
            }
            TranslationsLoader::Lookup { import_id } => {
                lines.push(format!("    return Promise.resolve({}[locale]);", import_id));
            }
        }

        lines.push("  }".to_string());
        lines.push("})".to_string());

        let separator = format!("\n{}", indent);
        lines.join(&separator)
    }
}

/// Generates identifiers that are unique within one program.
///
/// Follows the `_name`, `_name2`, `_name3` scheme so generated names read
/// naturally and never collide with what the author wrote.
pub struct UidGenerator {
    taken: HashSet<String>,
}

impl UidGenerator {
    pub fn new(taken: HashSet<String>) -> Self {
        Self { taken }
    }

    /// A fresh identifier derived from `hint` (camel-cased, leading
    /// underscores and trailing digits dropped).
    pub fn generate(&mut self, hint: &str) -> String {
        let base = camel_case(hint);
        let base = base.trim_start_matches('_').trim_end_matches(|c: char| c.is_ascii_digit());
        let base = if base.is_empty() { "ref" } else { base };

        let mut counter = 1;
        loop {
            let candidate = if counter > 1 {
                format!("_{}{}", base, counter)
            } else {
                format!("_{}", base)
            };
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            counter += 1;
        }
    }
}

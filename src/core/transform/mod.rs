//! The i18n argument injection transform.
//!
//! Rewrites the single argument-less call of an imported i18n hook or
//! decorator so it receives an id, a fallback dictionary and a translation
//! loader generated from the translation files next to the component:
//!
//! ```text
//! import {useI18n} from '@shopify/react-i18n';        import _en from "./translations/en.json";
//!                                                      import {useI18n} from '@shopify/react-i18n';
//! function Card() {                             ==>   function Card() {
//!   const [i18n] = useI18n();                           const [i18n] = useI18n({
//! }                                                       id: "Card_1x2y3",
//!                                                         fallback: _en,
//!                                                         translations(locale) { ... }
//!                                                       });
//!                                                     }
//! ```
//!
//! ## Module Structure
//!
//! - `bindings`: import specifiers naming the hook/decorator
//! - `call_sites`: scope-aware collection of argument-less calls
//! - `scope`: declared-name scope stack used for shadowing
//! - `translations`: translation files on disk
//! - `templates`: generated imports and call arguments
//! - `edits`: text splicing into the original source

pub mod bindings;
pub mod call_sites;
pub mod edits;
pub mod scope;
pub mod templates;
pub mod translations;


use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use swc_common::SourceMap;

use crate::core::parsers::jsx::{ParsedJSX, parse_jsx_source};
use crate::utils::{string_hash, to_base36};

use bindings::{I18nBinding, collect_i18n_bindings};
use call_sites::{CallSiteCollector, IdentifierCollector};
use edits::{TextEdit, apply_edits, import_insertion_offset, line_indent};
use templates::{
    I18nCallTemplate, TRANSLATION_DICTIONARY_IMPORT_ID, TRANSLATION_INDEX_IMPORT_ID,
    TranslationsLoader, UidGenerator, import_statement,
};
use translations::{async_locales, find_translation_files, translation_index_exists};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Where the generated translation loader gets its data.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum TransformMode {
    /// Import the fallback locale eagerly and every other `translations/*.json` lazily.
    #[default]
    FromTranslationFiles,
    /// Read all locales from a generated `translations/index.js`.
    FromGeneratedIndex,
    /// Read the build's locale dictionary from a generated `translations/index.js`.
    FromGeneratedDictionary,
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformMode::FromTranslationFiles => write!(f, "from-translation-files"),
            TransformMode::FromGeneratedIndex => write!(f, "from-generated-index"),
            TransformMode::FromGeneratedDictionary => write!(f, "from-generated-dictionary"),
        }
    }
}

impl TransformMode {
    /// Modes reading a generated `index.js` instead of the JSON files.
    pub fn uses_generated_index(self) -> bool {
        !matches!(self, TransformMode::FromTranslationFiles)
    }
}

#[derive(Debug, Clone)]
pub struct TransformOptions {
    pub mode: TransformMode,
    /// Package the hook/decorator is imported from.
    pub package: String,
    /// Exported names to rewrite.
    pub call_names: Vec<String>,
    /// Directory, next to the component, holding its translations.
    pub translation_dir: String,
    pub fallback_locale: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            mode: TransformMode::default(),
            package: "@shopify/react-i18n".to_string(),
            call_names: vec!["useI18n".to_string(), "withI18n".to_string()],
            translation_dir: "translations".to_string(),
            fallback_locale: "en".to_string(),
        }
    }
}

/// A call that was rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rewrite {
    pub binding_name: String,
    pub imported_name: String,
    /// Generated translation id.
    pub id: String,
    pub line: usize,
    pub col: usize,
}

/// A call that could have been rewritten but had no translations on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRewrite {
    pub binding_name: String,
    pub line: usize,
    pub col: usize,
    /// What was looked for, e.g. `translations/*.json`.
    pub expected: String,
}

#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub code: String,
    pub rewrites: Vec<Rewrite>,
    pub skipped: Vec<SkippedRewrite>,
}

impl TransformOutput {
    fn unchanged(code: String) -> Self {
        Self {
            code,
            rewrites: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn is_changed(&self) -> bool {
        !self.rewrites.is_empty()
    }
}

/// The hook/decorator was called without arguments more than once in a file,
/// so there is no single call to hand the translations to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleUsageError {
    pub binding_name: String,
    pub count: usize,
    /// Location of the second call.
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for MultipleUsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You attempted to use {} {} times in a single file. This is not supported by the transform that automatically inserts translations.",
            self.binding_name, self.count
        )
    }
}

impl std::error::Error for MultipleUsageError {}

/// Translation id for a file: `<file stem>_<5 chars of base36 hash of the path>`.
///
/// The path is made absolute first, so `src/Card.tsx`, `./src/Card.tsx` and
/// the full path give the same id.
pub fn generate_id(file_path: &Path) -> String {
    let absolute = std::path::absolute(file_path).unwrap_or_else(|_| file_path.to_path_buf());
    let hash = to_base36(string_hash(&absolute.to_string_lossy()));
    let hash: String = hash.chars().take(5).collect();
    let legible = file_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{}_{}", legible, hash)
}

/// Transform one source file.
///
/// `file_path` locates the translation directory and seeds the generated id.
/// Fails on parse errors and with [`MultipleUsageError`] when a binding is
/// called without arguments more than once.
pub fn transform_source(
    code: String,
    file_path: &Path,
    options: &TransformOptions,
) -> Result<TransformOutput> {
    if !code.contains(&options.package) {
        return Ok(TransformOutput::unchanged(code));
    }

    let (bom, body) = match code.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) => (true, rest.to_string()),
        None => (false, code),
    };

    let parsed = parse_jsx_source(body.clone(), file_path, Arc::new(SourceMap::default()))?;
    let mut output = Transformer::new(&parsed, &body, file_path, options).run()?;

    if bom {
        output.code.insert(0, BYTE_ORDER_MARK);
    }
    Ok(output)
}

/// Transform state for one parsed file.
struct Transformer<'a> {
    parsed: &'a ParsedJSX,
    source: &'a str,
    file_path: &'a Path,
    options: &'a TransformOptions,
    uids: UidGenerator,
    /// Import lines, in final order.
    imports: Vec<String>,
    edits: Vec<TextEdit>,
    rewrites: Vec<Rewrite>,
    skipped: Vec<SkippedRewrite>,
}

impl<'a> Transformer<'a> {
    fn new(
        parsed: &'a ParsedJSX,
        source: &'a str,
        file_path: &'a Path,
        options: &'a TransformOptions,
    ) -> Self {
        Self {
            parsed,
            source,
            file_path,
            options,
            uids: UidGenerator::new(IdentifierCollector::collect(&parsed.module)),
            imports: Vec::new(),
            edits: Vec::new(),
            rewrites: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn run(mut self) -> Result<TransformOutput> {
        let bindings = collect_i18n_bindings(
            &self.parsed.module,
            &self.options.package,
            &self.options.call_names,
        );
        if bindings.is_empty() {
            return Ok(TransformOutput::unchanged(self.source.to_string()));
        }

        let tracked: HashSet<String> = bindings.iter().map(|b| b.local.clone()).collect();
        let mut call_sites = CallSiteCollector::new(&tracked).collect(&self.parsed.module);

        for binding in &bindings {
            // Every matching binding reserves its fallback identifier, used or not
            let fallback_id = match self.options.mode {
                TransformMode::FromGeneratedDictionary => None,
                _ => Some(self.uids.generate(&self.options.fallback_locale)),
            };

            let spans = call_sites.remove(&binding.local).unwrap_or_default();
            match spans.as_slice() {
                [] => {}
                [span] => self.rewrite(binding, fallback_id, span.lo, span.hi)?,
                [_, second, ..] => {
                    let loc = self.parsed.loc(second.lo);
                    return Err(MultipleUsageError {
                        binding_name: binding.local.clone(),
                        count: spans.len(),
                        line: loc.line,
                        col: loc.col_display + 1,
                    }
                    .into());
                }
            }
        }

        if self.rewrites.is_empty() {
            return Ok(TransformOutput {
                code: self.source.to_string(),
                rewrites: Vec::new(),
                skipped: self.skipped,
            });
        }

        let mut import_block: String = self
            .imports
            .iter()
            .map(|line| format!("{}\n", line))
            .collect();
        let insert_at = import_insertion_offset(self.parsed);
        if insert_at > 0 && !self.source[..insert_at].ends_with('\n') {
            import_block.insert(0, '\n');
        }
        self.edits.push(TextEdit::insert(insert_at, import_block));

        Ok(TransformOutput {
            code: apply_edits(self.source, self.edits)?,
            rewrites: self.rewrites,
            skipped: self.skipped,
        })
    }

    /// Rewrite the single call of `binding` spanning `lo..hi`, if its
    /// translations exist. `fallback_id` names the fallback import, if the
    /// mode has one.
    fn rewrite(
        &mut self,
        binding: &I18nBinding,
        fallback_id: Option<String>,
        lo: swc_common::BytePos,
        hi: swc_common::BytePos,
    ) -> Result<()> {
        let options = self.options;
        let loc = self.parsed.loc(lo);
        let translation_dir = options.translation_dir.as_str();

        let loader = if options.mode.uses_generated_index() {
            if !translation_index_exists(self.file_path, translation_dir) {
                self.skip(binding, &loc, format!("{}/index.js", translation_dir));
                return Ok(());
            }
            let import_id = match options.mode {
                TransformMode::FromGeneratedDictionary => TRANSLATION_DICTIONARY_IMPORT_ID,
                _ => TRANSLATION_INDEX_IMPORT_ID,
            };
            TranslationsLoader::Lookup {
                import_id: import_id.to_string(),
            }
        } else {
            let files = find_translation_files(self.file_path, translation_dir);
            if files.is_empty() {
                self.skip(binding, &loc, format!("{}/*.json", translation_dir));
                return Ok(());
            }
            TranslationsLoader::AsyncImport {
                translation_dir: translation_dir.to_string(),
                locales: async_locales(&files, &options.fallback_locale),
            }
        };

        // This binding's imports go above those of earlier bindings
        let mut block = Vec::new();
        if let TranslationsLoader::Lookup { import_id } = &loader {
            block.push(import_statement(import_id, &format!("./{}", translation_dir)));
        }
        if let Some(fallback_id) = &fallback_id {
            block.push(import_statement(
                fallback_id,
                &format!("./{}/{}.json", translation_dir, options.fallback_locale),
            ));
        }
        for line in self.imports.drain(..) {
            if !block.contains(&line) {
                block.push(line);
            }
        }
        self.imports = block;

        let id = generate_id(self.file_path);
        let start = self.parsed.offset(lo);
        let end = self.parsed.offset(hi);
        let call = I18nCallTemplate {
            binding_name: &binding.local,
            id: &id,
            fallback_id: fallback_id.as_deref(),
            loader,
        };
        let indent = line_indent(self.source, start);
        self.edits
            .push(TextEdit::replace(start, end, call.render(indent)));

        self.rewrites.push(Rewrite {
            binding_name: binding.local.clone(),
            imported_name: binding.imported.clone(),
            id,
            line: loc.line,
            col: loc.col_display + 1,
        });
        Ok(())
    }

    fn skip(&mut self, binding: &I18nBinding, loc: &swc_common::Loc, expected: String) {
        self.skipped.push(SkippedRewrite {
            binding_name: binding.local.clone(),
            line: loc.line,
            col: loc.col_display + 1,
            expected,
        });
    }
}

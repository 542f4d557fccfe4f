//! Discovery of generated translation files next to a component.
//!
//! ```text
//! src/components/Card/
//! ├── Card.tsx
//! └── translations/
//!     ├── en.json
//!     ├── fr.json
//!     └── index.js   (only with generated index/dictionary modes)
//! ```

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, glob_with};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Directory holding the translations of the component at `file_path`.
pub fn translation_dir_for(file_path: &Path, translation_dir: &str) -> PathBuf {
    file_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(translation_dir)
}

/// Files in `dir` matching `file_pattern`, sorted. Directories never match.
fn matching_files(dir: &Path, file_pattern: &str) -> Vec<PathBuf> {
    let escaped_dir = Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped_dir).join(file_pattern);

    let Ok(entries) = glob_with(&pattern.to_string_lossy(), MATCH_OPTIONS) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files
}

/// JSON translation files of the component at `file_path`.
pub fn find_translation_files(file_path: &Path, translation_dir: &str) -> Vec<PathBuf> {
    matching_files(&translation_dir_for(file_path, translation_dir), "*.json")
}

/// True if a generated `index.js` exists in the component's translation directory.
pub fn translation_index_exists(file_path: &Path, translation_dir: &str) -> bool {
    !matching_files(&translation_dir_for(file_path, translation_dir), "index.js").is_empty()
}

/// Locale codes of the given translation files, minus the fallback locale, sorted.
///
/// `translations/de.json`, `translations/en.json` with fallback `en` gives `["de"]`.
pub fn async_locales(files: &[PathBuf], fallback_locale: &str) -> Vec<String> {
    let mut locales: Vec<String> = files
        .iter()
        .filter_map(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|locale| locale != fallback_locale)
        .collect();
    locales.sort();
    locales.dedup();
    locales
}

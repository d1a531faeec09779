//! Locating installed dictionaries by language tag.
//!
//! Dictionaries are installed as `<tag>.dic`/`<tag>.aff` pairs in the
//! platform spelling directories (`~/Library/Spelling` and
//! `/Library/Spelling` on macOS). Installation itself is handled elsewhere;
//! this module only finds what is already on disk.

use std::path::{Path, PathBuf};

use language_tags::LanguageTag;

/// A matched word-list/affix-table pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryPaths {
    /// Path to the `.dic` word list.
    pub dic: PathBuf,
    /// Path to the `.aff` affix table next to it.
    pub aff: PathBuf,
}

#[cfg(target_os = "macos")]
fn spelling_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(services) = pathos::macos::user::services_dir() {
        if let Some(library) = services.parent() {
            dirs.push(library.join("Spelling"));
        }
    }

    dirs.push(PathBuf::from("/Library/Spelling"));
    dirs
}

#[cfg(not(target_os = "macos"))]
fn spelling_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(PathBuf::from(home).join(".local/share/spelling"));
    }

    dirs.push(PathBuf::from("/usr/share/spelling"));
    dirs
}

/// Searches one directory for the dictionary pair named by `tag`.
pub fn find_dictionary_in(dir: &Path, tag: &LanguageTag) -> Option<DictionaryPaths> {
    let pattern = format!("{tag}.dic");

    let walker = globwalk::GlobWalkerBuilder::new(dir, &pattern)
        .max_depth(1)
        .build()
        .ok()?;

    for entry in walker.into_iter().filter_map(Result::ok) {
        let dic = entry.path().to_path_buf();
        let aff = dic.with_extension("aff");
        if aff.is_file() {
            return Some(DictionaryPaths { dic, aff });
        }
    }

    None
}

/// Searches the platform spelling directories for the dictionary pair named
/// by `tag`, user-local first.
pub fn find_dictionary_path(tag: &LanguageTag) -> Option<DictionaryPaths> {
    spelling_dirs()
        .iter()
        .find_map(|dir| find_dictionary_in(dir, tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_matched_pair() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en-Shaw.dic"), "1\n𐑣𐑩𐑤𐑴\n").unwrap();
        std::fs::write(dir.path().join("en-Shaw.aff"), "SET UTF-8\n").unwrap();

        let tag: LanguageTag = "en-Shaw".parse().unwrap();
        let found = find_dictionary_in(dir.path(), &tag).unwrap();
        assert_eq!(found.dic, dir.path().join("en-Shaw.dic"));
        assert_eq!(found.aff, dir.path().join("en-Shaw.aff"));
    }

    #[test]
    fn word_list_without_affix_table_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.dic"), "1\nhello\n").unwrap();

        let tag: LanguageTag = "en".parse().unwrap();
        assert_eq!(find_dictionary_in(dir.path(), &tag), None);
    }

    #[test]
    fn missing_dictionary_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let tag: LanguageTag = "en".parse().unwrap();
        assert_eq!(find_dictionary_in(dir.path(), &tag), None);
    }
}

//! Lookup store: category-keyed display-name tables with total
//! fallback-to-raw-key semantics.
//!
//! Assembled once at startup from the static mapping files and passed by
//! reference everywhere; a missing file degrades its category to raw-key
//! passthrough, never a hard error.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Category names. These match the keys used by the upstream mapping files
/// (`wfdata.json` spells the fissure-tier category `Modifier`).
pub mod category {
    pub const MISSIONS: &str = "missions";
    pub const FACTIONS: &str = "factions";
    pub const BOSSES: &str = "bosses";
    pub const SYNDICATES: &str = "syndicates";
    pub const NODES: &str = "nodes";
    pub const MODIFIERS: &str = "Modifier";
    /// Stage one of bounty-name resolution: jobType -> language key.
    pub const BOUNTY_JOBS: &str = "bounty_jobs";
    /// Language-key dictionary: bounty stage two and Nightwave challenges.
    pub const DICTIONARY: &str = "dictionary";
}

/// The on-disk sources merged into one store.
pub const MAIN_MAPPING_FILE: &str = "wfdata.json";
pub const NODE_MAPPING_FILE: &str = "node.json";
pub const BOUNTY_MAPPING_FILE: &str = "ExportBounties.json";
pub const DICTIONARY_FILE: &str = "dict_zh.json";

/// Read-only category -> (raw key -> display name) table.
#[derive(Debug, Clone, Default)]
pub struct MappingStore {
    categories: HashMap<String, HashMap<String, String>>,
}

impl MappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a table into a category. Later inserts extend the category and
    /// override earlier entries key by key.
    pub fn insert_category(&mut self, category: &str, table: HashMap<String, String>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .extend(table);
    }

    /// Exact-match lookup; `None` means the caller applies its own fallback.
    pub fn lookup(&self, category: &str, key: &str) -> Option<&str> {
        self.categories
            .get(category)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Total resolution: the mapped name, or the key unchanged on any miss.
    pub fn resolve<'a>(&'a self, category: &str, key: &'a str) -> &'a str {
        self.lookup(category, key).unwrap_or(key)
    }

    /// How many keys of `category` appear in `keys`. Used for the Nightwave
    /// coverage line.
    pub fn mapped_count<'a, I>(&self, category: &str, keys: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        keys.into_iter()
            .filter(|k| self.lookup(category, k).is_some())
            .count()
    }
}

/// A mapping source that could not be loaded. Degrades its category to
/// passthrough; the CLI prints these before the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    Missing { path: PathBuf },
    Unreadable { path: PathBuf, reason: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::Missing { path } => {
                write!(f, "⚠️ 映射文件 {} 不存在，相关名称将按原始键显示", path.display())
            }
            LoadWarning::Unreadable { path, reason } => {
                write!(f, "⚠️ 加载映射文件 {} 时出错: {}", path.display(), reason)
            }
        }
    }
}

/// Load and merge all mapping sources under `dir`.
///
/// Never fails: each absent or unreadable source yields a warning and an
/// empty category, so every lookup in it falls back to the raw key.
pub fn load_store(dir: &Path) -> (MappingStore, Vec<LoadWarning>) {
    let mut store = MappingStore::new();
    let mut warnings = Vec::new();

    // wfdata.json carries several categories at once.
    match read_json_table::<HashMap<String, HashMap<String, String>>>(&dir.join(MAIN_MAPPING_FILE))
    {
        Ok(tables) => {
            for (category, table) in tables {
                store.insert_category(&category, table);
            }
        }
        Err(w) => warnings.push(w),
    }

    // The dedicated node file overrides wfdata's node entries.
    for (file, category) in [
        (NODE_MAPPING_FILE, category::NODES),
        (BOUNTY_MAPPING_FILE, category::BOUNTY_JOBS),
        (DICTIONARY_FILE, category::DICTIONARY),
    ] {
        match read_json_table::<HashMap<String, String>>(&dir.join(file)) {
            Ok(table) => store.insert_category(category, table),
            Err(w) => warnings.push(w),
        }
    }

    (store, warnings)
}

fn read_json_table<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadWarning> {
    if !path.exists() {
        return Err(LoadWarning::Missing {
            path: path.to_path_buf(),
        });
    }
    let body = fs::read_to_string(path).map_err(|e| LoadWarning::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&body).map_err(|e| LoadWarning::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

//! Localization: per-language JSON bundles keyed by dotted path
//!
//! Lookup order is selected language, then the English bundle, then the key
//! itself. Language changes all go through `switch_language`, which reloads
//! the bundle and persists the selection for the next run.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use shared::Language;

use crate::config::I18nConfig;
use crate::error::{AppError, AppResult};

/// Loaded translation state for one selected language
#[derive(Debug, Clone)]
pub struct I18n {
    language: Language,
    values: Value,
    fallback: Value,
    locales_dir: PathBuf,
    selection_file: PathBuf,
}

impl I18n {
    /// Initialize from configuration, restoring a persisted selection when
    /// one exists.
    pub fn load(config: &I18nConfig) -> AppResult<Self> {
        let selection_file = PathBuf::from(&config.selection_file);
        let language = read_selection(&selection_file)
            .or_else(|| Language::from_code(&config.default_language))
            .unwrap_or_default();

        Self::load_language(config, language)
    }

    fn load_language(config: &I18nConfig, language: Language) -> AppResult<Self> {
        let locales_dir = PathBuf::from(&config.locales_dir);
        let values = load_bundle(&locales_dir, language)?;
        let fallback = if language == Language::English {
            values.clone()
        } else {
            load_bundle(&locales_dir, Language::English)?
        };

        Ok(Self {
            language,
            values,
            fallback,
            locales_dir,
            selection_file: PathBuf::from(&config.selection_file),
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch to another language: reload the bundle and persist the choice.
    /// This is the single mutation point for translation state.
    pub fn switch_language(&mut self, language: Language) -> AppResult<()> {
        if language != self.language {
            // Load both bundles before touching any state so a failed
            // switch leaves the current language fully intact
            let values = load_bundle(&self.locales_dir, language)?;
            let fallback = if language == Language::English {
                values.clone()
            } else {
                load_bundle(&self.locales_dir, Language::English)?
            };
            self.values = values;
            self.fallback = fallback;
            self.language = language;
        }
        fs::write(&self.selection_file, language.code())?;
        tracing::info!(language = language.code(), "language selected");
        Ok(())
    }

    /// Resolve a dotted key (e.g. `chatbot.title`) to localized text.
    /// Missing keys echo the key itself, matching the original front-end.
    pub fn text(&self, key: &str) -> String {
        self.lookup(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Resolve a dotted key to the raw value (string, array, or object)
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        lookup_path(&self.values, key).or_else(|| lookup_path(&self.fallback, key))
    }
}

fn lookup_path<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(root, |value, segment| value.get(segment))
}

fn load_bundle(locales_dir: &Path, language: Language) -> AppResult<Value> {
    let path = locales_dir.join(language.code()).join("translation.json");
    let raw = fs::read_to_string(&path).map_err(|e| {
        AppError::Translation(format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Translation(format!("invalid JSON in {}: {}", path.display(), e)))
}

fn read_selection(path: &Path) -> Option<Language> {
    let code = fs::read_to_string(path).ok()?;
    Language::from_code(&code)
}

//! Locale Table Translator
//!
//! Localizes command payloads from a static table of translations keyed by
//! locale and source string. Tables are plain TOML:
//!
//! ```toml
//! [de]
//! play = "abspielen"
//! "Play a song" = "Spielt ein Lied"
//! ```
//!
//! Localizations declared on the command itself take precedence over the
//! table.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::{Map, Value};

use cmdsync_domain::entities::CommandDefinition;
use cmdsync_domain::error::{Error, Result};
use cmdsync_domain::ports::providers::CommandTranslator;

/// Translations for one locale, source string to translated string
pub type LocaleTable = BTreeMap<String, String>;

/// Translator backed by an in-memory locale table
#[derive(Debug, Clone, Default)]
pub struct LocaleTableTranslator {
    locales: BTreeMap<String, LocaleTable>,
}

impl LocaleTableTranslator {
    /// Create a translator from an already built table
    pub fn new(locales: BTreeMap<String, LocaleTable>) -> Self {
        Self { locales }
    }

    /// Parse a TOML table
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let locales: BTreeMap<String, LocaleTable> = toml::from_str(content)
            .map_err(|e| Error::translation(format!("Invalid locale table: {e}")))?;
        Ok(Self::new(locales))
    }

    /// Load a TOML table from disk
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to read locale table {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Add or replace a single translation
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        source: impl Into<String>,
        translated: impl Into<String>,
    ) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(source.into(), translated.into());
    }

    /// Locales with at least one translation
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    fn localize_node(&self, node: &mut Map<String, Value>, with_description: bool) -> Result<()> {
        if let Some(name) = node.get("name").and_then(Value::as_str).map(str::to_owned) {
            let translated = self.lookup(&name);
            for (_, text) in &translated {
                if text.chars().any(|c| c.is_uppercase() || c.is_whitespace()) {
                    return Err(Error::translation(format!(
                        "translation '{text}' of command name '{name}' is not a valid name"
                    )));
                }
            }
            merge_localizations(node, "name_localizations", translated);
        }

        if with_description
            && let Some(description) = node
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_owned)
        {
            let translated = self.lookup(&description);
            merge_localizations(node, "description_localizations", translated);
        }

        if let Some(Value::Array(options)) = node.get_mut("options") {
            for option in options.iter_mut() {
                if let Value::Object(option) = option {
                    self.localize_node(option, true)?;
                }
            }
        }

        if let Some(Value::Array(choices)) = node.get_mut("choices") {
            for choice in choices.iter_mut() {
                if let Value::Object(choice) = choice {
                    self.localize_node(choice, false)?;
                }
            }
        }

        Ok(())
    }

    fn lookup(&self, source: &str) -> Vec<(String, String)> {
        self.locales
            .iter()
            .filter_map(|(locale, table)| {
                table
                    .get(source)
                    .map(|text| (locale.clone(), text.clone()))
            })
            .collect()
    }
}

fn merge_localizations(node: &mut Map<String, Value>, key: &str, translated: Vec<(String, String)>) {
    if translated.is_empty() {
        return;
    }
    let entry = node
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(localizations) = entry {
        for (locale, text) in translated {
            localizations.entry(locale).or_insert(Value::String(text));
        }
    }
}

#[async_trait]
impl CommandTranslator for LocaleTableTranslator {
    async fn translate(&self, command: &CommandDefinition) -> Result<Value> {
        let mut payload = command.to_payload();
        if let Value::Object(node) = &mut payload {
            self.localize_node(node, true)?;
        }
        Ok(payload)
    }

    fn provider_name(&self) -> &str {
        "locale_table"
    }
}

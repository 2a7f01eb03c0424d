// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation store: country names keyed by country code and language code.
//!
//! The data is a JSON array with one object per country. Each object has a
//! `code` field and one string field per language:
//!
//! ```json
//! [{"code": "ca", "en": "Canada", "fr": "Canada", "ja": "カナダ"}]
//! ```
//!
//! Lookups never fail. Misses come back as [`COUNTRY_NOT_FOUND`] or
//! [`TRANSLATION_NOT_AVAILABLE`] and are meant to be shown to the user as-is.

use crate::languages;
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const COUNTRY_NOT_FOUND: &str = "Country not found";
pub const TRANSLATION_NOT_AVAILABLE: &str = "Translation not available for this language";

const BUNDLED: &str = include_str!("../data/sample.json");

/// One country as it appears in the data file.
#[derive(Debug, Deserialize)]
struct RawCountry {
    code: String,
    #[serde(flatten)]
    names: Map<String, Value>,
}

/// All translations of one country's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTranslations {
    code: String,
    /// (language code, translated name) in file order.
    names: Vec<(String, String)>,
}

impl CountryTranslations {
    fn from_raw(raw: RawCountry) -> Result<Self> {
        let mut names = Vec::with_capacity(raw.names.len());
        for (language, value) in raw.names {
            match value {
                Value::String(name) => {
                    if !languages::is_iso639_1_shaped(&language) {
                        debug!("country '{}': unusual language key '{}'", raw.code, language);
                    }
                    names.push((language, name));
                }
                other => bail!(
                    "country '{}': translation for '{}' must be a string, found {}",
                    raw.code,
                    language,
                    other
                ),
            }
        }
        Ok(Self {
            code: raw.code,
            names,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// The country's name in `language`, if the data has one.
    pub fn name_in(&self, language: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, name)| name.as_str())
    }

    /// Language codes this country has a translation for.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|(code, _)| code.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    countries: Vec<CountryTranslations>,
    index: HashMap<String, usize>,
}

impl TranslationStore {
    /// The translations shipped inside the binary.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED).context("parsing bundled translation data")
    }

    /// Load translations from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading translations from {}", path.display()))?;
        let store = Self::parse(&content)
            .with_context(|| format!("parsing translations from {}", path.display()))?;
        info!(
            "loaded translations for {} countries from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Build a store from the JSON text of a translation file.
    ///
    /// A country appearing twice keeps its first position but takes the
    /// later record's translations.
    pub fn parse(json: &str) -> Result<Self> {
        let raw: Vec<RawCountry> = serde_json::from_str(json)
            .context("translation data must be a JSON array of objects with a string `code`")?;

        let mut store = Self::default();
        for country in raw {
            store.insert(CountryTranslations::from_raw(country)?);
        }
        Ok(store)
    }

    fn insert(&mut self, country: CountryTranslations) {
        match self.index.get(&country.code) {
            Some(&slot) => {
                warn!("duplicate country '{}' in translation data", country.code);
                self.countries[slot] = country;
            }
            None => {
                self.index.insert(country.code.clone(), self.countries.len());
                self.countries.push(country);
            }
        }
    }

    pub fn country(&self, code: &str) -> Option<&CountryTranslations> {
        self.index.get(code).map(|&slot| &self.countries[slot])
    }

    /// Name of `country` in `language`.
    ///
    /// Returns [`COUNTRY_NOT_FOUND`] if the country is unknown, and
    /// [`TRANSLATION_NOT_AVAILABLE`] if it is known but has no entry for the
    /// language.
    pub fn translate(&self, country: &str, language: &str) -> &str {
        match self.country(country) {
            None => COUNTRY_NOT_FOUND,
            Some(record) => record.name_in(language).unwrap_or(TRANSLATION_NOT_AVAILABLE),
        }
    }

    /// All country codes, in load order.
    pub fn countries(&self) -> Vec<&str> {
        self.countries.iter().map(CountryTranslations::code).collect()
    }

    /// Language codes available for `country`; empty if the country is unknown.
    pub fn country_languages(&self, country: &str) -> Vec<&str> {
        self.country(country)
            .map(|record| record.languages().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country Translator — look up country names in other languages.
//!
//! Two read-only tables back an interactive console:
//!
//! 1. **Codes**: ISO 3166-1 alpha-2/alpha-3 codes to English country names,
//!    loaded from a tab-delimited reference file.
//! 2. **Translations**: per-country names keyed by ISO 639-1 language code,
//!    loaded from a JSON array.
//!
//! Lookups never fail. A miss is reported with a fixed sentinel string
//! (see [`is_sentinel`]) that callers display like any other result. Only
//! loading can fail, and it does so by returning an error.

pub mod codes;
pub mod console;
pub mod languages;
pub mod logging;
pub mod lookup;
pub mod translations;

pub use codes::CountryCodeTable;
pub use translations::{CountryTranslations, TranslationStore};

/// Whether `value` is one of the strings lookups return on a miss.
pub fn is_sentinel(value: &str) -> bool {
    matches!(
        value,
        codes::UNKNOWN_COUNTRY_CODE
            | codes::UNKNOWN_COUNTRY
            | translations::COUNTRY_NOT_FOUND
            | translations::TRANSLATION_NOT_AVAILABLE
    )
}

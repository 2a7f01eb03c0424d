// SPDX-License-Identifier: PMPL-1.0-or-later

//! One-shot lookups behind the `name`, `code`, `count`, `translate` and
//! `languages` subcommands.
//!
//! Each writes its answer to `out`. Misses are written like any other answer,
//! highlighted in yellow when colour is on.

use crate::codes::CountryCodeTable;
use crate::console;
use crate::languages;
use crate::translations::{TranslationStore, COUNTRY_NOT_FOUND};
use colored::*;
use std::io::{self, Write};

fn write_value<W: Write>(out: &mut W, value: &str) -> io::Result<()> {
    if crate::is_sentinel(value) {
        writeln!(out, "{}", value.yellow())
    } else {
        writeln!(out, "{}", value.bold())
    }
}

/// Country name for a code.
pub fn name<W: Write>(out: &mut W, table: &CountryCodeTable, code: &str) -> io::Result<()> {
    write_value(out, table.code_to_name(code))
}

/// Code for a country name.
pub fn code<W: Write>(out: &mut W, table: &CountryCodeTable, name: &str) -> io::Result<()> {
    write_value(out, table.name_to_code(name))
}

pub fn count<W: Write>(out: &mut W, table: &CountryCodeTable) -> io::Result<()> {
    writeln!(out, "{}", table.count_countries())
}

pub fn translate<W: Write>(
    out: &mut W,
    store: &TranslationStore,
    country: &str,
    language: &str,
) -> io::Result<()> {
    write_value(out, store.translate(country, language))
}

/// A header, then one line per language: code, display name and, when it
/// differs, the language's name for itself.
pub fn languages<W: Write>(out: &mut W, store: &TranslationStore, country: &str) -> io::Result<()> {
    if store.country(country).is_none() {
        return write_value(out, COUNTRY_NOT_FOUND);
    }

    writeln!(out, "{}", format!("Languages for {}:", country).bold())?;
    for code in store.country_languages(country) {
        let name = console::language_display_name(store, code);
        match languages::native_name(code) {
            Some(native) if native != name => writeln!(out, "  {:4} {} ({})", code, name, native)?,
            _ => writeln!(out, "  {:4} {}", code, name)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: &str = "Canada\tCA\tCAN\t124\nJapan\tJP\tJPN\t392\n";
    const DATA: &str = r#"[
        {"code":"ca","en":"Canada","fr":"Canada","xx":"Kanata"},
        {"code":"aq"}
    ]"#;

    fn output<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn name_and_code() {
        let table = CountryCodeTable::parse(CODES);
        assert_eq!(output(|out| name(out, &table, "jpn")), "Japan\n");
        assert_eq!(output(|out| name(out, &table, "XX")), "unknown country code\n");
        assert_eq!(output(|out| code(out, &table, "Canada")), "CA\n");
        assert_eq!(output(|out| code(out, &table, "Atlantis")), "unknown country\n");
    }

    #[test]
    fn count_countries() {
        let table = CountryCodeTable::parse(CODES);
        assert_eq!(output(|out| count(out, &table)), "2\n");
    }

    #[test]
    fn translate_prints_value_or_sentinel() {
        let store = TranslationStore::parse(DATA).unwrap();
        assert_eq!(output(|out| translate(out, &store, "ca", "fr")), "Canada\n");
        assert_eq!(
            output(|out| translate(out, &store, "ca", "de")),
            "Translation not available for this language\n"
        );
        assert_eq!(
            output(|out| translate(out, &store, "zz", "en")),
            "Country not found\n"
        );
    }

    #[test]
    fn languages_listing() {
        let store = TranslationStore::parse(DATA).unwrap();
        assert_eq!(
            output(|out| languages(out, &store, "ca")),
            "Languages for ca:\n  en   English\n  fr   French (Français)\n  xx   xx\n"
        );
    }

    #[test]
    fn languages_for_unknown_and_empty_country() {
        let store = TranslationStore::parse(DATA).unwrap();
        assert_eq!(output(|out| languages(out, &store, "zz")), "Country not found\n");
        assert_eq!(output(|out| languages(out, &store, "aq")), "Languages for aq:\n");
    }
}

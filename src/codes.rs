// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country code table: ISO 3166-1 alpha-2/alpha-3 codes to country names.
//!
//! The reference data is a tab-delimited file with one country per line:
//!
//! ```text
//! Canada	CA	CAN	124
//! ```
//!
//! Both codes are folded into a single code -> name map. The numeric code is
//! read past but never stored. Lines that don't split into exactly four
//! fields, ignoring trailing empty ones, are skipped.

use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Returned by [`CountryCodeTable::code_to_name`] for codes not in the table.
pub const UNKNOWN_COUNTRY_CODE: &str = "unknown country code";

/// Returned by [`CountryCodeTable::name_to_code`] for names not in the table.
pub const UNKNOWN_COUNTRY: &str = "unknown country";

const EXPECTED_FIELDS: usize = 4;

const BUNDLED: &str = include_str!("../data/country-codes.txt");

#[derive(Debug, Clone, Default)]
pub struct CountryCodeTable {
    names: HashMap<String, String>,
    /// Codes in the order they were first loaded, for deterministic reverse lookup.
    order: Vec<String>,
}

impl CountryCodeTable {
    /// The table shipped inside the binary.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED)
    }

    /// Load the table from a tab-delimited file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading country codes from {}", path.display()))?;
        let table = Self::parse(&content);
        info!(
            "loaded {} country codes ({} countries) from {}",
            table.len(),
            table.count_countries(),
            path.display()
        );
        Ok(table)
    }

    /// Build a table from tab-delimited text. Malformed lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut table = Self::default();

        for (idx, line) in content.lines().enumerate() {
            let mut fields: Vec<&str> = line.split('\t').collect();
            // trailing empty fields don't count
            while fields.last() == Some(&"") {
                fields.pop();
            }
            if fields.len() != EXPECTED_FIELDS {
                debug!(
                    "skipping country code line {}: expected {} fields, found {}",
                    idx + 1,
                    EXPECTED_FIELDS,
                    fields.len()
                );
                continue;
            }

            let name = fields[0].trim();
            table.insert(fields[1].trim(), name);
            table.insert(fields[2].trim(), name);
        }

        table
    }

    fn insert(&mut self, code: &str, name: &str) {
        if !self.names.contains_key(code) {
            self.order.push(code.to_string());
        }
        self.names.insert(code.to_string(), name.to_string());
    }

    /// Country name for a 2- or 3-letter code.
    ///
    /// Case-insensitive and tolerant of surrounding whitespace. Unknown codes
    /// yield [`UNKNOWN_COUNTRY_CODE`].
    pub fn code_to_name(&self, code: &str) -> &str {
        self.names
            .get(&code.trim().to_uppercase())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_COUNTRY_CODE)
    }

    /// Code for an exact (case-sensitive) country name.
    ///
    /// Every country has two codes; this returns whichever was loaded first,
    /// which is the alpha-2 code for well-formed data. Unknown names yield
    /// [`UNKNOWN_COUNTRY`].
    pub fn name_to_code(&self, name: &str) -> &str {
        self.order
            .iter()
            .find(|code| self.names.get(code.as_str()).map(String::as_str) == Some(name))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_COUNTRY)
    }

    /// Number of distinct country names in the table.
    pub fn count_countries(&self) -> usize {
        self.names.values().collect::<HashSet<_>>().len()
    }

    /// Number of codes (alpha-2 and alpha-3 combined).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Canada\tCA\tCAN\t124\nFrance\tFR\tFRA\t250\n";

    #[test]
    fn both_codes_map_to_name() {
        let table = CountryCodeTable::parse(SAMPLE);
        assert_eq!(table.code_to_name("CA"), "Canada");
        assert_eq!(table.code_to_name("CAN"), "Canada");
        assert_eq!(table.code_to_name("FRA"), "France");
    }

    #[test]
    fn lookup_normalises_case_and_whitespace() {
        let table = CountryCodeTable::parse(SAMPLE);
        assert_eq!(table.code_to_name("ca"), "Canada");
        assert_eq!(table.code_to_name("  can \n"), "Canada");
        assert_eq!(table.code_to_name("us"), table.code_to_name("US"));
    }

    #[test]
    fn unknown_code_is_sentinel() {
        let table = CountryCodeTable::parse(SAMPLE);
        assert_eq!(table.code_to_name("XX"), UNKNOWN_COUNTRY_CODE);
        assert_eq!(table.code_to_name(""), UNKNOWN_COUNTRY_CODE);
    }

    #[test]
    fn malformed_lines_skipped() {
        let content = "Canada\tCA\tCAN\t124\n\
                       Header only\n\
                       Too\tfew\tfields\n\
                       Way\ttoo\tmany\tfields\there\n\
                       \n\
                       Spain\tES\tESP\t724\n";
        let table = CountryCodeTable::parse(content);
        assert_eq!(table.count_countries(), 2);
        assert_eq!(table.len(), 4);
        assert_eq!(table.code_to_name("FEW"), UNKNOWN_COUNTRY_CODE);
    }

    #[test]
    fn trailing_empty_fields_ignored() {
        let table = CountryCodeTable::parse("Canada\tCA\tCAN\t124\t\nSpain\tES\tESP\t\n");
        assert_eq!(table.code_to_name("CA"), "Canada");
        assert_eq!(table.code_to_name("CAN"), "Canada");
        assert_eq!(table.code_to_name("ES"), UNKNOWN_COUNTRY_CODE);
        assert_eq!(table.count_countries(), 1);
    }

    #[test]
    fn lookup_trims_unicode_whitespace_only() {
        let table = CountryCodeTable::parse(SAMPLE);
        assert_eq!(table.code_to_name("\u{a0}CA\u{a0}"), "Canada");
        assert_eq!(table.code_to_name("\0CA"), UNKNOWN_COUNTRY_CODE);
    }

    #[test]
    fn fields_are_trimmed() {
        let table = CountryCodeTable::parse(" Canada \t CA\tCAN \t124\r\n");
        assert_eq!(table.code_to_name("CA"), "Canada");
        assert_eq!(table.code_to_name("CAN"), "Canada");
    }

    #[test]
    fn reverse_lookup_prefers_alpha_2() {
        let table = CountryCodeTable::parse(SAMPLE);
        assert_eq!(table.name_to_code("Canada"), "CA");
        assert_eq!(table.name_to_code("France"), "FR");
    }

    #[test]
    fn reverse_lookup_is_case_sensitive() {
        let table = CountryCodeTable::parse(SAMPLE);
        assert_eq!(table.name_to_code("canada"), UNKNOWN_COUNTRY);
        assert_eq!(table.name_to_code("Atlantis"), UNKNOWN_COUNTRY);
    }

    #[test]
    fn count_is_distinct_names() {
        assert_eq!(CountryCodeTable::parse(SAMPLE).count_countries(), 2);
        assert_eq!(CountryCodeTable::parse("").count_countries(), 0);
        assert!(CountryCodeTable::parse("").is_empty());
    }

    #[test]
    fn bundled_table_loads() {
        let table = CountryCodeTable::bundled();
        assert!(!table.is_empty());
        assert_eq!(table.code_to_name("DE"), "Germany");
        assert_eq!(table.code_to_name("usa"), "United States of America");
        assert_eq!(table.len(), table.count_countries() * 2);
    }
}

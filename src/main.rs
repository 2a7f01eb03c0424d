// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-translator: see a country's name in another language
//!
//! With no subcommand, starts an interactive session that lists countries,
//! then the languages available for the chosen one, then prints the
//! translation. Subcommands answer a single lookup and exit.

use anyhow::Result;
use clap::{Parser, Subcommand};
use country_translator::{console, logging, lookup, CountryCodeTable, TranslationStore};
use log::warn;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "country-translator")]
#[command(version)]
#[command(about = "Look up country names translated into other languages")]
#[command(long_about = None)]
struct Cli {
    /// Country code reference file (tab-delimited) instead of the bundled one
    #[arg(long, value_name = "FILE", global = true)]
    countries: Option<PathBuf>,

    /// Translation file (JSON) instead of the bundled one
    #[arg(long, value_name = "FILE", global = true)]
    translations: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Run,

    /// Country name for a 2- or 3-letter country code
    Name {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Country code for an exact country name
    Code {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Number of countries in the code table
    Count,

    /// A country's name in one language
    Translate {
        /// Country code as used in the translation data, e.g. "ca"
        #[arg(value_name = "COUNTRY")]
        country: String,

        /// Language code, e.g. "fr"
        #[arg(value_name = "LANGUAGE")]
        language: String,
    },

    /// Languages a country has translations for
    Languages {
        #[arg(value_name = "COUNTRY")]
        country: String,
    },
}

impl Cli {
    fn code_table(&self) -> Result<CountryCodeTable> {
        let table = match &self.countries {
            Some(path) => CountryCodeTable::load(path)?,
            None => CountryCodeTable::bundled(),
        };
        if table.is_empty() {
            warn!("country code table is empty");
        }
        Ok(table)
    }

    fn translation_store(&self) -> Result<TranslationStore> {
        let store = match &self.translations {
            Some(path) => TranslationStore::load(path)?,
            None => TranslationStore::bundled()?,
        };
        if store.is_empty() {
            warn!("translation data has no countries");
        }
        Ok(store)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command.as_ref().unwrap_or(&Commands::Run) {
        Commands::Run => {
            let store = cli.translation_store()?;
            console::run(&store)?;
        }

        Commands::Name { code } => {
            let table = cli.code_table()?;
            lookup::name(&mut io::stdout().lock(), &table, code)?;
        }

        Commands::Code { name } => {
            let table = cli.code_table()?;
            lookup::code(&mut io::stdout().lock(), &table, name)?;
        }

        Commands::Count => {
            let table = cli.code_table()?;
            lookup::count(&mut io::stdout().lock(), &table)?;
        }

        Commands::Translate { country, language } => {
            let store = cli.translation_store()?;
            lookup::translate(&mut io::stdout().lock(), &store, country, language)?;
        }

        Commands::Languages { country } => {
            let store = cli.translation_store()?;
            lookup::languages(&mut io::stdout().lock(), &store, country)?;
        }
    }

    Ok(())
}

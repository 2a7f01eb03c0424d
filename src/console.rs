// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive session: pick a country, pick a language, see the translation.
//!
//! The session is a small state machine:
//!
//! ```text
//! AwaitCountry -> AwaitLanguage -> ShowResult -> AwaitCountry
//!       |               |               |
//!       +---------------+---------------+--> Terminated  (on "quit" or end of input)
//! ```
//!
//! Menus show display names, but the store is keyed by codes. Each menu
//! keeps the (name, code) pairs it showed and [`resolve`] maps the typed name
//! back to its code.

use crate::languages;
use crate::translations::TranslationStore;
use anyhow::Result;
use log::debug;
use std::io::{self, BufRead, Write};

/// Typed at any prompt to end the session. Matched exactly.
pub const QUIT: &str = "quit";

/// Pseudo-country whose entries name languages, when the data provides one.
pub const LANGUAGE_RECORD: &str = "language";

/// Language used for the country menu.
pub const MENU_LANGUAGE: &str = "en";

/// One line of a menu: what the user sees and the key it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub name: String,
    pub code: String,
}

impl MenuEntry {
    fn new(name: &str, code: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
        }
    }
}

/// Every country by its English name, sorted by name. The `language`
/// record isn't a country and is left out.
pub fn country_menu(store: &TranslationStore) -> Vec<MenuEntry> {
    let mut menu: Vec<MenuEntry> = store
        .countries()
        .into_iter()
        .filter(|code| *code != LANGUAGE_RECORD)
        .map(|code| MenuEntry::new(store.translate(code, MENU_LANGUAGE), code))
        .collect();
    menu.sort_by(|a, b| a.name.cmp(&b.name));
    menu
}

/// Every language `country` has a translation for, sorted by display name.
pub fn language_menu(store: &TranslationStore, country: &str) -> Vec<MenuEntry> {
    let mut menu: Vec<MenuEntry> = store
        .country_languages(country)
        .into_iter()
        .map(|code| MenuEntry::new(language_display_name(store, code), code))
        .collect();
    menu.sort_by(|a, b| a.name.cmp(&b.name));
    menu
}

/// How a language code is shown: the data's own `language` record first,
/// then the ISO 639-1 English name, then the code itself.
pub fn language_display_name<'a>(store: &'a TranslationStore, code: &'a str) -> &'a str {
    store
        .country(LANGUAGE_RECORD)
        .and_then(|record| record.name_in(code))
        .or_else(|| languages::language_name(code))
        .unwrap_or(code)
}

/// Code behind the first menu entry named `name`.
///
/// Input that names no entry is returned unchanged, so the store sees it as
/// a key and answers with its usual miss sentinel.
pub fn resolve<'a>(menu: &'a [MenuEntry], name: &'a str) -> &'a str {
    menu.iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.code.as_str())
        .unwrap_or(name)
}

/// What the user picked: the text they typed and the key it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Selection {
    name: String,
    code: String,
}

impl Selection {
    fn resolve(menu: &[MenuEntry], name: String) -> Self {
        let code = resolve(menu, &name).to_string();
        debug!("'{}' resolved to '{}'", name, code);
        Self { name, code }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    AwaitCountry,
    AwaitLanguage {
        country: Selection,
    },
    ShowResult {
        country: Selection,
        language: Selection,
    },
    Terminated,
}

/// A session over any line-oriented input and output.
pub struct Console<'s, R, W> {
    store: &'s TranslationStore,
    input: R,
    output: W,
}

impl<'s, R: BufRead, W: Write> Console<'s, R, W> {
    pub fn new(store: &'s TranslationStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(mut self) -> Result<()> {
        let mut state = State::AwaitCountry;
        while state != State::Terminated {
            state = self.step(state)?;
        }
        debug!("session ended");
        Ok(())
    }

    fn step(&mut self, state: State) -> Result<State> {
        let next = match state {
            State::AwaitCountry => {
                let menu = country_menu(self.store);
                match self.choose(&menu, "Select a country from above:")? {
                    Some(name) => State::AwaitLanguage {
                        country: Selection::resolve(&menu, name),
                    },
                    None => State::Terminated,
                }
            }
            State::AwaitLanguage { country } => {
                let menu = language_menu(self.store, &country.code);
                match self.choose(&menu, "Select a language from above:")? {
                    Some(name) => State::ShowResult {
                        language: Selection::resolve(&menu, name),
                        country,
                    },
                    None => State::Terminated,
                }
            }
            State::ShowResult { country, language } => {
                let translation = self.store.translate(&country.code, &language.code);
                writeln!(
                    self.output,
                    "{} in {} is {}",
                    country.name, language.name, translation
                )?;
                writeln!(self.output, "Press enter to continue or quit to exit.")?;
                self.output.flush()?;
                match self.read_line()? {
                    Some(_) => State::AwaitCountry,
                    None => State::Terminated,
                }
            }
            State::Terminated => State::Terminated,
        };
        Ok(next)
    }

    /// Print a menu and a prompt, then read the user's choice.
    fn choose(&mut self, menu: &[MenuEntry], prompt: &str) -> Result<Option<String>> {
        for entry in menu {
            writeln!(self.output, "{}", entry.name)?;
        }
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its terminator. `None` means quit or end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        if line == QUIT {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Run a session on the process's standard input and output.
pub fn run(store: &TranslationStore) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(store, stdin.lock(), stdout.lock()).run()
}

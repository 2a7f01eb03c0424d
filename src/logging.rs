// SPDX-License-Identifier: PMPL-1.0-or-later

//! Diagnostic logging to stderr.
//!
//! User-facing output (menus, prompts, lookup results) goes to stdout and
//! never through the logger.

use log::LevelFilter;
use std::io;

/// Map the number of `-v` flags to a level: warnings by default, then info, then debug.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the global logger. Can only succeed once per process.
pub fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .level(level_for(verbosity))
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} country-translator] {}",
                record.level(),
                message
            ))
        })
        .chain(io::stderr())
        .apply()
}

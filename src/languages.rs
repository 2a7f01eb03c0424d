// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language names.
//!
//! Translation data keys its entries by two-letter language code. When the
//! data doesn't carry its own `language` record, these names are what the
//! console shows the user instead of the bare code.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// (code, English name, native name)
const LANGUAGES: &[(&str, &str, &str)] = &[
    ("ar", "Arabic", "العربية"),
    ("bg", "Bulgarian", "Български"),
    ("ca", "Catalan", "Català"),
    ("cs", "Czech", "Čeština"),
    ("da", "Danish", "Dansk"),
    ("de", "German", "Deutsch"),
    ("el", "Greek", "Ελληνικά"),
    ("en", "English", "English"),
    ("eo", "Esperanto", "Esperanto"),
    ("es", "Spanish", "Español"),
    ("et", "Estonian", "Eesti"),
    ("eu", "Basque", "Euskara"),
    ("fa", "Persian", "فارسی"),
    ("fi", "Finnish", "Suomi"),
    ("fr", "French", "Français"),
    ("ga", "Irish", "Gaeilge"),
    ("he", "Hebrew", "עברית"),
    ("hi", "Hindi", "हिन्दी"),
    ("hr", "Croatian", "Hrvatski"),
    ("hu", "Hungarian", "Magyar"),
    ("id", "Indonesian", "Bahasa Indonesia"),
    ("is", "Icelandic", "Íslenska"),
    ("it", "Italian", "Italiano"),
    ("ja", "Japanese", "日本語"),
    ("ko", "Korean", "한국어"),
    ("lt", "Lithuanian", "Lietuvių"),
    ("lv", "Latvian", "Latviešu"),
    ("ms", "Malay", "Bahasa Melayu"),
    ("nb", "Norwegian Bokmål", "Norsk bokmål"),
    ("nl", "Dutch", "Nederlands"),
    ("no", "Norwegian", "Norsk"),
    ("pl", "Polish", "Polski"),
    ("pt", "Portuguese", "Português"),
    ("ro", "Romanian", "Română"),
    ("ru", "Russian", "Русский"),
    ("sk", "Slovak", "Slovenčina"),
    ("sl", "Slovenian", "Slovenščina"),
    ("sr", "Serbian", "Српски"),
    ("sv", "Swedish", "Svenska"),
    ("th", "Thai", "ไทย"),
    ("tr", "Turkish", "Türkçe"),
    ("uk", "Ukrainian", "Українська"),
    ("vi", "Vietnamese", "Tiếng Việt"),
    ("zh", "Chinese", "中文"),
];

fn entry(code: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    LANGUAGES.iter().find(|(c, _, _)| *c == code)
}

/// English name of a language code, e.g. `"fr"` -> `"French"`.
///
/// Codes are matched exactly; ISO 639-1 codes are lowercase.
///
/// # Examples
/// ```
/// assert_eq!(country_translator::languages::language_name("ja"), Some("Japanese"));
/// assert_eq!(country_translator::languages::language_name("FR"), None);
/// ```
pub fn language_name(code: &str) -> Option<&'static str> {
    entry(code).map(|(_, name, _)| *name)
}

/// The language's name for itself, e.g. `"de"` -> `"Deutsch"`.
pub fn native_name(code: &str) -> Option<&'static str> {
    entry(code).map(|(_, _, native)| *native)
}

/// Whether a code has the shape of an ISO 639-1 code: two lowercase ASCII letters.
pub fn is_iso639_1_shaped(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase())
}

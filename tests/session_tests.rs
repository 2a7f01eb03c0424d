// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scripted interactive sessions against the bundled translation data

use country_translator::console::{country_menu, Console};
use country_translator::TranslationStore;

fn run_session(input: &str) -> String {
    let store = TranslationStore::bundled().unwrap();
    let mut output = Vec::new();
    Console::new(&store, input.as_bytes(), &mut output)
        .run()
        .expect("session should not fail");
    String::from_utf8(output).unwrap()
}

#[test]
fn test_quit_immediately() {
    let out = run_session("quit\n");
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.last(), Some(&"Select a country from above:"));
    assert_eq!(lines.len(), TranslationStore::bundled().unwrap().len() + 1);
}

#[test]
fn test_country_list_is_sorted() {
    let out = run_session("quit\n");
    let names: Vec<&str> = out
        .lines()
        .take_while(|line| *line != "Select a country from above:")
        .collect();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert!(names.contains(&"Canada"));
    assert!(names.contains(&"United States of America"));
}

#[test]
fn test_translate_spain_to_german() {
    let out = run_session("Spain\nGerman\nquit\n");
    assert!(out.contains("Spain in German is Spanien\n"), "{}", out);
}

#[test]
fn test_two_rounds() {
    let out = run_session("Japan\nFrench\n\nItaly\nDutch\nquit\n");
    assert!(out.contains("Japan in French is Japon\n"));
    assert!(out.contains("Italy in Dutch is Italië\n"));
    assert_eq!(out.matches("Press enter to continue or quit to exit.").count(), 2);
}

#[test]
fn test_language_list_only_covers_country() {
    // Egypt has no Japanese entry in the bundled data
    let out = run_session("Egypt\nquit\n");
    let languages: Vec<&str> = out
        .lines()
        .skip_while(|line| *line != "Select a country from above:")
        .skip(1)
        .take_while(|line| *line != "Select a language from above:")
        .collect();

    assert!(languages.contains(&"English"));
    assert!(!languages.contains(&"Japanese"));
    assert!(!languages.iter().any(|l| *l == "code"));
}

#[test]
fn test_menu_names_resolve_to_known_codes() {
    let store = TranslationStore::bundled().unwrap();
    for entry in country_menu(&store) {
        assert!(store.country(&entry.code).is_some(), "{:?}", entry);
    }
}

//! Rotating headline phrases, per language.
//!
//! These are compiled in rather than fetched: the typer must be able to
//! start even when every network load fails. The English list doubles as
//! the fallback for languages without a registered list and is guaranteed
//! non-empty.

/// Language used when no preference is stored and as the fallback for
/// failed loads and unregistered phrase lists.
pub const DEFAULT_LANGUAGE: &str = "en";

const EN: &[&str] = &[
    "Beautifully",
    "Professionally",
    "Effortlessly",
    "Instantly",
    "Perfectly",
];

const HE: &[&str] = &["בצורה מדהימה", "בקלות", "במקצועיות", "מיד", "בצורה מושלמת"];

const ES: &[&str] = &[
    "Hermosamente",
    "Profesionalmente",
    "Sin Esfuerzo",
    "Instantáneamente",
    "Perfectamente",
];

const FR: &[&str] = &[
    "Magnifiquement",
    "Professionnellement",
    "Sans Effort",
    "Instantanément",
    "Parfaitement",
];

/// Languages with a registered phrase list, in picker order.
pub const REGISTERED_LANGUAGES: &[&str] = &["en", "he", "es", "fr"];

/// The phrase list registered for a language, if any.
#[must_use]
pub fn for_language(code: &str) -> Option<&'static [&'static str]> {
    match code {
        "en" => Some(EN),
        "he" => Some(HE),
        "es" => Some(ES),
        "fr" => Some(FR),
        _ => None,
    }
}

/// The phrase list for a language, substituting the default language's
/// list when none is registered.
#[must_use]
pub fn for_language_or_default(code: &str) -> Vec<String> {
    for_language(code)
        .unwrap_or(EN)
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

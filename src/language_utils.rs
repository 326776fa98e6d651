use anyhow::{anyhow, Result};
use isolang::Language;

/// Language utilities for locale codes
///
/// i18next locale directories are named with BCP 47 style tags (`de`,
/// `pt-BR`, `zh_Hans`). Only the primary language subtag is looked up, as an
/// ISO 639-1 (2-letter) or ISO 639-2 (3-letter) code.
/// ISO 639-2/B codes and their ISO 639-2/T equivalents
const PART2B_TO_PART2T: &[(&str, &str)] = &[
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("dut", "nld"),
    ("fre", "fra"),
    ("geo", "kat"),
    ("ger", "deu"),
    ("gre", "ell"),
    ("ice", "isl"),
    ("mac", "mkd"),
    ("may", "msa"),
    ("per", "fas"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

/// Primary language subtag of a locale code, lowercased
pub fn primary_subtag(locale: &str) -> String {
    locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Resolve the language of a locale code
pub fn language_of(locale: &str) -> Result<Language> {
    let code = primary_subtag(locale);

    let language = match code.len() {
        2 => Language::from_639_1(&code),
        3 => {
            let part2t = PART2B_TO_PART2T
                .iter()
                .find(|(part2b, _)| *part2b == code)
                .map_or(code.as_str(), |(_, part2t)| part2t);
            Language::from_639_3(part2t)
        }
        _ => None,
    };

    language.ok_or_else(|| anyhow!("Invalid language code: {}", locale))
}

/// Get the English language name of a locale code
pub fn get_language_name(locale: &str) -> Result<String> {
    Ok(language_of(locale)?.to_name().to_string())
}

/// Human readable label for a locale, e.g. `pt-BR (Portuguese)`.
///
/// Unknown codes are returned unchanged.
pub fn locale_label(locale: &str) -> String {
    match get_language_name(locale) {
        Ok(name) => format!("{} ({})", locale, name),
        Err(_) => locale.to_string(),
    }
}

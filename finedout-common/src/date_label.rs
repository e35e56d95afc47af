//! Month/year header label
//!
//! Month names follow the process locale (`LC_ALL`, `LC_CTYPE`, `LANG` on
//! Unix); anything chrono has no names for falls back to `en_US`.

use chrono::{Datelike, Local, Locale, NaiveDate};

/// Label for the current local month in the system locale, e.g. "July 2025"
pub fn current_month_year() -> String {
    month_year_label(Local::now().date_naive(), system_locale())
}

/// Full month name in `locale` followed by the 4-digit year
pub fn month_year_label<D: Datelike>(date: D, locale: Locale) -> String {
    let month = NaiveDate::from_ymd_opt(2000, date.month(), 1)
        .map(|d| d.format_localized("%B", locale).to_string())
        .unwrap_or_default();
    format!("{} {:04}", month, date.year())
}

/// Locale reported by the operating system, or `en_US` if unknown
pub fn system_locale() -> Locale {
    sys_locale::get_locale()
        .as_deref()
        .and_then(locale_from_tag)
        .unwrap_or(Locale::en_US)
}

/// Map a tag such as `de-DE`, `de_DE.UTF-8` or `fr` to a chrono locale
pub fn locale_from_tag(tag: &str) -> Option<Locale> {
    let base = tag.split(['.', '@']).next()?.trim().replace('-', "_");
    if base.is_empty() {
        return None;
    }
    Locale::try_from(base.as_str()).ok().or_else(|| {
        // Bare language: try its main country ("de" -> "de_DE")
        let lang = base.split('_').next()?;
        let guess = format!("{}_{}", lang, lang.to_uppercase());
        Locale::try_from(guess.as_str()).ok()
    })
}

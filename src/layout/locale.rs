//! Locale-aware date-to-display-string formatting for the calendar header.
//!
//! Locale tags arrive as BCP-47-ish strings ("en-US", "fr-FR"). Resolution
//! to a [`chrono::Locale`] is cached process-wide, since the header asks for
//! a label once per tick per layout pass.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use chrono::{Locale, NaiveDateTime};

fn locale_cache() -> &'static Mutex<HashMap<String, Locale>> {
    static CACHE: OnceLock<Mutex<HashMap<String, Locale>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Resolve a locale tag, falling back through `xx-YY` → `xx_YY` → `xx_XX`
/// → `en_US`. Never fails: header labels must always render.
pub fn resolve_locale(tag: &str) -> Locale {
    let mut cache = locale_cache()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(locale) = cache.get(tag) {
        return *locale;
    }
    let locale = parse_tag(tag);
    cache.insert(tag.to_string(), locale);
    locale
}

fn parse_tag(tag: &str) -> Locale {
    let normalized = tag.replace('-', "_");
    if let Ok(locale) = Locale::try_from(normalized.as_str()) {
        return locale;
    }
    // "fr" has no bare variant, but "fr_FR" usually exists.
    if let Some(lang) = normalized.split('_').next() {
        let doubled = format!("{}_{}", lang, lang.to_uppercase());
        if let Ok(locale) = Locale::try_from(doubled.as_str()) {
            return locale;
        }
        if lang.eq_ignore_ascii_case("en") {
            return Locale::en_US;
        }
    }
    Locale::en_US
}

/// Full month name, e.g. "March" / "mars".
pub fn month_name(date: NaiveDateTime, locale: Locale) -> String {
    // Localized formatting lives on DateTime, not on the naive types.
    date.and_utc().format_localized("%B", locale).to_string()
}

/// Abbreviated weekday name, e.g. "Wed" / "mer.".
pub fn weekday_short(date: NaiveDateTime, locale: Locale) -> String {
    date.and_utc().format_localized("%a", locale).to_string()
}

/// Hour-only label, e.g. "3 PM" for 12-hour locales and "15" for locales
/// without AM/PM designators.
pub fn hour_label(date: NaiveDateTime, locale: Locale) -> String {
    let stamp = date.and_utc();
    let designator = stamp.format_localized("%p", locale).to_string();
    if designator.is_empty() {
        stamp.format_localized("%-H", locale).to_string()
    } else {
        format!("{} {}", stamp.format_localized("%-I", locale), designator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn resolves_bcp47_tags_and_caches_them() {
        assert_eq!(resolve_locale("en-US"), Locale::en_US);
        assert_eq!(resolve_locale("fr-FR"), Locale::fr_FR);
        // Second lookup hits the cache and must agree.
        assert_eq!(resolve_locale("en-US"), Locale::en_US);
    }

    #[test]
    fn unknown_tags_fall_back_instead_of_failing() {
        assert_eq!(resolve_locale("zz-Wat"), Locale::en_US);
        assert_eq!(resolve_locale("fr"), Locale::fr_FR);
    }

    #[test]
    fn labels_honor_the_locale() {
        let date = dt(2026, 1, 5, 0);
        assert_eq!(month_name(date, Locale::en_US), "January");
        assert_eq!(month_name(date, Locale::fr_FR), "janvier");
        assert_eq!(weekday_short(date, Locale::en_US), "Mon");
    }

    #[test]
    fn hour_label_respects_twelve_hour_locales() {
        assert_eq!(hour_label(dt(2026, 1, 5, 15), Locale::en_US), "3 PM");
        assert_eq!(hour_label(dt(2026, 1, 5, 0), Locale::en_US), "12 AM");
    }
}

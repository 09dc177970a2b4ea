//! Compiled pattern library for BGH decision texts.
//!
//! Every pattern is compiled once on first use and shared read-only across
//! threads. Keyword patterns for the tenor are written syllable by syllable:
//! decisions are typeset with hyphenation, so `zurück-\ngewiesen` must still
//! read as `zurückgewiesen` once line breaks are collapsed.

use regex::Regex;
use std::sync::LazyLock;

/// Docket numbers such as `XII ZB 456/21` or `VI ZR 12/20 B`.
pub(crate) static CASE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\b[IVXLCDM]*[a-zA-Z]+)?\s?\(?(?:[a-zA-Z]+)\)?\s?\d+/\d+\s?[A-Z]?\b",
    )
    .unwrap()
});

/// `Verkündet am: 3. Januar 2020` or `vom 3. Januar 2020`.
pub(crate) static DECISION_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:Verkündet am:|vom)\s*(?P<date>(?P<day>\d{1,2})\.\s*(?P<month>Januar|Februar|März|Marz|April|Mai|Juni|Juli|August|September|Oktober|November|Dezember)\s*(?P<year>\d{4}))",
    )
    .unwrap()
});

/// Shape `strptime("%d. %m %Y")` accepts: at least one whitespace after the dot
/// and between month and year.
pub(crate) static STRICT_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\d{1,2}\.\s+\d{2}\s+\d{4}\z").unwrap());

/// Marker printed on decisions selected for the BGH reference work.
pub(crate) static GUIDING_PRINCIPLES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Nachschlagewerk:").unwrap());

pub(crate) static MOTION_CATEGORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)(?:Auf die|Die)\s+(?P<remedy>Revision|Rechtsbeschwerde|Nichtzulassungsbeschwerde|(?:Beschwerde.*?Nichtzulassung|Beschwerde.*?Revision))",
    )
    .unwrap()
});

/// Tenor runs from the holding anchor to the reasons, the facts, or the end of text.
pub(crate) static TENOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:beschlossen:|für Recht erkannt:)\s*(?P<tenor>.*?)\s*(?:Gründe:|Tatbestand:|\z)")
        .unwrap()
});

/// aufgehoben, zugelassen, stattgegeben.
pub(crate) static WINNING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:auf(?:-?\s*)?ge(?:-?\s*)?ho(?:-?\s*)?ben|zu(?:-?\s*)?ge(?:-?\s*)?la(?:-?\s*)?ssen|statt(?:-?\s*)?ge(?:-?\s*)?ge(?:-?\s*)?ben)\b",
    )
    .unwrap()
});

/// zurückzuweisen, zurückgewiesen, abgelehnt, verworfen.
pub(crate) static LOSING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:zu(?:-?\s*)?rück(?:-?\s*)?zu(?:-?\s*)?wei(?:-?\s*)?sen|zu(?:-?\s*)?rück(?:-?\s*)?ge(?:-?\s*)?wie(?:-?\s*)?sen|ab(?:-?\s*)?ge(?:-?\s*)?lehnt|ver(?:-?\s*)?wor(?:-?\s*)?fen)\b",
    )
    .unwrap()
});

/// Panel names of the Bundesgerichtshof, matched case-sensitively.
const SENATE_NAMES: &[&str] = &[
    r"Große\s+Senat\s+für\s+Zivilsachen",
    r"Große\s+Senat\s+für\s+Strafsachen",
    r"Kartellsenat",
    r"Senat\s+für\s+Notarsachen",
    r"Patentanwaltssachen",
    r"Senat\s+für\s+Anwaltssachen",
    r"Senat\s+für\s+Landwirtschaftssachen",
    r"Senat\s+für\s+Wirtschaftsprüfersachen",
    r"Senat\s+für\s+Steuerberater-\s+und\s+Steuerbevollmächtigtensachen",
    r"Dienstgericht\s+des\s+Bundes",
    r"1\.\s+Strafsenat",
    r"2\.\s+Strafsenat",
    r"3\.\s+Strafsenat",
    r"4\.\s+Strafsenat",
    r"5\.\s+Strafsenat",
    r"6\.\s+Strafsenat",
    r"I\.\s+Zivilsenat",
    r"II\.\s+Zivilsenat",
    r"III\.\s+Zivilsenat",
    r"IV\.\s+Zivilsenat",
    r"V\.\s+Zivilsenat",
    r"VI\.\s+Zivilsenat",
    r"VIa\.\s+Zivilsenat",
    r"VII\.\s+Zivilsenat",
    r"VIII\.\s+Zivilsenat",
    r"IX\.\s+Zivilsenat",
    r"IXa\.\s+Zivilsenat",
    r"X\.\s+Zivilsenat",
    r"Xa\.\s+Zivilsenat",
    r"XI\.\s+Zivilsenat",
    r"XII\.\s+Zivilsenat",
    r"XIII\.\s+Zivilsenat",
    r"Ermittlungsrichter",
    r"Vereinigte\s+Große\s+Senate",
];

pub(crate) static SENAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&SENATE_NAMES.join("|")).unwrap());

/// Decorative arrows left behind by watermarks and cross-references.
pub(crate) static ARROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[\x{2192}\x{21d2}\x{21e8}]\s*").unwrap());

pub(crate) static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        for re in [
            &CASE_NUMBER_RE,
            &DECISION_DATE_RE,
            &STRICT_DATE_RE,
            &GUIDING_PRINCIPLES_RE,
            &MOTION_CATEGORY_RE,
            &TENOR_RE,
            &WINNING_RE,
            &LOSING_RE,
            &SENAT_RE,
            &ARROW_RE,
            &WHITESPACE_RUN_RE,
        ] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn senate_dots_are_literal() {
        assert!(SENAT_RE.is_match("1. Strafsenat"));
        assert!(!SENAT_RE.is_match("1x Strafsenat"));
    }

    #[test]
    fn keywords_tolerate_hyphenation() {
        assert!(LOSING_RE.is_match("zurück- gewiesen"));
        assert!(LOSING_RE.is_match("zu-rückzuweisen"));
        assert!(WINNING_RE.is_match("auf- gehoben"));
        assert!(WINNING_RE.is_match("statt-gegeben"));
    }

    #[test]
    fn keywords_require_word_end() {
        assert!(!WINNING_RE.is_match("aufgehobenen"));
        assert!(WINNING_RE.is_match("aufgehoben."));
    }
}

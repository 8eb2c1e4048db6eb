use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

fn tag_pattern() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Removes markup tags and decodes the entities WordPress commonly leaves
/// in rendered titles and excerpts.
pub fn strip_html(html: &str) -> String {
    let text = tag_pattern().replace_all(html, "");

    let text = text
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#8217;", "'")
        .replace("&#8216;", "'")
        .replace("&#8220;", "\"")
        .replace("&#8221;", "\"")
        .replace("&#8211;", "-")
        .replace("&#8212;", "-")
        .replace("&#8230;", "…")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips markup and truncates to `max_length` characters on a char
/// boundary, appending an ellipsis when content was cut.
pub fn excerpt(content: &str, max_length: usize) -> String {
    let text = strip_html(content);
    if text.chars().count() <= max_length {
        return text;
    }
    let truncated: String = text.chars().take(max_length).collect();
    format!("{}...", truncated.trim_end())
}

/// Formats a WordPress timestamp as a German long date ("15. März 2024").
/// WordPress emits naive local timestamps; unparseable input falls back to
/// a placeholder instead of failing the render.
pub fn format_date(date: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S"));

    match parsed {
        Ok(dt) => {
            use chrono::Datelike;
            let month = GERMAN_MONTHS[dt.month0() as usize];
            format!("{}. {} {}", dt.day(), month, dt.year())
        }
        Err(_) => "Datum unbekannt".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_html_removes_tags() {
        assert_eq!(
            strip_html("<p>Strategieberatung f\u{fc}r den Mittelstand</p>"),
            "Strategieberatung f\u{fc}r den Mittelstand"
        );
        assert_eq!(strip_html("<h2 class=\"title\">Titel</h2>"), "Titel");
    }

    #[test]
    fn strip_html_decodes_entities() {
        assert_eq!(strip_html("F\u{fc}hrung &amp; Wandel"), "F\u{fc}hrung & Wandel");
        assert_eq!(strip_html("&#8220;Zitat&#8221;"), "\"Zitat\"");
    }

    #[test]
    fn strip_html_collapses_whitespace() {
        assert_eq!(strip_html("<p>Eins</p>\n<p>Zwei</p>"), "Eins Zwei");
    }

    #[test]
    fn excerpt_keeps_short_content() {
        assert_eq!(excerpt("<p>Kurz</p>", 150), "Kurz");
    }

    #[test]
    fn excerpt_truncates_on_char_boundary() {
        let long = "ä".repeat(200);
        let result = excerpt(&long, 150);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), 153);
    }

    #[test]
    fn format_date_renders_german_long_form() {
        assert_eq!(format_date("2024-03-15T10:30:00"), "15. M\u{e4}rz 2024");
        assert_eq!(format_date("2023-12-01T00:00:00"), "1. Dezember 2023");
    }

    #[test]
    fn format_date_falls_back_on_garbage() {
        assert_eq!(format_date("not-a-date"), "Datum unbekannt");
        assert_eq!(format_date(""), "Datum unbekannt");
    }
}

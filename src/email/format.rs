//! Placeholder substitution and text helpers for the tracking email.

use super::error::MailError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Replaces each `{name}` placeholder with its value, in the given order.
///
/// Placeholders without a value are left as they are.
pub fn format_string(template: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |text, (placeholder, value)| {
            text.replace(placeholder, value)
        })
}

/// Turns `<ul>`/`<li>` markup into a newline-separated bullet list.
pub fn plain_lists(message: &str) -> String {
    message
        .replace("<ul>", "\n")
        .replace("<li>", "\n - ")
        .replace("</ul>", "")
        .replace("</li>", "")
}

/// Tags that already open a block and are not wrapped in `<p>`.
const BLOCK_TAGS: &[&str] = &["<p", "<ul", "<ol", "<div", "<table", "<h"];

/// Turns a plain-text message into HTML paragraphs.
///
/// Blank lines (or lines holding only whitespace) separate paragraphs and the
/// remaining line breaks become `<br />`.
pub fn html_paragraphs(message: &str) -> String {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current = Vec::new();
    for line in message.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
        .into_iter()
        .map(|lines| {
            let block = lines.join("<br />\n");
            if BLOCK_TAGS.iter().any(|tag| block.starts_with(tag)) {
                block
            } else {
                format!("<p>{block}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats `when` with a strftime pattern, rejecting malformed patterns.
pub fn format_date(when: DateTime<Utc>, pattern: &str) -> Result<String, MailError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(MailError::Template(format!("invalid date format {pattern:?}")));
    }
    let mut out = String::new();
    write!(out, "{}", when.format_with_items(items.into_iter()))
        .map_err(|_| MailError::Template(format!("cannot format date with {pattern:?}")))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn replaces_all_occurrences() {
        let out = format_string(
            "[{site_title}] {order_number} / {site_title}",
            &[("{site_title}", "Shop"), ("{order_number}", "42")],
        );
        assert_eq!(out, "[Shop] 42 / Shop");
    }

    #[test]
    fn unknown_placeholders_survive() {
        assert_eq!(format_string("{nope}", &[("{date}", "x")]), "{nope}");
    }

    #[test]
    fn list_markup_becomes_bullets() {
        let out = plain_lists("Items:<ul><li>one</li><li>two</li></ul>");
        assert_eq!(out, "Items:\n\n - one\n - two");
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let out = html_paragraphs("Hi.\n \nLine one\nline two\n\n<ul><li>x</li></ul>");
        assert_eq!(out, "<p>Hi.</p>\n<p>Line one<br />\nline two</p>\n<ul><li>x</li></ul>");
    }

    #[test]
    fn date_uses_pattern() {
        let when = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        assert_eq!(format_date(when, "%B %-d, %Y").unwrap(), "March 5, 2024");
        assert_eq!(format_date(when, "%d/%m/%Y").unwrap(), "05/03/2024");
    }

    #[test]
    fn bad_date_pattern_is_an_error() {
        let when = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        assert!(matches!(format_date(when, "%Q"), Err(MailError::Template(_))));
    }
}

//! Rich-text and display helpers.
//!
//! Descriptions arrive as backend-supplied HTML. They are sanitized before
//! being injected into the DOM and tag-stripped for plain-text surfaces
//! (cards, excerpts, search).

use std::borrow::Cow;

/// Sanitize rich-text HTML for `set_inner_html`.
pub fn sanitize_html(html: &str) -> String {
    ammonia::clean(html)
}

/// Strip every tag, leaving plain text.
pub fn strip_tags(html: &str) -> String {
    let stripped = ammonia::Builder::empty().clean(html).to_string();
    decode_entities(&stripped)
}

// ammonia re-escapes text content; undo the standard entities so the
// result can be rendered as a plain text node without double escaping.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Tag-stripped, whitespace-collapsed, length-capped excerpt for cards.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = strip_tags(html);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// Prettify ISO `YYYY-MM-DD` dates; anything else ("Today") renders
/// verbatim since the backend enforces no date format.
pub fn pretty_date(date: &str) -> Cow<'_, str> {
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return Cow::Borrowed(date);
    };
    let (Ok(_), Ok(month_num), Ok(day_num)) =
        (year.parse::<u16>(), month.parse::<u8>(), day.parse::<u8>())
    else {
        return Cow::Borrowed(date);
    };
    let month_name = match month_num {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => return Cow::Borrowed(date),
    };
    Cow::Owned(format!("{month_name} {day_num}, {year}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup_keeps_text() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_tags("plain"), "plain");
    }

    #[test]
    fn stripped_text_is_not_entity_escaped() {
        assert_eq!(strip_tags("<p>Q&amp;A: 1 &lt; 2</p>"), "Q&A: 1 < 2");
    }

    #[test]
    fn sanitize_drops_script_keeps_formatting() {
        let clean = sanitize_html("<p>ok</p><script>alert(1)</script>");
        assert!(clean.contains("<p>ok</p>"));
        assert!(!clean.contains("script"));
    }

    #[test]
    fn excerpt_caps_length_with_ellipsis() {
        let long = "<p>word </p>".repeat(40);
        let short = excerpt(&long, 20);
        assert!(short.chars().count() <= 21);
        assert!(short.ends_with('…'));
        assert_eq!(excerpt("<p>tiny</p>", 20), "tiny");
    }

    #[test]
    fn pretty_date_handles_iso_and_free_form() {
        assert_eq!(pretty_date("2024-03-12"), "Mar 12, 2024");
        assert_eq!(pretty_date("Today"), "Today");
        assert_eq!(pretty_date(""), "");
        assert_eq!(pretty_date("2024-13-01"), "2024-13-01");
    }
}

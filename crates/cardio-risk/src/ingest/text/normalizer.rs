use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use tracing::error;

static BLANK_RUN: OnceLock<Option<Regex>> = OnceLock::new();

/// Flattens OCR/PDF text into one line with `:` as the only value separator.
///
/// `=`, ` is `, `-` and `–` become `:`, runs of spaces and tabs collapse to a
/// single space, and line breaks become spaces.
pub(crate) fn normalize_text(raw: &str) -> String {
    let separated = raw
        .replace('=', ":")
        .replace(" is ", ":")
        .replace(['-', '\u{2013}'], ":");

    let collapsed = match blank_run() {
        Some(regex) => regex.replace_all(&separated, " "),
        None => Cow::Borrowed(separated.as_str()),
    };

    collapsed.replace(['\n', '\r'], " ")
}

fn blank_run() -> Option<&'static Regex> {
    BLANK_RUN
        .get_or_init(|| match Regex::new(r"[ \t]+") {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!(%err, "whitespace pattern failed to compile");
                None
            }
        })
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_become_colons() {
        assert_eq!(normalize_text("Age = 45"), "Age : 45");
        assert_eq!(normalize_text("Age is 45"), "Age:45");
        assert_eq!(normalize_text("MaxHR - 150"), "MaxHR : 150");
        assert_eq!(normalize_text("MaxHR \u{2013} 150"), "MaxHR : 150");
    }

    #[test]
    fn whitespace_collapses_and_lines_join() {
        assert_eq!(normalize_text("Age:\t\t45\nSex:  M"), "Age: 45 Sex: M");
        assert_eq!(normalize_text("a\r\nb"), "a  b");
        assert_eq!(normalize_text("Resting BP \t  118"), "Resting BP 118");
    }
}

//! Input validation utilities.
//!
//! CMS values that end up inside HTML attributes with their own syntax (inline
//! `style` colours, link targets) are checked here before the renderers embed
//! them. Escaping keeps them from breaking out of the attribute; these checks keep
//! them from meaning something other than what the field says.

use crate::{CoreError, CoreResult};

/// Validates that a colour value is safe to embed in an inline `style` attribute.
///
/// Accepted forms:
/// - hex notation: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
/// - functional notation: `rgb(...)`, `rgba(...)`, `hsl(...)`, `hsla(...)` with
///   digits, `.`, `%`, `,`, `/` and spaces inside the parentheses
/// - a named colour made of ASCII letters only
///
/// # Errors
///
/// Returns a `CoreError::InvalidInput` describing why the colour was rejected.
pub fn validate_css_color(value: &str) -> CoreResult<()> {
    const MAX_COLOR_LEN: usize = 64;

    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::InvalidInput("colour cannot be empty".into()));
    }

    if value.len() > MAX_COLOR_LEN {
        return Err(CoreError::InvalidInput(format!(
            "colour exceeds maximum length of {} characters",
            MAX_COLOR_LEN
        )));
    }

    if let Some(hex) = value.strip_prefix('#') {
        let ok = matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit());
        if !ok {
            return Err(CoreError::InvalidInput(format!(
                "invalid hex colour: {value}"
            )));
        }
        return Ok(());
    }

    if let Some(open) = value.find('(') {
        let name = &value[..open];
        let args = value[open + 1..].strip_suffix(')').ok_or_else(|| {
            CoreError::InvalidInput(format!("unterminated colour function: {value}"))
        })?;
        let known = matches!(
            name.to_ascii_lowercase().as_str(),
            "rgb" | "rgba" | "hsl" | "hsla"
        );
        let ok_args = args
            .replace("deg", "")
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'.' | b'%' | b',' | b'/' | b' ' | b'-'));
        if !(known && ok_args) {
            return Err(CoreError::InvalidInput(format!(
                "unsupported colour function: {value}"
            )));
        }
        return Ok(());
    }

    if !value.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(CoreError::InvalidInput(format!(
            "colour name contains invalid characters: {value}"
        )));
    }

    Ok(())
}

/// The trimmed colour if it passes [`validate_css_color`], otherwise `None`.
pub fn css_color(value: Option<&str>) -> Option<&str> {
    let value = value?.trim();
    validate_css_color(value).ok().map(|_| value)
}

/// Whether a link target is safe to put in an `href`.
///
/// Relative links, fragments and `http`, `https`, `mailto` and `tel` URLs are
/// allowed. Any other scheme (notably `javascript:` and `data:`) is rejected.
pub fn is_safe_href(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() {
        return false;
    }
    let lower = href.to_ascii_lowercase();
    match lower.find(':') {
        None => true,
        Some(colon) => {
            // A colon after the first '/', '?' or '#' is part of a relative path.
            if lower[..colon].contains(['/', '?', '#']) {
                return true;
            }
            matches!(&lower[..colon], "http" | "https" | "mailto" | "tel")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colours() {
        assert!(validate_css_color("#fff").is_ok());
        assert!(validate_css_color("#1E2A3Bff").is_ok());
        assert!(validate_css_color("#12345").is_err());
        assert!(validate_css_color("#ggg").is_err());
    }

    #[test]
    fn test_functional_and_named_colours() {
        assert!(validate_css_color("rgb(10, 20, 30)").is_ok());
        assert!(validate_css_color("hsla(120deg, 50%, 50%, 0.5)").is_ok());
        assert!(validate_css_color("rebeccapurple").is_ok());
        assert!(validate_css_color("url(javascript:alert(1))").is_err());
        assert!(validate_css_color("red; background: url(x)").is_err());
        assert!(validate_css_color("rgb(1,2,3").is_err());
    }

    #[test]
    fn test_css_color_filters_invalid_values() {
        assert_eq!(css_color(Some(" #abc ")), Some("#abc"));
        assert_eq!(css_color(Some("")), None);
        assert_eq!(css_color(Some("red;")), None);
        assert_eq!(css_color(None), None);
    }

    #[test]
    fn test_safe_hrefs() {
        assert!(is_safe_href("https://example.com"));
        assert!(is_safe_href("/magazine/tags/rust"));
        assert!(is_safe_href("#section"));
        assert!(is_safe_href("mailto:desk@example.com"));
        assert!(is_safe_href("/path/with:colon"));
        assert!(!is_safe_href("javascript:alert(1)"));
        assert!(!is_safe_href(" JavaScript:alert(1)"));
        assert!(!is_safe_href("data:text/html,hi"));
        assert!(!is_safe_href(""));
    }
}

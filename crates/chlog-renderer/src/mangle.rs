//! Email address obfuscation.

use std::fmt::Write;

/// Encode every character of `text` as a numeric character reference.
///
/// Characters alternate between decimal and hexadecimal references so the
/// address never appears as a plain substring of the page. Browsers decode
/// both forms, so the rendered text and `mailto:` target stay intact.
///
/// # Examples
///
/// ```
/// use chlog_renderer::mangle;
///
/// assert_eq!(mangle("a@b"), "&#97;&#x40;&#98;");
/// ```
#[must_use]
pub fn mangle(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 6);
    for (index, c) in text.chars().enumerate() {
        if index % 2 == 0 {
            write!(out, "&#{};", u32::from(c)).unwrap();
        } else {
            write!(out, "&#x{:x};", u32::from(c)).unwrap();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mangle_alternates_encodings() {
        assert_eq!(mangle("ab"), "&#97;&#x62;");
    }

    #[test]
    fn test_mangle_hides_address() {
        let mangled = mangle("dev@example.com");
        assert!(!mangled.contains("example"));
        assert!(!mangled.contains('@'));
    }

    #[test]
    fn test_mangle_non_ascii() {
        assert_eq!(mangle("é"), "&#233;");
    }

    #[test]
    fn test_mangle_empty() {
        assert_eq!(mangle(""), "");
    }
}

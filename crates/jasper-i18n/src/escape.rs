//! Escaping of keys and values in `.properties` files.
//!
//! Only `:` and the space character are escaped, each with a backslash.
//! Non-ASCII characters pass through untouched and are handled by the file
//! encoding instead.

/// Escapes `:` as `\:` and space as `\ `.
pub fn escape_property_text(text: &str) -> String {
    text.replace(':', "\\:").replace(' ', "\\ ")
}

/// Reverses [`escape_property_text`].
///
/// A backslash followed by anything other than `:` or space is kept as is.
pub fn unescape_property_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == ':' || next == ' ' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

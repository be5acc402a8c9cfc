//! Translation of key expressions from the bindings tables to configuration key names.

/// Ordinal of the escape key, as it appears in bindings (`[27] = ...`).
const ESCAPE: char = '\x1b';

/// Convert a key expression used as an array index in the bindings tables
/// into the key name written in `bind` lines.
///
/// Handles named curses constants (`KEY_UP` becomes `Up`, `KEY_F(10)` becomes
/// `F10`), character literals (`'x'`, `'\t'`, `'\033'`), the `CNTRL(..)` and
/// `ALT(..)` modifier wrappers (rendered as `C-` and `A-` prefixes, in that
/// order) and the bare escape ordinal `27`. Anything else is passed through.
pub fn normalize_key(token: &str) -> String {
    let mut key = token.trim();
    let mut control = false;
    let mut alt = false;

    loop {
        if let Some(inner) = unwrap_call(key, "CNTRL") {
            control = true;
            key = inner;
        } else if let Some(inner) = unwrap_call(key, "ALT") {
            alt = true;
            key = inner;
        } else {
            break;
        }
    }

    let name = if let Some(named) = key.strip_prefix("KEY_") {
        named_key(named)
    } else if key.starts_with('\'') {
        decode_char_literal(key)
            .map(char_key)
            .unwrap_or_else(|| key.to_string())
    } else if key == "27" {
        "ESCAPE".to_string()
    } else {
        key.to_string()
    };

    let mut out = String::new();
    if control {
        out.push_str("C-");
    }
    if alt {
        out.push_str("A-");
    }
    out.push_str(&name);
    out
}

/// Strip a single-argument macro call such as `CNTRL('L')`, returning the argument.
fn unwrap_call<'a>(expr: &'a str, name: &str) -> Option<&'a str> {
    expr.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}

/// Render a curses key constant name without its `KEY_` prefix.
fn named_key(name: &str) -> String {
    if let Some(number) = name
        .strip_prefix("F(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return format!("F{}", number.trim());
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Name for a literal character key.
fn char_key(c: char) -> String {
    match c {
        ' ' => "SPACE".to_string(),
        '\t' => "TAB".to_string(),
        '\n' | '\r' => "RETURN".to_string(),
        ESCAPE => "ESCAPE".to_string(),
        c => c.to_string(),
    }
}

/// Decode a C character literal, including its escape sequences.
fn decode_char_literal(literal: &str) -> Option<char> {
    let body = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let Some(escape) = body.strip_prefix('\\') else {
        let mut chars = body.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };
    };

    match escape {
        "n" => Some('\n'),
        "r" => Some('\r'),
        "t" => Some('\t'),
        "a" => Some('\x07'),
        "b" => Some('\x08'),
        "f" => Some('\x0c'),
        "v" => Some('\x0b'),
        "e" => Some(ESCAPE),
        "\\" | "'" | "\"" | "?" => escape.chars().next(),
        _ => {
            let code = if let Some(hex) = escape.strip_prefix('x') {
                u32::from_str_radix(hex, 16).ok()?
            } else if (1..=3).contains(&escape.len()) {
                u32::from_str_radix(escape, 8).ok()?
            } else {
                return None;
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!(normalize_key("KEY_UP"), "Up");
        assert_eq!(normalize_key("KEY_NPAGE"), "Npage");
        assert_eq!(normalize_key("KEY_F(10)"), "F10");
        assert_eq!(normalize_key("  KEY_BTAB "), "Btab");
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(normalize_key("'x'"), "x");
        assert_eq!(normalize_key("' '"), "SPACE");
        assert_eq!(normalize_key(r"'\t'"), "TAB");
        assert_eq!(normalize_key(r"'\n'"), "RETURN");
        assert_eq!(normalize_key(r"'\r'"), "RETURN");
        assert_eq!(normalize_key(r"'\''"), "'");
        assert_eq!(normalize_key(r"'\\'"), "\\");
        assert_eq!(normalize_key(r"'\033'"), "ESCAPE");
        assert_eq!(normalize_key(r"'\x1b'"), "ESCAPE");
        assert_eq!(normalize_key("']'"), "]");
    }

    #[test]
    fn test_escape_ordinal() {
        assert_eq!(normalize_key("27"), "ESCAPE");
        assert_eq!(normalize_key("127"), "127");
    }

    #[test]
    fn test_modifiers() {
        assert_eq!(normalize_key("CNTRL('L')"), "C-L");
        assert_eq!(normalize_key("ALT('x')"), "A-x");
        assert_eq!(normalize_key("CNTRL(ALT('x'))"), "C-A-x");
        assert_eq!(normalize_key("ALT(CNTRL('x'))"), "C-A-x");
        assert_eq!(normalize_key("ALT(KEY_LEFT)"), "A-Left");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize_key("MY_KEY"), "MY_KEY");
        assert_eq!(normalize_key("'unterminated"), "'unterminated");
    }
}

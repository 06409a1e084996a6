use crate::error::Error;
use crate::value::SqlValue;

/// Quote a table or column name as a backtick-delimited identifier.
///
/// Interior backticks are doubled. Names containing NUL or newline cannot
/// be represented safely and are rejected with [`Error::InvalidIdentifier`].
pub fn quote_identifier(name: &str) -> Result<String, Error> {
    let mut res = String::with_capacity(name.len() + 2);
    res.push('`');

    for ch in name.chars() {
        match ch {
            '\0' | '\n' => return Err(Error::InvalidIdentifier),
            '`' => res.push_str("``"),
            _ => res.push(ch),
        }
    }

    res.push('`');
    Ok(res)
}

/// Quote string data as a double-quoted SQL literal.
///
/// Escapes NUL, newline, carriage return, backslash, both quote characters
/// and Ctrl-Z; everything else, including non-ASCII, passes through.
pub fn quote_string(s: &str) -> String {
    let mut res = String::with_capacity(s.len() + 2);
    res.push('"');

    for ch in s.chars() {
        match ch {
            '\0' => res.push_str("\\0"),
            '\n' => res.push_str("\\n"),
            '\r' => res.push_str("\\r"),
            '\\' => res.push_str("\\\\"),
            '\'' => res.push_str("\\'"),
            '"' => res.push_str("\\\""),
            '\x1a' => res.push_str("\\Z"),
            _ => res.push(ch),
        }
    }

    res.push('"');
    res
}

/// Quote binary data as a hex literal.
///
/// The empty sequence renders as an empty string literal; a bare `0x` is
/// not valid SQL.
pub fn quote_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "\"\"".to_string();
    }

    format!("0x{}", hex::encode(bytes))
}

/// Convert one value into SQL literal text. Never fails: values without a
/// dedicated rendering fall back to string-quoting their textual form.
pub fn quote_value(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Bytes(bytes) => quote_bytes(bytes),
        SqlValue::Chars(chars) => quote_string(&chars.iter().collect::<String>()),
        SqlValue::Text(s) => quote_string(s),
        SqlValue::Int(i) => i.to_string(),
        SqlValue::UInt(u) => u.to_string(),
        SqlValue::Float(f) => format!("{:.6}", f),
        SqlValue::Other(s) => quote_string(s),
    }
}

/// Encode one row tuple: each value quoted, joined with `", "`.
pub fn quote_row(values: &[SqlValue]) -> String {
    values
        .iter()
        .map(quote_value)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Encode a column list: each name quoted as an identifier, joined with
/// `", "`.
pub fn quote_columns(names: &[&str]) -> Result<String, Error> {
    let mut cols = Vec::with_capacity(names.len());

    for name in names {
        cols.push(quote_identifier(name)?);
    }

    Ok(cols.join(", "))
}

/// Derive a canonical column name from a field name: each uppercase-led
/// word gets set off with separators, the result is lowercased, runs of
/// `-`/`_` collapse into a single `_`, and leading/trailing separators are
/// trimmed. `UserID` becomes `user_id`, `FooBARBaz` becomes `foo_bar_baz`.
pub fn canonical_name(name: &str) -> String {
    // Mark every uppercase letter followed by a lowercase run, the same
    // way a word-boundary regex would.
    let mut marked = String::with_capacity(name.len() + 8);
    let mut chars = name.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_ascii_uppercase() && chars.peek().is_some_and(|c| c.is_ascii_lowercase()) {
            marked.push('_');
            marked.push(ch);
            while let Some(&c) = chars.peek() {
                if !c.is_ascii_lowercase() {
                    break;
                }
                marked.push(c);
                chars.next();
            }
            marked.push('-');
        } else {
            marked.push(ch);
        }
    }

    // Lowercase, collapse separator runs, trim the ends.
    let mut res = String::with_capacity(marked.len());
    let mut pending_sep = false;

    for ch in marked.chars() {
        if ch == '-' || ch == '_' {
            pending_sep = !res.is_empty();
        } else {
            if pending_sep {
                res.push('_');
                pending_sep = false;
            }
            res.extend(ch.to_lowercase());
        }
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_identifier("users").unwrap(), "`users`");
        assert_eq!(quote_identifier("user`table").unwrap(), "`user``table`");
    }

    #[test]
    fn rejects_unrepresentable_identifiers() {
        assert!(matches!(
            quote_identifier("a\nb"),
            Err(Error::InvalidIdentifier)
        ));
        assert!(matches!(
            quote_identifier("a\0b"),
            Err(Error::InvalidIdentifier)
        ));
    }

    #[test]
    fn escapes_strings() {
        assert_eq!(quote_string("Hello, World!"), "\"Hello, World!\"");
        assert_eq!(quote_string("O'Reilly"), "\"O\\'Reilly\"");
        assert_eq!(quote_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(quote_string("line1\nline2\r"), "\"line1\\nline2\\r\"");
        assert_eq!(quote_string("\0\x1a"), "\"\\0\\Z\"");
        assert_eq!(quote_string("héllo"), "\"héllo\"");
    }

    #[test]
    fn renders_bytes_as_hex() {
        assert_eq!(quote_bytes(&[]), "\"\"");
        assert_eq!(quote_bytes(&[0x41, 0x42]), "0x4142");
        assert_eq!(quote_bytes(b"Hello, World!"), "0x48656c6c6f2c20576f726c6421");
    }

    #[test]
    fn quotes_values() {
        assert_eq!(quote_value(&SqlValue::Null), "NULL");
        assert_eq!(quote_value(&SqlValue::Int(-123)), "-123");
        assert_eq!(quote_value(&SqlValue::UInt(42)), "42");
        assert_eq!(quote_value(&SqlValue::Float(3.14)), "3.140000");
        assert_eq!(quote_value(&SqlValue::Text("ABC".into())), "\"ABC\"");
        assert_eq!(
            quote_value(&SqlValue::Chars(vec!['A', 'B', 'C'])),
            "\"ABC\""
        );
        assert_eq!(quote_value(&SqlValue::Bytes(vec![65, 66, 67])), "0x414243");
        assert_eq!(quote_value(&SqlValue::Other("true".into())), "\"true\"");
    }

    #[test]
    fn joins_rows_and_columns() {
        let row = [SqlValue::Int(1), SqlValue::Text("Demo".into())];
        assert_eq!(quote_row(&row), "1, \"Demo\"");
        assert_eq!(quote_row(&[]), "");

        assert_eq!(quote_columns(&["id", "name"]).unwrap(), "`id`, `name`");
        assert!(quote_columns(&["ok", "bad\nname"]).is_err());
    }

    #[test]
    fn canonicalizes_names() {
        assert_eq!(canonical_name("UserID"), "user_id");
        assert_eq!(canonical_name("Name"), "name");
        assert_eq!(canonical_name("ID"), "id");
        assert_eq!(canonical_name("FooBARBaz"), "foo_bar_baz");
        assert_eq!(canonical_name("already_snake"), "already_snake");
        assert_eq!(canonical_name("with-dash--case"), "with_dash_case");
        assert_eq!(canonical_name("_Trimmed_"), "trimmed");
    }
}

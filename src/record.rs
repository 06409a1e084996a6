use crate::error::Error;
use crate::quote::{canonical_name, quote_identifier, quote_value};
use crate::value::SqlValue;

/// One field of a [`Record`], as yielded by its enumerator.
#[derive(Clone, Debug)]
pub struct Field<'a> {
    /// Declared field name; the column name is derived from it via
    /// [`canonical_name`] unless `column` overrides it.
    pub name: &'a str,
    /// Explicit column name, used verbatim when present.
    pub column: Option<&'a str>,
    /// Excluded fields contribute neither a column nor a value.
    pub skip: bool,
    /// The field's current value.
    pub value: SqlValue,
}

impl<'a> Field<'a> {
    pub fn new(name: &'a str, value: impl Into<SqlValue>) -> Self {
        Field {
            name,
            column: None,
            skip: false,
            value: value.into(),
        }
    }

    /// Use `column` verbatim instead of deriving a name from the field name.
    pub fn column(mut self, column: &'a str) -> Self {
        self.column = Some(column);
        self
    }

    /// Exclude this field from both the column list and the row tuple.
    pub fn skip(mut self) -> Self {
        self.skip = true;
        self
    }
}

/// A value whose fields can be enumerated in declaration order.
///
/// Implementations list every field they want considered; exclusion and
/// renaming are expressed on the [`Field`] itself. How the list is
/// produced (by hand, generated, or otherwise) is up to the implementor.
///
/// ```
/// use sqlbulk::{Field, Record};
///
/// struct Sample {
///     id: i64,
///     name: String,
/// }
///
/// impl Record for Sample {
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("ID", self.id),
///             Field::new("Name", self.name.as_str()),
///         ]
///     }
/// }
/// ```
pub trait Record {
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Encode the column list for a record: skipped fields are dropped, the
/// rest use their explicit column name or the canonical form of their
/// field name, quoted as identifiers and joined with `", "`.
///
/// A missing record is an error here, unlike [`record_row`].
pub fn record_columns<R: Record>(record: Option<&R>) -> Result<String, Error> {
    let record = record.ok_or(Error::NilRecord)?;
    let fields = record.fields();
    let mut cols = Vec::with_capacity(fields.len());

    for field in &fields {
        if field.skip {
            continue;
        }

        let name = match field.column {
            Some(column) => quote_identifier(column)?,
            None => quote_identifier(&canonical_name(field.name))?,
        };
        cols.push(name);
    }

    Ok(cols.join(", "))
}

/// Encode the row tuple for a record: skipped fields are dropped, the
/// rest are quoted as literals and joined with `", "`.
///
/// A missing record yields the empty row encoding rather than an error.
/// That asymmetry with [`record_columns`] is kept on purpose: a nil row
/// has always rendered as `()`.
pub fn record_row<R: Record>(record: Option<&R>) -> String {
    let Some(record) = record else {
        return String::new();
    };

    let fields = record.fields();
    let mut vals = Vec::with_capacity(fields.len());

    for field in &fields {
        if field.skip {
            continue;
        }
        vals.push(quote_value(&field.value));
    }

    vals.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        id: i64,
        name: String,
        secret: String,
        raw: Vec<u8>,
    }

    impl Record for Sample {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("ID", self.id),
                Field::new("Name", self.name.as_str()),
                Field::new("Secret", self.secret.as_str()).skip(),
                Field::new("Raw", self.raw.as_slice()).column("payload"),
            ]
        }
    }

    fn sample() -> Sample {
        Sample {
            id: 7,
            name: "Demo".into(),
            secret: "hidden".into(),
            raw: vec![0xde, 0xad],
        }
    }

    #[test]
    fn derives_and_overrides_column_names() {
        let cols = record_columns(Some(&sample())).unwrap();
        assert_eq!(cols, "`id`, `name`, `payload`");
    }

    #[test]
    fn encodes_record_rows() {
        let row = record_row(Some(&sample()));
        assert_eq!(row, "7, \"Demo\", 0xdead");
    }

    #[test]
    fn missing_record_asymmetry() {
        assert!(matches!(
            record_columns::<Sample>(None),
            Err(Error::NilRecord)
        ));
        assert_eq!(record_row::<Sample>(None), "");
    }

    #[test]
    fn rejects_bad_override_names() {
        struct Bad;

        impl Record for Bad {
            fn fields(&self) -> Vec<Field<'_>> {
                vec![Field::new("Ok", 1).column("bad\nname")]
            }
        }

        assert!(matches!(
            record_columns(Some(&Bad)),
            Err(Error::InvalidIdentifier)
        ));
    }
}

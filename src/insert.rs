use std::io::Write;

use crate::error::Error;
use crate::quote::{quote_columns, quote_identifier, quote_row};
use crate::record::{record_columns, record_row, Record};
use crate::spacer::Spacer;
use crate::value::SqlValue;

/// Rows per statement unless [`Insert::every`] overrides it.
pub const DEFAULT_SPLIT: usize = 1000;

/// Statement verb for the generated headers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verb {
    #[default]
    Insert,
    InsertIgnore,
    Replace,
}

impl Verb {
    fn keyword(self) -> &'static str {
        match self {
            Verb::Insert => "INSERT INTO",
            Verb::InsertIgnore => "INSERT IGNORE INTO",
            Verb::Replace => "REPLACE INTO",
        }
    }
}

/// Builder for batched multi-row `INSERT`/`REPLACE` statements.
///
/// Rows are encoded as they are added and streamed to the sink in
/// statements of at most [`every`](Insert::every) rows each; nothing is
/// held back except the single row the writer keeps buffered. The first
/// error (a bad identifier at construction, or a sink failure) latches:
/// every later `add`/`flush` is a no-op and [`err`](Insert::err) keeps
/// returning it. Callers must check it after the final flush; output
/// already written stays in the sink.
///
/// ```
/// use sqlbulk::Insert;
///
/// let mut buf = Vec::new();
/// let mut ins = Insert::new(&mut buf, "split", &["number"]);
/// ins.every(4);
/// for i in 0..10 {
///     ins.add(&[i.into()]);
/// }
/// ins.flush();
/// assert!(ins.err().is_none());
/// ```
pub struct Insert<W: Write> {
    spacer: Spacer<W>,

    verb: Verb,
    table: String,
    columns: String,

    err: Option<Error>,
}

impl<W: Write> Insert<W> {
    /// Build an insert for `table` with an explicit column list. Quoting
    /// failures latch on the returned builder instead of aborting.
    pub fn new(sink: W, table: &str, columns: &[&str]) -> Self {
        Self::build(sink, table, quote_columns(columns))
    }

    /// Build an insert whose column list comes from a record's fields,
    /// honoring per-field skips and renames. `None` latches
    /// [`Error::NilRecord`].
    pub fn for_record<R: Record>(sink: W, table: &str, record: Option<&R>) -> Self {
        Self::build(sink, table, record_columns(record))
    }

    fn build(sink: W, table: &str, columns: Result<String, Error>) -> Self {
        let mut err = None;

        let table = match quote_identifier(table) {
            Ok(t) => t,
            Err(e) => {
                err = Some(e);
                String::new()
            }
        };

        let columns = match columns {
            Ok(c) => c,
            Err(e) => {
                err = Some(e);
                String::new()
            }
        };

        let verb = Verb::default();
        let top = header(verb, &table, &columns);

        Insert {
            spacer: Spacer::new(sink, top, DEFAULT_SPLIT),
            verb,
            table,
            columns,
            err,
        }
    }

    /// Switch to `INSERT IGNORE INTO`. Affects headers not yet written.
    pub fn ignore(&mut self) -> &mut Self {
        self.set_verb(Verb::InsertIgnore)
    }

    /// Switch to `REPLACE INTO`. Affects headers not yet written.
    pub fn replace(&mut self) -> &mut Self {
        self.set_verb(Verb::Replace)
    }

    fn set_verb(&mut self, verb: Verb) -> &mut Self {
        self.verb = verb;
        self.spacer.top = header(verb, &self.table, &self.columns);
        self
    }

    /// The verb used for statement headers not yet written.
    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// Close the current statement and start a new one every `n` rows.
    /// Values below 1 are treated as 1.
    pub fn every(&mut self, n: usize) -> &mut Self {
        self.spacer.split = n.max(1);
        self
    }

    /// Add one row of values. No-op once an error is latched.
    pub fn add(&mut self, values: &[SqlValue]) -> &mut Self {
        if self.err.is_some() {
            return self;
        }

        if let Err(e) = self.spacer.push(quote_row(values)) {
            self.err = Some(e.into());
        }

        self
    }

    /// Add one row taken from a record's fields, honoring per-field
    /// skips. `None` contributes an empty row tuple `()`; see
    /// [`record_row`] for why that is not an error.
    pub fn add_record<R: Record>(&mut self, record: Option<&R>) -> &mut Self {
        if self.err.is_some() {
            return self;
        }

        if let Err(e) = self.spacer.push(record_row(record)) {
            self.err = Some(e.into());
        }

        self
    }

    /// Terminate the open statement, writing the buffered row. Idempotent;
    /// no-op once an error is latched.
    pub fn flush(&mut self) -> &mut Self {
        if self.err.is_some() {
            return self;
        }

        if let Err(e) = self.spacer.flush() {
            self.err = Some(e.into());
        }

        self
    }

    /// The latched error, if any. Never cleared.
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Flush and consume the builder, surfacing the latched error.
    pub fn finish(mut self) -> Result<(), Error> {
        self.flush();
        match self.err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn header(verb: Verb, table: &str, columns: &str) -> String {
    format!("{} {} ({}) VALUES\n", verb.keyword(), table, columns)
}

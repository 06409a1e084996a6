//! Offline generator for batched multi-row `INSERT`/`REPLACE` statements.
//!
//! `sqlbulk` turns in-memory values into syntactically valid, injection-safe
//! SQL text without ever touching a database. Values and identifiers are
//! escaped with MySQL rules (backtick identifiers, `0x...` hex literals for
//! binary data, backslash-escaped strings), and rows are streamed to any
//! [`std::io::Write`] sink in statements of a bounded number of rows each.
//!
//! ```
//! use sqlbulk::Insert;
//!
//! let mut buf = Vec::new();
//! let mut ins = Insert::new(&mut buf, "users", &["id", "name"]);
//! ins.add(&[1.into(), "Ana".into()])
//!     .add(&[2.into(), "Bob".into()])
//!     .flush();
//! assert!(ins.err().is_none());
//!
//! assert_eq!(
//!     String::from_utf8(buf).unwrap(),
//!     "INSERT INTO `users` (`id`, `name`) VALUES\n\t(1, \"Ana\"),\n\t(2, \"Bob\");\n\n"
//! );
//! ```
//!
//! Column lists can also be derived from a type implementing [`Record`],
//! with per-field skips and renames; see [`Insert::for_record`].
//!
//! Errors latch: the first failure (an unrepresentable identifier, a sink
//! write error) turns every later call into a no-op, and [`Insert::err`]
//! or [`Insert::finish`] surfaces it. Partial output already written to
//! the sink is not rolled back.

mod error;
mod insert;
mod quote;
mod record;
mod spacer;
mod value;

pub use error::Error;
pub use insert::{Insert, Verb, DEFAULT_SPLIT};
pub use quote::{
    canonical_name, quote_bytes, quote_columns, quote_identifier, quote_row, quote_string,
    quote_value,
};
pub use record::{record_columns, record_row, Field, Record};
pub use value::SqlValue;

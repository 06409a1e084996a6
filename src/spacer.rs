use std::io::{self, Write};

/// Chunked statement writer.
///
/// Buffers the most recently pushed row and stays one row behind its
/// input, so a row is only written once the writer knows whether it is
/// followed by another (continuation, `,`) or closes the statement
/// (terminator, `;`). Every `split` rows the open statement is closed and
/// the next row starts a fresh one under the same header.
pub(crate) struct Spacer<W: Write> {
    sink: W,

    /// Header fragment, written once per open statement.
    pub(crate) top: String,

    /// Rows per statement.
    pub(crate) split: usize,
    /// Rows left in the open chunk; 0 means refill from `split` on the
    /// next push.
    n: usize,

    header: bool,
    buffered: Option<String>,
}

impl<W: Write> Spacer<W> {
    pub(crate) fn new(sink: W, top: String, split: usize) -> Self {
        Spacer {
            sink,
            top,
            split,
            n: 0,
            header: false,
            buffered: None,
        }
    }

    pub(crate) fn push(&mut self, row: String) -> io::Result<()> {
        if self.n == 0 {
            self.n = self.split;
        }

        if !self.header {
            self.header = true;
            self.sink.write_all(self.top.as_bytes())?;
        }

        if let Some(prev) = self.buffered.take() {
            self.n -= 1;

            if self.n == 0 {
                write!(self.sink, "\t({});\n\n", prev)?;
                self.header = false;
                self.n = self.split;
            } else {
                writeln!(self.sink, "\t({}),", prev)?;
            }
        }

        self.buffered = Some(row);
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        // Only true if push was never called.
        if !self.header && self.buffered.is_none() {
            return Ok(());
        }

        // The previous push closed a chunk and left its row buffered; the
        // final statement still needs its own header.
        if !self.header {
            self.header = true;
            self.sink.write_all(self.top.as_bytes())?;
        }

        if let Some(prev) = self.buffered.take() {
            write!(self.sink, "\t({});\n\n", prev)?;
            self.header = false;
            self.n = self.split;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacer(buf: &mut Vec<u8>, split: usize) -> Spacer<&mut Vec<u8>> {
        Spacer::new(buf, "HEAD\n".to_string(), split)
    }

    #[test]
    fn single_statement() {
        let mut buf = Vec::new();
        let mut sp = spacer(&mut buf, 1000);
        sp.push("1".into()).unwrap();
        sp.push("2".into()).unwrap();
        sp.flush().unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "HEAD\n\t(1),\n\t(2);\n\n");
    }

    #[test]
    fn splits_into_chunks() {
        let mut buf = Vec::new();
        let mut sp = spacer(&mut buf, 2);
        for i in 0..5 {
            sp.push(i.to_string()).unwrap();
        }
        sp.flush().unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "HEAD\n\t(0),\n\t(1);\n\nHEAD\n\t(2),\n\t(3);\n\nHEAD\n\t(4);\n\n"
        );
    }

    #[test]
    fn flush_writes_header_for_trailing_row() {
        // With k = split + 1, the last push closes the first chunk and the
        // final row is still buffered headerless at flush time.
        let mut buf = Vec::new();
        let mut sp = spacer(&mut buf, 2);
        sp.push("a".into()).unwrap();
        sp.push("b".into()).unwrap();
        sp.push("c".into()).unwrap();
        sp.flush().unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "HEAD\n\t(a),\n\t(b);\n\nHEAD\n\t(c);\n\n"
        );
    }

    #[test]
    fn flush_is_idempotent() {
        let mut buf = Vec::new();
        let mut sp = spacer(&mut buf, 4);
        sp.push("x".into()).unwrap();
        sp.flush().unwrap();
        sp.flush().unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "HEAD\n\t(x);\n\n");
    }

    #[test]
    fn flush_without_push_is_a_noop() {
        let mut buf = Vec::new();
        spacer(&mut buf, 4).flush().unwrap();
        assert!(buf.is_empty());
    }
}

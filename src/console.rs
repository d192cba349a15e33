//! Line-oriented console abstraction: text out, one line of input back.
//! The binary wires it to stdin/stdout; tests drive it with scripted
//! buffers.

use std::io::{self, BufRead, Write};

/// One blocking console interaction at a time: print a line, read a line.
pub trait Console {
    /// Write one line of text (a trailing newline is appended).
    fn print_line(&mut self, text: &str) -> io::Result<()>;

    /// Read one line of input with the line terminator stripped. A closed
    /// input stream is an `UnexpectedEof` error rather than an endless
    /// stream of empty lines.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Console backed by a reader/writer pair.
pub struct TermConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TermConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        TermConsole { reader, writer }
    }

    /// Consume the console and hand back the writer (for tests that
    /// inspect the produced output).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for TermConsole<R, W> {
    fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

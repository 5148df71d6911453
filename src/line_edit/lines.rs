//! Physical line reading with terminator classification.
//! Only LF and CRLF count as terminators; a lone CR stays in the content.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::errors::Result;
use crate::helpers::io_step;

/// The end-of-line byte sequence attached to one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `\n`
    Lf,
    /// `\r\n`
    Crlf,
    /// Final line with no trailing terminator.
    None,
}

impl Terminator {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Terminator::Lf => b"\n",
            Terminator::Crlf => b"\r\n",
            Terminator::None => b"",
        }
    }
}

/// One physical line: content bytes plus the terminator that ended it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PhysicalLine {
    pub content: Vec<u8>,
    pub terminator: Terminator,
}

/// Streaming iterator over a file's physical lines.
pub(crate) struct LineReader<R> {
    inner: R,
}

impl LineReader<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(io_step("open source file", path))?;
        Ok(LineReader {
            inner: BufReader::new(file),
        })
    }
}

#[cfg(test)]
impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        LineReader { inner }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<PhysicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.inner.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                let terminator = if buf.ends_with(b"\r\n") {
                    buf.truncate(buf.len() - 2);
                    Terminator::Crlf
                } else if buf.ends_with(b"\n") {
                    buf.pop();
                    Terminator::Lf
                } else {
                    Terminator::None
                };
                Some(Ok(PhysicalLine {
                    content: buf,
                    terminator,
                }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

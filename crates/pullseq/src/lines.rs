//! # Line Sources
//!
//! [`LineSource`] adapts a buffered reader into a generator of lines, so
//! text streams can be consumed through [`LazySequence`] one line at a
//! time. Terminators are stripped (`\n` and `\r\n`), a trailing terminator
//! produces no empty final line, and an unterminated final line is still
//! delivered.
//!
//! The source owns its reader and releases it as soon as the stream ends,
//! at end of input or on a read fault, without waiting for the sequence
//! itself to be dropped.
//!
//! A read fault ends the stream the same way end of input does: the
//! sequence just reports exhaustion. The error itself is parked on the
//! source, reachable through [`LazySequence::generator`], so a consumer
//! that cares can tell a faulted stream from a completed one after the
//! drain:
//!
//! ```rust
//! use pullseq::lines;
//!
//! let mut seq = lines("alpha\nbeta\n".as_bytes());
//! while let Some(line) = seq.pull() {
//!     println!("{line}");
//! }
//! if let Some(fault) = seq.generator().fault() {
//!     eprintln!("stream ended early: {fault}");
//! }
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::{PullseqError, PullseqResult},
    generate::Generate,
    sequence::LazySequence,
};

/// A [`LazySequence`] of lines pulled from a buffered reader.
pub type LineSequence<R> = LazySequence<LineSource<R>>;

/// Generator that produces the lines of an owned buffered reader.
pub struct LineSource<R: BufRead> {
    /// The stream being read. Dropped once the stream ends.
    reader: Option<R>,

    /// A read fault that ended the stream early, if any.
    fault: Option<io::Error>,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a reader. Nothing is read until the first line is pulled.
    pub fn new(reader: R) -> Self {
        LineSource {
            reader: Some(reader),
            fault: None,
        }
    }

    /// Whether the reader has been dropped because the stream ended.
    pub fn is_released(&self) -> bool {
        self.reader.is_none()
    }

    /// Borrow the read fault that ended the stream, if one occurred.
    pub fn fault(&self) -> Option<&io::Error> {
        self.fault.as_ref()
    }

    /// Take ownership of the read fault that ended the stream, if one
    /// occurred. Later calls return `None`.
    pub fn take_fault(&mut self) -> Option<io::Error> {
        self.fault.take()
    }
}

impl<R: BufRead> Generate for LineSource<R> {
    type Item = String;

    fn produce(&mut self) -> Option<String> {
        let reader = self.reader.as_mut()?;

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(fault) => {
                log::warn!("line stream ended on read fault: {fault}");
                self.fault = Some(fault);
                self.reader = None;
                None
            }
        }
    }
}

/// Build a line sequence over a buffered reader.
///
/// ## Arguments
/// * `reader` - the stream to read lines from.
pub fn lines<R: BufRead>(reader: R) -> LineSequence<R> {
    LazySequence::new(LineSource::new(reader))
}

/// Open a file and build a line sequence over it.
///
/// Each call opens the file fresh, so calling this again is how a consumer
/// replays a file after a previous sequence over it is spent.
///
/// ## Arguments
/// * `path` - the path to the file.
pub fn open_lines(path: impl AsRef<Path>) -> PullseqResult<LineSequence<BufReader<File>>> {
    let path = path.as_ref();
    log::debug!("opening line source {path:?}");
    let file = File::open(path).map_err(|source| PullseqError::Open {
        path: path.to_owned(),
        source,
    })?;
    Ok(lines(BufReader::new(file)))
}

//! Entry reader with iterator interface
//!
//! Streams Entry Detail records, with their addenda, out of a file of
//! fixed-width lines.
//!
//! # Design
//!
//! Each `6` line starts an entry. Any `7` lines directly after it are parsed as
//! addenda and attached to that entry. Lines of any other record type (file
//! header, batch header, control records) are skipped. Only one line of
//! lookahead is kept, so memory use does not grow with the file.
//!
//! ```no_run
//! use ach_entry::io::entry_reader::EntryReader;
//! use std::path::Path;
//!
//! let reader = EntryReader::open(Path::new("payroll.ach")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(read) => println!("line {}: trace {}", read.line, read.entry.trace_number),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from `open()`
//! - A bad entry or addenda line is yielded as an `Err` carrying its line number,
//!   and reading carries on with the next entry
//! - A line that is not valid UTF-8 is a bad record (`InvalidCharacterSet` on
//!   `record`), not an I/O failure
//! - An addenda line with no entry before it is yielded as `OrphanAddenda`

use crate::core::{EntryDetail, FixedWidthRecord};
use crate::types::{Addenda, EntryError, FieldError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::trace;

/// An entry and the line it started on
#[derive(Debug, Clone, PartialEq)]
pub struct ReadEntry {
    /// 1-based line number of the `6` record
    pub line: u64,
    /// The parsed entry with its addenda attached
    pub entry: EntryDetail,
}

/// Streaming reader over Entry Detail records
#[derive(Debug)]
pub struct EntryReader<R> {
    reader: R,
    peeked: Option<Vec<u8>>,
    line_num: u64,
}

impl EntryReader<BufReader<File>> {
    /// Open a file of fixed-width records
    pub fn open(path: &Path) -> Result<Self, EntryError> {
        let file = File::open(path).map_err(|e| EntryError::FileOpen {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::new(BufReader::with_capacity(8 * 1024, file)))
    }
}

impl<R: BufRead> EntryReader<R> {
    /// Read records from any buffered source
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            line_num: 0,
        }
    }

    /// Next line as raw bytes, without its `\n` or `\r\n` ending
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        if let Some(bytes) = self.peeked.take() {
            return Ok(Some(bytes));
        }
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        Ok(Some(bytes))
    }

    fn next_is_addenda(&mut self) -> io::Result<bool> {
        if self.peeked.is_none() {
            self.peeked = self.read_line()?;
        }
        Ok(self
            .peeked
            .as_deref()
            .is_some_and(Addenda::is_tagged_bytes))
    }

    /// Attach every addenda line that directly follows the current entry
    ///
    /// All of them are consumed even after one fails, so they are not reported
    /// again as orphans.
    fn attach_addenda(
        &mut self,
        mut result: Result<EntryDetail, EntryError>,
    ) -> Result<EntryDetail, EntryError> {
        loop {
            match self.next_is_addenda() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => return Err(e.into()),
            }
            let Some(bytes) = self.peeked.take() else {
                break;
            };
            self.line_num += 1;
            let line = self.line_num;

            result = match (result, decode_record::<Addenda>(line, bytes)) {
                (Ok(mut entry), Ok(addenda)) => {
                    entry.add_addenda(addenda);
                    Ok(entry)
                }
                (Ok(_), Err(e)) => Err(e),
                (Err(e), _) => Err(e),
            };
        }
        result
    }
}

/// Decode a raw line as text and parse it as `T`
fn decode_record<T: FixedWidthRecord>(line: u64, bytes: Vec<u8>) -> Result<T, EntryError> {
    let text = String::from_utf8(bytes).map_err(|e| {
        let lossy = String::from_utf8_lossy(e.as_bytes());
        EntryError::record(line, FieldError::invalid_character_set("record", lossy))
    })?;
    T::parse_record(&text).map_err(|e| EntryError::record(line, e))
}

impl<R: BufRead> Iterator for EntryReader<R> {
    type Item = Result<ReadEntry, EntryError>;

    /// Get the next entry, with its addenda
    ///
    /// # Returns
    ///
    /// * `Some(Ok(ReadEntry))` - Entry parsed along with all its addenda
    /// * `Some(Err(EntryError))` - I/O error, or a bad record with its line number
    /// * `None` - End of input
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bytes = match self.read_line() {
                Ok(Some(bytes)) => bytes,
                Ok(None) => return None,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_num += 1;
            let line = self.line_num;

            if Addenda::is_tagged_bytes(&bytes) {
                return Some(Err(EntryError::OrphanAddenda { line }));
            }
            if !EntryDetail::is_tagged_bytes(&bytes) {
                trace!(line, "skipping record that is not an entry detail");
                continue;
            }

            let parsed = decode_record::<EntryDetail>(line, bytes);
            let result = self.attach_addenda(parsed);
            return Some(result.map(|entry| ReadEntry { line, entry }));
        }
    }
}

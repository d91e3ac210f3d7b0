//! CSV dialect shared by every interchange file.

use std::fs::File;
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use crate::error::InterchangeError;

pub const DELIMITER: u8 = b';';
pub const QUOTE: u8 = b'\\';

pub fn writer_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .double_quote(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .has_headers(false);
    builder
}

/// Reader builder for interchange files.
///
/// Headers are handled by the caller, and rows may have any number of
/// columns so that short rows can be reported with their line number.
pub fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .double_quote(true)
        .has_headers(false)
        .flexible(true);
    builder
}

/// Write a header and rows to `path`, replacing any existing file.
///
/// Returns the number of data rows written.
pub(crate) fn write_records<'a, I, R>(
    path: &Path,
    header: &[&str],
    rows: I,
) -> Result<usize, InterchangeError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = &'a str>,
{
    let file = File::create(path).map_err(|e| InterchangeError::io(path, e))?;
    let mut writer = writer_builder().from_writer(file);
    writer
        .write_record(header)
        .map_err(|e| InterchangeError::csv(path, e))?;

    let mut written = 0usize;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| InterchangeError::csv(path, e))?;
        written += 1;
    }
    writer.flush().map_err(|e| InterchangeError::io(path, e))?;
    Ok(written)
}

//! Mapping proposal files: written by import, reviewed by hand, read by export.

use std::fs::File;
use std::path::{Path, PathBuf};

use chanmap_model::MappingProposal;
use csv::{StringRecord, StringRecordsIntoIter};
use tracing::debug;

use crate::dialect::{reader_builder, write_records};
use crate::error::InterchangeError;

pub const MAPPING_HEADER: [&str; 4] = ["Id", "Name", "ProviderChannelId", "ProviderChannelName"];

const TUNER_ID_COLUMN: usize = 0;
const TUNER_NAME_COLUMN: usize = 1;
const PROVIDER_ID_COLUMN: usize = 2;
const PROVIDER_NAME_COLUMN: usize = 3;

/// Write proposals to `path`, replacing any existing file.
///
/// An empty slice still produces a valid, header-only file.
pub fn write_mapping_file(
    path: &Path,
    proposals: &[MappingProposal],
) -> Result<usize, InterchangeError> {
    let written = write_records(
        path,
        &MAPPING_HEADER,
        proposals.iter().map(MappingProposal::columns),
    )?;
    debug!(path = %path.display(), rows = written, "wrote mapping file");
    Ok(written)
}

/// One data row of a mapping file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRow {
    /// 1-based line number in the source file.
    pub line: u64,
    pub columns: Vec<String>,
}

impl MappingRow {
    pub fn tuner_channel_id(&self) -> &str {
        self.column(TUNER_ID_COLUMN).unwrap_or_default()
    }

    pub fn tuner_channel_name(&self) -> Option<&str> {
        self.column(TUNER_NAME_COLUMN)
    }

    /// Value sent to the server as the provider channel id.
    pub fn provider_channel_id(&self) -> &str {
        self.column(PROVIDER_ID_COLUMN).unwrap_or_default()
    }

    pub fn provider_channel_name(&self) -> Option<&str> {
        self.column(PROVIDER_NAME_COLUMN)
    }

    fn column(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }
}

/// Streaming reader over a mapping file.
///
/// The header row is recognised and skipped explicitly; a file without a
/// header is read from its first line. Every yielded row is guaranteed to
/// have the tuner id and provider channel id columns.
pub struct MappingReader {
    path: PathBuf,
    records: StringRecordsIntoIter<File>,
    at_start: bool,
}

impl MappingReader {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, InterchangeError> {
        let path = path.into();
        let file = File::open(&path).map_err(|e| InterchangeError::io(&path, e))?;
        let records = reader_builder().from_reader(file).into_records();
        Ok(Self {
            path,
            records,
            at_start: true,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_row(&self, record: &StringRecord) -> Result<MappingRow, InterchangeError> {
        let line = record.position().map_or(0, csv::Position::line);
        if record.len() <= PROVIDER_ID_COLUMN {
            return Err(InterchangeError::MissingColumn {
                path: self.path.clone(),
                line,
                expected: PROVIDER_ID_COLUMN + 1,
                found: record.len(),
            });
        }
        Ok(MappingRow {
            line,
            columns: record.iter().map(str::to_string).collect(),
        })
    }
}

impl Iterator for MappingReader {
    type Item = Result<MappingRow, InterchangeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(error) => return Some(Err(InterchangeError::csv(&self.path, error))),
            };
            if std::mem::replace(&mut self.at_start, false) && is_mapping_header(&record) {
                debug!(path = %self.path.display(), "skipping mapping header row");
                continue;
            }
            return Some(self.to_row(&record));
        }
    }
}

fn is_mapping_header(record: &StringRecord) -> bool {
    record.len() >= MAPPING_HEADER.len()
        && record
            .iter()
            .zip(MAPPING_HEADER)
            .all(|(field, expected)| {
                field
                    .trim_start_matches('\u{feff}')
                    .trim()
                    .eq_ignore_ascii_case(expected)
            })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn read_all(file: &NamedTempFile) -> Vec<MappingRow> {
        MappingReader::open(file.path())
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn skips_header_row() {
        let file = create_temp_csv("Id;Name;ProviderChannelId;ProviderChannelName\nt1;N1;p1;P1\n");
        let rows = read_all(&file);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tuner_channel_id(), "t1");
        assert_eq!(rows[0].provider_channel_id(), "p1");
        assert_eq!(rows[0].line, 2);
    }

    #[test]
    fn reads_headerless_file_from_first_row() {
        let file = create_temp_csv("t1;N1;p1;P1\nt2;N2;p2;P2\n");
        let rows = read_all(&file);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[1].tuner_channel_id(), "t2");
    }

    #[test]
    fn header_detection_tolerates_bom_and_case() {
        let file = create_temp_csv(
            "\u{feff}id;NAME;providerchannelid;ProviderChannelName\r\nt1;N1;p1;P1\r\n",
        );
        let rows = read_all(&file);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].provider_channel_name(), Some("P1"));
    }

    #[test]
    fn header_is_only_skipped_on_first_line() {
        let file = create_temp_csv("t1;N1;p1;P1\nId;Name;ProviderChannelId;ProviderChannelName\n");
        let rows = read_all(&file);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].tuner_channel_id(), "Id");
    }

    #[test]
    fn short_row_reports_line() {
        let file = create_temp_csv("Id;Name;ProviderChannelId;ProviderChannelName\nt1;N1\n");
        let mut reader = MappingReader::open(file.path()).unwrap();

        let error = reader.next().unwrap().unwrap_err();
        match error {
            InterchangeError::MissingColumn {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn three_columns_are_enough() {
        let file = create_temp_csv("t1;N1;p1\n");
        let rows = read_all(&file);

        assert_eq!(rows[0].provider_channel_id(), "p1");
        assert_eq!(rows[0].provider_channel_name(), None);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MappingReader::open(dir.path().join("absent.csv"));
        assert!(matches!(result, Err(InterchangeError::Io { .. })));
    }
}

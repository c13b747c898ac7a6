use matchday_core::domain::{MatchRecord, MatchResult};
use matchday_core::ports::{Error, Result, RowDecoder};
use matchday_core::utils::parse_match_date;
use std::fs::File;
use std::path::Path;

/// Decoder for the fixed seven-field match row layout:
/// date, home team, away team, home goals, away goals, result code, competition.
///
/// Team and competition fields are taken verbatim; no trimming or case
/// normalization is applied.
pub struct MatchRowDecoder;

impl RowDecoder for MatchRowDecoder {
    fn decode(&self, fields: &[&str]) -> Result<MatchRecord> {
        if fields.len() != 7 {
            return Err(Error::decode(format!(
                "expected 7 fields, got {}",
                fields.len()
            )));
        }

        let date = parse_match_date(fields[0])
            .ok_or_else(|| Error::decode(format!("'{}' is not a calendar date", fields[0])))?;
        let home_goals = parse_goals(fields[3], "home goals")?;
        let away_goals = parse_goals(fields[4], "away goals")?;
        let result = MatchResult::from_token(fields[5])
            .ok_or_else(|| Error::decode(format!("unrecognized result code '{}'", fields[5])))?;

        Ok(MatchRecord {
            date,
            home_team: fields[1].to_string(),
            away_team: fields[2].to_string(),
            home_goals,
            away_goals,
            result,
            competition: fields[6].to_string(),
        })
    }
}

fn parse_goals(text: &str, field: &str) -> Result<u32> {
    text.parse::<u32>().map_err(|_| {
        Error::decode(format!("{} '{}' is not a non-negative integer", field, text))
    })
}

/// Reader for comma-separated match listings.
///
/// The loading and splitting algorithm is fixed; the injected decoder is
/// the only customizable step (one raw row in, one typed record out).
pub struct CsvTableReader {
    decoder: Box<dyn RowDecoder>,
    has_header_row: bool,
}

impl CsvTableReader {
    /// Creates a reader that treats every line of the input as data.
    pub fn new(decoder: Box<dyn RowDecoder>) -> Self {
        Self {
            decoder,
            has_header_row: false,
        }
    }

    /// Treats the first line of the input as a header and skips it.
    pub fn with_header_row(mut self) -> Self {
        self.has_header_row = true;
        self
    }

    /// Loads every row of the file at `path`, in source order.
    ///
    /// The whole load aborts on the first row that fails to decode; the
    /// error carries the 1-based source line number. Blank rows, such as
    /// the one produced by a trailing newline, are skipped. The input
    /// format has no quoting or escaping, so quoting is disabled and a
    /// comma always separates fields.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<MatchRecord>> {
        let file = File::open(path.as_ref())?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_header_row)
            .quoting(false)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(row_error)?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let fields: Vec<&str> = row.iter().collect();
            if fields.iter().all(|field| field.is_empty()) {
                continue;
            }

            let record = self
                .decoder
                .decode(&fields)
                .map_err(|err| err.at_line(line))?;
            records.push(record);
        }
        Ok(records)
    }
}

fn row_error(err: csv::Error) -> Error {
    let line = err.position().map(|p| p.line());
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => Error::Io(io_err),
        _ => Error::Decode { line, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn reader() -> CsvTableReader {
        CsvTableReader::new(Box::new(MatchRowDecoder))
    }

    #[test]
    fn test_load_returns_records_in_source_order() {
        let file = write_fixture("2024-01-01,A,B,2,1,H,Cup\n2024-01-02,B,A,0,0,D,Cup\n");

        let records = reader().load(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].home_team, "A");
        assert_eq!(records[0].away_team, "B");
        assert_eq!(records[0].home_goals, 2);
        assert_eq!(records[0].result, MatchResult::HomeWin);
        assert_eq!(records[1].result, MatchResult::Draw);
        assert_eq!(records[1].competition, "Cup");
    }

    #[test]
    fn test_loaded_records_feed_a_wins_report() {
        use matchday_core::analysis::WinsAnalysis;
        use matchday_core::ports::Analyzer;

        let file = write_fixture("2024-01-01,A,B,2,1,H,Cup\n2024-01-02,B,A,0,0,D,Cup\n");

        let records = reader().load(file.path()).unwrap();

        assert_eq!(WinsAnalysis::new("A").run(&records), "A won 1 games");
    }

    #[test]
    fn test_load_filters_trailing_empty_lines() {
        let file = write_fixture("2024-01-01,A,B,2,1,H,Cup\n\n\n");

        let records = reader().load(file.path()).unwrap();

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_load_aborts_on_unknown_result_code() {
        let file = write_fixture("2024-01-01,A,B,2,1,H,Cup\n2024-01-02,B,A,1,0,X,Cup\n");

        let err = reader().load(file.path()).unwrap_err();

        match err {
            Error::Decode { line, message } => {
                assert_eq!(line, Some(2));
                assert!(message.contains("'X'"), "unexpected message: {}", message);
            }
            other => panic!("expected a decode error, got: {}", other),
        }
    }

    #[test]
    fn test_load_aborts_on_bad_goal_count() {
        let file = write_fixture("2024-01-01,A,B,two,1,H,Cup\n");

        let err = reader().load(file.path()).unwrap_err();

        assert!(matches!(err, Error::Decode { line: Some(1), .. }));
    }

    #[test]
    fn test_load_aborts_on_bad_date() {
        let file = write_fixture("someday,A,B,2,1,H,Cup\n");

        let err = reader().load(file.path()).unwrap_err();

        assert!(matches!(err, Error::Decode { line: Some(1), .. }));
    }

    #[test]
    fn test_load_missing_file_is_an_io_error() {
        let err = reader().load("no-such-directory/matches.csv").unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_skips_header_row_when_configured() {
        let file = write_fixture(
            "Date,Home,Away,HomeGoals,AwayGoals,Result,Competition\n2024-01-01,A,B,2,1,H,Cup\n",
        );

        let records = reader().with_header_row().load(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].home_team, "A");
    }

    #[test]
    fn test_decode_round_trips_core_fields() {
        let fields = ["2024-01-01", "A", "B", "2", "1", "H", "Cup"];

        let record = MatchRowDecoder.decode(&fields).unwrap();

        assert_eq!(record.date.format("%Y-%m-%d").to_string(), "2024-01-01");
        assert_eq!(record.home_goals.to_string(), "2");
        assert_eq!(record.away_goals.to_string(), "1");
        assert_eq!(record.result.token(), "H");
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        let err = MatchRowDecoder.decode(&["2024-01-01", "A"]).unwrap_err();

        assert!(matches!(err, Error::Decode { line: None, .. }));
        assert!(err.to_string().contains("expected 7 fields"));
    }

    #[test]
    fn test_decode_rejects_negative_goals() {
        let fields = ["2024-01-01", "A", "B", "-2", "1", "H", "Cup"];

        let err = MatchRowDecoder.decode(&fields).unwrap_err();

        assert!(err.to_string().contains("home goals"));
    }
}

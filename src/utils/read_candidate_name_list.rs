use crate::models::Error;
use crate::types::CandidateNameList;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Header of the column holding the customer names.
const NAME_COLUMN_HEADER: &str = "Name";

pub fn read_candidate_name_list_from_string(csv: &str) -> Result<CandidateNameList, Error> {
    // Use a cursor to simulate a file reader from the string
    read_candidate_name_list_from_reader(Cursor::new(csv))
}

/// Reads a roster from a file, gunzipping it first if the path ends in `.gz`.
pub fn read_candidate_name_list_from_path(path: &Path) -> Result<CandidateNameList, Error> {
    let file = BufReader::new(File::open(path)?);

    let is_gzipped = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

    if is_gzipped {
        read_candidate_name_list_from_reader(GzDecoder::new(file))
    } else {
        read_candidate_name_list_from_reader(file)
    }
}

/// Reads the `Name` column of a headered CSV, preserving row order.
///
/// Other columns are ignored. Names are taken verbatim; matching handles any
/// cleanup.
pub fn read_candidate_name_list_from_reader<R: Read>(
    reader: R,
) -> Result<CandidateNameList, Error> {
    let mut candidate_name_list = CandidateNameList::new();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let name_column_index = headers
        .iter()
        .position(|header| header.trim() == NAME_COLUMN_HEADER)
        .ok_or_else(|| {
            Error::ParserError(format!("Missing '{}' column", NAME_COLUMN_HEADER))
        })?;

    for record in reader.records() {
        let record = record?;

        let name = record.get(name_column_index).ok_or_else(|| {
            Error::ParserError(format!(
                "Missing '{}' field on line {}",
                NAME_COLUMN_HEADER,
                record.position().map_or(0, |position| position.line())
            ))
        })?;

        candidate_name_list.push(name.to_string());
    }

    Ok(candidate_name_list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_reads_name_column_in_order() {
        let csv = "Id,Name\n1,\"Pepsi Logistics Company, Inc.\"\n2,Convoy\n3,C.H. Robinson\n";

        let names = read_candidate_name_list_from_string(csv).unwrap();

        assert_eq!(
            names,
            vec!["Pepsi Logistics Company, Inc.", "Convoy", "C.H. Robinson"]
        );
    }

    #[test]
    fn test_missing_name_column() {
        let csv = "Id,Company\n1,Convoy\n";

        let result = read_candidate_name_list_from_string(csv);

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_short_row() {
        let csv = "Id,Name\n1\n";

        let result = read_candidate_name_list_from_string(csv);

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_header_only() {
        let names = read_candidate_name_list_from_string("Name\n").unwrap();

        assert!(names.is_empty());
    }

    #[test]
    fn test_reads_gzipped_file() {
        let path = std::env::temp_dir().join(format!(
            "customer_name_matcher_roster_{}.csv.gz",
            std::process::id()
        ));

        {
            let file = File::create(&path).unwrap();
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(b"Name\nBlue Grace\nMIDLINK LOGISTICS\n").unwrap();
            encoder.finish().unwrap();
        }

        let names = read_candidate_name_list_from_path(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(names.unwrap(), vec!["Blue Grace", "MIDLINK LOGISTICS"]);
    }

    #[test]
    fn test_missing_file() {
        let result = read_candidate_name_list_from_path(Path::new("does/not/exist.csv"));

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}

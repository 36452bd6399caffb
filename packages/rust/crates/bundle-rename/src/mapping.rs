//! Mapping input: a CSV of original -> new role names.

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::RenameError;

/// Header of the column holding the current role name.
pub const ORIGINAL_ROLE_COLUMN: &str = "Original Role Name";

/// Header of the column holding the target role name.
pub const NEW_ROLE_COLUMN: &str = "New Role Name";

const BOM: char = '\u{feff}';

/// One rename request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    /// Current role name, trimmed.
    pub original_name: String,
    /// Target role name, trimmed.
    pub new_name: String,
}

impl MappingEntry {
    /// Build an entry, trimming surrounding whitespace from both names.
    #[must_use]
    pub fn new(original_name: &str, new_name: &str) -> Self {
        Self {
            original_name: original_name.trim().to_string(),
            new_name: new_name.trim().to_string(),
        }
    }
}

/// Parsed mapping file.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    /// Header row as read (BOM stripped).
    pub headers: Vec<String>,
    /// Data rows in file order.
    pub entries: Vec<MappingEntry>,
}

/// Read and validate the mapping file at `path`.
///
/// # Errors
/// `MappingNotFound` if `path` is not a file, `MissingColumns` if either
/// required header is absent, `Csv` for unreadable or malformed records.
pub fn read_mapping(path: &Path) -> Result<MappingTable, RenameError> {
    if !path.is_file() {
        return Err(RenameError::MappingNotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    parse_mapping(file)
}

/// Parse mapping CSV from any reader.
///
/// Headers are validated before any data row is read. Extra columns are
/// ignored; short rows read missing cells as empty strings.
///
/// # Errors
/// `MissingColumns` or `Csv`, as for [`read_mapping`].
pub fn parse_mapping<R: io::Read>(reader: R) -> Result<MappingTable, RenameError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(BOM).to_string())
        .collect();

    let position = |name: &str| headers.iter().position(|h| h == name);
    let (original_idx, new_idx) = match (position(ORIGINAL_ROLE_COLUMN), position(NEW_ROLE_COLUMN))
    {
        (Some(original_idx), Some(new_idx)) => (original_idx, new_idx),
        (original_idx, new_idx) => {
            let missing = [
                (original_idx, ORIGINAL_ROLE_COLUMN),
                (new_idx, NEW_ROLE_COLUMN),
            ]
            .into_iter()
            .filter(|(idx, _)| idx.is_none())
            .map(|(_, name)| name.to_string())
            .collect();
            return Err(RenameError::MissingColumns { missing });
        }
    };

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        entries.push(MappingEntry::new(
            record.get(original_idx).unwrap_or_default(),
            record.get(new_idx).unwrap_or_default(),
        ));
    }

    Ok(MappingTable { headers, entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let csv = "Original Role Name,New Role Name\nAdmin,SuperAdmin\n  Ops , Operations \n";
        let table = parse_mapping(csv.as_bytes()).expect("parse");

        assert_eq!(table.headers, vec![ORIGINAL_ROLE_COLUMN, NEW_ROLE_COLUMN]);
        assert_eq!(
            table.entries,
            vec![
                MappingEntry::new("Admin", "SuperAdmin"),
                MappingEntry::new("Ops", "Operations"),
            ]
        );
        assert_eq!(table.entries[1].original_name, "Ops");
    }

    #[test]
    fn test_column_order_and_extras() {
        let csv = "Notes,New Role Name,Original Role Name\nx,\"Lead, EU\",Lead\n";
        let table = parse_mapping(csv.as_bytes()).expect("parse");
        assert_eq!(table.entries, vec![MappingEntry::new("Lead", "Lead, EU")]);
    }

    #[test]
    fn test_missing_column() {
        let csv = "Original Role Name,Replacement\nAdmin,SuperAdmin\n";
        match parse_mapping(csv.as_bytes()) {
            Err(RenameError::MissingColumns { missing }) => {
                assert_eq!(missing, vec![NEW_ROLE_COLUMN.to_string()]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_still_validated() {
        let result = parse_mapping("Role,Target\n".as_bytes());
        assert!(matches!(
            result,
            Err(RenameError::MissingColumns { ref missing }) if missing.len() == 2
        ));
    }

    #[test]
    fn test_bom_header() {
        let csv = "\u{feff}Original Role Name,New Role Name\nA,B\n";
        let table = parse_mapping(csv.as_bytes()).expect("parse");
        assert_eq!(table.entries.len(), 1);
    }

    #[test]
    fn test_short_row_reads_empty() {
        let csv = "Original Role Name,New Role Name\nOrphan\n";
        let table = parse_mapping(csv.as_bytes()).expect("parse");
        assert_eq!(table.entries, vec![MappingEntry::new("Orphan", "")]);
    }

    #[test]
    fn test_missing_file() {
        let result = read_mapping(Path::new("/nonexistent/mapping.csv"));
        assert!(matches!(result, Err(RenameError::MappingNotFound(_))));
    }
}

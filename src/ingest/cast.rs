//! Cast records: `MOVIE,ACTOR,CHARACTER_NAME,TYPE,BILLING,GENDER`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::catalog::Catalog;
use crate::error::{HollywoodError, Result};

/// Number of fields in a cast record.
pub const CAST_FIELDS: usize = 6;

const MOVIE: usize = 0;
const ACTOR: usize = 1;
const GENDER: usize = 5;

/// Collapse line breaks inside a quoted field to single spaces and trim the
/// ends, so names stay on one line.
fn clean_field(field: &str) -> String {
    field
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read cast records into `catalog`, returning the number of credits added.
///
/// The first row is a header and is skipped. Fields are trimmed and line
/// breaks inside quoted fields become spaces. Credits read before a
/// malformed row stay in the catalog.
pub fn read_cast<R: Read>(reader: R, catalog: &mut Catalog) -> Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut count = 0;
    for record in rdr.records() {
        let record = record?;
        if record.len() != CAST_FIELDS {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(HollywoodError::Parse(format!(
                "cast record on line {} has {} fields, expected {}",
                line,
                record.len(),
                CAST_FIELDS
            )));
        }
        catalog.add_credit(
            &clean_field(&record[MOVIE]),
            &clean_field(&record[ACTOR]),
            &clean_field(&record[GENDER]),
        );
        count += 1;
    }
    Ok(count)
}

/// Read a cast file into `catalog`.
pub fn load_cast(path: &Path, catalog: &mut Catalog) -> Result<usize> {
    let file = File::open(path)?;
    let count = read_cast(file, catalog)?;
    log::debug!("Loaded {} credits from {}", count, path.display());
    Ok(count)
}

/// Read a cast file, logging instead of returning failures.
///
/// Whatever was loaded before the failure is kept.
pub fn load_cast_lenient(path: &Path, catalog: &mut Catalog) -> usize {
    let before = catalog.credits().len();
    match load_cast(path, catalog) {
        Ok(count) => count,
        Err(e) => {
            log::error!("Failed to read cast file {}: {}", path.display(), e);
            catalog.credits().len() - before
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "\"MOVIE\",\"ACTOR\",\"CHARACTER_NAME\",\"TYPE\",\"BILLING\",\"GENDER\"\n";

    #[test]
    fn test_read_cast_basic() {
        let data = format!(
            "{}\"Titanic\",\"Kate Winslet\",\"Rose\",\"Leading\",\"1\",\"Female\"\n\
             \"Titanic\",\"Leonardo DiCaprio\",\"Jack\",\"Leading\",\"2\",\"Male\"\n\
             \"Inception\",\"Leonardo DiCaprio\",\"Cobb\",\"Leading\",\"1\",\"Male\"\n",
            HEADER
        );
        let mut catalog = Catalog::new();
        let n = read_cast(data.as_bytes(), &mut catalog).unwrap();
        assert_eq!(n, 3);
        assert_eq!(catalog.works().len(), 2);
        assert_eq!(catalog.people().len(), 2);
        let kate = catalog.person_id("Kate Winslet").unwrap();
        assert_eq!(catalog.person(kate).gender, "Female");
    }

    #[test]
    fn test_read_cast_quoted_comma_in_title() {
        let data = format!(
            "{}\"Crazy, Stupid, Love\",\"Emma Stone\",\"Hannah\",\"Supporting\",\"3\",\"Female\"\n",
            HEADER
        );
        let mut catalog = Catalog::new();
        read_cast(data.as_bytes(), &mut catalog).unwrap();
        assert!(catalog.is_work("Crazy, Stupid, Love"));
    }

    #[test]
    fn test_read_cast_normalizes_names() {
        let data = format!(
            "{}\"Kill Bill\nVol. 2\",\"Uma Thurman\",\"Bride\",\"Leading\",\"1\",\"Female\"\n\
             \"B\",\" Lucy Liu \",\"O-Ren\",\"Supporting\",\"2\",\"Female \"\n",
            HEADER
        );
        let mut catalog = Catalog::new();
        read_cast(data.as_bytes(), &mut catalog).unwrap();
        assert!(catalog.is_work("Kill Bill Vol. 2"));
        assert!(catalog.is_person("Lucy Liu"));
        let lucy = catalog.person_id("Lucy Liu").unwrap();
        assert_eq!(catalog.person(lucy).gender, "Female");
    }

    #[test]
    fn test_clean_field() {
        assert_eq!(clean_field("a\r\n  b"), "a b");
        assert_eq!(clean_field("  Mat  Vairo "), "Mat  Vairo");
        assert_eq!(clean_field(""), "");
    }

    #[test]
    fn test_read_cast_header_only() {
        let mut catalog = Catalog::new();
        assert_eq!(read_cast(HEADER.as_bytes(), &mut catalog).unwrap(), 0);
        assert!(catalog.works().is_empty());
    }

    #[test]
    fn test_read_cast_wrong_field_count_keeps_prefix() {
        let data = format!(
            "{}Titanic,Kate Winslet,Rose,Leading,1,Female\nTitanic,Billy Zane\n",
            HEADER
        );
        let mut catalog = Catalog::new();
        let err = read_cast(data.as_bytes(), &mut catalog).unwrap_err();
        assert!(matches!(err, HollywoodError::Parse(_)));
        assert_eq!(catalog.credits().len(), 1);
    }

    #[test]
    fn test_load_cast_lenient_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut catalog = Catalog::new();
        let n = load_cast_lenient(&temp_dir.path().join("nope.txt"), &mut catalog);
        assert_eq!(n, 0);
        assert!(catalog.people().is_empty());
    }

    #[test]
    fn test_load_cast_lenient_partial() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cast.txt");
        fs::write(
            &path,
            format!("{}A,X,c,t,1,Male\nB,Y,c,t,1,Female\nbroken\n", HEADER),
        )
        .unwrap();
        let mut catalog = Catalog::new();
        let n = load_cast_lenient(&path, &mut catalog);
        assert_eq!(n, 2);
        assert!(catalog.is_person("Y"));
    }
}

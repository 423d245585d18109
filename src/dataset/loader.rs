use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use super::{Dataset, LaunchRecord};
use crate::LaunchDashError;

/// Columns that must be present in the header row for the dataset to load.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

pub fn load_launches_csv(source_file: &Path) -> Result<Dataset, LaunchDashError> {
    let file = File::open(source_file).map_err(|e| LaunchDashError::DatasetOpen {
        path: source_file.to_path_buf(),
        source: e,
    })?;
    let dataset = read_launches(file)?;
    info!(
        "Loaded {:?}, found {} launches across {} sites",
        source_file,
        dataset.len(),
        dataset.launch_sites().len()
    );
    Ok(dataset)
}

/// Reads a launch table from any CSV source. The header row is checked for the required
/// columns before any record is parsed.
pub fn read_launches<R: Read>(source: R) -> Result<Dataset, LaunchDashError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| LaunchDashError::DatasetHeader { source: e })?
        .iter()
        .map(str::to_string)
        .collect::<Vec<String>>();
    check_required_columns(&headers)?;
    debug!("Dataset columns: {:?}", headers);

    let records = reader
        .deserialize::<LaunchRecord>()
        .enumerate()
        .map(|(row, record)| {
            record
                .map_err(|e| LaunchDashError::InvalidRecord {
                    row: row + 1,
                    source: e,
                })
                .and_then(|record| check_record(row + 1, record))
        })
        .collect::<Result<Vec<LaunchRecord>, LaunchDashError>>()?;

    Ok(Dataset::new(records))
}

/// Every required cell must carry a value, and payloads must be finite.
fn check_record(row: usize, record: LaunchRecord) -> Result<LaunchRecord, LaunchDashError> {
    if record.launch_site.is_empty() {
        return Err(LaunchDashError::EmptyField {
            row,
            column: "Launch Site",
        });
    }
    if record.booster_version_category.is_empty() {
        return Err(LaunchDashError::EmptyField {
            row,
            column: "Booster Version Category",
        });
    }
    if !record.payload_mass_kg.is_finite() {
        return Err(LaunchDashError::InvalidPayloadMass {
            row,
            value: record.payload_mass_kg,
        });
    }
    Ok(record)
}

fn check_required_columns(found: &[String]) -> Result<(), LaunchDashError> {
    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !found.iter().any(|c| c == *required))
        .map(|c| c.to_string())
        .collect::<Vec<String>>();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LaunchDashError::MissingColumns {
            missing,
            found: found.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::OutcomeClass;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SPACEX_SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1
4,5,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
";

    #[test]
    fn test_load_spacex_layout() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SPACEX_SAMPLE).unwrap();
        file.flush().unwrap();

        let dataset = load_launches_csv(file.path()).unwrap();
        assert_eq!(dataset.len(), 5);

        let third = &dataset.records()[2];
        assert_eq!(third.flight_number, Some(3));
        assert_eq!(third.launch_site, "CCAFS LC-40");
        assert_eq!(third.payload_mass_kg, 525.);
        assert_eq!(third.outcome, OutcomeClass::Failure);
        assert_eq!(third.booster_version.as_deref(), Some("F9 v1.0  B0005"));
        assert_eq!(third.booster_version_category, "v1.0");
        assert_eq!(dataset.records()[4].outcome, OutcomeClass::Success);
    }

    #[test]
    fn test_auxiliary_columns_are_optional() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC LC-39A,3000,1,FT\n";
        let dataset = read_launches(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].flight_number, None);
        assert_eq!(dataset.records()[0].booster_version, None);
    }

    #[test]
    fn test_missing_columns_are_reported() {
        let csv = "Launch Site,class,Booster Version\nKSC LC-39A,1,F9 FT\n";
        match read_launches(csv.as_bytes()) {
            Err(LaunchDashError::MissingColumns { missing, found }) => {
                assert_eq!(missing, vec!["Payload Mass (kg)", "Booster Version Category"]);
                assert_eq!(found, vec!["Launch Site", "class", "Booster Version"]);
            }
            other => panic!("Expected MissingColumns error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_columns_message_lists_found_columns() {
        let csv = "Launch Site,class\nKSC LC-39A,1\n";
        let message = read_launches(csv.as_bytes()).unwrap_err().to_string();
        assert!(message.contains("Found columns"));
        assert!(message.contains("Launch Site"));
        assert!(message.contains("Booster Version Category"));
    }

    #[test]
    fn test_invalid_class_names_the_row() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC LC-39A,3000,1,FT\n\
                   KSC LC-39A,3000,7,FT\n";
        match read_launches(csv.as_bytes()) {
            Err(LaunchDashError::InvalidRecord { row, .. }) => assert_eq!(row, 2),
            other => panic!("Expected InvalidRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_payload_names_the_row() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC LC-39A,500,1,FT\n\
                   KSC LC-39A,NaN,0,FT\n";
        match read_launches(csv.as_bytes()) {
            Err(LaunchDashError::InvalidPayloadMass { row, value }) => {
                assert_eq!(row, 2);
                assert!(value.is_nan());
            }
            other => panic!("Expected InvalidPayloadMass error, got {:?}", other),
        }

        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC LC-39A,inf,1,FT\n";
        assert!(matches!(
            read_launches(csv.as_bytes()),
            Err(LaunchDashError::InvalidPayloadMass { row: 1, .. })
        ));
    }

    #[test]
    fn test_empty_required_cell_names_the_column() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   ,500,1,\n";
        match read_launches(csv.as_bytes()) {
            Err(LaunchDashError::EmptyField { row, column }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "Launch Site");
            }
            other => panic!("Expected EmptyField error, got {:?}", other),
        }

        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC LC-39A,500,1,FT\n\
                   KSC LC-39A,500,1,  \n";
        match read_launches(csv.as_bytes()) {
            Err(LaunchDashError::EmptyField { row, column }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Booster Version Category");
            }
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_names_the_row() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC LC-39A,500,1,FT\n\
                   KSC LC-39A,500\n";
        match read_launches(csv.as_bytes()) {
            Err(LaunchDashError::InvalidRecord { row, .. }) => assert_eq!(row, 2),
            other => panic!("Expected InvalidRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = load_launches_csv(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(LaunchDashError::DatasetOpen { .. })));
    }
}

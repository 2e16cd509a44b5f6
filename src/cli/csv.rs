use awsipmatch::{Result, SearchResults};
use std::io;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save Search Results to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save(search_results: &SearchResults, path: &Path) -> Result<()> {
    let writer = csv::Writer::from_path(path)?;
    write(search_results, writer)
}

/// Write the matching rows; the header comes from the [awsipmatch::GroupedRow] field names.
fn write<W: io::Write>(search_results: &SearchResults, mut writer: csv::Writer<W>) -> Result<()> {
    for row in search_results.rows() {
        writer.serialize(row)?;
    }

    writer.flush()?;

    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use awsipmatch::{AddressResults, GroupedRow};

    #[test]
    fn test_write_rows() {
        let search_results = SearchResults {
            target: "example.com".to_string(),
            addresses: vec![
                AddressResults {
                    address: "13.34.0.1".parse().unwrap(),
                    rows: vec![GroupedRow {
                        address: "13.34.0.1".parse().unwrap(),
                        prefix: "13.34.0.0/16".to_string(),
                        region: "us-east-1".to_string(),
                        services: "AMAZON,EC2".to_string(),
                        network_border_group: "us-east-1".to_string(),
                    }],
                },
                AddressResults {
                    address: "1.1.1.1".parse().unwrap(),
                    rows: vec![],
                },
            ],
        };

        let mut output = Vec::new();
        write(&search_results, csv::Writer::from_writer(&mut output)).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "IP,Prefix,Region,Services,Network Border Group\n\
             13.34.0.1,13.34.0.0/16,us-east-1,\"AMAZON,EC2\",us-east-1\n"
        );
    }

    #[test]
    fn test_save_to_missing_directory() {
        let search_results = SearchResults::default();
        let path = std::env::temp_dir()
            .join("awsipmatch-missing-directory")
            .join("nested")
            .join("results.csv");

        assert!(matches!(
            save(&search_results, &path),
            Err(awsipmatch::Error::Csv(_))
        ));
    }
}

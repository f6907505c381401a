use dedup_map::{ColumnProcessor, ColumnProcessorConfig, Error, Mode};
use std::fs::File;
use test_utils::constants::{
    NAMES_CSV_FILE_PATH, POSSIBLE_INTEGERS_CSV_FILE_PATH, RAGGED_CSV_FILE_PATH,
};
use test_utils::load_column_from_file;

#[cfg(test)]
mod column_processor_tests {
    use super::*;

    fn process_file(path: &str, mode: Mode, column: usize) -> Result<Vec<String>, Error> {
        let config = ColumnProcessorConfig {
            has_headers: true,
            column,
            mode,
        };
        let file = File::open(path).expect("Failed to open test file");

        ColumnProcessor::new(&config).process_csv(file)
    }

    #[test]
    fn test_dedup_names_file() {
        let result = process_file(NAMES_CSV_FILE_PATH, Mode::Dedup, 0).unwrap();
        assert_eq!(result, vec!["Mike", "Ben", "Phoebe", "Jenny"]);
    }

    #[test]
    fn test_dup_names_file() {
        let result = process_file(NAMES_CSV_FILE_PATH, Mode::Dup, 0).unwrap();
        assert_eq!(result, vec!["Phoebe"]);
    }

    #[test]
    fn test_dedup_int_possible_integers_file() {
        let result = process_file(POSSIBLE_INTEGERS_CSV_FILE_PATH, Mode::DedupInt, 1).unwrap();
        assert_eq!(result, vec!["2", "3", "5"]);
    }

    #[test]
    fn test_fixture_loader_agrees_with_processor() {
        let cells = load_column_from_file(NAMES_CSV_FILE_PATH, "name")
            .expect("Failed to load names from CSV");
        let names: Vec<String> = cells.into_iter().flatten().collect();

        let expected = dedup_map::dedup_map(&names, |name| name.clone());
        let result = process_file(NAMES_CSV_FILE_PATH, Mode::Dedup, 0).unwrap();

        assert_eq!(result, expected);
    }

    #[test]
    fn test_fixture_loader_reads_blank_cells_as_none() {
        let cells = load_column_from_file(POSSIBLE_INTEGERS_CSV_FILE_PATH, "value")
            .expect("Failed to load values from CSV");

        assert_eq!(cells.len(), 8);
        assert_eq!(cells[3], None);
        assert_eq!(cells[0].as_deref(), Some("one"));
    }

    #[test]
    fn test_missing_column_fails() {
        let result = process_file(NAMES_CSV_FILE_PATH, Mode::Dedup, 1);
        assert!(matches!(result, Err(Error::ColumnError(_))));
    }

    #[test]
    fn test_ragged_file_fails_to_parse() {
        let result = process_file(RAGGED_CSV_FILE_PATH, Mode::Dedup, 0);
        assert!(matches!(result, Err(Error::ParserError(_))));
    }
}

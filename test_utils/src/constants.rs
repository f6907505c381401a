pub const NUMBERS: [u32; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 21, 33, 126];

pub const NAMES: [&str; 5] = ["Mike", "Ben", "Phoebe", "Phoebe", "Jenny"];

pub const POSSIBLE_INTEGERS: [Option<&str>; 8] = [
    Some("one"),
    Some("2"),
    Some("3"),
    None,
    Some("four"),
    Some("5"),
    Some("5"),
    None,
];

pub const NAMES_CSV_FILE_PATH: &str = "tests/test_files/names.csv";
pub const POSSIBLE_INTEGERS_CSV_FILE_PATH: &str = "tests/test_files/possible_integers.csv";
pub const RAGGED_CSV_FILE_PATH: &str = "tests/test_files/ragged.csv";

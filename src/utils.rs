mod dedup_flat_map;
pub use dedup_flat_map::dedup_flat_map;

mod dedup_map;
pub use dedup_map::{dedup_map, try_dedup_map};

mod dedup_map_hashed;
pub use dedup_map_hashed::dedup_map_hashed;

mod dup_map;
pub use dup_map::{dup_map, try_dup_map};

mod read_csv_records;
pub use read_csv_records::{get_record_cell, read_csv_records};

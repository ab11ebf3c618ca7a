//! Monster catalogue: types, the built-in list, filtering and CSV import.

pub mod filter;
pub mod import;
mod seed;
pub mod types;

pub use filter::PoolFilter;
pub use import::{load_csv, parse_csv, CSV_TEMPLATE};
pub use types::{Monster, MonsterPool};

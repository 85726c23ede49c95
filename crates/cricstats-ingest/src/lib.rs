//! Input boundary for cricstats.
//!
//! - **table**: the raw header-plus-rows shape both readers produce
//! - **csv_table** / **xlsx_table**: CSV and spreadsheet readers
//! - **sheets**: schema resolution for the player and match sources
//! - **live**: saved live-score provider documents

pub mod csv_table;
pub mod error;
pub mod live;
pub mod sheets;
pub mod table;
pub mod xlsx_table;

pub use csv_table::read_csv_table;
pub use error::{IngestError, Result};
pub use live::read_live_feed;
pub use sheets::{load_match_sheet, load_player_sheet, load_sheet, read_table};
pub use table::RawTable;
pub use xlsx_table::{is_workbook, read_workbook_table};

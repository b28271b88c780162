//! Domain types.

mod date_range;
mod series;
mod table;
mod ticker;

pub use date_range::DateRange;
pub use series::ReturnSeries;
pub use table::{DatedRow, PriceColumn, PriceTable, ReturnTable};
pub use ticker::Ticker;

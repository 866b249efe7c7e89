mod fare;
mod path;
mod price;
mod segment;

pub use fare::FareTable;
pub use path::{parse_stops, PathGuidance, RidePath};
pub use price::{parse_leading_int, DisplayedPrice, PriceList};
pub use segment::{SegmentEntry, SegmentView};

/// Class given to every per-segment price input, used to read them back
pub const SEGMENT_PRICE_CLASS: &str = "segment-price";

/// Attribute holding the segment index on each price input
pub const SEGMENT_INDEX_ATTR: &str = "data-index";

/// Attribute on `<body>` that may carry a JSON configuration override
pub const CONFIG_ATTR: &str = "data-pricing-config";

/// Field events that trigger a recompute of the segment list
pub const RECOMPUTE_EVENT: &str = "blur";

pub const SUBMIT_EVENT: &str = "submit";

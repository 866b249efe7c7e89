use std::fmt;

/// Parse the leading integer of a form value
///
/// Mirrors how browsers read number-ish text: surrounding whitespace is
/// ignored, an optional sign is accepted, then as many digits as possible are
/// consumed and anything after them is ignored. Returns `None` when there are
/// no digits or the value does not fit.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix(&['-', '+'][..]).unwrap_or(trimmed);
    let sign_len = trimmed.len() - unsigned.len();
    let digit_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();

    if digit_len == 0 {
        return None;
    }

    trimmed[..sign_len + digit_len].parse().ok()
}

/// A price per seat as typed in one segment input, tagged with its segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedPrice {
    pub index: usize,
    pub raw: String,
}

impl DisplayedPrice {
    #[must_use]
    pub fn new(index: usize, raw: impl Into<String>) -> Self {
        Self { index, raw: raw.into() }
    }
}

/// Per-segment prices, position `k` belonging to segment `k`
///
/// `None` means "unset": the segment falls back to the global price. The
/// textual form is a comma-joined list where unset entries are empty, e.g.
/// `12,,40`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceList {
    values: Vec<Option<i32>>,
}

impl PriceList {
    #[must_use]
    pub fn new(values: Vec<Option<i32>>) -> Self {
        Self { values }
    }

    /// Parse a serialized price list
    ///
    /// Never fails: unparsable or empty tokens become unset. A blank input is
    /// an empty list.
    #[must_use]
    pub fn parse(csv: &str) -> Self {
        if csv.trim().is_empty() {
            return Self::default();
        }

        Self {
            values: csv.split(',').map(parse_leading_int).collect(),
        }
    }

    /// Collect the values currently shown in the segment inputs
    ///
    /// Each value lands at its own segment index regardless of the order the
    /// inputs were read in. Indices nobody reported stay unset. An index at or
    /// past the number of displayed inputs cannot belong to a rendered segment
    /// and is skipped.
    #[must_use]
    pub fn from_displayed(displayed: &[DisplayedPrice]) -> Self {
        let in_range = || displayed.iter().filter(|d| d.index < displayed.len());
        let len = in_range().map(|d| d.index + 1).max().unwrap_or(0);
        let mut values = vec![None; len];

        for price in in_range() {
            values[price.index] = parse_leading_int(&price.raw);
        }

        Self { values }
    }

    /// Price for segment `index`, `None` when unset or out of range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[Option<i32>] {
        &self.values
    }

    /// Exactly `segment_count` entries: extra ones dropped, missing ones unset
    ///
    /// This is how a submitted list is read against the path it was sent with.
    #[must_use]
    pub fn fitted_to(&self, segment_count: usize) -> Self {
        let mut values = self.values.clone();
        values.resize(segment_count, None);
        Self { values }
    }

    /// Encode for the transport field
    #[must_use]
    pub fn to_csv(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PriceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if let Some(price) = value {
                write!(f, "{price}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7 "), Some(7));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("3.5"), Some(3));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("+8"), Some(8));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999"), None);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(PriceList::parse("").is_empty());
        assert!(PriceList::parse("   ").is_empty());
    }

    #[test]
    fn test_parse_keeps_positions_of_unset_entries() {
        let prices = PriceList::parse("15,,40");
        assert_eq!(prices.values(), [Some(15), None, Some(40)]);
        assert_eq!(prices.get(1), None);
        assert_eq!(prices.get(2), Some(40));
        assert_eq!(prices.get(3), None);
    }

    #[test]
    fn test_parse_is_lenient() {
        let prices = PriceList::parse("x, 12 ,,7€");
        assert_eq!(prices.values(), [None, Some(12), None, Some(7)]);
    }

    #[test]
    fn test_well_formed_list_survives_parse_and_serialize() {
        for csv in ["10,20", "12,,40", "0", ",", "5,,"] {
            assert_eq!(PriceList::parse(csv).to_csv(), csv);
        }
    }

    #[test]
    fn test_serialize_unset_as_empty_token() {
        let prices = PriceList::new(vec![Some(12), None, Some(40)]);
        assert_eq!(prices.to_csv(), "12,,40");
        assert_eq!(PriceList::default().to_csv(), "");
    }

    #[test]
    fn test_negative_price_is_not_clamped() {
        let prices = PriceList::from_displayed(&[DisplayedPrice::new(0, "-5")]);
        assert_eq!(prices.to_csv(), "-5");
    }

    #[test]
    fn test_from_displayed_orders_by_index() {
        let displayed = vec![
            DisplayedPrice::new(2, "40"),
            DisplayedPrice::new(0, "15"),
            DisplayedPrice::new(1, ""),
        ];
        assert_eq!(PriceList::from_displayed(&displayed).to_csv(), "15,,40");
    }

    #[test]
    fn test_from_displayed_garbage_becomes_empty_token() {
        let displayed = vec![DisplayedPrice::new(0, "abc"), DisplayedPrice::new(1, " 9 ")];
        assert_eq!(PriceList::from_displayed(&displayed).to_csv(), ",9");
        assert_eq!(PriceList::from_displayed(&[]).to_csv(), "");
    }

    #[test]
    fn test_from_displayed_skips_out_of_range_indices() {
        let displayed = vec![
            DisplayedPrice::new(usize::MAX, "99"),
            DisplayedPrice::new(0, "15"),
            DisplayedPrice::new(1_000_000_000, "7"),
        ];
        assert_eq!(PriceList::from_displayed(&displayed).to_csv(), "15");

        let displayed = vec![DisplayedPrice::new(1, "4"), DisplayedPrice::new(5, "8")];
        assert_eq!(PriceList::from_displayed(&displayed).to_csv(), ",4");
    }

    #[test]
    fn test_fitted_to_pads_and_truncates() {
        let prices = PriceList::parse("40,30");
        assert_eq!(prices.fitted_to(4).values(), [Some(40), Some(30), None, None]);
        assert_eq!(prices.fitted_to(1).values(), [Some(40)]);
        assert!(prices.fitted_to(0).is_empty());
    }
}

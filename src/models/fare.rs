use super::price::PriceList;

/// Price per seat for any part of a ride, from its per-segment grid
///
/// City indices follow the ride path: `0` is the departure, `segment_count`
/// the arrival. Segment `k` joins city `k` to city `k + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareTable {
    prices: PriceList,
    base_price: i32,
    segment_count: usize,
}

impl FareTable {
    #[must_use]
    pub fn new(prices: PriceList, base_price: i32, segment_count: usize) -> Self {
        Self { prices, base_price, segment_count }
    }

    /// Sum of the segment prices between two cities of the path
    ///
    /// Unset or non-positive segment prices count at the base price. Without a
    /// grid holding one entry per segment, every trip costs the flat base
    /// price.
    ///
    /// Returns `None` when the indices do not describe a forward trip on the
    /// path.
    #[must_use]
    pub fn span_price(&self, from: usize, to: usize) -> Option<i32> {
        if self.segment_count == 0 || to <= from || to > self.segment_count {
            return None;
        }

        if self.prices.len() != self.segment_count {
            return Some(self.base_price);
        }

        (from..to)
            .map(|segment| self.prices.get(segment).filter(|p| *p > 0).unwrap_or(self.base_price))
            .try_fold(0i32, i32::checked_add)
    }

    /// Like [`Self::span_price`], falling back to the base price when there is
    /// no usable quote
    #[must_use]
    pub fn unit_price(&self, from: usize, to: usize) -> i32 {
        self.span_price(from, to)
            .filter(|p| *p > 0)
            .unwrap_or(self.base_price)
    }

    #[must_use]
    pub fn full_trip_price(&self) -> Option<i32> {
        self.span_price(0, self.segment_count)
    }
}

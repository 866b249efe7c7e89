use super::path::{PathGuidance, RidePath};
use super::price::PriceList;

/// One priced leg of the ride as shown to the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentEntry {
    /// Segment index, carried explicitly so reading back does not depend on
    /// display order
    pub index: usize,
    pub from: String,
    pub to: String,
    /// Initial price shown in the input, `None` leaves it blank
    pub price: Option<i32>,
}

impl SegmentEntry {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} \u{2192} {}", self.from, self.to)
    }

    #[must_use]
    pub fn price_text(&self) -> String {
        self.price.map(|p| p.to_string()).unwrap_or_default()
    }
}

/// Render model for the segment container
///
/// Replaced wholesale on every recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentView {
    NeedMainCities,
    NeedMoreCities,
    Segments(Vec<SegmentEntry>),
}

impl SegmentView {
    /// One entry per leg, seeded with the saved price, else the base price
    #[must_use]
    pub fn from_path(path: &RidePath, saved: &PriceList, base_price: Option<i32>) -> Self {
        let entries = path
            .segments()
            .map(|(index, from, to)| SegmentEntry {
                index,
                from: from.to_string(),
                to: to.to_string(),
                price: saved.get(index).or(base_price),
            })
            .collect();

        Self::Segments(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[SegmentEntry] {
        match self {
            Self::Segments(entries) => entries,
            Self::NeedMainCities | Self::NeedMoreCities => &[],
        }
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.entries().len()
    }

    /// The list this view serializes to when no input is touched
    #[must_use]
    pub fn prices(&self) -> PriceList {
        let mut values = vec![None; self.segment_count()];
        for entry in self.entries() {
            values[entry.index] = entry.price;
        }
        PriceList::new(values)
    }
}

impl From<PathGuidance> for SegmentView {
    fn from(guidance: PathGuidance) -> Self {
        match guidance {
            PathGuidance::NeedMainCities => Self::NeedMainCities,
            PathGuidance::NeedMoreCities => Self::NeedMoreCities,
        }
    }
}

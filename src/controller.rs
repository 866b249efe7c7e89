use std::rc::Rc;

use crate::log;
use crate::models::{parse_leading_int, DisplayedPrice, PathGuidance, PriceList, RidePath, SegmentView};

/// Form fields whose blur triggers a recompute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Departure,
    Arrival,
    Stops,
    BasePrice,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Departure, Field::Arrival, Field::Stops, Field::BasePrice];
}

/// Read and write access to the ride form
pub trait RideForm {
    /// Current raw value of a field
    fn field_value(&self, field: Field) -> String;

    /// Current value of the transport field
    fn transport_value(&self) -> String;

    fn set_transport_value(&self, csv: &str);

    /// Replace whatever the segment container shows with `view`
    fn show_segments(&self, view: &SegmentView);

    /// Values currently in the per-segment price inputs
    fn displayed_prices(&self) -> Vec<DisplayedPrice>;
}

/// Notifications from the hosting page
pub trait FormEvents {
    fn on_field_blur(&self, field: Field, handler: Box<dyn Fn()>);

    /// The handler runs before the submission proceeds
    fn on_submit(&self, handler: Box<dyn Fn()>);
}

/// Drives the segment list and the transport field of one ride form
pub struct SegmentPricing<F> {
    form: F,
}

impl<F: RideForm> SegmentPricing<F> {
    #[must_use]
    pub fn new(form: F) -> Self {
        Self { form }
    }

    #[must_use]
    pub fn form(&self) -> &F {
        &self.form
    }

    fn current_path(&self) -> Result<RidePath, PathGuidance> {
        RidePath::build(
            &self.form.field_value(Field::Departure),
            &self.form.field_value(Field::Arrival),
            &self.form.field_value(Field::Stops),
        )
    }

    fn render(&self, saved: &PriceList) -> SegmentView {
        let base_price = parse_leading_int(&self.form.field_value(Field::BasePrice));

        let view = match self.current_path() {
            Ok(path) => SegmentView::from_path(&path, saved, base_price),
            Err(guidance) => guidance.into(),
        };

        self.form.show_segments(&view);
        view
    }

    /// Rebuild the segment list from the fields and the last serialized prices
    pub fn recompute(&self) -> SegmentView {
        let saved = PriceList::parse(&self.form.transport_value());
        let view = self.render(&saved);
        log!("Recomputed {} segments", view.segment_count());
        view
    }

    /// Write the displayed prices to the transport field
    ///
    /// If the fields changed without a recompute (e.g. stops edited and the
    /// form submitted before blur), the list is first rebuilt from the
    /// displayed values so the serialized positions match the actual path.
    pub fn finalize(&self) -> String {
        let displayed = PriceList::from_displayed(&self.form.displayed_prices());

        let expected = self.current_path().map_or(0, |path| path.segment_count());
        let prices = if displayed.len() == expected {
            displayed
        } else {
            log!("Segments out of date ({} shown, {} expected), rebuilding", displayed.len(), expected);
            self.render(&displayed).prices()
        };

        let csv = prices.to_csv();
        self.form.set_transport_value(&csv);
        csv
    }
}

/// Handle returned by [`PricingHandle::attach`]
///
/// `Disabled` when the page lacks a required element: nothing is bound and the
/// form keeps working without per-segment prices.
pub enum PricingHandle<F> {
    Disabled,
    Active(Rc<SegmentPricing<F>>),
}

impl<F: RideForm + FormEvents + 'static> PricingHandle<F> {
    /// Bind the field and submit events, then render once for values already
    /// present in the form
    pub fn attach(form: Option<F>) -> Self {
        let Some(form) = form else {
            log!("Segment pricing disabled");
            return Self::Disabled;
        };

        let pricing = Rc::new(SegmentPricing::new(form));

        for field in Field::ALL {
            let pricing_blur = Rc::clone(&pricing);
            pricing.form().on_field_blur(field, Box::new(move || {
                pricing_blur.recompute();
            }));
        }

        let pricing_submit = Rc::clone(&pricing);
        pricing.form().on_submit(Box::new(move || {
            pricing_submit.finalize();
        }));

        pricing.recompute();
        Self::Active(pricing)
    }
}

impl<F: RideForm> PricingHandle<F> {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Recompute now; `None` when disabled
    pub fn recompute(&self) -> Option<SegmentView> {
        match self {
            Self::Active(pricing) => Some(pricing.recompute()),
            Self::Disabled => None,
        }
    }

    /// Finalize now; `None` when disabled
    pub fn finalize(&self) -> Option<String> {
        match self {
            Self::Active(pricing) => Some(pricing.finalize()),
            Self::Disabled => None,
        }
    }
}

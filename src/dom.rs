//! Browser host for [`PricingHandle`]: binds the controller to the ride form
//! already present in the page.

use leptos::{view, create_signal, SignalSet, WriteSignal};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::components::segment_list::SegmentList;
use crate::config::PricingConfig;
use crate::constants::{CONFIG_ATTR, RECOMPUTE_EVENT, SEGMENT_INDEX_ATTR, SEGMENT_PRICE_CLASS, SUBMIT_EVENT};
use crate::controller::{Field, FormEvents, PricingHandle, RideForm};
use crate::log;
use crate::models::{DisplayedPrice, SegmentView};

fn required_element<T: JsCast>(document: &Document, id: &str) -> Result<T, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("Missing required element #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| format!("Element #{id} has an unexpected type"))
}

fn listen(target: &EventTarget, event: &str, handler: Box<dyn Fn()>) {
    let closure = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn Fn(Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log!("Failed to add {} listener", event);
    }
    // Bound for the lifetime of the page
    closure.forget();
}

/// The ride form elements, with the segment list mounted in its container
pub struct DomRideForm {
    departure: HtmlInputElement,
    arrival: HtmlInputElement,
    stops: HtmlTextAreaElement,
    base_price: HtmlInputElement,
    container: HtmlElement,
    transport: HtmlInputElement,
    form: HtmlFormElement,
    set_segments: WriteSignal<SegmentView>,
}

impl DomRideForm {
    /// Find every required element, then take over the segment container
    ///
    /// # Errors
    ///
    /// Returns an error naming the first element that is missing or of the
    /// wrong kind; the page is left untouched in that case
    pub fn lookup(document: &Document, config: &PricingConfig) -> Result<Self, String> {
        let ids = &config.ids;
        let departure = required_element::<HtmlInputElement>(document, &ids.departure)?;
        let arrival = required_element::<HtmlInputElement>(document, &ids.arrival)?;
        let stops = required_element::<HtmlTextAreaElement>(document, &ids.stops)?;
        let base_price = required_element::<HtmlInputElement>(document, &ids.base_price)?;
        let container = required_element::<HtmlElement>(document, &ids.segments_container)?;
        let transport = required_element::<HtmlInputElement>(document, &ids.transport)?;
        let form = required_element::<HtmlFormElement>(document, &ids.form)?;

        let (segments, set_segments) = create_signal(SegmentView::NeedMainCities);
        let messages = config.messages.clone();
        let currency = config.currency_suffix.clone();

        container.set_inner_html("");
        leptos::mount_to(container.clone(), move || {
            view! { <SegmentList segments=segments messages=messages currency=currency /> }
        });

        Ok(Self {
            departure,
            arrival,
            stops,
            base_price,
            container,
            transport,
            form,
            set_segments,
        })
    }

    fn field_target(&self, field: Field) -> &EventTarget {
        match field {
            Field::Departure => &self.departure,
            Field::Arrival => &self.arrival,
            Field::Stops => &self.stops,
            Field::BasePrice => &self.base_price,
        }
    }
}

impl RideForm for DomRideForm {
    fn field_value(&self, field: Field) -> String {
        match field {
            Field::Departure => self.departure.value(),
            Field::Arrival => self.arrival.value(),
            Field::Stops => self.stops.value(),
            Field::BasePrice => self.base_price.value(),
        }
    }

    fn transport_value(&self) -> String {
        self.transport.value()
    }

    fn set_transport_value(&self, csv: &str) {
        self.transport.set_value(csv);
    }

    fn show_segments(&self, view: &SegmentView) {
        self.set_segments.set(view.clone());
    }

    fn displayed_prices(&self) -> Vec<DisplayedPrice> {
        let Ok(inputs) = self.container.query_selector_all(&format!(".{SEGMENT_PRICE_CLASS}")) else {
            return Vec::new();
        };

        (0..inputs.length())
            .filter_map(|i| inputs.item(i))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .filter_map(|input| {
                let index = input.get_attribute(SEGMENT_INDEX_ATTR)?.parse().ok()?;
                Some(DisplayedPrice::new(index, input.value()))
            })
            .collect()
    }
}

impl FormEvents for DomRideForm {
    fn on_field_blur(&self, field: Field, handler: Box<dyn Fn()>) {
        listen(self.field_target(field), RECOMPUTE_EVENT, handler);
    }

    fn on_submit(&self, handler: Box<dyn Fn()>) {
        listen(&self.form, SUBMIT_EVENT, handler);
    }
}

/// Enhance the ride form of `document`
///
/// Returns a disabled handle, with nothing bound, if any element is missing.
#[must_use]
pub fn enhance(document: &Document, config: &PricingConfig) -> PricingHandle<DomRideForm> {
    match DomRideForm::lookup(document, config) {
        Ok(form) => PricingHandle::attach(Some(form)),
        Err(e) => {
            log!("Segment pricing not enabled: {}", e);
            PricingHandle::Disabled
        }
    }
}

/// Enhance the current page, reading an optional JSON configuration from the
/// `data-pricing-config` attribute of `<body>`
#[must_use]
pub fn enhance_document() -> PricingHandle<DomRideForm> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return PricingHandle::Disabled;
    };

    let config_json = document.body().and_then(|body| body.get_attribute(CONFIG_ATTR));
    let config = PricingConfig::from_override(config_json.as_deref());

    enhance(&document, &config)
}

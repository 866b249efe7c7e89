use leptos::{component, view, IntoView, CollectView, ReadSignal, SignalGet, store_value};
use crate::config::Messages;
use crate::constants::SEGMENT_PRICE_CLASS;
use crate::models::{SegmentEntry, SegmentView};

#[component]
#[must_use]
pub fn SegmentPriceRow(entry: SegmentEntry, currency: String) -> impl IntoView {
    view! {
        <div class="list-group-item d-flex justify-content-between align-items-center">
            <div>{entry.label()}</div>
            <div class="ms-2" style="max-width:130px;">
                <div class="input-group input-group-sm">
                    <input
                        type="number"
                        class=format!("form-control {SEGMENT_PRICE_CLASS}")
                        data-index=entry.index.to_string()
                        min="0"
                        value=entry.price_text()
                    />
                    <span class="input-group-text">{currency}</span>
                </div>
            </div>
        </div>
    }
}

/// Guidance text or one price input per leg
///
/// Every change of `segments` rebuilds all rows; values typed but not yet
/// serialized are dropped with them.
#[component]
#[must_use]
pub fn SegmentList(
    segments: ReadSignal<SegmentView>,
    messages: Messages,
    currency: String,
) -> impl IntoView {
    let messages = store_value(messages);
    let currency = store_value(currency);

    view! {
        {move || match segments.get() {
            SegmentView::NeedMainCities => view! {
                <p class="text-muted small mb-0">{messages.with_value(|m| m.need_main_cities.clone())}</p>
            }.into_view(),
            SegmentView::NeedMoreCities => view! {
                <p class="text-muted small mb-0">{messages.with_value(|m| m.need_more_cities.clone())}</p>
            }.into_view(),
            SegmentView::Segments(entries) => view! {
                <div class="small mb-2 text-muted">{messages.with_value(|m| m.segments_header.clone())}</div>
                <div class="list-group list-group-flush">
                    {entries.into_iter().map(|entry| view! {
                        <SegmentPriceRow entry=entry currency=currency.get_value() />
                    }).collect_view()}
                </div>
            }.into_view(),
        }}
    }
}

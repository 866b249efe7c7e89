pub mod models;
pub mod components;
pub mod config;
pub mod constants;
pub mod controller;
pub mod dom;
pub mod logging;

pub use controller::{Field, FormEvents, PricingHandle, RideForm, SegmentPricing};
pub use dom::enhance_document;

use serde::{Deserialize, Serialize};

/// Ids of the form elements the enhancement binds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub departure: String,
    pub arrival: String,
    pub stops: String,
    pub base_price: String,
    pub segments_container: String,
    pub transport: String,
    pub form: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            departure: "departureCity".to_string(),
            arrival: "arrivalCity".to_string(),
            stops: "stops".to_string(),
            base_price: "pricePerSeat".to_string(),
            segments_container: "segmentsContainer".to_string(),
            transport: "segmentPricesCsv".to_string(),
            form: "rideForm".to_string(),
        }
    }
}

/// Texts shown in the segment container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub need_main_cities: String,
    pub need_more_cities: String,
    pub segments_header: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            need_main_cities: "Enter the departure city, the stops and the arrival city first to see the segments.".to_string(),
            need_more_cities: "Add at least a departure and an arrival city.".to_string(),
            segments_header: "Set a price per seat for each leg:".to_string(),
        }
    }
}

/// Configuration of the segment pricing enhancement
///
/// Every field has a default, so a page only needs to override what differs,
/// e.g. `{"ids": {"form": "offerForm"}, "currency_suffix": "CHF"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub ids: ElementIds,
    pub messages: Messages,
    /// Label displayed next to each price input
    pub currency_suffix: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            messages: Messages::default(),
            currency_suffix: "\u{20ac}".to_string(),
        }
    }
}

impl PricingConfig {
    /// Parse a (partial) JSON configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has fields of the wrong type
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse pricing config: {e}"))
    }

    /// Use the override when present and valid, defaults otherwise
    #[must_use]
    pub fn from_override(json: Option<&str>) -> Self {
        let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
            return Self::default();
        };

        Self::from_json(json).unwrap_or_else(|e| {
            crate::log!("{}; using defaults", e);
            Self::default()
        })
    }
}

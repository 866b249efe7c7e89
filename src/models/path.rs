/// Why a ride path could not be built from the current field values.
///
/// Each variant maps to its own guidance message in the segment container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathGuidance {
    /// Departure or arrival city is blank
    NeedMainCities,
    /// Fewer than two cities overall
    NeedMoreCities,
}

/// Ordered list of cities travelled through: departure, stops, arrival
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RidePath {
    cities: Vec<String>,
}

impl RidePath {
    /// Build the path from the raw departure, arrival and stops field values
    ///
    /// Stops are one city per line. Every token is trimmed and blank lines are
    /// dropped. Cities are kept exactly as typed otherwise (no case folding,
    /// no deduplication).
    ///
    /// # Errors
    ///
    /// Returns the guidance state to display when no segment can be derived
    pub fn build(departure: &str, arrival: &str, stops_text: &str) -> Result<Self, PathGuidance> {
        let departure = departure.trim();
        let arrival = arrival.trim();

        if departure.is_empty() || arrival.is_empty() {
            return Err(PathGuidance::NeedMainCities);
        }

        let mut cities = vec![departure.to_string()];
        cities.extend(parse_stops(stops_text));
        cities.push(arrival.to_string());

        if cities.len() < 2 {
            return Err(PathGuidance::NeedMoreCities);
        }

        Ok(Self { cities })
    }

    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Number of legs, one fewer than the number of cities
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// Iterate legs as `(index, from, to)`
    pub fn segments(&self) -> impl Iterator<Item = (usize, &str, &str)> {
        self.cities
            .windows(2)
            .enumerate()
            .map(|(k, pair)| (k, pair[0].as_str(), pair[1].as_str()))
    }

    /// Cities strictly between departure and arrival
    #[must_use]
    pub fn intermediate_stops(&self) -> &[String] {
        match self.cities.len() {
            0..=2 => &[],
            n => &self.cities[1..n - 1],
        }
    }
}

/// Split the stops block into trimmed, non-empty city names
pub fn parse_stops(stops_text: &str) -> impl Iterator<Item = String> + '_ {
    // `lines` handles both "\n" and "\r\n"
    stops_text
        .lines()
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_ride_has_one_segment() {
        let path = RidePath::build("Paris", "Lyon", "").expect("path should build");
        assert_eq!(path.cities(), ["Paris", "Lyon"]);
        assert_eq!(path.segment_count(), 1);
        assert!(path.intermediate_stops().is_empty());
    }

    #[test]
    fn test_blank_stop_lines_are_dropped() {
        let path = RidePath::build("Paris", "Marseille", "Dijon\n\nLyon").expect("path should build");
        assert_eq!(path.cities(), ["Paris", "Dijon", "Lyon", "Marseille"]);
        assert_eq!(path.segment_count(), 3);
        assert_eq!(path.intermediate_stops(), ["Dijon", "Lyon"]);
    }

    #[test]
    fn test_tokens_are_trimmed_and_crlf_is_accepted() {
        let path = RidePath::build("  Nice ", "\tMilan", " Cannes \r\n   \r\nMonaco\r\n")
            .expect("path should build");
        assert_eq!(path.cities(), ["Nice", "Cannes", "Monaco", "Milan"]);
    }

    #[test]
    fn test_cities_are_kept_as_typed() {
        // Repeated or differently cased cities are not merged here
        let path = RidePath::build("paris", "Paris", "PARIS").expect("path should build");
        assert_eq!(path.cities(), ["paris", "PARIS", "Paris"]);
    }

    #[test]
    fn test_missing_main_city_needs_guidance() {
        assert_eq!(RidePath::build("", "Lyon", "Dijon"), Err(PathGuidance::NeedMainCities));
        assert_eq!(RidePath::build("Paris", "   ", ""), Err(PathGuidance::NeedMainCities));
    }

    #[test]
    fn test_segments_are_consecutive_pairs() {
        let path = RidePath::build("A", "D", "B\nC").expect("path should build");
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments, vec![(0, "A", "B"), (1, "B", "C"), (2, "C", "D")]);
    }

    #[test]
    fn test_segment_count_matches_stop_count() {
        for stop_count in 0..6 {
            let stops: Vec<String> = (0..stop_count).map(|i| format!("Stop {i}")).collect();
            let path = RidePath::build("Start", "End", &stops.join("\n")).expect("path should build");
            assert_eq!(path.cities().len(), stop_count + 2);
            assert_eq!(path.segment_count(), stop_count + 1);
            assert_eq!(path.intermediate_stops(), stops.as_slice());
        }
    }
}

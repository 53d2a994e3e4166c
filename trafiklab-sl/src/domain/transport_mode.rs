//! Transport modes and the product filter bitmask.

/// The mode of transport for a vehicle or timetable entry.
///
/// SL reports a handful of well-known categories; anything else is left
/// unmapped rather than treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Train,
    Tram,
    Bus,
    Metro,
    Ship,
}

impl TransportMode {
    /// Map a provider category string (`TransportMode` on the departures API,
    /// `catOut` on the trip planner) to a known mode.
    ///
    /// Returns `None` for categories the provider may add in the future.
    pub fn from_provider_category(category: &str) -> Option<Self> {
        match category.trim() {
            "TRAIN" => Some(TransportMode::Train),
            "TRAM" => Some(TransportMode::Tram),
            "BUS" => Some(TransportMode::Bus),
            "METRO" => Some(TransportMode::Metro),
            "SHIP" => Some(TransportMode::Ship),
            _ => None,
        }
    }
}

/// A product code selecting one SL transport category in a [`ProductFilter`].
///
/// The values are the provider's own bitmask flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ProductCode {
    LocalTrain = 1,
    Metro = 2,
    TramLightRail = 4,
    Bus = 8,
    FerriesAndBoats = 64,
    LocalTraffic = 128,
}

/// Bitmask of transport categories a timetable or route query should include.
///
/// An empty filter means unrestricted: it is omitted from outgoing requests
/// entirely, never sent as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter(u32);

impl ProductFilter {
    /// An unrestricted filter.
    pub fn none() -> Self {
        Self::default()
    }

    /// Add a transport category to the filter.
    pub fn add(&mut self, code: ProductCode) {
        self.0 |= code as u32;
    }

    /// True when no restriction has been set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The raw bitmask value to send as the `products` parameter.
    pub fn value(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map() {
        assert_eq!(
            TransportMode::from_provider_category("TRAIN"),
            Some(TransportMode::Train)
        );
        assert_eq!(
            TransportMode::from_provider_category("METRO"),
            Some(TransportMode::Metro)
        );
        assert_eq!(
            TransportMode::from_provider_category("SHIP"),
            Some(TransportMode::Ship)
        );
    }

    #[test]
    fn category_is_trimmed() {
        // catOut values are padded with trailing spaces on the wire.
        assert_eq!(
            TransportMode::from_provider_category("BUS     "),
            Some(TransportMode::Bus)
        );
    }

    #[test]
    fn unknown_category_is_none() {
        assert_eq!(TransportMode::from_provider_category("TAXI"), None);
        assert_eq!(TransportMode::from_provider_category(""), None);
    }

    #[test]
    fn filter_accumulates_flags() {
        let mut filter = ProductFilter::none();
        assert!(filter.is_empty());

        filter.add(ProductCode::Metro);
        filter.add(ProductCode::Bus);
        assert!(!filter.is_empty());
        assert_eq!(filter.value(), 10);
    }

    #[test]
    fn filter_flags_are_idempotent() {
        let mut filter = ProductFilter::none();
        filter.add(ProductCode::LocalTrain);
        filter.add(ProductCode::LocalTrain);
        assert_eq!(filter.value(), 1);
    }
}

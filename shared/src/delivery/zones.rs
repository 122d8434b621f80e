//! Zone lookup table

use crate::models::{DeliveryZone, Order};

/// Outcome of resolving an order to a zone code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneMatch<'a> {
    /// The order carried its own zone code
    Explicit(&'a str),
    /// The shipping city matched a zone in the directory
    Matched(&'a str),
    /// No zone could be determined
    NoMatch,
}

impl<'a> ZoneMatch<'a> {
    pub fn code(&self) -> Option<&'a str> {
        match *self {
            Self::Explicit(code) | Self::Matched(code) => Some(code),
            Self::NoMatch => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// Lookup table from city names to delivery zones
///
/// Built from runtime data (usually `GET /assignment/zones`). A zone matches
/// a city when, after trimming and lower-casing both sides, the city contains
/// one of the zone's substrings or one of the substrings contains the city.
/// Zones are tried in insertion order and the first match wins. A blank city
/// never matches.
#[derive(Debug, Clone, Default)]
pub struct ZoneDirectory {
    zones: Vec<DeliveryZone>,
    /// Lower-cased, trimmed, non-empty substrings per zone (same order as `zones`)
    needles: Vec<Vec<String>>,
}

impl ZoneDirectory {
    pub fn new(zones: Vec<DeliveryZone>) -> Self {
        let needles = zones
            .iter()
            .map(|zone| {
                zone.cities
                    .iter()
                    .map(|c| c.trim().to_lowercase())
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .collect();
        Self { zones, needles }
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn zones(&self) -> &[DeliveryZone] {
        &self.zones
    }

    pub fn get(&self, code: &str) -> Option<&DeliveryZone> {
        self.zones.iter().find(|z| z.code == code)
    }

    /// Resolve a shipping city to a zone code
    pub fn resolve_city(&self, city: &str) -> ZoneMatch<'_> {
        let city = city.trim().to_lowercase();
        if city.is_empty() {
            return ZoneMatch::NoMatch;
        }

        self.zones
            .iter()
            .zip(&self.needles)
            .find(|(_, needles)| {
                needles
                    .iter()
                    .any(|n| city.contains(n.as_str()) || n.contains(city.as_str()))
            })
            .map_or(ZoneMatch::NoMatch, |(zone, _)| ZoneMatch::Matched(&zone.code))
    }

    /// Resolve an order: its explicit zone if set, otherwise its shipping city
    pub fn resolve_order<'a>(&'a self, order: &'a Order) -> ZoneMatch<'a> {
        match order.zone.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => ZoneMatch::Explicit(code),
            _ => self.resolve_city(&order.shipping_address.city),
        }
    }
}

impl From<Vec<DeliveryZone>> for ZoneDirectory {
    fn from(zones: Vec<DeliveryZone>) -> Self {
        Self::new(zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderStatus, PaymentMethod, ShippingAddress};
    use rust_decimal::Decimal;

    fn directory() -> ZoneDirectory {
        ZoneDirectory::new(vec![
            DeliveryZone::new("TN-TUNIS", "Grand Tunis", &["Tunis", "La Marsa", "Le Bardo"]),
            DeliveryZone::new("TN-SFAX", "Sfax", &["Sfax", "  "]),
            DeliveryZone::new("TN-SOUSSE", "Sahel", &["Sousse", "Monastir"]),
        ])
    }

    fn order(city: &str, zone: Option<&str>) -> Order {
        Order {
            id: "o-1".into(),
            items: vec![],
            total_amount: Decimal::ZERO,
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::CashOnDelivery,
            shipping_address: ShippingAddress {
                street: "1 avenue Habib Bourguiba".into(),
                city: city.into(),
                postal_code: None,
                phone: None,
            },
            zone: zone.map(String::from),
            livreur: None,
            created_at: None,
        }
    }

    #[test]
    fn test_city_contains_substring() {
        let dir = directory();
        assert_eq!(dir.resolve_city("Tunis Centre"), ZoneMatch::Matched("TN-TUNIS"));
        assert_eq!(dir.resolve_city("  SFAX  "), ZoneMatch::Matched("TN-SFAX"));
    }

    #[test]
    fn test_substring_contains_city() {
        let dir = directory();
        // "marsa" is contained in "la marsa"
        assert_eq!(dir.resolve_city("marsa"), ZoneMatch::Matched("TN-TUNIS"));
        assert_eq!(dir.resolve_city("Monas"), ZoneMatch::Matched("TN-SOUSSE"));
    }

    #[test]
    fn test_first_zone_wins() {
        let dir = ZoneDirectory::new(vec![
            DeliveryZone::new("A", "first", &["Ben Arous"]),
            DeliveryZone::new("B", "second", &["Arous"]),
        ]);
        assert_eq!(dir.resolve_city("Ben Arous"), ZoneMatch::Matched("A"));
    }

    #[test]
    fn test_no_match() {
        let dir = directory();
        assert_eq!(dir.resolve_city("Gabès"), ZoneMatch::NoMatch);
        assert_eq!(dir.resolve_city(""), ZoneMatch::NoMatch);
        assert_eq!(dir.resolve_city("   "), ZoneMatch::NoMatch);
        assert_eq!(ZoneDirectory::default().resolve_city("Tunis"), ZoneMatch::NoMatch);
    }

    #[test]
    fn test_blank_needles_are_ignored() {
        // TN-SFAX carries a blank entry which must not match everything
        let dir = directory();
        assert_eq!(dir.resolve_city("Kairouan"), ZoneMatch::NoMatch);
    }

    #[test]
    fn test_explicit_zone_wins_over_city() {
        let dir = directory();
        let o = order("Tunis", Some("TN-SFAX"));
        assert_eq!(dir.resolve_order(&o), ZoneMatch::Explicit("TN-SFAX"));

        let o = order("Tunis", Some("  "));
        assert_eq!(dir.resolve_order(&o), ZoneMatch::Matched("TN-TUNIS"));

        let o = order("Tozeur", None);
        assert_eq!(dir.resolve_order(&o).code(), None);
    }
}

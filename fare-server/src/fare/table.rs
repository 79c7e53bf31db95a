//! The fare table: a pure lookup from zone pairs to fare amounts.
//!
//! Pricing is direction-independent (the unordered pair is normalised by
//! sorting), but the rule listing enumerates both directions of each
//! cross-zone pair. The asymmetry is deliberate: pricing is a function,
//! the listing is a display concern for fare-table UIs.

use crate::domain::Zone;

use super::error::FareError;

/// A directed fare rule for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareRule {
    /// Origin zone
    pub from_zone: Zone,

    /// Destination zone
    pub to_zone: Zone,

    /// Fare for the pair
    pub fare: u32,

    /// Human-readable route label, e.g. `"Zone 1 → Zone 2"`
    pub route: String,
}

/// The network fare table.
///
/// Immutable once constructed; pricing is deterministic and total over
/// valid zones, so it never fails for `Zone` values.
#[derive(Debug, Clone)]
pub struct FareTable {
    /// Fare for travel within a single zone, indexed to match [`Zone::ALL`]
    same_zone: [u32; 3],

    /// Fares for travel between distinct zones, keyed by the sorted pair
    cross_zone: [((Zone, Zone), u32); 3],
}

impl FareTable {
    /// The standard network fares.
    pub fn standard() -> Self {
        FareTable {
            // Zone 1 → 40, Zone 2 → 35, Zone 3 → 30
            same_zone: [40, 35, 30],
            cross_zone: [
                ((Zone::ONE, Zone::TWO), 55),
                ((Zone::ONE, Zone::THREE), 65),
                ((Zone::TWO, Zone::THREE), 45),
            ],
        }
    }

    /// Price a single journey between two zones.
    ///
    /// Direction does not matter: `price(a, b) == price(b, a)`.
    pub fn price(&self, from: Zone, to: Zone) -> u32 {
        if from == to {
            let idx = Zone::ALL.iter().position(|z| *z == from).unwrap_or(0);
            return self.same_zone[idx];
        }

        let pair = Zone::ordered_pair(from, to);
        self.cross_zone
            .iter()
            .find(|(p, _)| *p == pair)
            .map(|(_, fare)| *fare)
            // Unreachable: cross_zone covers every distinct pair of Zone::ALL
            .unwrap_or(0)
    }

    /// Validate raw zone strings and price the journey.
    ///
    /// This is the string-level entry point used by the batch processor and
    /// the HTTP layer; the typed [`FareTable::price`] cannot fail.
    pub fn price_str(&self, from: &str, to: &str) -> Result<u32, FareError> {
        let from = Zone::parse(from).map_err(|_| FareError::InvalidZone {
            field: "from_zone",
            value: from.to_string(),
        })?;
        let to = Zone::parse(to).map_err(|_| FareError::InvalidZone {
            field: "to_zone",
            value: to.to_string(),
        })?;
        Ok(self.price(from, to))
    }

    /// Enumerate every directed fare rule, sorted by (from_zone, to_zone).
    ///
    /// Returns 9 entries for the 3-zone network: one per same-zone pair and
    /// one per direction of each cross-zone pair.
    pub fn all_rules(&self) -> Vec<FareRule> {
        let mut rules = Vec::with_capacity(Zone::ALL.len() * Zone::ALL.len());

        for (idx, zone) in Zone::ALL.iter().enumerate() {
            rules.push(FareRule {
                from_zone: *zone,
                to_zone: *zone,
                fare: self.same_zone[idx],
                route: route_label(*zone, *zone),
            });
        }

        for ((a, b), fare) in &self.cross_zone {
            rules.push(FareRule {
                from_zone: *a,
                to_zone: *b,
                fare: *fare,
                route: route_label(*a, *b),
            });
            rules.push(FareRule {
                from_zone: *b,
                to_zone: *a,
                fare: *fare,
                route: route_label(*b, *a),
            });
        }

        rules.sort_by_key(|r| (r.from_zone, r.to_zone));
        rules
    }
}

impl Default for FareTable {
    fn default() -> Self {
        FareTable::standard()
    }
}

fn route_label(from: Zone, to: Zone) -> String {
    format!("Zone {from} → Zone {to}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_zone_fares() {
        let table = FareTable::standard();
        assert_eq!(table.price(Zone::ONE, Zone::ONE), 40);
        assert_eq!(table.price(Zone::TWO, Zone::TWO), 35);
        assert_eq!(table.price(Zone::THREE, Zone::THREE), 30);
    }

    #[test]
    fn cross_zone_fares() {
        let table = FareTable::standard();
        assert_eq!(table.price(Zone::ONE, Zone::TWO), 55);
        assert_eq!(table.price(Zone::ONE, Zone::THREE), 65);
        assert_eq!(table.price(Zone::TWO, Zone::THREE), 45);
    }

    #[test]
    fn pricing_is_symmetric() {
        let table = FareTable::standard();
        for a in Zone::ALL {
            for b in Zone::ALL {
                assert_eq!(table.price(a, b), table.price(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn price_str_valid() {
        let table = FareTable::standard();
        assert_eq!(table.price_str("1", "2").unwrap(), 55);
        assert_eq!(table.price_str("3", "1").unwrap(), 65);
        assert_eq!(table.price_str("2", "2").unwrap(), 35);
    }

    #[test]
    fn price_str_invalid_from() {
        let table = FareTable::standard();
        let err = table.price_str("5", "2").unwrap_err();
        assert_eq!(
            err,
            FareError::InvalidZone {
                field: "from_zone",
                value: "5".into()
            }
        );
    }

    #[test]
    fn price_str_invalid_to() {
        let table = FareTable::standard();
        let err = table.price_str("1", "").unwrap_err();
        assert_eq!(
            err,
            FareError::InvalidZone {
                field: "to_zone",
                value: String::new()
            }
        );
    }

    #[test]
    fn price_str_invalid_edges() {
        let table = FareTable::standard();
        assert!(table.price_str("0", "1").is_err());
        assert!(table.price_str("4", "1").is_err());
        assert!(table.price_str("1", "one").is_err());
    }

    #[test]
    fn all_rules_has_nine_entries() {
        let rules = FareTable::standard().all_rules();
        assert_eq!(rules.len(), 9);
    }

    #[test]
    fn all_rules_sorted_and_complete() {
        let rules = FareTable::standard().all_rules();

        // Sorted by (from_zone, to_zone), every directed pair exactly once
        let pairs: Vec<(Zone, Zone)> = rules.iter().map(|r| (r.from_zone, r.to_zone)).collect();
        let mut expected = Vec::new();
        for a in Zone::ALL {
            for b in Zone::ALL {
                expected.push((a, b));
            }
        }
        assert_eq!(pairs, expected);
    }

    #[test]
    fn all_rules_match_pricing() {
        let table = FareTable::standard();
        for rule in table.all_rules() {
            assert_eq!(rule.fare, table.price(rule.from_zone, rule.to_zone));
        }
    }

    #[test]
    fn route_labels() {
        let rules = FareTable::standard().all_rules();
        let first = &rules[0];
        assert_eq!(first.route, "Zone 1 → Zone 1");
        let last = &rules[8];
        assert_eq!(last.route, "Zone 3 → Zone 3");
    }
}

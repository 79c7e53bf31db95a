//! Zone registry with display metadata.
//!
//! The fare engine only needs the `Zone` type; this registry carries the
//! human-readable names and descriptions shown by fare-table UIs. The zone
//! count is fixed at three and must not grow independently of the fare
//! table, so the registry is static data rather than a managed list.

use crate::domain::Zone;

/// Display metadata for a single zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneInfo {
    /// The zone identifier
    pub zone: Zone,

    /// Human-readable zone name
    pub name: &'static str,

    /// Additional information about the zone
    pub description: &'static str,

    /// Whether the zone is currently operational
    pub is_active: bool,
}

/// The set of zones in the network, with display metadata.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    zones: Vec<ZoneInfo>,
}

impl ZoneRegistry {
    /// All zones, ordered by zone number.
    pub fn list(&self) -> &[ZoneInfo] {
        &self.zones
    }

    /// The active zones, ordered by zone number.
    pub fn active(&self) -> impl Iterator<Item = &ZoneInfo> {
        self.zones.iter().filter(|z| z.is_active)
    }

    /// Look up metadata for a zone.
    pub fn get(&self, zone: Zone) -> Option<&ZoneInfo> {
        self.zones.iter().find(|z| z.zone == zone)
    }

    /// Number of zones in the registry.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true if the registry holds no zones.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// The standard three-zone network.
pub fn standard_zones() -> ZoneRegistry {
    ZoneRegistry {
        zones: vec![
            ZoneInfo {
                zone: Zone::ONE,
                name: "Central",
                description: "City centre zone",
                is_active: true,
            },
            ZoneInfo {
                zone: Zone::TWO,
                name: "Inner Ring",
                description: "Inner suburban zone",
                is_active: true,
            },
            ZoneInfo {
                zone: Zone::THREE,
                name: "Outer Ring",
                description: "Outer suburban zone",
                is_active: true,
            },
        ],
    }
}

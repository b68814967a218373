//! Catalog of named map regions.
//!
//! Each region bundles the Lambert map setup, the bounding box used to
//! decide which labels are drawn, and the reference-city file shown on it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use projection::{LambertParams, MapProjection};
use serde::{Deserialize, Serialize};
use track_common::{LabelBounds, TrackError, TrackResult};

/// Identifier of a catalog region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionId {
    Full,
    Gulf,
    Carib,
    EastCoast,
}

impl RegionId {
    pub const ALL: [RegionId; 4] = [RegionId::Full, RegionId::Gulf, RegionId::Carib, RegionId::EastCoast];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionId::Full => "full",
            RegionId::Gulf => "gulf",
            RegionId::Carib => "carib",
            RegionId::EastCoast => "east_coast",
        }
    }

    /// Comma separated list of valid ids, for error messages and help text.
    pub fn expected() -> String {
        Self::ALL
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionId {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| TrackError::UnknownRegion {
                id: s.to_string(),
                expected: Self::expected(),
            })
    }
}

/// A named map configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub display_name: &'static str,
    pub projection: LambertParams,
    pub label_bounds: LabelBounds,
    /// File name of the city list, relative to the cities directory
    pub city_dataset: &'static str,
}

impl Region {
    /// Look up a catalog entry.
    pub fn get(id: RegionId) -> Region {
        match id {
            RegionId::Full => Region {
                id,
                display_name: "Full Atlantic Basin",
                projection: LambertParams::new(25.0, -50.0, 10_000_000.0, 7_000_000.0),
                label_bounds: LabelBounds::new(10.0, -110.0, 0.0, 60.0),
                city_dataset: "cities.csv",
            },
            RegionId::Gulf => Region {
                id,
                display_name: "Gulf of Mexico",
                projection: LambertParams::new(25.0, -90.0, 2_000_000.0, 1_600_000.0),
                label_bounds: LabelBounds::new(-79.0, -100.0, 17.0, 32.0),
                city_dataset: "gulf_cities.csv",
            },
            RegionId::Carib => Region {
                id,
                display_name: "Caribbean",
                projection: LambertParams::new(15.0, -75.0, 4_000_000.0, 2_500_000.0),
                label_bounds: LabelBounds::new(-59.0, -89.0, 8.0, 24.0),
                city_dataset: "carib_cities.csv",
            },
            RegionId::EastCoast => Region {
                id,
                display_name: "East Coast",
                projection: LambertParams::new(32.0, -65.0, 4_000_000.0, 3_500_000.0),
                label_bounds: LabelBounds::new(-52.0, -82.0, 20.0, 45.0),
                city_dataset: "eastus_cities.csv",
            },
        }
    }

    /// Full path of this region's city list inside `cities_dir`.
    pub fn city_path(&self, cities_dir: &Path) -> PathBuf {
        cities_dir.join(self.city_dataset)
    }

    /// Pixel projection for a canvas `width_px` wide.
    pub fn map_projection(&self, width_px: u32) -> TrackResult<MapProjection> {
        Ok(MapProjection::new(self.projection, width_px)?)
    }
}

/// Resolve a region id string against the catalog.
///
/// Unknown ids are fatal: there is no sensible default map.
pub fn resolve_region(id: &str) -> TrackResult<Region> {
    let region_id: RegionId = id.parse()?;
    let region = Region::get(region_id);
    tracing::info!(region = %region.id, name = region.display_name, "Using map region");
    Ok(region)
}

//! Country outlines decoded from a TopoJSON or GeoJSON world atlas.
//!
//! Two document shapes are accepted:
//!
//! - A TopoJSON `Topology` whose `countries` object (or the first
//!   `GeometryCollection` if there is none) holds `Polygon`/`MultiPolygon`
//!   geometries with a `name` property.  Arcs may be delta-quantized through
//!   a `transform`.
//! - A GeoJSON `FeatureCollection` whose features carry `name`, `NAME` or
//!   `ADMIN` properties.
//!
//! Atlas names are mapped onto catalog names through a small alias table
//! (`"Dem. Rep. Congo"` → `"Democratic Republic of the Congo"` etc.).
//! Geometries of other types, or without a name, are skipped.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::projection::{Geometry, Polygon, Position, Ring};

/// Object looked up first in a TopoJSON topology.
pub const COUNTRIES_OBJECT: &str = "countries";

/// World-atlas names that differ from the catalog's canonical names.
const ATLAS_NAME_ALIASES: &[(&str, &str)] = &[
    ("Bosnia and Herz.", "Bosnia and Herzegovina"),
    ("Central African Rep.", "Central African Republic"),
    ("Congo", "Republic of the Congo"),
    ("Czechia", "Czech Republic"),
    ("Côte d'Ivoire", "Ivory Coast"),
    ("Dem. Rep. Congo", "Democratic Republic of the Congo"),
    ("Dominican Rep.", "Dominican Republic"),
    ("Eq. Guinea", "Equatorial Guinea"),
    ("eSwatini", "Eswatini"),
    ("Swaziland", "Eswatini"),
    ("Macedonia", "North Macedonia"),
    ("Republic of Serbia", "Serbia"),
    ("Russian Federation", "Russia"),
    ("S. Sudan", "South Sudan"),
    ("Solomon Is.", "Solomon Islands"),
    ("Timor-Leste", "East Timor"),
    ("United Republic of Tanzania", "Tanzania"),
    ("United States of America", "United States"),
    ("W. Sahara", "Western Sahara"),
];

/// Errors that can occur while decoding an atlas document.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// The text is not JSON or does not have the expected structure.
    #[error("atlas is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The topology has no geometry collection to read countries from.
    #[error("topology has no geometry collection named {0:?}")]
    MissingObject(String),

    /// A geometry references an arc the topology does not define.
    #[error("arc index {0} is out of range")]
    BadArcIndex(i64),

    /// A coordinate has fewer than two components.
    #[error("position with {0} components, expected at least 2")]
    BadPosition(usize),
}

// ── Wire shapes ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Document {
    Topology(Topology),
    FeatureCollection(FeatureCollection),
}

#[derive(Debug, Deserialize)]
struct Topology {
    #[serde(default)]
    transform: Option<Transform>,
    arcs: Vec<Vec<Vec<f64>>>,
    objects: HashMap<String, TopoObject>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum TopoObject {
    GeometryCollection { geometries: Vec<TopoGeometry> },
    #[serde(other)]
    Other,
}

/// Geometry entry of a collection; `type` may be `null` for empty shapes.
#[derive(Debug, Deserialize)]
struct TopoGeometry {
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    arcs: serde_json::Value,
    #[serde(default)]
    properties: Option<Properties>,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Properties>,
    #[serde(default)]
    geometry: Option<GeoGeometry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum GeoGeometry {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
    #[serde(other)]
    Other,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "NAME")]
    upper_name: Option<String>,
    #[serde(default, rename = "ADMIN")]
    admin: Option<String>,
}

impl Properties {
    fn country_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.upper_name.as_deref())
            .or(self.admin.as_deref())
    }
}

// ── Atlas ─────────────────────────────────────────────────────────────────────

/// Decoded country outlines keyed by catalog name.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    /// Lower-cased catalog name → (canonical spelling, geometry).
    shapes: HashMap<String, (String, Geometry)>,
}

impl Atlas {
    /// Decodes a TopoJSON or GeoJSON document.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError`] if the document is malformed.
    pub fn from_json(text: &str) -> Result<Self, AtlasError> {
        let atlas = match serde_json::from_str::<Document>(text)? {
            Document::Topology(topology) => Self::from_topology(topology)?,
            Document::FeatureCollection(collection) => Self::from_features(collection)?,
        };
        debug!("decoded atlas with {} country shapes", atlas.len());
        Ok(atlas)
    }

    /// Builds an atlas from already decoded `(name, geometry)` pairs.
    ///
    /// Names go through the same alias table as decoded documents.
    pub fn from_shapes<I>(shapes: I) -> Self
    where
        I: IntoIterator<Item = (String, Geometry)>,
    {
        let mut atlas = Atlas::default();
        for (name, geometry) in shapes {
            atlas.insert(&name, geometry);
        }
        atlas
    }

    /// Geometry for a catalog name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Geometry> {
        self.shapes.get(&name.to_lowercase()).map(|(_, g)| g)
    }

    /// Catalog names that have geometry, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.values().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn insert(&mut self, atlas_name: &str, geometry: Geometry) {
        let name = catalog_name(atlas_name);
        // Some atlases split a country into several features.
        match self.shapes.get_mut(&name.to_lowercase()) {
            Some((_, existing)) => merge(existing, geometry),
            None => {
                self.shapes
                    .insert(name.to_lowercase(), (name.to_string(), geometry));
            }
        }
    }

    fn from_topology(topology: Topology) -> Result<Self, AtlasError> {
        let arcs = decode_arcs(&topology.arcs, topology.transform)?;

        let mut objects = topology.objects;
        let geometries = match objects.remove(COUNTRIES_OBJECT) {
            Some(TopoObject::GeometryCollection { geometries }) => geometries,
            _ => objects
                .into_values()
                .find_map(|o| match o {
                    TopoObject::GeometryCollection { geometries } => Some(geometries),
                    TopoObject::Other => None,
                })
                .ok_or_else(|| AtlasError::MissingObject(COUNTRIES_OBJECT.to_string()))?,
        };

        let mut atlas = Atlas::default();
        for geometry in geometries {
            let decoded = match geometry.kind.as_deref() {
                Some("Polygon") => {
                    let rings: Vec<Vec<i64>> = serde_json::from_value(geometry.arcs)?;
                    Geometry::Polygon(stitch_polygon(&rings, &arcs)?)
                }
                Some("MultiPolygon") => {
                    let polygons: Vec<Vec<Vec<i64>>> = serde_json::from_value(geometry.arcs)?;
                    Geometry::MultiPolygon(
                        polygons
                            .iter()
                            .map(|rings| stitch_polygon(rings, &arcs))
                            .collect::<Result<Vec<_>, _>>()?,
                    )
                }
                _ => continue,
            };
            if let Some(name) = geometry.properties.as_ref().and_then(Properties::country_name) {
                atlas.insert(name, decoded);
            }
        }
        Ok(atlas)
    }

    fn from_features(collection: FeatureCollection) -> Result<Self, AtlasError> {
        let mut atlas = Atlas::default();
        for feature in collection.features {
            let Some(name) = feature.properties.as_ref().and_then(Properties::country_name)
            else {
                continue;
            };
            let geometry = match feature.geometry {
                Some(GeoGeometry::Polygon { coordinates }) => {
                    Geometry::Polygon(polygon_from_coordinates(&coordinates)?)
                }
                Some(GeoGeometry::MultiPolygon { coordinates }) => Geometry::MultiPolygon(
                    coordinates
                        .iter()
                        .map(|p| polygon_from_coordinates(p))
                        .collect::<Result<Vec<_>, _>>()?,
                ),
                Some(GeoGeometry::Other) | None => continue,
            };
            atlas.insert(name, geometry);
        }
        Ok(atlas)
    }
}

/// Maps a world-atlas country name onto the catalog's spelling.
pub fn catalog_name(atlas_name: &str) -> &str {
    ATLAS_NAME_ALIASES
        .iter()
        .find(|(from, _)| *from == atlas_name)
        .map_or(atlas_name, |(_, to)| to)
}

fn merge(existing: &mut Geometry, extra: Geometry) {
    let mut polygons = match std::mem::replace(existing, Geometry::MultiPolygon(Vec::new())) {
        Geometry::Polygon(p) => vec![p],
        Geometry::MultiPolygon(ps) => ps,
    };
    match extra {
        Geometry::Polygon(p) => polygons.push(p),
        Geometry::MultiPolygon(ps) => polygons.extend(ps),
    }
    *existing = Geometry::MultiPolygon(polygons);
}

fn position(raw: &[f64]) -> Result<Position, AtlasError> {
    match raw {
        [lon, lat, ..] => Ok((*lon, *lat)),
        _ => Err(AtlasError::BadPosition(raw.len())),
    }
}

fn polygon_from_coordinates(rings: &[Vec<Vec<f64>>]) -> Result<Polygon, AtlasError> {
    rings
        .iter()
        .map(|ring| ring.iter().map(|p| position(p)).collect())
        .collect()
}

/// Resolves every arc to absolute longitude/latitude positions.
///
/// With a transform, arc positions are deltas from the previous point in
/// quantized units.
fn decode_arcs(
    arcs: &[Vec<Vec<f64>>],
    transform: Option<Transform>,
) -> Result<Vec<Vec<Position>>, AtlasError> {
    arcs.iter()
        .map(|arc| {
            let mut x = 0.0;
            let mut y = 0.0;
            arc.iter()
                .map(|raw| {
                    let (dx, dy) = position(raw)?;
                    Ok(match transform {
                        Some(t) => {
                            x += dx;
                            y += dy;
                            (
                                x * t.scale[0] + t.translate[0],
                                y * t.scale[1] + t.translate[1],
                            )
                        }
                        None => (dx, dy),
                    })
                })
                .collect()
        })
        .collect()
}

/// Joins arcs into one ring.
///
/// A negative index `i` denotes arc `!i` traversed backwards.  Consecutive
/// arcs share an endpoint, so the first point of every arc after the first
/// is dropped.
fn stitch_ring(indices: &[i64], arcs: &[Vec<Position>]) -> Result<Ring, AtlasError> {
    let mut ring = Ring::new();
    for (k, &index) in indices.iter().enumerate() {
        let (slot, reversed) = if index >= 0 { (index, false) } else { (!index, true) };
        let arc = usize::try_from(slot)
            .ok()
            .and_then(|i| arcs.get(i))
            .ok_or(AtlasError::BadArcIndex(index))?;

        let skip = usize::from(k > 0);
        if reversed {
            ring.extend(arc.iter().rev().skip(skip).copied());
        } else {
            ring.extend(arc.iter().skip(skip).copied());
        }
    }
    Ok(ring)
}

fn stitch_polygon(rings: &[Vec<i64>], arcs: &[Vec<Position>]) -> Result<Polygon, AtlasError> {
    rings.iter().map(|r| stitch_ring(r, arcs)).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

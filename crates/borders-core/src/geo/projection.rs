//! Equirectangular projection of country outlines.
//!
//! Longitude/latitude degrees are mapped linearly onto a `width × height`
//! plane (800 × 400 by default):
//!
//! ```text
//! x = (lon + 180) * width / 360
//! y = (90 - lat) * height / 180
//! ```
//!
//! # Antimeridian
//!
//! A ring that crosses ±180° has a consecutive pair of points whose
//! longitudes differ by more than 180°.  Projected as-is, that ring would be
//! drawn across the whole map.  For such rings every negative longitude is
//! shifted by +360° first, so the shape stays contiguous (and may extend past
//! the right edge of the nominal map).
//!
//! # Mainland filtering
//!
//! Some countries should be drawn without their overseas parts.  A
//! [`MainlandBox`] names a country and a longitude/latitude box; polygons of
//! that country whose centroid falls outside the box are dropped.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::catalog::same_name;

use super::framing::Bounds;

/// Reference width of the projected plane.
pub const MAP_WIDTH: f64 = 800.0;
/// Reference height of the projected plane.
pub const MAP_HEIGHT: f64 = 400.0;

/// `(longitude, latitude)` in degrees.
pub type Position = (f64, f64);
/// A closed sequence of positions.
pub type Ring = Vec<Position>;
/// Exterior ring followed by any holes.
pub type Polygon = Vec<Ring>;

/// Outline geometry of one country.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// The constituent polygons (one for a plain polygon).
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Geometry::Polygon(p) => std::slice::from_ref(p),
            Geometry::MultiPolygon(ps) => ps,
        }
    }
}

/// A projected point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Geographic box a country's kept polygons must have their centroid in.
#[derive(Debug, Clone, PartialEq)]
pub struct MainlandBox {
    /// Canonical country name the rule applies to.
    pub country: String,
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl MainlandBox {
    /// Returns `true` if `(lon, lat)` lies inside the box (edges included).
    pub fn contains(&self, (lon, lat): Position) -> bool {
        (self.min_lon..=self.max_lon).contains(&lon) && (self.min_lat..=self.max_lat).contains(&lat)
    }
}

/// The built-in mainland rules: metropolitan France only.
pub fn default_mainland_boxes() -> Vec<MainlandBox> {
    vec![MainlandBox {
        country: "France".to_string(),
        min_lon: -5.0,
        max_lon: 10.0,
        min_lat: 41.0,
        max_lat: 52.0,
    }]
}

/// A country outline after projection: one point list per ring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedShape {
    pub rings: Vec<Vec<Point>>,
}

impl ProjectedShape {
    /// `true` when nothing is left to draw.
    pub fn is_empty(&self) -> bool {
        self.rings.iter().all(Vec::is_empty)
    }

    /// Axis-aligned bounds of every projected point.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.rings.iter().flatten())
    }

    /// SVG path data: `M x,y L x,y ... Z` per ring, space separated.
    pub fn to_path(&self) -> String {
        let mut path = String::new();
        for ring in self.rings.iter().filter(|r| !r.is_empty()) {
            if !path.is_empty() {
                path.push(' ');
            }
            for (i, p) in ring.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                if i > 0 {
                    path.push(' ');
                }
                // Writing to a String cannot fail.
                let _ = write!(path, "{cmd}{:.2},{:.2}", p.x, p.y);
            }
            path.push_str(" Z");
        }
        path
    }
}

/// Projects longitude/latitude geometry onto the map plane.
#[derive(Debug, Clone)]
pub struct Projector {
    width: f64,
    height: f64,
    mainland: Vec<MainlandBox>,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(MAP_WIDTH, MAP_HEIGHT).with_mainland(default_mainland_boxes())
    }
}

impl Projector {
    /// Creates a projector for a `width × height` plane with no mainland rules.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            mainland: Vec::new(),
        }
    }

    /// Replaces the mainland rules.
    pub fn with_mainland(mut self, boxes: Vec<MainlandBox>) -> Self {
        self.mainland = boxes;
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Projects a single position (no antimeridian handling).
    pub fn project(&self, (lon, lat): Position) -> Point {
        Point {
            x: (lon + 180.0) * (self.width / 360.0),
            y: (90.0 - lat) * (self.height / 180.0),
        }
    }

    /// Projects a ring, unwrapping it first if it crosses the antimeridian.
    pub fn project_ring(&self, ring: &[Position]) -> Vec<Point> {
        unwrap_antimeridian(ring)
            .iter()
            .map(|&p| self.project(p))
            .collect()
    }

    /// Projects every kept polygon of `country` into one shape.
    ///
    /// Polygons are projected independently and their rings concatenated.
    pub fn project_country(&self, country: &str, geometry: &Geometry) -> ProjectedShape {
        let rule = self.mainland.iter().find(|m| same_name(&m.country, country));
        let rings = geometry
            .polygons()
            .iter()
            .filter(|polygon| match (rule, polygon.first()) {
                (Some(rule), Some(exterior)) => {
                    ring_centroid(exterior).is_some_and(|c| rule.contains(c))
                }
                _ => true,
            })
            .flat_map(|polygon| polygon.iter().map(|ring| self.project_ring(ring)))
            .collect();
        ProjectedShape { rings }
    }
}

/// Returns `true` if consecutive longitudes in `ring` jump by more than 180°.
pub fn crosses_antimeridian(ring: &[Position]) -> bool {
    ring.windows(2).any(|w| (w[0].0 - w[1].0).abs() > 180.0)
}

/// Shifts negative longitudes by +360° when the ring crosses the antimeridian.
pub fn unwrap_antimeridian(ring: &[Position]) -> Cow<'_, [Position]> {
    if !crosses_antimeridian(ring) {
        return Cow::Borrowed(ring);
    }
    Cow::Owned(
        ring.iter()
            .map(|&(lon, lat)| if lon < 0.0 { (lon + 360.0, lat) } else { (lon, lat) })
            .collect(),
    )
}

/// Area-weighted centroid of a ring, in `-180..=180` longitude.
///
/// Degenerate (zero-area) rings fall back to the mean of their vertices.
/// Returns `None` for an empty ring.
pub fn ring_centroid(ring: &[Position]) -> Option<Position> {
    if ring.is_empty() {
        return None;
    }
    let ring = unwrap_antimeridian(ring);

    let mut area2 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..ring.len() {
        let (x0, y0) = ring[i];
        let (x1, y1) = ring[(i + 1) % ring.len()];
        let cross = x0 * y1 - x1 * y0;
        area2 += cross;
        cx += (x0 + x1) * cross;
        cy += (y0 + y1) * cross;
    }

    let (lon, lat) = if area2.abs() < f64::EPSILON {
        let n = ring.len() as f64;
        (
            ring.iter().map(|p| p.0).sum::<f64>() / n,
            ring.iter().map(|p| p.1).sum::<f64>() / n,
        )
    } else {
        (cx / (3.0 * area2), cy / (3.0 * area2))
    };
    let lon = if lon > 180.0 { lon - 360.0 } else { lon };
    Some((lon, lat))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

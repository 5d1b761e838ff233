//! Map geometry: atlas decoding, projection, framing and SVG output.

pub mod atlas;
pub mod framing;
pub mod projection;
pub mod svg;

pub use atlas::{catalog_name, Atlas, AtlasError};
pub use framing::{frame, Bounds, ViewBox, Zoom, ZoomControl, PADDING_RATIO};
pub use projection::{
    default_mainland_boxes, Geometry, MainlandBox, Point, Polygon, Position, ProjectedShape,
    Projector, Ring, MAP_HEIGHT, MAP_WIDTH,
};
pub use svg::{escape_xml, render_svg, MapShape, ShapeRole};

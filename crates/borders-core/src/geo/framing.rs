//! Viewport framing and zoom.
//!
//! The visible region is computed from scratch on every change:
//!
//! 1. Union the projected bounds of every relevant shape.
//! 2. Pad the union by [`PADDING_RATIO`] of its extent on each axis.
//! 3. Scale the padded box about the target's centre by
//!    `DEFAULT / zoom`, so a higher zoom shows a smaller region.

use std::fmt;

use super::projection::Point;

/// Fraction of the bounding box added on every side.
pub const PADDING_RATIO: f64 = 0.05;

/// Padding used when a bounding box has no extent on an axis.
const MIN_PADDING: f64 = 1.0;

/// Axis-aligned box in projected coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Smallest box containing every point; `None` if there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        points.into_iter().fold(None, |acc: Option<Bounds>, p| {
            let b = Bounds {
                min_x: p.x,
                min_y: p.y,
                max_x: p.x,
                max_y: p.y,
            };
            Some(match acc {
                Some(a) => a.union(&b),
                None => b,
            })
        })
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    /// Grows the box by `ratio` of its extent on each side of each axis.
    pub fn padded(&self, ratio: f64) -> Bounds {
        let pad = |extent: f64| {
            let p = extent * ratio;
            if p > 0.0 {
                p
            } else {
                MIN_PADDING
            }
        };
        let px = pad(self.width());
        let py = pad(self.height());
        Bounds {
            min_x: self.min_x - px,
            min_y: self.min_y - py,
            max_x: self.max_x + px,
            max_y: self.max_y + py,
        }
    }
}

/// The SVG `viewBox` of the rendered map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {:.2} {:.2} {:.2}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Discrete zoom factor: one of 0.5, 1, 2, 4 or 8.
///
/// Stored as a power of two so stepping never accumulates rounding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zoom {
    exponent: i8,
}

impl Zoom {
    const MIN_EXPONENT: i8 = -1;
    const MAX_EXPONENT: i8 = 3;

    /// The zoom every round starts at (2×).
    pub const DEFAULT: Zoom = Zoom { exponent: 1 };
    pub const MIN: Zoom = Zoom {
        exponent: Self::MIN_EXPONENT,
    };
    pub const MAX: Zoom = Zoom {
        exponent: Self::MAX_EXPONENT,
    };

    /// Returns the zoom for `factor` if it is one of the supported steps.
    pub fn from_factor(factor: f64) -> Option<Zoom> {
        (Self::MIN_EXPONENT..=Self::MAX_EXPONENT)
            .map(|exponent| Zoom { exponent })
            .find(|z| (z.factor() - factor).abs() < f64::EPSILON)
    }

    pub fn factor(self) -> f64 {
        2f64.powi(i32::from(self.exponent))
    }

    /// Doubles the factor, saturating at [`Zoom::MAX`].
    pub fn zoom_in(self) -> Zoom {
        Zoom {
            exponent: (self.exponent + 1).min(Self::MAX_EXPONENT),
        }
    }

    /// Halves the factor, saturating at [`Zoom::MIN`].
    pub fn zoom_out(self) -> Zoom {
        Zoom {
            exponent: (self.exponent - 1).max(Self::MIN_EXPONENT),
        }
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Zoom::DEFAULT
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×", self.factor())
    }
}

/// Zoom level bound to the round it was set in.
///
/// [`ZoomControl::follow_target`] resets the level to the home zoom whenever
/// the target country changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoomControl {
    zoom: Zoom,
    home: Zoom,
    target: Option<String>,
}

impl ZoomControl {
    /// A control that starts at, and resets to, `home`.
    pub fn new(home: Zoom) -> Self {
        Self {
            zoom: home,
            home,
            target: None,
        }
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn zoom_in(&mut self) -> Zoom {
        self.zoom = self.zoom.zoom_in();
        self.zoom
    }

    pub fn zoom_out(&mut self) -> Zoom {
        self.zoom = self.zoom.zoom_out();
        self.zoom
    }

    /// Records the current target; returns `true` if the zoom was reset.
    pub fn follow_target(&mut self, target: Option<&str>) -> bool {
        if self.target.as_deref() == target {
            return false;
        }
        self.target = target.map(str::to_string);
        let changed = self.zoom != self.home;
        self.zoom = self.home;
        changed
    }
}

/// Computes the visible region.
///
/// `relevant` holds the bounds of every shape that must be framed; `target`
/// is the target's own bounds, used as the zoom centre (the padded union's
/// centre is used when the target has no geometry).  Returns `None` when
/// nothing is relevant.
pub fn frame(relevant: &[Bounds], target: Option<&Bounds>, zoom: Zoom) -> Option<ViewBox> {
    let (first, rest) = relevant.split_first()?;
    let padded = rest
        .iter()
        .fold(*first, |acc, b| acc.union(b))
        .padded(PADDING_RATIO);

    let center = target.map_or_else(|| padded.center(), Bounds::center);
    let m = Zoom::DEFAULT.factor() / zoom.factor();

    Some(ViewBox {
        x: center.x + (padded.min_x - center.x) * m,
        y: center.y + (padded.min_y - center.y) * m,
        width: padded.width() * m,
        height: padded.height() * m,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Bounds {
        Bounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_zoom_in_doubles_until_max() {
        let z = Zoom::DEFAULT;
        assert_eq!(z.factor(), 2.0);
        let z = z.zoom_in();
        assert_eq!(z.factor(), 4.0);
        let z = z.zoom_in();
        assert_eq!(z.factor(), 8.0);
        assert_eq!(z.zoom_in(), Zoom::MAX);
    }

    #[test]
    fn test_zoom_out_halves_until_min() {
        let z = Zoom::DEFAULT.zoom_out();
        assert_eq!(z.factor(), 1.0);
        let z = z.zoom_out();
        assert_eq!(z.factor(), 0.5);
        assert_eq!(z.zoom_out(), Zoom::MIN);
    }

    #[test]
    fn test_zoom_from_factor_accepts_only_supported_steps() {
        assert_eq!(Zoom::from_factor(4.0), Some(Zoom::DEFAULT.zoom_in()));
        assert_eq!(Zoom::from_factor(0.5), Some(Zoom::MIN));
        assert_eq!(Zoom::from_factor(3.0), None);
        assert_eq!(Zoom::from_factor(16.0), None);
    }

    #[test]
    fn test_zoom_control_resets_on_target_change() {
        let mut control = ZoomControl::default();
        control.follow_target(Some("France"));
        control.zoom_in();
        control.zoom_in();
        assert_eq!(control.zoom().factor(), 8.0);

        assert!(!control.follow_target(Some("France")));
        assert_eq!(control.zoom().factor(), 8.0);

        assert!(control.follow_target(Some("Spain")));
        assert_eq!(control.zoom(), Zoom::DEFAULT);
    }

    #[test]
    fn test_zoom_control_resets_to_configured_home() {
        let mut control = ZoomControl::new(Zoom::MIN);
        control.follow_target(Some("Chad"));
        control.zoom_in();
        assert_eq!(control.zoom().factor(), 1.0);

        control.follow_target(None);
        assert_eq!(control.zoom(), Zoom::MIN);
    }

    #[test]
    fn test_frame_returns_none_without_relevant_shapes() {
        assert!(frame(&[], None, Zoom::DEFAULT).is_none());
    }

    #[test]
    fn test_frame_at_default_zoom_is_padded_union() {
        let a = bounds(100.0, 100.0, 200.0, 150.0);
        let b = bounds(180.0, 120.0, 300.0, 200.0);
        let view = frame(&[a, b], Some(&a), Zoom::DEFAULT).unwrap();

        // Union is 200 × 100; 5 % padding each side.
        assert!(approx(view.x, 90.0));
        assert!(approx(view.y, 95.0));
        assert!(approx(view.width, 220.0));
        assert!(approx(view.height, 110.0));
    }

    #[test]
    fn test_frame_zooming_in_shrinks_about_target_center() {
        let target = bounds(100.0, 100.0, 200.0, 200.0);
        let other = bounds(0.0, 0.0, 300.0, 300.0);
        let base = frame(&[target, other], Some(&target), Zoom::DEFAULT).unwrap();
        let zoomed = frame(&[target, other], Some(&target), Zoom::DEFAULT.zoom_in()).unwrap();

        assert!(approx(zoomed.width, base.width / 2.0));
        assert!(approx(zoomed.height, base.height / 2.0));
        // The target centre stays fixed under the homothety.
        let c = target.center();
        assert!(approx(zoomed.x, c.x + (base.x - c.x) / 2.0));
        assert!(approx(zoomed.y, c.y + (base.y - c.y) / 2.0));
    }

    #[test]
    fn test_frame_zooming_out_grows_the_region() {
        let target = bounds(10.0, 10.0, 20.0, 20.0);
        let view = frame(&[target], Some(&target), Zoom::MIN).unwrap();
        // 10 × 10 padded to 11 × 11, then × 4.
        assert!(approx(view.width, 44.0));
        assert!(approx(view.center().x, 15.0));
        assert!(approx(view.center().y, 15.0));
    }

    #[test]
    fn test_frame_single_point_gets_minimum_padding() {
        let point = bounds(5.0, 5.0, 5.0, 5.0);
        let view = frame(&[point], None, Zoom::DEFAULT).unwrap();
        assert!(approx(view.width, 2.0 * MIN_PADDING));
        assert!(approx(view.height, 2.0 * MIN_PADDING));
    }

    #[test]
    fn test_view_box_display_uses_two_decimals() {
        let view = ViewBox {
            x: 1.0,
            y: -2.5,
            width: 100.123,
            height: 50.0,
        };
        assert_eq!(view.to_string(), "1.00 -2.50 100.12 50.00");
    }

    #[test]
    fn test_bounds_from_points() {
        let pts = [Point { x: 3.0, y: 1.0 }, Point { x: -1.0, y: 4.0 }];
        assert_eq!(Bounds::from_points(&pts), Some(bounds(-1.0, 1.0, 3.0, 4.0)));
        assert_eq!(Bounds::from_points(&[]), None);
    }
}

//! Map scene assembly: which countries to draw, in which role, and where.
//!
//! The relevant set is the target, every guess that names a country with
//! geometry, and, while the outlines hint is active, every unguessed border.
//! Shapes are ordered so the target is drawn last (on top).

use borders_core::geo::{frame, render_svg, MapShape, ViewBox};
use borders_core::{same_name, Atlas, Catalog, GameState, Projector, ShapeRole, Zoom};
use tracing::debug;

/// A framed, ready-to-render map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub view: ViewBox,
    pub shapes: Vec<MapShape>,
}

impl MapScene {
    pub fn to_svg(&self) -> String {
        render_svg(&self.view, &self.shapes)
    }
}

/// Canonical names of the countries to draw, bottom layer first.
pub fn relevant_countries(game: &GameState, catalog: &Catalog) -> Vec<(String, ShapeRole)> {
    let target = game.current_country();
    let canonical = |name: &str| catalog.canonical_name(name).unwrap_or(name).to_string();

    let mut countries = Vec::new();
    if game.show_outlines() {
        countries.extend(
            game.missing_borders()
                .into_iter()
                .map(|b| (b.to_string(), ShapeRole::Outline)),
        );
    }
    countries.extend(
        game.wrong_guess_names()
            .into_iter()
            .map(|g| (canonical(g), ShapeRole::Wrong)),
    );
    countries.extend(game.correct_guesses().iter().map(|g| {
        let name = target
            .borders
            .iter()
            .find(|b| same_name(b, g))
            .map_or_else(|| canonical(g), String::clone);
        (name, ShapeRole::Correct)
    }));
    countries.push((target.name.clone(), ShapeRole::Target));
    countries
}

/// Projects and frames the relevant countries.
///
/// Returns `None` when none of them has geometry.
pub fn build_scene(
    game: &GameState,
    catalog: &Catalog,
    atlas: &Atlas,
    projector: &Projector,
    zoom: Zoom,
) -> Option<MapScene> {
    let mut shapes = Vec::new();
    let mut bounds = Vec::new();
    let mut target_bounds = None;

    for (name, role) in relevant_countries(game, catalog) {
        let Some(geometry) = atlas.get(&name) else {
            debug!("no geometry for {name}, skipping");
            continue;
        };
        let projected = projector.project_country(&name, geometry);
        let Some(b) = projected.bounds() else {
            continue;
        };
        if role == ShapeRole::Target {
            target_bounds = Some(b);
        }
        bounds.push(b);
        shapes.push(MapShape {
            name,
            role,
            path: projected.to_path(),
        });
    }

    let view = frame(&bounds, target_bounds.as_ref(), zoom)?;
    Some(MapScene { view, shapes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use borders_core::geo::{Geometry, Ring};
    use borders_core::GameRules;

    fn square(lon: f64, lat: f64, size: f64) -> Ring {
        vec![
            (lon, lat),
            (lon + size, lat),
            (lon + size, lat + size),
            (lon, lat + size),
            (lon, lat),
        ]
    }

    fn setup() -> (Catalog, GameState, Atlas) {
        let catalog = Catalog::builtin().unwrap();
        let spain = catalog.get("Spain").unwrap().clone();
        let game = GameState::with_target(spain, &GameRules::default());
        let atlas = Atlas::from_shapes(vec![
            ("Spain".to_string(), Geometry::Polygon(vec![square(-9.0, 36.0, 12.0)])),
            ("France".to_string(), Geometry::Polygon(vec![square(-1.0, 43.0, 8.0)])),
            ("Portugal".to_string(), Geometry::Polygon(vec![square(-9.5, 37.0, 3.0)])),
            ("Japan".to_string(), Geometry::Polygon(vec![square(130.0, 31.0, 10.0)])),
        ]);
        (catalog, game, atlas)
    }

    #[test]
    fn test_relevant_countries_orders_target_last() {
        let (catalog, mut game, _) = setup();
        game.make_guess("france");
        game.make_guess("japan");

        let relevant = relevant_countries(&game, &catalog);

        assert_eq!(
            relevant,
            vec![
                ("Japan".to_string(), ShapeRole::Wrong),
                ("France".to_string(), ShapeRole::Correct),
                ("Spain".to_string(), ShapeRole::Target),
            ]
        );
    }

    #[test]
    fn test_relevant_countries_include_outlines_when_hinted() {
        let (catalog, mut game, _) = setup();
        game.make_guess("France");
        game.show_outlines_hint();

        let outlines: Vec<_> = relevant_countries(&game, &catalog)
            .into_iter()
            .filter(|(_, role)| *role == ShapeRole::Outline)
            .map(|(name, _)| name)
            .collect();

        assert_eq!(outlines, game.missing_borders());
        assert!(!outlines.contains(&"France".to_string()));
    }

    #[test]
    fn test_build_scene_skips_names_without_geometry() {
        let (catalog, mut game, atlas) = setup();
        game.make_guess("Atlantis");
        game.make_guess("Andorra");

        let scene = build_scene(&game, &catalog, &atlas, &Projector::default(), Zoom::DEFAULT)
            .expect("target has geometry");

        let names: Vec<_> = scene.shapes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Spain"]);
    }

    #[test]
    fn test_build_scene_without_any_geometry_is_none() {
        let (catalog, game, _) = setup();
        let empty = Atlas::default();
        let scene = build_scene(&game, &catalog, &empty, &Projector::default(), Zoom::DEFAULT);
        assert!(scene.is_none());
    }

    #[test]
    fn test_build_scene_frame_grows_with_wrong_guess() {
        let (catalog, mut game, atlas) = setup();
        let projector = Projector::default();
        let before = build_scene(&game, &catalog, &atlas, &projector, Zoom::DEFAULT).unwrap();

        game.make_guess("Japan");
        let after = build_scene(&game, &catalog, &atlas, &projector, Zoom::DEFAULT).unwrap();

        assert!(after.view.width > before.view.width * 5.0);
        assert!(after.to_svg().contains(r#"class="wrong" data-name="Japan""#));
    }
}

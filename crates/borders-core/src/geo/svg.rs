//! Minimal SVG document for the framed map.

use std::fmt::{self, Write as _};

use super::framing::ViewBox;

/// How a country is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeRole {
    /// The round's target country.
    Target,
    /// A correctly guessed neighbour.
    Correct,
    /// A wrong guess.
    Wrong,
    /// An unguessed neighbour shown by the outlines hint.
    Outline,
}

impl ShapeRole {
    /// CSS class written on the `<path>` element.
    pub fn class(self) -> &'static str {
        match self {
            ShapeRole::Target => "target",
            ShapeRole::Correct => "correct",
            ShapeRole::Wrong => "wrong",
            ShapeRole::Outline => "outline",
        }
    }
}

impl fmt::Display for ShapeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// One drawable country.
#[derive(Debug, Clone, PartialEq)]
pub struct MapShape {
    /// Canonical country name.
    pub name: String,
    pub role: ShapeRole,
    /// SVG path data.
    pub path: String,
}

const STYLE: &str = ".target{fill:#f4b400;stroke:#333}\
.correct{fill:#0f9d58;stroke:#333}\
.wrong{fill:#db4437;stroke:#333}\
.outline{fill:none;stroke:#666;stroke-dasharray:2}";

/// Renders `shapes` in order (later shapes on top) inside `view`.
pub fn render_svg(view: &ViewBox, shapes: &[MapShape]) -> String {
    let mut svg = String::new();
    // Writing to a String cannot fail.
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{view}">"#
    );
    let _ = write!(svg, "<style>{STYLE}</style>");
    for shape in shapes.iter().filter(|s| !s.path.is_empty()) {
        let _ = write!(
            svg,
            r#"<path class="{}" data-name="{}" d="{}"/>"#,
            shape.role,
            escape_xml(&shape.name),
            shape.path
        );
    }
    svg.push_str("</svg>");
    svg
}

/// Escapes the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewBox {
        ViewBox {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 5.0,
        }
    }

    #[test]
    fn test_render_svg_writes_view_box_and_classes() {
        let shapes = vec![
            MapShape {
                name: "France".to_string(),
                role: ShapeRole::Target,
                path: "M0.00,0.00 L1.00,1.00 Z".to_string(),
            },
            MapShape {
                name: "Spain".to_string(),
                role: ShapeRole::Outline,
                path: "M2.00,2.00 Z".to_string(),
            },
        ];
        let svg = render_svg(&view(), &shapes);

        let open = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0.00 0.00 10.00 5.00">"#;
        let target = r#"<path class="target" data-name="France" d="M0.00,0.00 L1.00,1.00 Z"/>"#;
        assert!(svg.starts_with(open));
        assert!(svg.contains(target));
        assert!(svg.contains(r#"class="outline" data-name="Spain""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_svg_escapes_names_and_skips_empty_paths() {
        let shapes = vec![
            MapShape {
                name: "Côte d'Ivoire & <Co>".to_string(),
                role: ShapeRole::Wrong,
                path: "M0.00,0.00 Z".to_string(),
            },
            MapShape {
                name: "Monaco".to_string(),
                role: ShapeRole::Correct,
                path: String::new(),
            },
        ];
        let svg = render_svg(&view(), &shapes);
        assert!(svg.contains("data-name=\"Côte d&apos;Ivoire &amp; &lt;Co&gt;\""));
        assert!(!svg.contains("Monaco"));
    }

    #[test]
    fn test_escape_xml_handles_quotes() {
        assert_eq!(escape_xml(r#"a"b"#), "a&quot;b");
        assert_eq!(escape_xml("plain"), "plain");
    }
}

//! SVG document generation from icon paths

use crate::config::{FillRule, IconConfig};
use crate::IconPaths;

use super::path::format_number;
use super::SvgConfig;

/// Build an icon document incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a path element
    pub fn add_path(&mut self, d: &str, fill_rule: FillRule) {
        self.elements.push(format!(
            r#"{}<path d="{}" fill-rule="{}"/>"#,
            self.indent_str(),
            escape_xml(d),
            fill_rule.as_str()
        ));
    }

    /// Build the final SVG string for a square icon of `size`
    pub fn build(self, size: f64, fill: &str) -> String {
        let nl = self.newline();
        let s = format_number(size, self.config.precision);

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {s} {s}" width="{s}" height="{s}" fill="{}">"#,
            escape_xml(fill)
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render generated paths into an SVG document
///
/// Outline and hole share one `<path>` so the fill rule applies to both.
pub fn render_svg(paths: &IconPaths, icon: &IconConfig, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_path(&paths.combined(), icon.fill_rule);
    builder.build(icon.size, &icon.fill)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

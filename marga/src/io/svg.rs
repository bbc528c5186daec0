//! SVG rendering of a risk field and planned paths.
//!
//! The image shows:
//! - Risk field cells (clear, penalised, impassable)
//! - One polyline per planned target path
//! - Origin and target markers, failed targets crossed out
//!
//! Positive Y points up in the image.

use std::fmt::{self, Write};
use std::path::Path;

use crate::core::{GridCoord, RiskClass};
use crate::error::Result;
use crate::grid::RiskField;
use crate::mission::PlanReport;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Clear cell color
    pub clear: &'static str,
    /// Penalised cell color
    pub penalty: &'static str,
    /// Impassable cell color
    pub impassable: &'static str,
    /// Origin marker color
    pub origin: &'static str,
    /// Failed target marker color
    pub failed: &'static str,
    /// Path colors, cycled per target
    pub paths: &'static [&'static str],
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            clear: "#FFFFFF",
            penalty: "#F4A259",
            impassable: "#333333",
            origin: "#2222AA",
            failed: "#CC2222",
            paths: &[
                "#1B9E77", "#7570B3", "#E7298A", "#66A61E", "#E6AB02", "#A6761D", "#1F78B4",
            ],
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per cell
    pub cell_size: f32,
    /// Path line width
    pub path_width: f32,
    /// Marker radius
    pub marker_radius: f32,
    /// Padding around the field in pixels
    pub padding: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            cell_size: 16.0,
            path_width: 3.0,
            marker_radius: 5.0,
            padding: 20.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// Renders a planning run to SVG
pub struct SvgRenderer<'a> {
    field: &'a RiskField,
    report: &'a PlanReport,
    config: SvgConfig,
    title: Option<String>,
}

impl<'a> SvgRenderer<'a> {
    /// Create a renderer
    pub fn new(field: &'a RiskField, report: &'a PlanReport, config: SvgConfig) -> Self {
        Self {
            field,
            report,
            config,
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();
        // Writing into a String cannot fail
        let _ = self.render_to(&mut svg);
        svg
    }

    /// Render and write to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }

    /// Render into any formatter sink
    pub fn render_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        let cell = self.config.cell_size;
        let pad = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let map_w = self.field.width() as f32 * cell;
        let map_h = self.field.height() as f32 * cell;
        let width = map_w + 2.0 * pad;
        let height = map_h + 2.0 * pad + title_height;

        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )?;
        writeln!(
            out,
            r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##
        )?;

        if let Some(ref title) = self.title {
            writeln!(
                out,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                escape(title)
            )?;
        }

        writeln!(
            out,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            pad,
            pad + title_height
        )?;
        self.render_field(out)?;
        self.render_paths(out)?;
        self.render_markers(out)?;
        writeln!(out, "  </g>")?;
        writeln!(out, "</svg>")
    }

    /// Top-left pixel of a cell
    fn cell_origin(&self, coord: GridCoord) -> (f32, f32) {
        let (min, _) = self.field.bounds().unwrap_or_default();
        let col = (i64::from(coord.x) - i64::from(min.x)) as f32;
        let row = (i64::from(coord.y) - i64::from(min.y)) as f32;
        let x = col * self.config.cell_size;
        let y = (self.field.height() as f32 - 1.0 - row) * self.config.cell_size;
        (x, y)
    }

    /// Center pixel of a cell
    fn cell_center(&self, coord: GridCoord) -> (f32, f32) {
        let (x, y) = self.cell_origin(coord);
        let half = self.config.cell_size / 2.0;
        (x + half, y + half)
    }

    fn render_field<W: Write>(&self, out: &mut W) -> fmt::Result {
        let colors = &self.config.colors;
        let size = self.config.cell_size;

        writeln!(out, r#"    <g id="risk-field">"#)?;
        for (coord, value) in self.field.iter() {
            let (fill, opacity) = match RiskClass::from_value(value) {
                Some(RiskClass::Clear) => (colors.clear, 1.0),
                Some(RiskClass::Penalty(v)) => (colors.penalty, (0.3 + 0.2 * v).min(1.0)),
                Some(RiskClass::Impassable) | None => (colors.impassable, 1.0),
            };
            let (x, y) = self.cell_origin(coord);
            writeln!(
                out,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" fill-opacity="{:.2}"/>"#,
                x, y, size, size, fill, opacity
            )?;
        }
        writeln!(out, "    </g>")
    }

    fn render_paths<W: Write>(&self, out: &mut W) -> fmt::Result {
        let palette = self.config.colors.paths;

        writeln!(out, r#"    <g id="paths">"#)?;
        for (i, plan) in self.report.plans.iter().enumerate() {
            let Some(planned) = plan.outcome.path() else {
                continue;
            };
            let color = palette.get(i % palette.len().max(1)).copied().unwrap_or("#000");
            let points = planned
                .waypoints
                .iter()
                .map(|&c| {
                    let (x, y) = self.cell_center(c);
                    format!("{:.1},{:.1}", x, y)
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                out,
                r#"      <polyline points="{}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-linejoin="round"><title>{}</title></polyline>"#,
                points,
                color,
                self.config.path_width,
                escape(&plan.name)
            )?;
        }
        writeln!(out, "    </g>")
    }

    fn render_markers<W: Write>(&self, out: &mut W) -> fmt::Result {
        let r = self.config.marker_radius;
        let colors = &self.config.colors;

        writeln!(out, r#"    <g id="markers">"#)?;
        let (ox, oy) = self.cell_center(self.report.origin);
        writeln!(
            out,
            r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            ox,
            oy,
            r * 1.4,
            colors.origin
        )?;

        for plan in &self.report.plans {
            let (x, y) = self.cell_center(plan.goal);
            if plan.outcome.is_planned() {
                writeln!(
                    out,
                    r##"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="#FFFFFF" stroke="#000" stroke-width="1.5"/>"##,
                    x, y, r
                )?;
            } else {
                writeln!(
                    out,
                    r#"      <path d="M{:.1},{:.1} L{:.1},{:.1} M{:.1},{:.1} L{:.1},{:.1}" stroke="{}" stroke-width="2"/>"#,
                    x - r,
                    y - r,
                    x + r,
                    y + r,
                    x - r,
                    y + r,
                    x + r,
                    y - r,
                    colors.failed
                )?;
            }
            writeln!(
                out,
                r##"      <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="10" fill="#111">{}</text>"##,
                x + r + 2.0,
                y - r,
                escape(&plan.name)
            )?;
        }
        writeln!(out, "    </g>")
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

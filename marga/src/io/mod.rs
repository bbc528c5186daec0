//! Scenario loading and visualization.
//!
//! - [`Scenario`]: YAML description of a risk field, origin and targets
//! - [`SvgRenderer`]: renders a planning run to SVG

mod scenario;
mod svg;

pub use scenario::{CellOverride, RiskFieldSpec, Scenario};
pub use svg::{SvgColorScheme, SvgConfig, SvgRenderer};

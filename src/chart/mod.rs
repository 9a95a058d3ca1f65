//! Bar chart construction and rendering.

mod axis;
mod fonts;
mod format;
mod layout;
mod model;
mod render;
mod style;

pub use axis::{BarAxis, ValueAxis};
pub use format::{format_tick, format_value};
pub use layout::Layout;
pub use model::{BAR_WIDTH, Bar, BarChart, HEADROOM, MAX_TICKS};
pub use render::{ImageFormat, RenderedChart, render, render_with_config};
pub use style::{ChartColor, Palette};

mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
    parse_config,
};
pub use model::{
    ChartConfig, Config, DEFAULT_DPI, DEFAULT_FIGURE_SIZE, DEFAULT_INPUT_PATH,
    DEFAULT_OUTPUT_PATH, DEFAULT_PALETTE, DEFAULT_TITLE, DEFAULT_Y_LABEL, InputConfig,
    OutputConfig, POINTS_PER_INCH,
};
pub use validation::{MAX_DPI, MAX_PIXELS_PER_SIDE, validate_chart_section, validate_config};

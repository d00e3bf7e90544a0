pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_OUTLINE_WIDTH: &str = "10";
pub const DEFAULT_OUTLINE_COLOR: &str = "#ffffff";

/// Name of the subdirectory outlined copies are written to.
pub const OUTPUT_DIR_NAME: &str = "outlined";

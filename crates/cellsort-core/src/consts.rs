use std::time::Duration;

/// Default number of grid rows.
pub const DEFAULT_GRID_ROWS: u32 = 6;

/// Default number of grid columns.
pub const DEFAULT_GRID_COLS: u32 = 6;

/// Default maximum width of the rendered image in display pixels.
pub const DEFAULT_MAX_DISPLAY_WIDTH: u32 = 1600;

/// Default maximum height of the rendered image in display pixels.
pub const DEFAULT_MAX_DISPLAY_HEIGHT: u32 = 900;

/// Initial window width as a fraction of the monitor width.
pub const DEFAULT_WINDOW_WIDTH_FRACTION: f32 = 0.95;

/// Initial window height as a fraction of the monitor height.
pub const DEFAULT_WINDOW_HEIGHT_FRACTION: f32 = 0.90;

/// Default directory scanned for input images.
pub const DEFAULT_INPUT_DIR: &str = "input_images";

/// Default directory under which timestamped session folders are created.
pub const DEFAULT_OUTPUT_DIR: &str = "cropped_grids";

/// Upper bound on `rows * cols`.
pub const MAX_GRID_CELLS: u32 = 10_000;

/// File extensions (lowercase, no dot) accepted as input images.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// JPEG quality used for exported crops.
pub const JPEG_QUALITY: u8 = 100;

/// Prefix of the per-run session folder name.
pub const SESSION_DIR_PREFIX: &str = "session_";

/// `chrono` format string for the session folder timestamp.
pub const SESSION_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Interval between polling ticks when no input arrives.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

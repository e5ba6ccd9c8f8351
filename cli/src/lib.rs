pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod interactive;
pub mod json_output;
pub mod logging;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::{BaconPathApp, run};
pub use args::Args;
pub use utils::format_number;

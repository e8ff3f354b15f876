pub mod progress;
pub mod style;

pub use progress::ProgressSpinner;
pub use style::Palette;

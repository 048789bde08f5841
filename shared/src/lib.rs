pub mod assets;
pub mod header;
pub mod style;

pub use assets::{AssetConfig, AssetConfigError};
pub use header::HeaderContent;
pub use style::{Property, Style, px};

//! Window options.
//!
//! Produced once by the script's options function (or a JSON file) and read
//! once by the host when the surface is created. Never consulted per frame.

mod anchor;
mod error;
mod layer;
mod margin;
mod options;

pub use anchor::{Anchor, Edge};
pub use error::ConfigError;
pub use layer::Layer;
pub use margin::Margin;
pub use options::WindowOptions;

//! Scrim host core.
//!
//! Owns everything between a window surface and a user draw script:
//! - window options read once at startup (`config`)
//! - the script contract with explicit per-script state (`script`)
//! - the frame driver that resets, draws and presents (`host`)
//! - the surface seam window backends implement (`surface`)

pub mod config;
pub mod host;
pub mod logging;
pub mod script;
pub mod surface;
pub mod time;

pub use config::{Anchor, ConfigError, Edge, Layer, Margin, WindowOptions};
pub use host::{AppControl, FrameOutcome, FrameStats, Host};
pub use script::{Script, ScriptInstance};
pub use surface::{Frame, MemorySurface, Surface};

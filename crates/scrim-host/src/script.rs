use scrim_canvas::{Canvas, CanvasError};

use crate::config::{ConfigError, WindowOptions};

/// Contract between the host and a user draw script.
///
/// The script itself is immutable code; anything it wants to remember from
/// one frame to the next lives in `State`, which the host owns and lends to
/// every `draw` call.
pub trait Script {
    /// Per-script state persisting across frames.
    type State: Default;

    /// Window options. Called once, before the first frame.
    fn options(&self) -> Result<WindowOptions, ConfigError>;

    /// Draws one frame. Called once per frame after the canvas was reset.
    fn draw(&self, state: &mut Self::State, canvas: &mut Canvas) -> Result<(), CanvasError>;
}

/// A loaded script together with its persistent state.
pub struct ScriptInstance<S: Script> {
    script: S,
    state: S::State,
}

impl<S: Script> ScriptInstance<S> {
    pub fn new(script: S) -> Self {
        Self { script, state: S::State::default() }
    }

    #[inline]
    pub fn script(&self) -> &S {
        &self.script
    }

    #[inline]
    pub fn state(&self) -> &S::State {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut S::State {
        &mut self.state
    }

    /// Runs the script's draw callback against `canvas`.
    pub fn draw(&mut self, canvas: &mut Canvas) -> Result<(), CanvasError> {
        self.script.draw(&mut self.state, canvas)
    }
}

/// Convenience result type used across the projector.
pub type ProjectorResult<T> = Result<T, ProjectorError>;

/// Top-level error taxonomy for the fallible edges of the engine.
///
/// The per-frame core (state mutation, compositing, shapes, color, waypoints,
/// presets) never fails; out-of-range requests saturate instead.
#[derive(thiserror::Error, Debug)]
pub enum ProjectorError {
    /// Invalid user-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Startup configuration rejected.
    #[error("config error: {0}")]
    Config(String),

    /// Input script could not be parsed or replayed.
    #[error("input script error: {0}")]
    Script(String),

    /// Render sink failures (rasterization, image output).
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProjectorError {
    /// Build a [`ProjectorError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ProjectorError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ProjectorError::Script`] value.
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Build a [`ProjectorError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

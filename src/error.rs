use thiserror::Error;

/// Errors raised by a page source that cannot produce records at all.
#[derive(Error, Debug, Clone)]
pub enum PageSourceError {
    #[error("Failed to parse page JSON: {0}")]
    Json(String),

    #[error("Failed to read page file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Page source is unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when converting a custom user format into a `PageDefinition`.
#[derive(Error, Debug, Clone)]
pub enum PageConversionError {
    #[error("Invalid custom page data: {0}")]
    ValidationError(String),
}

/// The single failure an extraction can end with.
///
/// Classification and resolution never fail; only an upstream page source can
/// abort the run, in which case no partial graph is returned.
#[derive(Error, Debug, Clone)]
pub enum ExtractError {
    #[error("Page source failed: {0}")]
    PageSource(#[from] PageSourceError),
}

/// Errors raised while validating the output of a layout engine.
#[derive(Error, Debug, Clone)]
pub enum LayoutError {
    #[error("Layout annotates '{0}', which is not an element of the process")]
    UnknownElement(String),

    #[error("Layout is missing geometry for element '{0}'")]
    MissingGeometry(String),

    #[error("Layout engine failed: {0}")]
    Engine(String),
}

/// Errors that can occur while saving, loading or rendering graph artifacts.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact error: {0}")]
    Generic(String),
}

/// Errors from running the post-extraction stages together.
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

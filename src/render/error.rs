//! Error types for template rendering.
use thiserror::Error;

/// Fatal rendering errors that halt the whole run.
///
/// These indicate the configuration/generator contract is broken, not a
/// data quirk, so no partial output is produced past the failing slide.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A generated slide's `type` has no entry in `type_map`.
    #[error("no template mapping for slide type '{slide_type}'")]
    UnknownSlideType { slide_type: String },

    /// `type_map` points at a slide the base deck does not have.
    #[error(
        "template slide index {index} for type '{slide_type}' is out of range ({slide_count} slides in base deck)"
    )]
    TemplateIndexOutOfRange {
        slide_type: String,
        index: usize,
        slide_count: usize,
    },
}

/// Errors local to one slide.
///
/// A slide-level error stops binding the remaining fields of that slide
/// and leaves it short of `Done`, but the run continues with the next
/// slide; the error is recorded in the slide's outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlideError {
    /// A required field is missing from the generated object.
    #[error("required field '{field}' is missing from the generated content")]
    MissingField { field: String },

    /// Table payload dimensions disagree with its declared `n_rows`/`n_cols`.
    #[error(
        "field '{field}': table payload has {got_rows} rows x {got_cols} cols but declares {n_rows} x {n_cols}"
    )]
    TableDimensionMismatch {
        field: String,
        n_rows: usize,
        n_cols: usize,
        got_rows: usize,
        got_cols: usize,
    },

    /// A content payload carries an unrecognized `content_type` tag.
    #[error("field '{field}': unrecognized content_type tag '{tag}'")]
    UnknownContentTag { field: String, tag: String },

    /// A content payload has no `content_type` tag at all.
    #[error("field '{field}': content payload is missing its content_type tag")]
    MissingContentTag { field: String },

    /// The generated value does not have the shape its field kind requires.
    #[error("field '{field}': malformed payload: {reason}")]
    MalformedPayload { field: String, reason: String },
}

/// Image download failures.
///
/// Fatal for the affected image field only: the placeholder shape is left
/// intact and the failure is recorded as a warning on the run.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be completed.
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: u16 },

    /// The response body was empty.
    #[error("{url} returned an empty body")]
    EmptyBody { url: String },

    /// No fetcher was configured for this renderer.
    #[error("cannot fetch {url}: no image fetcher configured")]
    NoFetcher { url: String },
}

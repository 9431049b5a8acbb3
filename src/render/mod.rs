//! Template rendering: slide duplication, field binding, and run reports.
pub mod error;
pub mod fetch;
pub mod report;
mod renderer;

pub use error::{FetchError, RenderError, SlideError};
#[cfg(feature = "fetch")]
pub use fetch::HttpImageFetcher;
pub use fetch::{ImageFetcher, NullFetcher};
pub use renderer::TemplateRenderer;
pub use report::{RenderReport, RenderWarning, SlideOutcome, SlideStatus};

//! Remote source retrieval port.

use url::Url;

use crate::domain::AppError;

/// Downloads a single source file.
pub trait SourceFetcher {
    /// Fetch the body at `url`. Non-success responses are errors.
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError>;
}

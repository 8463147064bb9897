use std::cell::RefCell;
use std::collections::HashMap;

use url::Url;

use crate::domain::AppError;
use crate::ports::SourceFetcher;

/// Source fetcher serving canned bodies and recording requested URLs.
#[derive(Default)]
pub struct FakeSourceFetcher {
    bodies: HashMap<String, Vec<u8>>,
    pub requests: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeSourceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.as_bytes().to_vec());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl SourceFetcher for FakeSourceFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        self.requests.borrow_mut().push(url.to_string());
        self.bodies.get(url.as_str()).cloned().ok_or_else(|| AppError::FetchFailed {
            url: url.to_string(),
            reason: "server responded 404 Not Found".to_string(),
        })
    }
}

//! Local stand-in for the raw-file host serving registry sources.

use mockito::{Mock, Server, ServerGuard};

pub(crate) struct RegistryServer {
    server: ServerGuard,
}

impl RegistryServer {
    pub(crate) fn start() -> Self {
        Self { server: Server::new() }
    }

    /// Base URL to hand to `REUSEIT_BASE_URL`.
    pub(crate) fn base_url(&self) -> String {
        format!("{}/", self.server.url())
    }

    /// Serve `body` at the registry path, expecting exactly one download.
    pub(crate) fn serve(&mut self, path: &str, body: &str) -> Mock {
        self.server
            .mock("GET", format!("/{}", path).as_str())
            .with_status(200)
            .with_body(body)
            .expect(1)
            .create()
    }

    /// Respond to the registry path with an error status.
    pub(crate) fn fail(&mut self, path: &str, status: usize) -> Mock {
        self.server.mock("GET", format!("/{}", path).as_str()).with_status(status).create()
    }

    /// A mock that must never be hit.
    pub(crate) fn forbid(&mut self, path: &str) -> Mock {
        self.server.mock("GET", format!("/{}", path).as_str()).expect(0).create()
    }
}

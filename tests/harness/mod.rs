#![allow(dead_code, unused_imports)]

pub(crate) mod registry_server;
pub(crate) mod test_context;

pub(crate) use registry_server::RegistryServer;
pub(crate) use test_context::TestContext;

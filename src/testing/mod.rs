mod fake_source_fetcher;
mod memory_project_filesystem;
mod scripted_confirmation;

pub use fake_source_fetcher::FakeSourceFetcher;
pub use memory_project_filesystem::MemoryProjectFilesystem;
pub use scripted_confirmation::ScriptedConfirmation;

mod confirmation;
mod project_filesystem;
mod source_fetcher;

pub use confirmation::Confirmation;
pub use project_filesystem::ProjectFilesystem;
pub use source_fetcher::SourceFetcher;

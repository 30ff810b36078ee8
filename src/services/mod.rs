pub mod suggestion;
pub mod version_control;

pub use suggestion::SuggestionService;
pub use version_control::VersionControlService;

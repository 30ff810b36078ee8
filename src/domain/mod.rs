pub mod change;
pub mod commit_type;
pub mod message;

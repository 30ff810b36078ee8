pub mod commit;
pub mod config;

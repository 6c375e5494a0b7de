pub mod config;
pub mod error;
pub mod fetch;
pub mod import;
pub mod notify;
pub mod process;
pub mod run;
pub mod store;

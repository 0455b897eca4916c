pub mod config;
pub mod dates;
pub mod errors;
pub mod logging;

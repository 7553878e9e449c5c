pub mod calendar;
pub mod config;
pub mod filter;
pub mod format;
pub mod forms;
pub mod views;

pub use config::Config;
pub use filter::filter_clients;
pub use forms::ValidationError;
pub use views::*;

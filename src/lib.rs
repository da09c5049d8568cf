pub mod app;
pub mod console;
pub mod driver;
pub mod fixtures;
pub mod global_prefs;
pub mod handlers;
pub mod model;
pub mod services;
pub mod state;
pub mod store;
pub mod time_format;
pub mod timer;

pub use app::{App, Screen};
pub use state::{AppError, AppResult, View};

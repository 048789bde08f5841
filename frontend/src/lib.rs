pub mod components;
pub mod config;

pub use components::app::{App, AppProps};
pub use components::header::HeaderView;

//! Chlorophylle x GDMP dashboard page
//!
//! A static dashboard page that either embeds into a caller's application
//! host or runs as its own development server.

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod pages;
pub mod server;

pub use app::DashApp;
pub use config::Config;
pub use error::{AppError, ServerError};
pub use layout::{Component, Style};
pub use pages::Chloro;

//! Dashboard pages

pub mod chloro;

pub use chloro::Chloro;

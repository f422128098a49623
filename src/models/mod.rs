//! Diesel row types mirroring `schema`.

pub mod category;
pub mod question;

#[cfg(feature = "server")]
pub mod config;

//! Core library exports for the trivia API service.
//!
//! The `data` feature exposes the persistence layer (`domain`, `models`,
//! `schema`, `repository`); `server` adds forms, services and the actix-web
//! routes.

pub mod db;
pub mod domain;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

//! Domain entities independent from the persistence layer.

pub mod category;
pub mod question;
pub mod types;

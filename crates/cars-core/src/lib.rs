//! # Cars Core
//!
//! The domain layer of the classifieds store: users, their posts and the
//! price history of a listing.
//! This crate contains pure data types and repository contracts with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;

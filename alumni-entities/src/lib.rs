#![deny(missing_debug_implementations)]

//! # alumni-entities
//!
//! Reusable, agnostic domain entities for the alumni portal.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod event;
pub mod forum;
pub mod gallery;
pub mod id;
pub mod job;
pub mod password;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

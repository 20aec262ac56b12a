//! Output generation.
//!
//! - [`json`]: Writes the [`crate::models::ArticleFeed`] document the website reads

pub mod json;

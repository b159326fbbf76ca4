//! Route handlers organized by functionality.

pub mod callbacks;
pub mod dashboard;
pub mod health;
pub mod records;

//! Command implementations for the league statistics CLI

pub mod common;
pub mod summary;
pub mod tactics;
pub mod teams;
pub mod trends;
pub mod valuation;

//! Route handlers organized by representation

pub mod bms;
pub mod health;
pub mod viewer;

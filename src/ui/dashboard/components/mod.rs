//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod food_list;
pub mod footer;
pub mod header;
pub mod logs;
pub mod modal;

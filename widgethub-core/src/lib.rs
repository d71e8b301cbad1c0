//! widgethub core library exports

pub mod catalog;
pub mod changelog;
pub mod config;
pub mod hub;
pub mod search;

pub use hub::Hub;

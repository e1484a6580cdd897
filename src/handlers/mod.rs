//! HTTP handlers

pub mod home;
pub mod health;
pub mod historical;
pub mod analysis;
pub mod model;

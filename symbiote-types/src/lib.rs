//! Wire and view-model types of the federation control panel.

pub mod download;
pub mod endpoint;
pub mod error;
pub mod federation;
pub mod information_model;
pub mod platform;
pub mod resource;
pub mod role;

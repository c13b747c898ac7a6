pub mod analysis;
pub mod application;
pub mod domain;
pub mod ports;
pub mod utils;

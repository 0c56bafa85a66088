pub mod bounds;
pub mod calibration;
pub mod config;
pub mod constants;
pub mod geo;
pub mod map;
pub mod maps;
pub mod store;
pub mod tracking;
pub mod transform;
pub mod viewport;

pub mod alerts;
pub mod resolution;

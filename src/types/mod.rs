pub mod alert;
pub mod resolution;

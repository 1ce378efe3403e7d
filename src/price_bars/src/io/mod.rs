pub mod csv;
pub mod timestamp;

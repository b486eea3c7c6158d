pub mod course;
pub mod types;

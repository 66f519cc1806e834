pub mod params;
pub mod rubric;
pub mod rule;
pub mod student;

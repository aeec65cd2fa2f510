pub mod core;
pub mod dashboard;
pub mod students;
pub mod violations;

pub mod loads;
pub mod project;
pub mod result;
pub mod sizing;
pub mod system_type;
pub mod topology;

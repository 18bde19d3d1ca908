pub mod dot;
pub mod fs;
pub mod json;

pub mod recipes;
pub mod system;

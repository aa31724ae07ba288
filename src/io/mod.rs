pub mod cli;
pub mod input;
pub mod json;
pub mod logger;

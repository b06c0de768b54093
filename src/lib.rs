pub mod engine;
pub mod input;
pub mod model;
pub mod shell;

pub mod assembler;
pub mod collector;
pub mod generator;
pub mod literal;
pub mod sanitize;

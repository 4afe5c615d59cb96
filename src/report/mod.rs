pub mod console;
pub mod manifest;
pub mod report_model;

pub mod build_mode;
pub mod diff_result;
pub mod document;
pub mod environment;
pub mod field;
pub mod resolved_environment;
pub mod validation_report;

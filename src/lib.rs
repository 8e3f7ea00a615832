/// Command-line argument parser
pub mod args;
/// HTTP data types.
pub mod common;
/// Request extension functions: query value lookup and AJAX detection.
pub mod ext;

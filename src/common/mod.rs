/// HTTP header data types and functions.
pub mod header;
/// HTTP method data type and functions.
pub mod method;
/// Query parameter data types and functions.
pub mod query;
/// HTTP request data type and functions.
pub mod request;

//! Small shared helpers: wall-clock access, HTTP error responses, and
//! logging initialization.

pub mod clock;
pub mod http_helpers;
pub mod logger;

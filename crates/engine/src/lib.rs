pub mod formatter;
pub mod validator;

pub use formatter::parse_status;
pub use validator::{ResponseCheck, check_response};

pub mod request;
pub mod response;

pub use request::{encode_generate_request, encode_process_response};
pub use response::{parse_completion_response, parse_generate_response};

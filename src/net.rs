pub mod decode;
pub mod fetch;
pub mod response;

pub use decode::{decode, ContentEncoding};
pub use fetch::fetch;
pub use response::{RawResponse, Response};

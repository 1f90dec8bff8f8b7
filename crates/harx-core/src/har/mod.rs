//! HAR (HTTP Archive) reading: parse a capture file into request/response
//! entries. Trusts well-formed input; only the fields extraction needs are
//! deserialized, everything else in the document is ignored.

mod load;
mod parse;

pub use load::load_archive;
pub use parse::{HarContent, HarEntry, HarRequest, HarResponse};

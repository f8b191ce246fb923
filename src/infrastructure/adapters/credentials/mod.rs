//! Credential Adapters
//!
//! 教师凭据来源实现

mod json_file;

pub use json_file::JsonFileCredentialSource;

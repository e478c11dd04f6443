pub mod service;
pub mod use_cases;

pub use service::*;
pub use use_cases::*;

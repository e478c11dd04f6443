pub mod delete_question;

pub use delete_question::*;

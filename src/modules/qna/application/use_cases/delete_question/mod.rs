mod command;
mod handler;

pub use command::DeleteQuestionCommand;
pub use handler::DeleteQuestionHandler;

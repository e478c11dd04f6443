pub mod answer;
pub mod answers;
pub mod delete_history;
pub mod question;
pub mod user;

pub use answer::Answer;
pub use answers::Answers;
pub use delete_history::DeleteHistory;
pub use question::Question;
pub use user::User;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Question, User};

    pub fn user(no: u32) -> User {
        User::new(
            format!("test{}", no),
            "pass1234",
            format!("TEST{}", no),
            format!("test{}@test.com", no),
        )
    }

    pub fn question_by(writer: &User) -> Question {
        Question::new("question title", "question contents", writer)
    }
}

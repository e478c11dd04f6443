/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use qna_lib::modules::qna::{Question, User};
use uuid::Uuid;

pub struct UserFactory {
    user_id: String,
    password: String,
    name: String,
    email: String,
}

impl Default for UserFactory {
    fn default() -> Self {
        // Login ids are capped at 20 chars
        let suffix = Uuid::new_v4().simple().to_string();
        let user_id = format!("user_{}", &suffix[..8]);
        Self {
            email: format!("{}@slipp.net", user_id),
            user_id,
            password: "password".to_string(),
            name: "Test User".to_string(),
        }
    }
}

impl UserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn javajigi() -> Self {
        Self::default()
            .with_user_id("javajigi")
            .with_name("javajigi")
            .with_email("javajigi@slipp.net")
    }

    pub fn sanjigi() -> Self {
        Self::default()
            .with_user_id("sanjigi")
            .with_name("sanjigi")
            .with_email("sanjigi@slipp.net")
    }

    pub fn with_user_id(mut self, user_id: &str) -> Self {
        self.user_id = user_id.to_string();
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn build(self) -> User {
        User::new(self.user_id, self.password, self.name, self.email)
    }
}

pub struct QuestionFactory {
    title: String,
    contents: String,
}

impl Default for QuestionFactory {
    fn default() -> Self {
        Self {
            title: "title1".to_string(),
            contents: "contents1".to_string(),
        }
    }
}

impl QuestionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_contents(mut self, contents: &str) -> Self {
        self.contents = contents.to_string();
        self
    }

    pub fn build_for(self, writer: &User) -> Question {
        Question::new(self.title, self.contents, writer)
    }
}

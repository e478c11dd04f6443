use crate::shared::errors::AppError;

pub const MAX_USER_ID_LENGTH: usize = 20;
pub const MAX_PASSWORD_LENGTH: usize = 20;
pub const MAX_NAME_LENGTH: usize = 20;
pub const MAX_EMAIL_LENGTH: usize = 50;
pub const MAX_QUESTION_TITLE_LENGTH: usize = 100;

pub struct Validator;

impl Validator {
    pub fn validate_user(
        user_id: &str,
        password: &str,
        name: &str,
        email: &str,
    ) -> Result<(), AppError> {
        Self::validate_required("User id", user_id, MAX_USER_ID_LENGTH)?;
        Self::validate_required("Password", password, MAX_PASSWORD_LENGTH)?;
        Self::validate_required("Name", name, MAX_NAME_LENGTH)?;
        if email.chars().count() > MAX_EMAIL_LENGTH {
            return Err(AppError::ValidationError(format!(
                "Email too long (max {} characters)",
                MAX_EMAIL_LENGTH
            )));
        }
        Ok(())
    }

    pub fn validate_question_title(title: &str) -> Result<(), AppError> {
        Self::validate_required("Title", title, MAX_QUESTION_TITLE_LENGTH)
    }

    fn validate_required(field: &str, value: &str, max: usize) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        // Column limits count characters, not bytes
        if value.chars().count() > max {
            return Err(AppError::ValidationError(format!(
                "{} too long (max {} characters)",
                field, max
            )));
        }
        Ok(())
    }
}

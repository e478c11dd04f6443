use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{answer::Answer, delete_history::DeleteHistory, user::User};
use crate::shared::errors::AppResult;

/// Ordered answers of one question
///
/// Insertion order is kept; it is the order delete histories are produced in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: Vec<Answer>,
}

impl Answers {
    pub fn new(values: Vec<Answer>) -> Self {
        Self { values }
    }

    pub fn add(&mut self, answer: Answer) {
        self.values.push(answer);
    }

    /// Delete every answer in insertion order on behalf of `login_user`
    ///
    /// Stops at the first answer `login_user` does not own and returns its
    /// `CannotDelete`. Answers visited before that stay deleted.
    pub fn delete(&mut self, login_user: &User) -> AppResult<Vec<DeleteHistory>> {
        self.values
            .iter_mut()
            .map(|answer| answer.delete(login_user))
            .collect()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Answer> {
        self.values.iter().find(|answer| answer.id() == *id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut Answer> {
        self.values.iter_mut().find(|answer| answer.id() == *id)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Answer> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::user;
    use super::*;
    use crate::modules::qna::domain::value_objects::ContentType;
    use crate::shared::errors::AppError;
    use chrono::Utc;

    fn answer_by(writer: &User) -> Answer {
        Answer::restore(
            Uuid::new_v4(),
            writer.id,
            Uuid::new_v4(),
            "answer contents".to_string(),
            false,
            Utc::now(),
            Utc::now(),
        )
    }

    #[test]
    fn test_delete_all_owned_answers_in_order() {
        let writer = user(1);
        let first = answer_by(&writer);
        let second = answer_by(&writer);
        let (first_id, second_id) = (first.id(), second.id());
        let mut answers = Answers::new(vec![first, second]);

        let histories = answers.delete(&writer).unwrap();

        assert!(answers.iter().all(Answer::is_deleted));
        assert_eq!(histories.len(), 2);
        assert_eq!(histories[0].content_type(), ContentType::Answer);
        assert_eq!(histories[0].content_id(), first_id);
        assert_eq!(histories[1].content_type(), ContentType::Answer);
        assert_eq!(histories[1].content_id(), second_id);
    }

    #[test]
    fn test_delete_by_other_user_is_refused() {
        let writer = user(1);
        let mut answers = Answers::new(vec![answer_by(&writer), answer_by(&writer)]);

        let result = answers.delete(&user(2));

        assert!(matches!(result, Err(AppError::CannotDelete(_))));
        assert!(answers.iter().all(|answer| !answer.is_deleted()));
    }

    #[test]
    fn test_delete_stops_at_first_foreign_answer_without_rollback() {
        let writer = user(1);
        let other = user(2);
        let owned = answer_by(&writer);
        let foreign = answer_by(&other);
        let trailing = answer_by(&writer);
        let ids = [owned.id(), foreign.id(), trailing.id()];
        let mut answers = Answers::new(vec![owned, foreign, trailing]);

        let result = answers.delete(&writer);

        assert!(matches!(result, Err(AppError::CannotDelete(_))));
        assert!(answers.get(&ids[0]).unwrap().is_deleted());
        assert!(!answers.get(&ids[1]).unwrap().is_deleted());
        assert!(!answers.get(&ids[2]).unwrap().is_deleted());
    }

    #[test]
    fn test_delete_empty_collection_returns_no_histories() {
        let mut answers = Answers::default();
        assert!(answers.delete(&user(1)).unwrap().is_empty());
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let writer = user(1);
        let mut answers = Answers::default();
        let first = answer_by(&writer);
        let second = answer_by(&writer);
        let expected = vec![first.id(), second.id()];

        answers.add(first);
        answers.add(second);

        let ids: Vec<Uuid> = answers.iter().map(Answer::id).collect();
        assert_eq!(ids, expected);
        assert_eq!(answers.len(), 2);
    }
}

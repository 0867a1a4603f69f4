use devfusion_db::util::{FlattenTransactionResultExt, InspectTransactionError};
use devfusion_db::{test_set, topic, user};
use devfusion_entity::mcq;
use devfusion_model::test::{AnswerLabel, Mcq, TestInstructions, TestSet, TestSetInput, TestSummary};
use devfusion_model_tools::convert::{FromDbModel, IntoDbModel};
use num_traits::ToPrimitive;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::error::Error;
use std::str::FromStr;
use uuid::Uuid;

use crate::certification::{flip_certification, set_certification};
use crate::error::{CoreError, Entity, ValidationError};
use crate::session::UserSession;

/// A checked test payload, questions paired with their parsed answer label
struct ValidTest {
    title: String,
    is_certification: bool,
    passing_percentage: f64,
    mcqs: Vec<(Mcq, AnswerLabel)>,
}

fn malformed(detail: impl Into<String>) -> ValidationError {
    ValidationError::MalformedTest(detail.into())
}

fn validate(input: TestSetInput) -> Result<ValidTest, ValidationError> {
    if input.title.trim().is_empty() {
        return Err(malformed("title must not be empty"));
    }
    if !(0.0..=100.0).contains(&input.passing_percentage) {
        return Err(malformed("passing percentage must be between 0 and 100"));
    }
    let mcqs = input
        .mcqs
        .into_iter()
        .enumerate()
        .map(|(index, mcq)| {
            let number = index + 1;
            if mcq.question.trim().is_empty() {
                return Err(malformed(format!("question {number} is empty")));
            }
            if let Some((label, _)) = mcq.options.iter().find(|(_, option)| option.trim().is_empty()) {
                return Err(malformed(format!("option {label} of question {number} is empty")));
            }
            let correct_answer = AnswerLabel::from_str(&mcq.correct_answer).map_err(|_| {
                malformed(format!(
                    "question {number} has correct answer {:?}, expected one of a, b, c, d",
                    mcq.correct_answer
                ))
            })?;
            let question = Mcq {
                question: mcq.question,
                options: mcq.options,
                correct_answer: Some(correct_answer),
            };
            Ok((question, correct_answer))
        })
        .collect::<Result<_, _>>()?;

    Ok(ValidTest {
        title: input.title,
        is_certification: input.is_certification,
        passing_percentage: input.passing_percentage,
        mcqs,
    })
}

async fn store_mcqs<C: ConnectionTrait>(conn: &C, test_id: Uuid, mcqs: Vec<(Mcq, AnswerLabel)>) -> Result<(), CoreError> {
    let rows = mcqs
        .into_iter()
        .enumerate()
        .map(|(position, (question, correct_answer))| {
            let position = position.to_i32().unwrap_or(i32::MAX);
            (test_id, position, question, correct_answer).into_db_model()
        })
        .collect::<Vec<mcq::ActiveModel>>();
    test_set::Mutation::replace_mcqs(conn, test_id, rows).await?;
    Ok(())
}

async fn load<C: ConnectionTrait>(conn: &C, test_id: Uuid) -> Result<TestSet, CoreError> {
    test_set::Query::find_with_mcqs(conn, test_id)
        .await?
        .map(TestSet::from_db_model)
        .ok_or(CoreError::NotFound(Entity::TestSet))
}

#[derive(Debug, Clone)]
pub struct TestStore {
    conn: DatabaseConnection,
}

impl TestStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_tests(&self) -> Result<Vec<TestSummary>, CoreError> {
        let tests = test_set::Query::list_with_mcqs(&self.conn).await?;
        Ok(tests
            .into_iter()
            .map(|test| TestSet::from_db_model(test).summary())
            .collect())
    }

    /// The full test set including correct answers
    pub async fn get_test(&self, test_id: Uuid) -> Result<TestSet, CoreError> {
        load(&self.conn, test_id).await
    }

    pub async fn certification_test(&self) -> Result<Option<TestSet>, CoreError> {
        let Some(certification) = test_set::Query::find_certification(&self.conn).await?.into_iter().next() else {
            return Ok(None);
        };
        let mcqs = test_set::Query::find_mcqs(&self.conn, certification.id).await?;
        Ok(Some(TestSet::from_db_model((certification, mcqs))))
    }

    pub async fn create_test(&self, input: TestSetInput) -> Result<TestSet, CoreError> {
        let valid = validate(input)?;
        let res = self
            .conn
            .transaction::<_, TestSet, CoreError>(|txn| {
                Box::pin(async move {
                    let created = test_set::Mutation::insert(txn, valid.title, valid.passing_percentage).await?;
                    store_mcqs(txn, created.id, valid.mcqs).await?;
                    if valid.is_certification {
                        flip_certification(txn, created.id, true).await?;
                    }
                    load(txn, created.id).await
                })
            })
            .await;
        let created = res
            .inspect_transaction_err(|error| {
                if matches!(error, CoreError::Database(_)) {
                    tracing::error!(error = error as &dyn Error, "failed to create test set");
                }
            })
            .flatten_res()?;
        tracing::info!(test_id = %created.id, questions = created.mcqs.len(), "created test set");
        Ok(created)
    }

    /// Replaces all fields and questions of a test set
    pub async fn update_test(&self, test_id: Uuid, input: TestSetInput) -> Result<TestSet, CoreError> {
        let valid = validate(input)?;
        let res = self
            .conn
            .transaction::<_, TestSet, CoreError>(|txn| {
                Box::pin(async move {
                    let updated =
                        test_set::Mutation::update_fields(txn, test_id, valid.title, valid.passing_percentage).await?;
                    if updated == 0 {
                        return Err(CoreError::NotFound(Entity::TestSet));
                    }
                    store_mcqs(txn, test_id, valid.mcqs).await?;
                    flip_certification(txn, test_id, valid.is_certification).await?;
                    load(txn, test_id).await
                })
            })
            .await;
        let updated = res
            .inspect_transaction_err(|error| {
                if matches!(error, CoreError::Database(_)) {
                    tracing::error!(error = error as &dyn Error, %test_id, "failed to update test set");
                }
            })
            .flatten_res()?;
        tracing::info!(%test_id, questions = updated.mcqs.len(), "updated test set");
        Ok(updated)
    }

    pub async fn delete_test(&self, test_id: Uuid) -> Result<(), CoreError> {
        let res = self
            .conn
            .transaction::<_, u64, CoreError>(|txn| {
                Box::pin(async move { Ok(test_set::Mutation::delete(txn, test_id).await?) })
            })
            .await;
        let deleted = res.flatten_res()?;
        if deleted == 0 {
            return Err(CoreError::NotFound(Entity::TestSet));
        }
        tracing::info!(%test_id, "deleted test set");
        Ok(())
    }

    pub async fn set_certification(&self, test_id: Uuid, make_certification: bool) -> Result<TestSet, CoreError> {
        set_certification(&self.conn, test_id, make_certification).await?;
        load(&self.conn, test_id).await
    }

    /// What a user sees before starting a test. The test counts as unlocked once the
    /// user's progress reaches the end of the content.
    pub async fn test_instructions(&self, session: &UserSession, test_id: Uuid) -> Result<TestInstructions, CoreError> {
        let test = load(&self.conn, test_id).await?;
        let user = user::Query::find_user_by_email(&self.conn, &session.email)
            .await?
            .ok_or(CoreError::NotFound(Entity::User))?;
        let progress = user.progress.to_u32().unwrap_or_default();
        let content_length = topic::Query::count(&self.conn).await?.to_u32().unwrap_or(u32::MAX);

        Ok(TestInstructions {
            test: test.summary(),
            progress,
            content_length,
            unlocked: progress >= content_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devfusion_model::test::{McqInput, McqOptions};

    fn options() -> McqOptions {
        McqOptions {
            a: "1".to_owned(),
            b: "2".to_owned(),
            c: "3".to_owned(),
            d: "4".to_owned(),
        }
    }

    fn input(correct_answer: &str) -> TestSetInput {
        TestSetInput {
            title: "Basics".to_owned(),
            is_certification: false,
            passing_percentage: 50.0,
            mcqs: vec![McqInput {
                question: "Pick one".to_owned(),
                options: options(),
                correct_answer: correct_answer.to_owned(),
            }],
        }
    }

    #[test]
    fn test_valid_payload() {
        let valid = validate(input("c")).unwrap();
        assert_eq!(valid.mcqs.len(), 1);
        assert_eq!(valid.mcqs[0].1, AnswerLabel::C);
    }

    #[test]
    fn test_unknown_label() {
        assert!(matches!(validate(input("e")), Err(ValidationError::MalformedTest(_))));
        assert!(matches!(validate(input("A")), Err(ValidationError::MalformedTest(_))));
    }

    #[test]
    fn test_bad_fields() {
        let mut payload = input("a");
        payload.passing_percentage = 100.5;
        assert!(validate(payload).is_err());

        let mut payload = input("a");
        payload.title = String::new();
        assert!(validate(payload).is_err());

        let mut payload = input("a");
        payload.mcqs[0].options.b = "  ".to_owned();
        let Err(ValidationError::MalformedTest(detail)) = validate(payload) else {
            panic!("empty option accepted");
        };
        assert_eq!(detail, "option b of question 1 is empty");
    }
}

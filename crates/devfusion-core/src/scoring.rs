use devfusion_db::{test_set, user};
use devfusion_model::test::{Answers, ScoreReport, TestSet};
use devfusion_model_tools::convert::FromDbModel;
use num_traits::ToPrimitive;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::error::{CoreError, Entity};
use crate::session::UserSession;

/// Grades `answers` against the correct labels of `test`. Questions are visited in
/// index order, an answer only counts if it equals the correct label exactly.
#[must_use]
pub fn grade(test: &TestSet, answers: &Answers) -> ScoreReport {
    let score = test
        .mcqs
        .iter()
        .enumerate()
        .filter(|(index, mcq)| match (mcq.correct_answer, answers.get(index)) {
            (Some(correct), Some(answer)) => answer.as_str() == correct.as_str(),
            _ => false,
        })
        .count();
    let total = test.mcqs.len();

    let percentage = if total == 0 {
        0.0
    } else {
        100.0 * score.to_f64().unwrap_or_default() / total.to_f64().unwrap_or(1.0)
    };
    ScoreReport {
        score: score.to_u32().unwrap_or(u32::MAX),
        total_questions: total.to_u32().unwrap_or(u32::MAX),
        percentage,
        is_pass: percentage >= test.passing_percentage,
    }
}

#[derive(Debug, Clone)]
pub struct ScoringEngine {
    conn: DatabaseConnection,
}

impl ScoringEngine {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Grades a submission. Passing the certification test marks the user as passed,
    /// which is never undone.
    pub async fn submit(&self, session: &UserSession, test_id: Uuid, answers: &Answers) -> Result<ScoreReport, CoreError> {
        let test = test_set::Query::find_with_mcqs(&self.conn, test_id)
            .await?
            .map(TestSet::from_db_model)
            .ok_or(CoreError::NotFound(Entity::TestSet))?;

        let report = grade(&test, answers);
        tracing::debug!(
            email = %session.email,
            %test_id,
            score = report.score,
            total = report.total_questions,
            is_pass = report.is_pass,
            "graded submission"
        );

        if test.is_certification && report.is_pass {
            let updated = user::Mutation::mark_passed(&self.conn, &session.email).await?;
            if updated == 0 {
                return Err(CoreError::NotFound(Entity::User));
            }
            tracing::info!(email = %session.email, %test_id, "user passed certification");
        }
        Ok(report)
    }
}

use devfusion_core::session::UserSession;
use devfusion_migration::run_migrations;
use devfusion_db::{topic, user};
use devfusion_model::test::{McqInput, McqOptions, TestSetInput};
use sea_orm::{Database, DatabaseConnection};

pub async fn setup_db() -> DatabaseConnection {
    let conn = Database::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    run_migrations(&conn).await.expect("failed to run migrations");
    conn
}

/// Inserts topics at positions `1..=count`
#[allow(dead_code)]
pub async fn seed_topics(conn: &DatabaseConnection, count: i32) {
    for position in 1..=count {
        topic::Mutation::insert(conn, format!("Topic {position}"), format!("Body {position}"), position)
            .await
            .expect("failed to insert topic");
    }
}

/// Registers a user and moves their progress to `progress`
#[allow(dead_code)]
pub async fn create_session(conn: &DatabaseConnection, email: &str, progress: i32) -> UserSession {
    user::Mutation::get_or_create_user(conn, email)
        .await
        .expect("failed to create user");
    if progress > 0 {
        user::Mutation::advance_progress(conn, email, progress)
            .await
            .expect("failed to set progress");
    }
    UserSession::new(email, false)
}

#[allow(dead_code)]
pub async fn progress_of(conn: &DatabaseConnection, email: &str) -> i32 {
    user::Query::find_user_by_email(conn, email)
        .await
        .expect("failed to load user")
        .expect("user missing")
        .progress
}

/// A test payload whose `n`th question has correct answer `correct[n]`
#[allow(dead_code)]
pub fn test_input(title: &str, correct: &[&str], passing_percentage: f64, is_certification: bool) -> TestSetInput {
    TestSetInput {
        title: title.to_owned(),
        is_certification,
        passing_percentage,
        mcqs: correct
            .iter()
            .enumerate()
            .map(|(index, answer)| McqInput {
                question: format!("Question {index}"),
                options: McqOptions {
                    a: "first".to_owned(),
                    b: "second".to_owned(),
                    c: "third".to_owned(),
                    d: "fourth".to_owned(),
                },
                correct_answer: (*answer).to_owned(),
            })
            .collect(),
    }
}

use devfusion_db::user;
use devfusion_entity::user::Model as UserModel;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use test_log::test;

#[test(tokio::test)]
async fn test_find_user_by_email() -> Result<(), DbErr> {
    let model = UserModel {
        id: 7,
        email: "ada@example.com".to_owned(),
        progress: 3,
        is_pass: true,
        feedback_message: None,
        feedback_rating: Some(4),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[model.clone()]])
        .into_connection();

    assert_eq!(user::Query::find_user_by_email(&db, "ada@example.com").await?, Some(model));
    Ok(())
}

#[test(tokio::test)]
async fn test_cap_progress_reports_rows() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 3,
        }])
        .into_connection();

    assert_eq!(user::Mutation::cap_progress(&db, 4).await?, 3);
    Ok(())
}

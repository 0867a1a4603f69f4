mod common;

use crate::common::setup_db;
use devfusion_db::test_set;
use devfusion_db::util::UniqueViolation;
use devfusion_entity::mcq::{self, AnswerLabel};
use sea_orm::ActiveValue::Set;
use test_log::test;
use uuid::Uuid;

fn question(test_set_id: Uuid, position: i32, correct_answer: AnswerLabel) -> mcq::ActiveModel {
    mcq::ActiveModel {
        id: Set(Uuid::new_v4()),
        test_set_id: Set(test_set_id),
        position: Set(position),
        question: Set(format!("Question {position}")),
        option_a: Set("a".to_owned()),
        option_b: Set("b".to_owned()),
        option_c: Set("c".to_owned()),
        option_d: Set("d".to_owned()),
        correct_answer: Set(correct_answer),
    }
}

#[test(tokio::test)]
async fn test_questions_keep_their_order() {
    let db = &setup_db().await;
    let created = test_set::Mutation::insert(db, "Basics".to_owned(), 50.0).await.unwrap();
    assert!(!created.is_certification);

    test_set::Mutation::replace_mcqs(
        db,
        created.id,
        vec![
            question(created.id, 2, AnswerLabel::C),
            question(created.id, 0, AnswerLabel::A),
            question(created.id, 1, AnswerLabel::B),
        ],
    )
    .await
    .unwrap();

    let (loaded, mcqs) = test_set::Query::find_with_mcqs(db, created.id).await.unwrap().unwrap();
    assert_eq!(loaded, created);
    let answers: Vec<_> = mcqs.iter().map(|mcq| mcq.correct_answer).collect();
    assert_eq!(answers, [AnswerLabel::A, AnswerLabel::B, AnswerLabel::C]);

    test_set::Mutation::replace_mcqs(db, created.id, vec![question(created.id, 0, AnswerLabel::D)])
        .await
        .unwrap();
    let mcqs = test_set::Query::find_mcqs(db, created.id).await.unwrap();
    assert_eq!(mcqs.len(), 1);
    assert_eq!(mcqs[0].correct_answer, AnswerLabel::D);

    let all = test_set::Query::list_with_mcqs(db).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].1.len(), 1);
}

#[test(tokio::test)]
async fn test_second_certification_is_rejected_by_the_index() {
    let db = &setup_db().await;
    let first = test_set::Mutation::insert(db, "First".to_owned(), 80.0).await.unwrap();
    let second = test_set::Mutation::insert(db, "Second".to_owned(), 80.0).await.unwrap();

    assert_eq!(test_set::Mutation::set_certification(db, first.id, true).await.unwrap(), 1);
    let error = test_set::Mutation::set_certification(db, second.id, true)
        .await
        .unwrap_err();
    assert!(error.unique_violation().is_some(), "unexpected error {error:?}");

    assert_eq!(
        test_set::Mutation::unset_certification_except(db, second.id).await.unwrap(),
        1
    );
    assert_eq!(test_set::Mutation::set_certification(db, second.id, true).await.unwrap(), 1);

    let holders = test_set::Query::find_certification(db).await.unwrap();
    assert_eq!(holders.len(), 1);
    assert_eq!(holders[0].id, second.id);
}

#[test(tokio::test)]
async fn test_unset_certification_keeps_target() {
    let db = &setup_db().await;
    let only = test_set::Mutation::insert(db, "Only".to_owned(), 80.0).await.unwrap();
    test_set::Mutation::set_certification(db, only.id, true).await.unwrap();

    assert_eq!(test_set::Mutation::unset_certification_except(db, only.id).await.unwrap(), 0);
    assert_eq!(test_set::Query::find_certification(db).await.unwrap().len(), 1);
}

#[test(tokio::test)]
async fn test_delete_removes_questions() {
    let db = &setup_db().await;
    let created = test_set::Mutation::insert(db, "Basics".to_owned(), 50.0).await.unwrap();
    test_set::Mutation::replace_mcqs(db, created.id, vec![question(created.id, 0, AnswerLabel::A)])
        .await
        .unwrap();

    assert_eq!(test_set::Mutation::delete(db, created.id).await.unwrap(), 1);
    assert!(test_set::Query::find_by_id(db, created.id).await.unwrap().is_none());
    assert!(test_set::Query::find_mcqs(db, created.id).await.unwrap().is_empty());
    assert_eq!(test_set::Mutation::delete(db, created.id).await.unwrap(), 0);
}

#[test(tokio::test)]
async fn test_update_fields() {
    let db = &setup_db().await;
    let created = test_set::Mutation::insert(db, "Basics".to_owned(), 50.0).await.unwrap();

    assert_eq!(
        test_set::Mutation::update_fields(db, created.id, "Advanced".to_owned(), 90.0)
            .await
            .unwrap(),
        1
    );
    let loaded = test_set::Query::find_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(loaded.title, "Advanced");
    assert_eq!(loaded.passing_percentage, 90.0);

    assert_eq!(
        test_set::Mutation::update_fields(db, Uuid::new_v4(), "x".to_owned(), 1.0)
            .await
            .unwrap(),
        0
    );
}

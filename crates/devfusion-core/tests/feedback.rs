mod common;

use crate::common::{create_session, setup_db};
use devfusion_core::error::{CoreError, Entity, ValidationError};
use devfusion_core::feedback::FeedbackStore;
use devfusion_model::feedback::{Feedback, RatingCount};
use test_log::test;

fn feedback(message: &str, rating: u8) -> Feedback {
    Feedback {
        message: Some(message.to_owned()),
        rating,
    }
}

#[test(tokio::test)]
async fn test_rating_bounds() {
    let db = setup_db().await;
    let session = create_session(&db, "ada@example.com", 0).await;
    let store = FeedbackStore::new(db);

    for rating in [0, 6] {
        let error = store
            .upsert_feedback(&session.email, feedback("nope", rating))
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            CoreError::Validation(ValidationError::RatingOutOfRange(r)) if r == rating
        ));
    }
    for rating in [1, 5] {
        store
            .upsert_feedback(&session.email, feedback("fine", rating))
            .await
            .unwrap();
    }
}

#[test(tokio::test)]
async fn test_feedback_is_overwritten() {
    let db = setup_db().await;
    let session = create_session(&db, "ada@example.com", 0).await;
    let store = FeedbackStore::new(db);

    let error = store.fetch_feedback(&session.email).await.unwrap_err();
    assert!(matches!(error, CoreError::NotFound(Entity::Feedback)));

    store.upsert_feedback(&session.email, feedback("meh", 2)).await.unwrap();
    store.upsert_feedback(&session.email, feedback("great", 5)).await.unwrap();
    assert_eq!(store.fetch_feedback(&session.email).await.unwrap(), feedback("great", 5));

    let summary = store.rating_summary().await.unwrap();
    assert_eq!(summary.total_reviews, 1);
    assert_eq!(summary.average_rating, 5.0);

    let blank = store
        .upsert_feedback(&session.email, feedback("   ", 4))
        .await
        .unwrap();
    assert_eq!(blank.message, None);
}

#[test(tokio::test)]
async fn test_unknown_user() {
    let db = setup_db().await;
    let store = FeedbackStore::new(db);
    let error = store
        .upsert_feedback("nobody@example.com", feedback("hi", 3))
        .await
        .unwrap_err();
    assert!(matches!(error, CoreError::NotFound(Entity::User)));
}

#[test(tokio::test)]
async fn test_rating_summary() {
    let db = setup_db().await;
    let store = FeedbackStore::new(db.clone());

    let empty = store.rating_summary().await.unwrap();
    assert_eq!(empty.total_reviews, 0);
    assert_eq!(empty.average_rating, 0.0);
    assert!(empty.per_rating.is_empty());

    for (index, rating) in [5, 4, 4, 1].into_iter().enumerate() {
        let session = create_session(&db, &format!("user{index}@example.com"), 0).await;
        store.upsert_feedback(&session.email, feedback("ok", rating)).await.unwrap();
    }
    create_session(&db, "silent@example.com", 0).await;

    let summary = store.rating_summary().await.unwrap();
    assert_eq!(summary.total_reviews, 4);
    assert_eq!(summary.average_rating, 3.5);
    assert_eq!(
        summary.per_rating,
        [
            RatingCount { rating: 1, count: 1 },
            RatingCount { rating: 4, count: 2 },
            RatingCount { rating: 5, count: 1 },
        ]
    );
}

#[test(tokio::test)]
async fn test_recent_reviews() {
    let db = setup_db().await;
    let store = FeedbackStore::new(db.clone());
    for index in 0..7_u8 {
        let session = create_session(&db, &format!("user{index}@example.com"), 0).await;
        let rating = if index % 2 == 0 { 5 } else { 3 };
        store
            .upsert_feedback(&session.email, feedback(&format!("review {index}"), rating))
            .await
            .unwrap();
    }

    let recent = store.recent_reviews(None, None).await.unwrap();
    let messages: Vec<_> = recent.iter().filter_map(|review| review.message.as_deref()).collect();
    assert_eq!(messages, ["review 6", "review 5", "review 4", "review 3", "review 2"]);

    let threes = store.recent_reviews(None, Some(3)).await.unwrap();
    assert_eq!(threes.len(), 3);
    assert!(threes.iter().all(|review| review.rating == 3));

    assert_eq!(store.recent_reviews(Some(2), Some(5)).await.unwrap().len(), 2);

    let error = store.recent_reviews(None, Some(9)).await.unwrap_err();
    assert!(matches!(error, CoreError::Validation(ValidationError::RatingOutOfRange(9))));
}

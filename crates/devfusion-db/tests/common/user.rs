use devfusion_entity::user::{ActiveModel, Entity as User, Model as UserModel};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{DatabaseConnection, EntityTrait};

#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection, email: &str, progress: i32) -> UserModel {
    let user = ActiveModel {
        id: NotSet,
        email: Set(email.to_owned()),
        progress: Set(progress),
        is_pass: Set(false),
        feedback_message: Set(None),
        feedback_rating: Set(None),
    };
    User::insert(user).exec_with_returning(db).await.unwrap()
}

use crate::convert::TryFromDbModel;
use crate::error::Error;
use devfusion_entity::user::Model as UserModel;
use devfusion_model::feedback::{Feedback, RatingCount};
use num_traits::ToPrimitive;

/// A user only has feedback once a rating was stored
impl TryFromDbModel<UserModel> for Option<Feedback> {
    type Error = Error;

    fn try_from_db_model(model: UserModel) -> Result<Self, Self::Error> {
        model
            .feedback_rating
            .map(|rating| {
                Ok(Feedback {
                    message: model.feedback_message,
                    rating: rating.to_u8().ok_or(Error::NumConversion)?,
                })
            })
            .transpose()
    }
}

impl TryFromDbModel<(i32, i64)> for RatingCount {
    type Error = Error;

    fn try_from_db_model((rating, count): (i32, i64)) -> Result<Self, Self::Error> {
        Ok(Self {
            rating: rating.to_u8().ok_or(Error::NumConversion)?,
            count: count.to_u64().ok_or(Error::NumConversion)?,
        })
    }
}

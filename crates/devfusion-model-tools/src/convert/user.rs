use crate::convert::TryFromDbModel;
use crate::error::Error;
use devfusion_entity::user::Model as UserModel;
use devfusion_model::feedback::Feedback;
use devfusion_model::user::User;
use num_traits::ToPrimitive;

impl TryFromDbModel<UserModel> for User {
    type Error = Error;

    fn try_from_db_model(model: UserModel) -> Result<Self, Self::Error> {
        let feedback = Option::<Feedback>::try_from_db_model(model.clone())?;
        Ok(Self {
            email: model.email,
            progress: model.progress.to_u32().ok_or(Error::NumConversion)?,
            is_pass: model.is_pass,
            feedback,
        })
    }
}

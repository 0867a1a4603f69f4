use crate::convert::TryFromDbModel;
use crate::error::Error;
use devfusion_entity::topic::Model as TopicModel;
use devfusion_model::topic::{Topic, TopicSummary};
use num_traits::ToPrimitive;
use uuid::Uuid;

impl TryFromDbModel<TopicModel> for Topic {
    type Error = Error;

    fn try_from_db_model(model: TopicModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            body: model.body,
            order: model.position.to_u32().ok_or(Error::NumConversion)?,
        })
    }
}

impl TryFromDbModel<(Uuid, String, i32)> for TopicSummary {
    type Error = Error;

    fn try_from_db_model((id, title, position): (Uuid, String, i32)) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            title,
            order: position.to_u32().ok_or(Error::NumConversion)?,
        })
    }
}

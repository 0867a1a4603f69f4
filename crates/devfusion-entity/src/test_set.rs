use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_set")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub is_certification: bool,
    pub passing_percentage: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mcq::Entity")]
    Mcq,
}

impl Related<super::mcq::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mcq.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

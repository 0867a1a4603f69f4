use sea_orm::entity::prelude::*;

#[derive(Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Clone, Copy)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum AnswerLabel {
    #[sea_orm(string_value = "a")]
    A,
    #[sea_orm(string_value = "b")]
    B,
    #[sea_orm(string_value = "c")]
    C,
    #[sea_orm(string_value = "d")]
    D,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mcq")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub test_set_id: Uuid,
    /// Zero based index inside the test set
    pub position: i32,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: AnswerLabel,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_set::Entity",
        from = "Column::TestSetId",
        to = "super::test_set::Column::Id",
        on_delete = "Cascade"
    )]
    TestSet,
}

impl Related<super::test_set::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestSet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

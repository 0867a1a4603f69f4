use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Progress,
    IsPass,
    FeedbackMessage,
    FeedbackRating,
}

#[derive(DeriveIden)]
enum Topic {
    Table,
    Id,
    Title,
    Body,
    Position,
}

#[derive(DeriveIden)]
enum TestSet {
    Table,
    Id,
    Title,
    IsCertification,
    PassingPercentage,
}

#[derive(DeriveIden)]
enum Mcq {
    Table,
    Id,
    TestSetId,
    Position,
    Question,
    OptionA,
    OptionB,
    OptionC,
    OptionD,
    CorrectAnswer,
}

// Partial indexes are not expressible with the index builder
const SINGLE_CERTIFICATION_INDEX: &str =
    "CREATE UNIQUE INDEX test_set_single_certification ON test_set (is_certification) WHERE is_certification";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string_len(320).not_null().unique_key())
                    .col(
                        ColumnDef::new(Users::Progress)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Users::Progress).between(0, 10)),
                    )
                    .col(ColumnDef::new(Users::IsPass).boolean().not_null().default(false))
                    .col(ColumnDef::new(Users::FeedbackMessage).text().null())
                    .col(
                        ColumnDef::new(Users::FeedbackRating)
                            .integer()
                            .null()
                            .check(Expr::col(Users::FeedbackRating).between(1, 5)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Topic::Table)
                    .col(ColumnDef::new(Topic::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Topic::Title).text().not_null())
                    .col(ColumnDef::new(Topic::Body).text().not_null())
                    .col(
                        ColumnDef::new(Topic::Position)
                            .integer()
                            .not_null()
                            .unique_key()
                            .check(Expr::col(Topic::Position).gt(0)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TestSet::Table)
                    .col(ColumnDef::new(TestSet::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TestSet::Title).text().not_null())
                    .col(
                        ColumnDef::new(TestSet::IsCertification)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TestSet::PassingPercentage)
                            .double()
                            .not_null()
                            .check(Expr::col(TestSet::PassingPercentage).between(0, 100)),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .get_connection()
            .execute_unprepared(SINGLE_CERTIFICATION_INDEX)
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Mcq::Table)
                    .col(ColumnDef::new(Mcq::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Mcq::TestSetId).uuid().not_null())
                    .col(ColumnDef::new(Mcq::Position).integer().not_null())
                    .col(ColumnDef::new(Mcq::Question).text().not_null())
                    .col(ColumnDef::new(Mcq::OptionA).text().not_null())
                    .col(ColumnDef::new(Mcq::OptionB).text().not_null())
                    .col(ColumnDef::new(Mcq::OptionC).text().not_null())
                    .col(ColumnDef::new(Mcq::OptionD).text().not_null())
                    .col(
                        ColumnDef::new(Mcq::CorrectAnswer)
                            .string_len(1)
                            .not_null()
                            .check(Expr::col(Mcq::CorrectAnswer).is_in(["a", "b", "c", "d"])),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mcq_test_set")
                            .from(Mcq::Table, Mcq::TestSetId)
                            .to(TestSet::Table, TestSet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("mcq_test_set_position")
                    .table(Mcq::Table)
                    .col(Mcq::TestSetId)
                    .col(Mcq::Position)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Mcq::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(TestSet::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Topic::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

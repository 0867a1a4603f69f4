use crate::convert::{FromDbModel, FromModel, IntoDbModel};
use devfusion_entity::mcq::{self, AnswerLabel as AnswerLabelModel, Model as McqModel};
use devfusion_entity::test_set::Model as TestSetModel;
use devfusion_model::test::{AnswerLabel, Mcq, McqOptions, TestSet};
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

impl FromDbModel<AnswerLabelModel> for AnswerLabel {
    fn from_db_model(model: AnswerLabelModel) -> Self {
        match model {
            AnswerLabelModel::A => Self::A,
            AnswerLabelModel::B => Self::B,
            AnswerLabelModel::C => Self::C,
            AnswerLabelModel::D => Self::D,
        }
    }
}

impl FromModel<AnswerLabel> for AnswerLabelModel {
    fn from_model(model: AnswerLabel) -> Self {
        match model {
            AnswerLabel::A => Self::A,
            AnswerLabel::B => Self::B,
            AnswerLabel::C => Self::C,
            AnswerLabel::D => Self::D,
        }
    }
}

impl FromDbModel<McqModel> for Mcq {
    fn from_db_model(model: McqModel) -> Self {
        Self {
            question: model.question,
            options: McqOptions {
                a: model.option_a,
                b: model.option_b,
                c: model.option_c,
                d: model.option_d,
            },
            correct_answer: Some(AnswerLabel::from_db_model(model.correct_answer)),
        }
    }
}

impl FromDbModel<(TestSetModel, Vec<McqModel>)> for TestSet {
    fn from_db_model((test_set, mcqs): (TestSetModel, Vec<McqModel>)) -> Self {
        Self {
            id: test_set.id,
            title: test_set.title,
            is_certification: test_set.is_certification,
            passing_percentage: test_set.passing_percentage,
            mcqs: mcqs.into_iter().map(Mcq::from_db_model).collect(),
        }
    }
}

/// A question row of test set `.0` at zero based position `.1`
impl FromModel<(Uuid, i32, Mcq, AnswerLabel)> for mcq::ActiveModel {
    fn from_model((test_set_id, position, mcq, correct_answer): (Uuid, i32, Mcq, AnswerLabel)) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            test_set_id: Set(test_set_id),
            position: Set(position),
            question: Set(mcq.question),
            option_a: Set(mcq.options.a),
            option_b: Set(mcq.options.b),
            option_c: Set(mcq.options.c),
            option_d: Set(mcq.options.d),
            correct_answer: Set(correct_answer.into_db_model()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_survive_conversion() {
        let test_set_id = Uuid::new_v4();
        let row = McqModel {
            id: Uuid::new_v4(),
            test_set_id,
            position: 0,
            question: "2 + 2".to_owned(),
            option_a: "3".to_owned(),
            option_b: "4".to_owned(),
            option_c: "5".to_owned(),
            option_d: "22".to_owned(),
            correct_answer: AnswerLabelModel::B,
        };
        let test_set = TestSet::from_db_model((
            TestSetModel {
                id: test_set_id,
                title: "Math".to_owned(),
                is_certification: true,
                passing_percentage: 75.0,
            },
            vec![row],
        ));
        assert_eq!(test_set.mcqs[0].correct_answer, Some(AnswerLabel::B));
        assert_eq!(test_set.mcqs[0].options.d, "22");

        let question = test_set.mcqs[0].clone();
        let active: mcq::ActiveModel = (test_set_id, 3_i32, question, AnswerLabel::B).into_db_model();
        assert_eq!(active.position, Set(3));
        assert_eq!(active.correct_answer, Set(AnswerLabelModel::B));
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Choice value the front end sends for a blank question.
pub const UNANSWERED: i8 = -1;

/// One respondent's submitted questionnaire, as the front end sends it.
///
/// `answers` holds the 0-based choice per question in form order. Both
/// `null` and `-1` mean the question was left blank. Any other value is
/// passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSheet {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Access code the respondent used to open the test.
    pub test_code: String,
    /// "adult", "youth" or "child". Empty when the caller should supply a
    /// default.
    #[serde(default)]
    pub test_type: String,
    pub answers: Vec<Option<i8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<jiff::Timestamp>,
}

impl AnswerSheet {
    pub fn new(test_code: &str, test_type: &str, answers: Vec<Option<i8>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            test_code: test_code.to_string(),
            test_type: test_type.to_string(),
            answers,
            submitted_at: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let sheet: AnswerSheet = serde_json::from_str(json)?;
        sheet.validate()?;
        Ok(sheet)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.test_code.trim().is_empty() {
            return Err(CoreError::MissingField("test_code".to_string()));
        }
        Ok(())
    }

    /// Answers with the blank sentinel folded into `None`.
    pub fn raw_answers(&self) -> Vec<Option<i8>> {
        self.answers
            .iter()
            .map(|answer| answer.filter(|&choice| choice != UNANSWERED))
            .collect()
    }

    pub fn answered_count(&self) -> usize {
        self.raw_answers().iter().filter(|a| a.is_some()).count()
    }

    /// Parse a comma-separated answer list such as `0,3,,2,-1`. Empty
    /// fields and `-` are blank.
    pub fn parse_answer_list(list: &str) -> Result<Vec<Option<i8>>, CoreError> {
        list.split(',')
            .map(str::trim)
            .map(|field| match field {
                "" | "-" => Ok(None),
                value => value
                    .parse::<i8>()
                    .map(Some)
                    .map_err(|_| CoreError::InvalidAnswer(value.to_string())),
            })
            .collect()
    }
}

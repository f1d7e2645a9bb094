use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer_sheet::AnswerSheet;
use crate::error::CoreError;

/// A scored answer sheet, ready to hand to storage. `scores` carries the
/// engine's full breakdown as JSON so this crate stays independent of the
/// scoring types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredAssessment {
    pub id: Uuid,
    pub sheet_id: Uuid,
    pub test_code: String,
    pub test_type: String,
    pub answered: usize,
    /// True when the validity scale marked the result unreliable.
    pub validity_flagged: bool,
    pub scores: serde_json::Value,
    pub scored_at: jiff::Timestamp,
}

impl ScoredAssessment {
    pub fn new<S: Serialize>(
        sheet: &AnswerSheet,
        test_type: &str,
        validity_flagged: bool,
        scores: &S,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            id: Uuid::new_v4(),
            sheet_id: sheet.id,
            test_code: sheet.test_code.clone(),
            test_type: test_type.to_string(),
            answered: sheet.answered_count(),
            validity_flagged,
            scores: serde_json::to_value(scores)?,
            scored_at: jiff::Timestamp::now(),
        })
    }

    pub fn to_json_line(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

//! Answer sheet → score breakdown.
//!
//! Scoring runs in three passes: each item is transformed (validity, then
//! reverse), items are summed into codes, and codes are summed into
//! factors. Irregular sheets are never an error. Items past the end of the
//! sheet are left out of their code, and unanswered items score 0 while
//! still counting toward the code's `count`.

use std::collections::BTreeMap;

use crate::error::InstrumentError;
use crate::inventory;
use crate::scoring::{Code, CodeScore, Factor, FactorScore, ScoreResult, TestType};

/// Validity scores above this mean the sheet should not be interpreted.
pub const VALIDITY_THRESHOLD: i32 = 2;

pub const LOW_RELIABILITY_WARNING: &str =
    "타당도 점수가 기준을 초과하여 검사 결과의 신뢰도가 낮습니다. 결과 해석에 주의가 필요합니다.";

/// Processed score for a single item.
///
/// `choice` is the 0-based option the respondent picked; `None` means
/// unanswered (callers map the `-1` sentinel to `None`). Choices outside
/// `0..=3` are scored literally. A validity item
/// scores 0 when the 1-based score equals its designated value and 1
/// otherwise, so 0 means consistent. Validity takes priority over reverse
/// scoring.
pub fn process_score(choice: Option<i8>, question_number: usize, test_type: TestType) -> i32 {
    let Some(choice) = choice else {
        return 0;
    };
    let score = i32::from(choice) + 1;
    let inventory = inventory(test_type);

    if let Some(designated) = inventory.validity_value(question_number) {
        return if score == i32::from(designated) { 0 } else { 1 };
    }
    if inventory.is_reverse(question_number) {
        5 - score
    } else {
        score
    }
}

/// Score one answer sheet.
pub fn calculate_scores(answers: &[Option<i8>], test_type: TestType) -> ScoreResult {
    let inventory = inventory(test_type);

    let code_scores: BTreeMap<Code, CodeScore> = inventory
        .codes()
        .iter()
        .map(|entry| (entry.code, score_code(answers, entry.items, test_type)))
        .collect();

    let factor_scores: BTreeMap<Factor, FactorScore> = inventory
        .factor_groups()
        .iter()
        .map(|group| {
            let (raw, count) = group
                .codes
                .iter()
                .filter_map(|code| code_scores.get(code))
                .fold((0, 0), |(raw, count), score| {
                    (raw + score.raw, count + score.count)
                });
            (group.factor, FactorScore::new(raw, count))
        })
        .collect();

    let validity_score = code_scores.get(&Code::VAL1).map_or(0, |score| score.raw);
    let total_score: i32 = factor_scores.values().map(|score| score.raw).sum();
    let factor_raw = |factor: Factor| factor_scores.get(&factor).map_or(0, |score| score.raw);
    let interpretation = interpret(&factor_scores, validity_score);

    ScoreResult {
        total_score,
        validity_score,
        cl_raw: factor_raw(Factor::Cl),
        co_raw: factor_raw(Factor::Co),
        gu_raw: factor_raw(Factor::Gu),
        ob_raw: factor_raw(Factor::Ob),
        sd_raw: factor_raw(Factor::Sd),
        code_scores,
        factor_scores,
        interpretation,
    }
}

/// Like [`calculate_scores`], but takes the test type as a tag string.
/// An unrecognized tag fails before any answer is looked at.
pub fn calculate_scores_for(
    answers: &[Option<i8>],
    test_type: &str,
) -> Result<ScoreResult, InstrumentError> {
    let test_type: TestType = test_type.parse()?;
    Ok(calculate_scores(answers, test_type))
}

fn score_code(answers: &[Option<i8>], items: &[usize], test_type: TestType) -> CodeScore {
    let (raw, count) = items
        .iter()
        .filter(|&&index| index < answers.len())
        .fold((0, 0), |(raw, count), &index| {
            (raw + process_score(answers[index], index + 1, test_type), count + 1)
        });
    CodeScore::new(raw, count)
}

/// Interpretation text: the low-reliability warning when the validity
/// score is over the threshold, otherwise `"<factor>: <raw>점"` for every
/// non-validity factor, comma separated.
pub fn interpret(factor_scores: &BTreeMap<Factor, FactorScore>, validity_score: i32) -> String {
    if validity_score > VALIDITY_THRESHOLD {
        return LOW_RELIABILITY_WARNING.to_string();
    }
    factor_scores
        .iter()
        .filter(|(factor, _)| **factor != Factor::Val)
        .map(|(factor, score)| format!("{}: {}점", factor.display_name(), score.raw))
        .collect::<Vec<_>>()
        .join(", ")
}

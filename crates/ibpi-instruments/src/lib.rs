//! ibpi-instruments
//!
//! IBPI reference tables and the scoring engine. Pure data and pure
//! functions: no I/O, no logging, no state between calls.

pub mod engine;
pub mod error;
pub mod inventories;
pub mod scoring;

use scoring::{AnswerIssue, Code, CodeItems, Factor, FactorGroup, ScoreResult, TestType};

/// Reference tables for one variant of the inventory.
pub trait Inventory: Send + Sync {
    fn test_type(&self) -> TestType;

    /// Unique identifier, identical to the test-type tag ("adult", ...).
    fn id(&self) -> &str {
        self.test_type().as_str()
    }

    /// Human-readable name (e.g., "IBPI 성인용").
    fn name(&self) -> &str;

    fn item_count(&self) -> usize {
        self.test_type().item_count()
    }

    /// 1-based question numbers whose score is inverted.
    fn reverse_items(&self) -> &'static [usize];

    /// 1-based question numbers paired with their consistent-answer score.
    fn validity_items(&self) -> &'static [(usize, u8)];

    /// Every scoring code with its 0-based item indices.
    fn codes(&self) -> &'static [CodeItems];

    fn factor_groups(&self) -> &'static [FactorGroup];

    fn is_reverse(&self, question_number: usize) -> bool {
        self.reverse_items().contains(&question_number)
    }

    fn validity_value(&self, question_number: usize) -> Option<u8> {
        self.validity_items()
            .iter()
            .find(|(q, _)| *q == question_number)
            .map(|(_, value)| *value)
    }

    fn items_for(&self, code: Code) -> Option<&'static [usize]> {
        self.codes()
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.items)
    }

    fn codes_for(&self, factor: Factor) -> &'static [Code] {
        self.factor_groups()
            .iter()
            .find(|group| group.factor == factor)
            .map(|group| group.codes)
            .unwrap_or(&[])
    }

    /// Report anything unusual about an answer sheet.
    ///
    /// Advisory only: [`engine::calculate_scores`] never calls this and
    /// scores irregular sheets with its default-to-zero rules.
    fn check_answers(&self, answers: &[Option<i8>]) -> Vec<AnswerIssue> {
        let mut issues = Vec::new();
        if answers.len() != self.item_count() {
            issues.push(AnswerIssue::LengthMismatch {
                expected: self.item_count(),
                actual: answers.len(),
            });
        }
        for (index, answer) in answers.iter().enumerate() {
            let question_number = index + 1;
            match answer {
                None => issues.push(AnswerIssue::Unanswered { question_number }),
                Some(choice) if !(0..=3).contains(choice) => issues.push(AnswerIssue::OutOfRange {
                    question_number,
                    choice: *choice,
                }),
                Some(_) => {}
            }
        }
        issues
    }

    /// All reference tables as one JSON document, for auditing.
    fn tables_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id(),
            "name": self.name(),
            "item_count": self.item_count(),
            "reverse_items": self.reverse_items(),
            "validity_items": self.validity_items(),
            "codes": self.codes(),
            "factor_groups": self.factor_groups(),
        })
    }

    /// Format a result as readable text, one section per factor.
    fn to_summary_text(&self, result: &ScoreResult) -> String {
        let mut output = format!("## {} ({})\n\n", self.name(), self.id());
        output.push_str(&format!("- 총점: {}\n", result.total_score));
        output.push_str(&format!("- 타당도: {}\n", result.validity_score));
        output.push_str(&format!("- 해석: {}\n\n", result.interpretation));
        for group in self.factor_groups() {
            let Some(factor) = result.factor(group.factor) else {
                continue;
            };
            output.push_str(&format!(
                "### {} ({}): {} (평균 {:.2})\n",
                group.factor.display_name(),
                group.factor,
                factor.raw,
                factor.average,
            ));
            for code in group.codes {
                if let Some(score) = result.code(*code) {
                    output.push_str(&format!(
                        "- {}: {} / {}문항 (평균 {:.2})\n",
                        code, score.raw, score.count, score.average,
                    ));
                }
            }
            output.push('\n');
        }
        output
    }
}

/// Reference tables for a test type. The match is exhaustive, so a new
/// variant cannot ship without tables.
pub fn inventory(test_type: TestType) -> &'static dyn Inventory {
    match test_type {
        TestType::Adult => &inventories::adult::AdultInventory,
        TestType::Youth => &inventories::youth::YouthInventory,
        TestType::Child => &inventories::child::ChildInventory,
    }
}

/// Return all registered inventories.
pub fn all_inventories() -> Vec<&'static dyn Inventory> {
    TestType::ALL.into_iter().map(inventory).collect()
}

/// Look up an inventory by ID.
pub fn get_inventory(id: &str) -> Option<&'static dyn Inventory> {
    all_inventories().into_iter().find(|i| i.id() == id)
}

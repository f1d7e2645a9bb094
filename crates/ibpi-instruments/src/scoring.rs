use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use ts_rs::TS;

use crate::error::InstrumentError;

/// Which variant of the inventory a respondent took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TestType {
    Adult,
    Youth,
    Child,
}

impl TestType {
    pub const ALL: [TestType; 3] = [TestType::Adult, TestType::Youth, TestType::Child];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Adult => "adult",
            TestType::Youth => "youth",
            TestType::Child => "child",
        }
    }

    /// Number of questions on the printed form.
    pub fn item_count(&self) -> usize {
        match self {
            TestType::Adult => 107,
            TestType::Youth => 103,
            TestType::Child => 95,
        }
    }

    pub fn parse(value: &str) -> Result<Self, InstrumentError> {
        value.parse()
    }
}

impl FromStr for TestType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adult" => Ok(TestType::Adult),
            "youth" => Ok(TestType::Youth),
            "child" => Ok(TestType::Child),
            other => Err(InstrumentError::UnsupportedTestType(other.to_string())),
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A personality dimension. `Val` is the validity scale, not a trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Factor {
    Cl,
    Co,
    Gu,
    Ob,
    Sd,
    Val,
}

impl Factor {
    pub const ALL: [Factor; 6] = [
        Factor::Cl,
        Factor::Co,
        Factor::Gu,
        Factor::Ob,
        Factor::Sd,
        Factor::Val,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::Cl => "CL",
            Factor::Co => "CO",
            Factor::Gu => "GU",
            Factor::Ob => "OB",
            Factor::Sd => "SD",
            Factor::Val => "VAL",
        }
    }

    /// Korean label used in interpretation text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Factor::Cl => "친밀성",
            Factor::Co => "협동성",
            Factor::Gu => "포기",
            Factor::Ob => "의무감",
            Factor::Sd => "자기발전",
            Factor::Val => "타당도",
        }
    }
}

impl FromStr for Factor {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Factor::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| InstrumentError::UnknownFactor(s.to_string()))
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scoring code such as `CL1` or `VAL1`: a factor plus a 1-based ordinal.
///
/// Codes order by factor first, so a `BTreeMap<Code, _>` iterates
/// `CL1..CL5, CO1.., GU1.., OB1.., SD1.., VAL1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    pub factor: Factor,
    pub ordinal: u8,
}

impl Code {
    pub const VAL1: Code = Code::new(Factor::Val, 1);

    pub const fn new(factor: Factor, ordinal: u8) -> Self {
        Self { factor, ordinal }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.factor, self.ordinal)
    }
}

impl FromStr for Code {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || InstrumentError::UnknownCode(s.to_string());
        let split = s.find(|c: char| c.is_ascii_digit()).ok_or_else(unknown)?;
        let (prefix, digits) = s.split_at(split);
        let factor: Factor = prefix.parse().map_err(|_| unknown())?;
        let ordinal: u8 = digits.parse().map_err(|_| unknown())?;
        if ordinal == 0 {
            return Err(unknown());
        }
        Ok(Code::new(factor, ordinal))
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The 0-based item indices that make up one code.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CodeItems {
    pub code: Code,
    pub items: &'static [usize],
}

/// The codes that make up one factor.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FactorGroup {
    pub factor: Factor,
    pub codes: &'static [Code],
}

fn average(raw: i32, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        f64::from(raw) / f64::from(count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CodeScore {
    /// Sum of processed item scores.
    pub raw: i32,
    /// Items that fell inside the answer sheet, answered or not.
    pub count: u32,
    pub average: f64,
}

impl CodeScore {
    pub fn new(raw: i32, count: u32) -> Self {
        Self {
            raw,
            count,
            average: average(raw, count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorScore {
    /// Sum of member code raw scores.
    pub raw: i32,
    /// Sum of member code counts.
    pub count: u32,
    pub average: f64,
}

impl FactorScore {
    pub fn new(raw: i32, count: u32) -> Self {
        Self {
            raw,
            count,
            average: average(raw, count),
        }
    }
}

/// Complete score breakdown for one answer sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    /// Sum of every factor's raw score, `VAL` included.
    pub total_score: i32,
    pub validity_score: i32,
    pub cl_raw: i32,
    pub co_raw: i32,
    pub gu_raw: i32,
    pub ob_raw: i32,
    pub sd_raw: i32,
    #[ts(as = "BTreeMap<String, CodeScore>")]
    pub code_scores: BTreeMap<Code, CodeScore>,
    pub factor_scores: BTreeMap<Factor, FactorScore>,
    pub interpretation: String,
}

impl ScoreResult {
    pub fn code(&self, code: Code) -> Option<&CodeScore> {
        self.code_scores.get(&code)
    }

    pub fn factor(&self, factor: Factor) -> Option<&FactorScore> {
        self.factor_scores.get(&factor)
    }
}

/// Advisory finding about an answer sheet. The engine scores the sheet
/// regardless; callers decide whether an issue matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerIssue {
    #[error("expected {expected} answers, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("question {question_number}: choice {choice} is outside 0..=3")]
    OutOfRange { question_number: usize, choice: i8 },

    #[error("question {question_number} is unanswered")]
    Unanswered { question_number: usize },
}

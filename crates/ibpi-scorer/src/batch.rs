use std::io::BufRead;

use rayon::prelude::*;
use thiserror::Error;

use ibpi_core::error::CoreError;
use ibpi_core::models::answer_sheet::AnswerSheet;
use ibpi_core::models::scored::ScoredAssessment;
use ibpi_instruments::engine::{VALIDITY_THRESHOLD, calculate_scores};
use ibpi_instruments::error::InstrumentError;
use ibpi_instruments::inventory;
use ibpi_instruments::scoring::{AnswerIssue, ScoreResult, TestType};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Sheet(#[from] CoreError),

    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error("sheet has no test_type and no default is configured")]
    MissingTestType,

    #[error("rejected in strict mode: {0}")]
    Rejected(AnswerIssue),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub default_test_type: Option<TestType>,
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct ScoredSheet {
    pub test_type: TestType,
    pub result: ScoreResult,
    pub issues: Vec<AnswerIssue>,
    pub record: ScoredAssessment,
}

/// Outcome for one input line. `line` is 1-based.
#[derive(Debug)]
pub struct SheetOutcome {
    pub line: usize,
    pub outcome: Result<ScoredSheet, BatchError>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub scored: usize,
    pub skipped: usize,
    pub flagged: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[SheetOutcome]) -> Self {
        outcomes
            .iter()
            .fold(Self::default(), |mut summary, outcome| {
                match &outcome.outcome {
                    Ok(sheet) => {
                        summary.scored += 1;
                        if sheet.record.validity_flagged {
                            summary.flagged += 1;
                        }
                    }
                    Err(_) => summary.skipped += 1,
                }
                summary
            })
    }
}

/// Read non-blank lines with their 1-based line numbers.
pub fn read_lines(reader: impl BufRead) -> std::io::Result<Vec<(usize, String)>> {
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push((index + 1, line));
        }
    }
    Ok(lines)
}

/// Score one parsed sheet.
pub fn score_sheet(sheet: &AnswerSheet, options: BatchOptions) -> Result<ScoredSheet, BatchError> {
    let test_type = if sheet.test_type.is_empty() {
        options.default_test_type.ok_or(BatchError::MissingTestType)?
    } else {
        TestType::parse(&sheet.test_type)?
    };

    let answers = sheet.raw_answers();
    let issues = inventory(test_type).check_answers(&answers);
    if options.strict
        && let Some(issue) = issues.first()
    {
        return Err(BatchError::Rejected(issue.clone()));
    }

    let result = calculate_scores(&answers, test_type);
    let flagged = result.validity_score > VALIDITY_THRESHOLD;
    let record = ScoredAssessment::new(sheet, test_type.as_str(), flagged, &result)?;

    Ok(ScoredSheet {
        test_type,
        result,
        issues,
        record,
    })
}

/// Parse and score one JSON line.
pub fn score_line(text: &str, options: BatchOptions) -> Result<ScoredSheet, BatchError> {
    let sheet = AnswerSheet::from_json(text)?;
    score_sheet(&sheet, options)
}

/// Score every line in parallel. Outcomes come back in input order.
pub fn score_lines(lines: &[(usize, String)], options: BatchOptions) -> Vec<SheetOutcome> {
    lines
        .par_iter()
        .map(|(line, text)| SheetOutcome {
            line: *line,
            outcome: score_line(text, options),
        })
        .collect()
}

/// [`score_lines`] on a dedicated pool of `jobs` threads.
pub fn score_lines_with_jobs(
    lines: &[(usize, String)],
    options: BatchOptions,
    jobs: Option<usize>,
) -> eyre::Result<Vec<SheetOutcome>> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build()?;
    Ok(pool.install(|| score_lines(lines, options)))
}

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use ibpi_core::models::answer_sheet::AnswerSheet;
use ibpi_instruments::scoring::TestType;
use ibpi_instruments::{Inventory, all_inventories, inventory};

use crate::batch::{self, BatchOptions, BatchSummary, ScoredSheet, SheetOutcome};
use crate::cli::{Cli, Command, ConfigAction, OutputFormat, ScoreArgs, ScoreOneArgs, TablesArgs};
use crate::config::{self, ScorerConfig};

/// Load the config `cli` runs with. `config init` writes a fresh file, so
/// the target path does not have to exist yet.
pub fn load_config_for(cli: &Cli) -> eyre::Result<ScorerConfig> {
    match &cli.command {
        Command::Config {
            action: ConfigAction::Init { .. },
        } => Ok(ScorerConfig::default()),
        _ => config::load_config(cli.config.as_deref()),
    }
}

pub fn run(cli: Cli, config: ScorerConfig) -> eyre::Result<()> {
    match cli.command {
        Command::Score(args) => {
            score(&args, &config)?;
        }
        Command::ScoreOne(args) => score_one(&args, &config, &mut io::stdout().lock())?,
        Command::Tables(args) => tables(&args, &mut io::stdout().lock())?,
        Command::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init { force } => {
                let path = match &cli.config {
                    Some(path) => path.clone(),
                    None => config::default_config_path()?,
                };
                if path.exists() && !force {
                    return Err(eyre::eyre!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    ));
                }
                config::save_config(&ScorerConfig::default(), &path)?;
            }
        },
    }
    Ok(())
}

fn parse_test_type(value: Option<&str>) -> eyre::Result<Option<TestType>> {
    Ok(value.map(TestType::parse).transpose()?)
}

/// Run the `score` command: read, score in parallel, write.
pub fn score(args: &ScoreArgs, config: &ScorerConfig) -> eyre::Result<BatchSummary> {
    let options = BatchOptions {
        default_test_type: parse_test_type(
            args.test_type
                .as_deref()
                .or(config.default_test_type.as_deref()),
        )?,
        strict: args.strict || config.strict,
    };
    let format = args.format.unwrap_or(config.output_format);
    let jobs = args.jobs.or(config.jobs);

    let lines = if args.input == Path::new("-") {
        batch::read_lines(io::stdin().lock())?
    } else {
        let file = File::open(&args.input)
            .map_err(|e| eyre::eyre!("failed to open {}: {e}", args.input.display()))?;
        batch::read_lines(BufReader::new(file))?
    };

    let started = Instant::now();
    tracing::info!(sheets = lines.len(), ?jobs, strict = options.strict, "scoring batch");
    let outcomes = batch::score_lines_with_jobs(&lines, options, jobs)?;

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_outcomes(&outcomes, format, &mut writer)?;
            writer.flush()?;
        }
        None => write_outcomes(&outcomes, format, &mut io::stdout().lock())?,
    }

    let summary = BatchSummary::from_outcomes(&outcomes);
    tracing::info!(
        scored = summary.scored,
        skipped = summary.skipped,
        flagged = summary.flagged,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "batch complete"
    );
    Ok(summary)
}

/// Write scored sheets in input order, logging the ones that failed.
pub fn write_outcomes(
    outcomes: &[SheetOutcome],
    format: OutputFormat,
    writer: &mut impl Write,
) -> eyre::Result<()> {
    for outcome in outcomes {
        match &outcome.outcome {
            Ok(sheet) => {
                if !sheet.issues.is_empty() {
                    tracing::debug!(
                        line = outcome.line,
                        issues = sheet.issues.len(),
                        "scored sheet with answer issues"
                    );
                }
                write_sheet(sheet, format, &mut *writer)?;
            }
            Err(e) => tracing::warn!(line = outcome.line, error = %e, "skipped sheet"),
        }
    }
    Ok(())
}

fn write_sheet(
    sheet: &ScoredSheet,
    format: OutputFormat,
    writer: &mut impl Write,
) -> eyre::Result<()> {
    match format {
        OutputFormat::Json => writeln!(writer, "{}", sheet.record.to_json_line()?)?,
        OutputFormat::Text => {
            writeln!(writer, "# {} ({})", sheet.record.test_code, sheet.record.sheet_id)?;
            write!(writer, "{}", inventory(sheet.test_type).to_summary_text(&sheet.result))?;
        }
    }
    Ok(())
}

/// Run the `score-one` command.
pub fn score_one(
    args: &ScoreOneArgs,
    config: &ScorerConfig,
    writer: &mut impl Write,
) -> eyre::Result<()> {
    let sheet = AnswerSheet::new(
        &args.test_code,
        &args.test_type,
        AnswerSheet::parse_answer_list(&args.answers)?,
    );
    let scored = batch::score_sheet(&sheet, BatchOptions::default())?;
    for issue in &scored.issues {
        tracing::warn!(%issue, "answer issue");
    }
    write_sheet(&scored, args.format.unwrap_or(config.output_format), writer)
}

/// Run the `tables` command.
pub fn tables(args: &TablesArgs, writer: &mut impl Write) -> eyre::Result<()> {
    let selected: Vec<&'static dyn Inventory> = match parse_test_type(args.test_type.as_deref())? {
        Some(test_type) => vec![inventory(test_type)],
        None => all_inventories(),
    };
    let json: Vec<serde_json::Value> = selected.iter().map(|i| i.tables_json()).collect();
    writeln!(writer, "{}", serde_json::to_string_pretty(&json)?)?;
    Ok(())
}

use crate::infra::{load_answer_file, parse_answers};
use chrono::Utc;
use clap::Args;
use funding_readiness::assessment::export::{export_file_name, write_category_csv, write_json};
use funding_readiness::assessment::{
    AnswerGuard, AnswerLevel, Answers, AssessmentReport, AssessmentService,
    AssessmentServiceError, CompletenessPolicy, ExportDocument, QuestionCatalog,
};
use funding_readiness::error::AppError;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
#[group(required = true, multiple = false)]
pub(crate) struct AnswerInput {
    /// Comma-separated QUESTION=LEVEL pairs, e.g. "1=4,2=3,3=2"
    #[arg(long)]
    pub(crate) answers: Option<String>,
    /// JSON file holding {"answers": {...}} or a bare question/level object
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    #[command(flatten)]
    pub(crate) input: AnswerInput,
    /// Score a partially completed checklist; missing answers count as zero
    #[arg(long)]
    pub(crate) allow_partial: bool,
    /// Print the full result as JSON
    #[arg(long, conflicts_with = "csv")]
    pub(crate) json: bool,
    /// Print the category rows as CSV
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) input: AnswerInput,
    /// Score a partially completed checklist; missing answers count as zero
    #[arg(long)]
    pub(crate) allow_partial: bool,
    /// Directory receiving the dated export file
    #[arg(long, default_value = ".")]
    pub(crate) out: PathBuf,
}

fn policy(allow_partial: bool) -> CompletenessPolicy {
    if allow_partial {
        CompletenessPolicy::AllowPartial
    } else {
        CompletenessPolicy::RequireAll
    }
}

fn load_raw_answers(input: &AnswerInput) -> Result<BTreeMap<u32, i64>, AppError> {
    match (&input.answers, &input.file) {
        (Some(raw), _) => parse_answers(raw).map_err(AppError::Input),
        (None, Some(path)) => Ok(load_answer_file(path)?),
        (None, None) => Err(AppError::Input(
            "provide answers with --answers or --file".to_string(),
        )),
    }
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = load_raw_answers(&args.input)?;
    let service = AssessmentService::new(policy(args.allow_partial));
    let report = service.assess(&raw)?;

    let stdout = std::io::stdout();
    if args.json {
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, &report)?;
        writeln!(handle)?;
    } else if args.csv {
        write_category_csv(&report.result, stdout.lock())?;
    } else {
        render_report(&report);
    }

    Ok(())
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();

    println!("Funding readiness checklist");
    for view in catalog.views() {
        println!("\n{}. [{}] {}", view.id, view.category, view.prompt);
        for (index, option) in view.options.iter().enumerate() {
            println!("   {}) {}", index + 1, option);
        }
    }

    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let raw = load_raw_answers(&args.input)?;
    let answers = AnswerGuard::new(policy(args.allow_partial))
        .validate(&raw)
        .map_err(AssessmentServiceError::from)?;
    let report = AssessmentService::default().assess_answers(&answers);

    let generated_at = Utc::now();
    std::fs::create_dir_all(&args.out)?;
    let path = args.out.join(export_file_name(generated_at.date_naive()));

    let document = ExportDocument::new(answers, report.result, generated_at);
    let mut writer = BufWriter::new(File::create(&path)?);
    write_json(&document, &mut writer)?;
    writer.flush()?;

    println!(
        "Exported {} profile ({:.1}% overall) to {}",
        document.results.profile,
        document.results.overall_percent,
        path.display()
    );
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = AssessmentService::new(CompletenessPolicy::RequireAll);

    println!("Funding readiness demo");
    for (title, levels) in demo_sheets() {
        let answers = sheet(levels);
        let report = service.assess_answers(&answers);
        println!("\n== {title} ==");
        println!(
            "Answers: {}",
            levels
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        );
        render_report(&report);
    }

    Ok(())
}

fn demo_sheets() -> [(&'static str, [u8; 10]); 3] {
    [
        ("Every practice in place", [4; 10]),
        ("Just getting started", [1; 10]),
        ("Strong plan, thin finances", [4, 4, 4, 1, 1, 2, 2, 2, 2, 2]),
    ]
}

fn sheet(levels: [u8; 10]) -> Answers {
    (1u8..)
        .zip(levels)
        .filter_map(|(question, level)| AnswerLevel::new(level).map(|level| (question, level)))
        .collect()
}

fn render_report(report: &AssessmentReport) {
    let result = &report.result;
    println!(
        "Profile: {} | overall readiness {:.1}% | {} of 10 answered",
        result.profile, result.overall_percent, report.answered
    );
    for category in &result.categories {
        println!(
            "  - {}: {:.1}% ({})",
            category.category, category.percent, category.band
        );
    }
    println!("  {}", report.guidance.tagline);
    println!("  Next step: {}", report.guidance.next_step);
}

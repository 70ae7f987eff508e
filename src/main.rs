use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rapid_summarizer::logging::{self, LogFormat};
use rapid_summarizer::pipeline::{
    PipelineObserver, StageReport, StageTimings, SummaryOutcome, TracingObserver,
};
use rapid_summarizer::{
    ConfigSpec, DocumentKind, ExportFormat, SummarizeError, Summary,
    SummaryPipeline, SummaryRequest,
};
use tracing::{error, info};

const CONFIG_ENV: &str = "RAPID_SUMMARIZER_CONFIG";

const USAGE: &str = "Usage: rapid-summarizer [--config FILE] [--format text|pdf|docx] \
[--output PATH] [--json] [--text TEXT | FILE]";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
    json: bool,
    text: Option<String>,
    file: Option<PathBuf>,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut args = Args::default();
    while let Some(arg) = argv.next() {
        let mut value = |flag: &str| argv.next().ok_or_else(|| format!("{flag} needs a value"));
        match arg.as_str() {
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--format" => {
                let raw = value("--format")?;
                args.format = Some(raw.parse().map_err(|e: SummarizeError| e.to_string())?);
            }
            "--output" => args.output = Some(PathBuf::from(value("--output")?)),
            "--text" => args.text = Some(value("--text")?),
            "--json" => args.json = true,
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            path => {
                if args.file.is_some() {
                    return Err("only one input file may be given".to_string());
                }
                args.file = Some(PathBuf::from(path));
            }
        }
    }
    if args.text.is_some() && args.file.is_some() {
        return Err("--text and FILE are mutually exclusive".to_string());
    }
    Ok(args)
}

/// Parse the config only. `SummaryPipeline::from_spec` validates it once
/// logging is up.
fn read_config(args: &Args) -> rapid_summarizer::Result<ConfigSpec> {
    let path = args
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => ConfigSpec::from_file(&path),
        None => Ok(ConfigSpec::default()),
    }
}

fn build_request(args: &Args, format: ExportFormat) -> rapid_summarizer::Result<SummaryRequest> {
    if let Some(text) = &args.text {
        return Ok(SummaryRequest::text(text.clone(), format));
    }
    if let Some(path) = &args.file {
        let bytes = std::fs::read(path)?;
        // Unknown extensions still go through the pipeline and come back empty.
        let content_type = DocumentKind::from_path(path)
            .map(|kind| kind.mime_type().to_string())
            .unwrap_or_else(|_| "application/octet-stream".to_string());
        return Ok(SummaryRequest::document(bytes, content_type, format));
    }
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(SummaryRequest::text(text, format))
}

fn print_summary(summary: &Summary, json: bool) -> rapid_summarizer::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    println!("Summary:");
    println!("{}", summary.text);
    println!("Input Length: {} words", summary.input_word_count);
    println!("Summary Length: {} words", summary.summary_word_count);
    Ok(())
}

fn write_export(outcome: &SummaryOutcome, output: Option<&Path>) -> rapid_summarizer::Result<PathBuf> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(outcome.export.file_name()));
    std::fs::write(&path, &outcome.export.bytes)?;
    Ok(path)
}

/// Tracing for every stage plus collected timings.
struct CliObserver {
    tracing: TracingObserver,
    timings: StageTimings,
}

impl PipelineObserver for CliObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.tracing.on_stage_end(stage, report);
        self.timings.on_stage_end(stage, report);
    }

    fn on_summary(&mut self, summary: &Summary) {
        self.tracing.on_summary(summary);
    }
}

fn run(args: &Args, config: &ConfigSpec) -> rapid_summarizer::Result<()> {
    rapid_summarizer::init();

    let format = args.format.unwrap_or(config.export.format);
    let pipeline = SummaryPipeline::from_spec(config)?;
    let request = build_request(args, format)?;

    let mut observer = CliObserver {
        tracing: TracingObserver,
        timings: StageTimings::new(),
    };
    let outcome = pipeline.run(&request, &mut observer)?;
    print_summary(&outcome.summary, args.json)?;

    let path = write_export(&outcome, args.output.as_deref())?;
    info!(
        path = %path.display(),
        mime = outcome.export.mime_type(),
        elapsed_ms = observer.timings.total().as_millis() as u64,
        "summary written"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let config = match read_config(&args) {
        Ok(config) => config,
        Err(err) => {
            logging::setup_logging(LogFormat::default(), "info");
            error!(error = %err, "unreadable configuration");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    logging::setup_logging(config.logging.format, &config.logging.level);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "request failed");
            println!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use quire::{
    JsonReport, LopdfRenderer, Orientation, PaperSize, PipelineError, ProcessorBuilder,
    ReportRequest,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Render a PDF report from a handlebars view and a JSON array of records.
#[derive(Parser, Debug)]
#[command(name = "quire", version, about = "Generate PDF reports from JSON records")]
struct Cli {
    /// Handlebars view rendered for the report.
    #[arg(long)]
    view: PathBuf,
    /// JSON file holding an array of records.
    #[arg(long)]
    data: PathBuf,
    /// Where to write the PDF. Defaults to the view's name with a `.pdf` extension.
    #[arg(long, short)]
    output: Option<PathBuf>,
    #[arg(long, default_value = quire::DEFAULT_TITLE)]
    title: String,
    /// Filter records by field equality, as a query-string pair would.
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    filters: Vec<(String, String)>,
    /// Render inline instead of as a download.
    #[arg(long, default_value_t = false)]
    stream: bool,
    /// Override the maximum number of records.
    #[arg(long)]
    limit: Option<usize>,
    /// JSON config file with report settings.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "letter")]
    paper: PaperSize,
    #[arg(long, default_value_t = false)]
    landscape: bool,
    /// Skip the empty and over-limit checks.
    #[arg(long, default_value_t = false)]
    no_limit_check: bool,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_user_facing() => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    let view_name = view_name(&cli.view);
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.pdf", view_name)));
    let filename = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("{}.pdf", view_name));

    let mut renderer = LopdfRenderer::new();
    renderer.register_view_file(&view_name, &cli.view)?;

    let mut builder = ProcessorBuilder::new().with_renderer(renderer);
    if let Some(config) = &cli.config {
        builder = builder.with_config_file(config)?;
    }
    builder = builder.with_env_overrides()?;
    if let Some(limit) = cli.limit {
        builder = builder.with_limit(limit);
    }
    let processor = builder.build()?;

    let orientation = if cli.landscape {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    };
    let report = JsonReport::from_file(&cli.data, view_name, filename)?
        .with_paper(cli.paper)
        .with_orientation(orientation)
        .with_limit_check(!cli.no_limit_check);

    let mut request = ReportRequest::new();
    for (key, value) in cli.filters {
        request = request.with_query(key, value);
    }
    if cli.stream {
        request = request.with_query(quire::STREAM_PARAM, "1");
    }

    let artifact = processor.process(&report, &request, &cli.title)?;
    fs::write(&output, &artifact.bytes)?;

    println!(
        "Wrote {} ({} bytes, {})",
        output.display(),
        artifact.len(),
        artifact.content_disposition()
    );
    Ok(())
}

fn view_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string())
}

use java_sbom_uploader::adapters::outbound::console::StderrProgressReporter;
use java_sbom_uploader::adapters::outbound::network::DependencyTrackClient;
use java_sbom_uploader::adapters::outbound::process::SystemCommandRunner;
use java_sbom_uploader::application::dto::{PublishRequest, ReportFormat};
use java_sbom_uploader::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use java_sbom_uploader::application::use_cases::PublishSbomUseCase;
use java_sbom_uploader::cli::Args;
use java_sbom_uploader::config::PipelineSettings;
use java_sbom_uploader::shared::error::ExitCode;
use java_sbom_uploader::shared::security::validate_working_directory;
use java_sbom_uploader::shared::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    // Exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

/// Logs go to stderr; stdout carries only the result
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    // Validate project directory
    let requested_dir = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let working_dir = validate_working_directory(&requested_dir)?;

    let settings = PipelineSettings::load(&args, &working_dir)?;
    debug!(
        working_dir = %settings.working_dir.display(),
        tracker = settings.endpoint.base_url(),
        project = %settings.identity,
        policy = %settings.resolution_policy,
        "resolved settings"
    );

    // Create adapters (Dependency Injection)
    let link_base_url = settings.endpoint.frontend_url().to_string();
    let tracker_client =
        DependencyTrackClient::new(settings.endpoint, settings.api_key, settings.timeout)?;
    let use_case = PublishSbomUseCase::new(
        SystemCommandRunner::new(),
        tracker_client,
        StderrProgressReporter::new(),
    );

    let request = PublishRequest::builder()
        .working_dir(settings.working_dir)
        .identity(settings.identity)
        .link_base_url(link_base_url)
        .generator(settings.generator)
        .resolution_policy(settings.resolution_policy)
        .repository(settings.repository)
        .build()?;

    // Execute use case
    let response = use_case.execute(request)?;

    // The link line always goes to stdout
    let link = FormatterFactory::create(ReportFormat::Text).format(&response)?;
    PresenterFactory::create(PresenterType::Stdout).present(&link)?;

    if let Some(report_path) = settings.report {
        let report = FormatterFactory::create(settings.report_format).format(&response)?;
        PresenterFactory::create(PresenterType::File(report_path)).present(&report)?;
    }

    Ok(())
}

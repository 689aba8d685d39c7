mod cli;
mod config;

use cli::{Args, Command};
use config::{discover_config, load_config_from_path, ConfigFile, Settings, CONFIG_FILENAME};
use pc_build_sim::adapters::inbound::InteractiveShell;
use pc_build_sim::adapters::outbound::catalog::EmbeddedCatalog;
use pc_build_sim::adapters::outbound::console::StderrProgressReporter;
use pc_build_sim::adapters::outbound::filesystem::FileSystemCatalogReader;
use pc_build_sim::application::dto::{BrowseRequest, BuildRequest, SelectionSpec};
use pc_build_sim::application::factories::{FormatterFactory, PresenterFactory};
use pc_build_sim::application::read_models::ReadModelBuilder;
use pc_build_sim::application::use_cases::{BrowseCatalogUseCase, PlanBuildUseCase};
use pc_build_sim::build_planning::domain::{Component, Slot};
use pc_build_sim::ports::outbound::{CatalogReader, ProgressReporter};
use pc_build_sim::shared::error::ExitCode;
use pc_build_sim::shared::Result;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Invalid arguments exit with code 2 inside clap
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(args.format, args.catalog.clone(), config);

    match args.command {
        Command::Browse { category, query } => run_browse(
            &settings,
            category.unwrap_or(settings.default_category),
            query.unwrap_or_default(),
            args.output,
        ),
        Command::Build { selections } => run_build(&settings, selections, args.output),
        Command::Shell => run_shell(&settings, args.output.as_deref()),
    }
}

/// An explicit `--config` must exist; otherwise look in the current directory
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let config = discover_config(Path::new("."))?;
            if config.is_some() {
                eprintln!("📋 Auto-discovered config file: {}", CONFIG_FILENAME);
            }
            Ok(config)
        }
    }
}

fn catalog_reader(settings: &Settings) -> Box<dyn CatalogReader> {
    match &settings.catalog {
        Some(path) => Box::new(FileSystemCatalogReader::new(path.clone())),
        None => Box::new(EmbeddedCatalog::new()),
    }
}

fn run_browse(settings: &Settings, slot: Slot, query: String, output: Option<PathBuf>) -> Result<()> {
    let progress_reporter = StderrProgressReporter::new();
    let use_case = BrowseCatalogUseCase::new(catalog_reader(settings), progress_reporter);
    let response = use_case.execute(BrowseRequest::new(slot, query))?;

    let matches: Vec<&Component> = response.matches.iter().collect();
    let listing = ReadModelBuilder::listing(&response.category, &response.query, &matches);

    progress_reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format, settings.usd_rate);
    let rendered = formatter.format_listing(&listing)?;

    PresenterFactory::for_output(output).present(&rendered)
}

fn run_build(
    settings: &Settings,
    selections: Vec<SelectionSpec>,
    output: Option<PathBuf>,
) -> Result<()> {
    let progress_reporter = StderrProgressReporter::new();
    let use_case = PlanBuildUseCase::new(catalog_reader(settings), progress_reporter);
    let response = use_case.execute(BuildRequest::new(selections))?;

    let summary =
        ReadModelBuilder::build_summary(&response.catalog, &response.build, &response.metadata);

    progress_reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format, settings.usd_rate);
    let rendered = formatter.format_build(&summary)?;

    PresenterFactory::for_output(output).present(&rendered)
}

fn run_shell(settings: &Settings, output: Option<&Path>) -> Result<()> {
    if output.is_some() {
        anyhow::bail!(
            "The shell command writes to the terminal and does not support --output.\n\n\
             💡 Hint: Use the 'summary' command inside the shell, or run 'build -o <FILE>'."
        );
    }

    let progress_reporter = StderrProgressReporter::new();
    let reader = catalog_reader(settings);
    progress_reporter.report(&format!(
        "📖 Loading component catalog from: {}",
        reader.source_description()
    ));
    let catalog = reader.read_catalog()?;

    let formatter = FormatterFactory::create(settings.format, settings.usd_rate);
    let stdin = io::stdin();
    let stdout = io::stdout();
    InteractiveShell::new(catalog, formatter, stdin.lock(), stdout.lock())
        .with_default_category(settings.default_category)
        .run()
}

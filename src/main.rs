use sbom_merge::adapters::outbound::console::StderrProgressReporter;
use sbom_merge::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use sbom_merge::application::dto::{FilterRequest, MergeRequest};
use sbom_merge::application::use_cases::{FilterSbomUseCase, MergeSbomsUseCase};
use sbom_merge::cli::{Args, Command, FilterArgs, MergeArgs};
use sbom_merge::config::{
    self, ConfigFile, FilterSettings, MergeSettings, FRAGMENT_SUFFIX, JS_LICENSE_REPORT_PREFIX,
    JS_SBOM_FRAGMENT_PREFIX,
};
use sbom_merge::ports::outbound::OutputPresenter;
use sbom_merge::shared::error::ExitCode;
use sbom_merge::shared::Result;
use std::path::Path;
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
    let args = Args::parse_args();

    // Explicit --config must exist; auto-discovery is silent when absent
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };

    match args.command {
        Command::Filter(filter_args) => run_filter(filter_args, config.as_ref()),
        Command::Merge(merge_args) => run_merge(merge_args, config.as_ref()),
    }
}

fn run_filter(args: FilterArgs, config: Option<&ConfigFile>) -> Result<()> {
    let settings = FilterSettings::resolve(&args, config.and_then(|c| c.filter.as_ref()));

    let use_case = FilterSbomUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    let request = FilterRequest::new(
        settings.manifest.clone(),
        settings.licenses.clone(),
        settings.sbom.clone(),
    );
    let response = use_case.execute(request)?;

    let presenter = FileSystemWriter::new(settings.output);
    presenter.present(&response.document.to_json()?)?;

    println!("Python: {} packages", response.retained);
    Ok(())
}

fn run_merge(args: MergeArgs, config: Option<&ConfigFile>) -> Result<()> {
    let settings = MergeSettings::resolve(&args, config.and_then(|c| c.merge.as_ref()));

    let reader = FileSystemReader::new();
    let license_report_paths = reader.discover(
        &settings.js_license_dir,
        JS_LICENSE_REPORT_PREFIX,
        FRAGMENT_SUFFIX,
    );
    let fragment_paths = reader.discover(
        &settings.js_sbom_dir,
        JS_SBOM_FRAGMENT_PREFIX,
        FRAGMENT_SUFFIX,
    );

    let use_case = MergeSbomsUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    let request = MergeRequest::new(
        settings.python_sbom.clone(),
        license_report_paths,
        fragment_paths,
    );
    let response = use_case.execute(request)?;

    let presenter = FileSystemWriter::new(settings.output);
    presenter.present(&response.bom.to_json()?)?;

    println!();
    println!("{}", response.statistics);
    Ok(())
}

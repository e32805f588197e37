//! openapi-scaffold CLI entrypoint
//! Parses command-line arguments and dispatches to the generation use case.
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use openapi_scaffold::application::{
    DEFAULT_CONTROLLER_DIR, DEFAULT_DTO_DIR, DEFAULT_INPUT_PATH, GenerateServerRequest,
    GenerateServerUseCase,
};
use openapi_scaffold::generation::{CollisionPolicy, GenerationOrchestrator};
use openapi_scaffold::infrastructure::{
    FileOpenApiLoader, FileSystemOutputService, TeraTemplateRenderer,
};
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "openapi-scaffold")]
#[command(author, version, about = "Generate ASP.NET Core controllers and DTOs from an OpenAPI document", long_about = None)]
struct Cli {
    /// Path to the OpenAPI document (JSON, or YAML by extension)
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input_path: PathBuf,
    /// Output directory for generated controllers
    #[arg(default_value = DEFAULT_CONTROLLER_DIR)]
    controller_dir: PathBuf,
    /// Output directory for generated DTOs
    #[arg(default_value = DEFAULT_DTO_DIR)]
    dto_dir: PathBuf,
    /// What to do when two paths map to the same controller: merge or reject
    #[arg(long, default_value_t = CollisionPolicy::Merge)]
    on_collision: CollisionPolicy,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn print_usage() {
    println!("Usage: openapi-scaffold <INPUT_PATH> <CONTROLLER_OUT_DIR> <DTO_OUT_DIR>");
    println!("  <INPUT_PATH>          OpenAPI document path (default: {DEFAULT_INPUT_PATH})");
    println!(
        "  <CONTROLLER_OUT_DIR>  Controller output directory (default: {DEFAULT_CONTROLLER_DIR})"
    );
    println!("  <DTO_OUT_DIR>         DTO output directory (default: {DEFAULT_DTO_DIR})");
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays reserved for usage text
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    debug!("Parsed arguments: {:?}", cli);

    let renderer = TeraTemplateRenderer::new().context("Failed to load built-in templates")?;
    let use_case = GenerateServerUseCase::new(
        Arc::new(FileOpenApiLoader::new()),
        Arc::new(GenerationOrchestrator::new(Arc::new(renderer))),
        Arc::new(FileSystemOutputService::new()),
    );

    let request = GenerateServerRequest {
        input_path: cli.input_path,
        controller_dir: cli.controller_dir,
        dto_dir: cli.dto_dir,
        collision_policy: cli.on_collision,
    };

    match use_case.execute(request) {
        Ok(response) => {
            info!(
                "✅ Generated {} controllers in {} and {} DTOs in {} ({} items skipped)",
                response.controllers_written,
                response.controller_dir.display(),
                response.dtos_written,
                response.dto_dir.display(),
                response.diagnostics.len()
            );
            Ok(())
        }
        Err(e) if e.is_input_not_found() => {
            print_usage();
            Ok(())
        }
        Err(e) => Err(e).context("Failed to generate controllers"),
    }
}

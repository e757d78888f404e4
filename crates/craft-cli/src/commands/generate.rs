//! Implementation of `craft model` / `controller` / `service`.
//!
//! Responsibility: translate CLI arguments into one generator call and
//! display the result.  No business logic lives here.

use tracing::{debug, instrument};

use craft_adapters::LocalFilesystem;
use craft_core::{
    application::services::ArtifactGenerator,
    domain::ArtifactKind,
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    commands::resolve_generation,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute a single-artifact generation command.
#[instrument(skip_all, fields(kind = %kind, name = %args.name))]
pub fn execute(
    kind: ArtifactKind,
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (store, opts) = resolve_generation(&args.target, args.resource, &config)?;
    let filesystem = LocalFilesystem::new();

    debug!(
        root = %opts.project_root.display(),
        extension = %opts.extension,
        resource = opts.resource,
        "generation settings resolved"
    );

    let generator = ArtifactGenerator::new(kind, store.as_ref(), &filesystem);
    let result = generator.generate(&args.name, &opts)?;

    if output.format() == OutputFormat::Json {
        output.json(&result)?;
        return Ok(());
    }

    if result.collision_resolved {
        output.warning(&format!(
            "'{}' already exists; generated '{}' instead",
            args.name, result.final_name
        ))?;
    }
    output.success(&format!(
        "{} '{}' created at {}",
        capitalize_kind(kind),
        result.final_name,
        result.path.display()
    ))?;

    if !global.quiet && args.resource {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  wire {} into your routes", result.final_name))?;
    }

    Ok(())
}

fn capitalize_kind(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Model => "Model",
        ArtifactKind::Controller => "Controller",
        ArtifactKind::Service => "Service",
    }
}

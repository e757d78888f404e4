//! Implementation of `craft resource`.

use tracing::{debug, instrument};

use craft_adapters::LocalFilesystem;
use craft_core::application::services::ResourceComposer;

use crate::{
    cli::{OutputFormat, ResourceArgs, global::GlobalArgs},
    commands::resolve_generation,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `craft resource` command: model first, then controller,
/// from one derived name set.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: ResourceArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // The composer forces resource mode itself; the flag here only
    // resolves the template source and collision policy.
    let (store, opts) = resolve_generation(&args.target, true, &config)?;
    let filesystem = LocalFilesystem::new();

    debug!(root = %opts.project_root.display(), "resource settings resolved");

    let composer = ResourceComposer::new(store.as_ref(), &filesystem);
    let result = composer.compose(&args.name, &opts)?;

    if output.format() == OutputFormat::Json {
        output.json(&result)?;
        return Ok(());
    }

    for generated in [&result.model, &result.controller] {
        if generated.collision_resolved {
            output.warning(&format!(
                "a file for '{}' already existed; generated '{}' instead",
                args.name, generated.final_name
            ))?;
        }
        output.success(&format!(
            "{} created at {}",
            generated.final_name,
            generated.path.display()
        ))?;
    }

    if !global.quiet {
        output.print("")?;
        output.print(&format!(
            "Resource '{}' ready (table: {})",
            result.names.capitalized_singular, result.names.table_name
        ))?;
    }

    Ok(())
}

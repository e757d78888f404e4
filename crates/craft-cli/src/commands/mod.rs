//! Command handlers.
//!
//! Each submodule translates parsed CLI arguments into core service calls
//! and renders the results.  Settings shared by every generating command
//! (template source, collision policy, extension) are resolved here.

use craft_core::application::{ports::TemplateStore, services::{CollisionPolicy, GenerateOptions}};
use craft_adapters::{BuiltinTemplateStore, DirectoryTemplateStore};

use crate::{
    cli::TargetArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod generate;
pub mod resource;

/// Resolve the template store and generation options for one invocation.
///
/// Precedence for each setting: CLI flag, then config file, then built-in
/// default.
pub(crate) fn resolve_generation(
    target: &TargetArgs,
    resource: bool,
    config: &AppConfig,
) -> CliResult<(Box<dyn TemplateStore>, GenerateOptions)> {
    let policy = match target.on_conflict {
        Some(flag) => flag.into(),
        None => match config.defaults.on_conflict.as_deref() {
            None => CollisionPolicy::FailFast,
            Some("fail") => CollisionPolicy::FailFast,
            Some("rename") => CollisionPolicy::AutoRename,
            Some(other) => {
                return Err(CliError::ConfigError {
                    message: format!(
                        "unknown on_conflict value '{other}' (expected 'fail' or 'rename')"
                    ),
                    source: None,
                });
            }
        },
    };

    let extension = target
        .ext
        .clone()
        .or_else(|| config.defaults.extension.clone())
        .unwrap_or_else(|| "js".to_string());

    let templates_dir = target
        .templates
        .clone()
        .or_else(|| config.defaults.templates_dir.clone());

    let store: Box<dyn TemplateStore> = match templates_dir {
        Some(dir) => Box::new(DirectoryTemplateStore::new(dir)),
        None => Box::new(BuiltinTemplateStore::new()),
    };

    let opts = GenerateOptions::new(target.root.clone())
        .resource(resource)
        .collision(policy)
        .extension(extension);

    Ok((store, opts))
}

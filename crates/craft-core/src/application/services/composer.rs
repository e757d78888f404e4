//! Resource composer: a model plus its controller from one name.

use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateStore},
        services::generator::{ArtifactGenerator, GenerateOptions, validate_base_name},
    },
    domain::{ArtifactKind, GenerationResult, NameSet, ResourceResult},
    error::CoreError,
};

/// Error from a resource composition, carrying whatever was already
/// written. Members generated before the failure stay on disk; there is
/// no rollback.
#[derive(Debug, Error)]
#[error("failed to generate {failed_kind} for resource '{}'", .names.singular)]
pub struct ResourceError {
    pub names: NameSet,
    /// Present when the model was written before a later member failed.
    pub model: Option<GenerationResult>,
    pub failed_kind: ArtifactKind,
    #[source]
    pub source: CoreError,
}

/// Generates a complete resource: the model first, then the controller,
/// both from a single name derivation.
///
/// Members run in resource mode so the controller's template can refer to
/// the model by its final name, Copy suffix included.
pub struct ResourceComposer<'a> {
    store: &'a dyn TemplateStore,
    filesystem: &'a dyn Filesystem,
}

impl<'a> ResourceComposer<'a> {
    pub fn new(store: &'a dyn TemplateStore, filesystem: &'a dyn Filesystem) -> Self {
        Self { store, filesystem }
    }

    #[instrument(skip_all, fields(name = base_name))]
    pub fn compose(
        &self,
        base_name: &str,
        opts: &GenerateOptions,
    ) -> Result<ResourceResult, Box<ResourceError>> {
        let opts = opts.clone().resource(true);

        if let Err(source) = validate_base_name(base_name) {
            return Err(Box::new(ResourceError {
                names: NameSet::derive(base_name),
                model: None,
                failed_kind: ArtifactKind::Model,
                source,
            }));
        }
        let names = NameSet::derive(base_name);

        let model_gen = ArtifactGenerator::new(ArtifactKind::Model, self.store, self.filesystem);
        let model = model_gen
            .generate_with_names(base_name, &names, None, &opts)
            .map_err(|source| {
                Box::new(ResourceError {
                    names: names.clone(),
                    model: None,
                    failed_kind: ArtifactKind::Model,
                    source,
                })
            })?;

        let controller_gen =
            ArtifactGenerator::new(ArtifactKind::Controller, self.store, self.filesystem);
        let controller = controller_gen
            .generate_with_names(base_name, &names, Some(&model.final_name), &opts)
            .map_err(|source| {
                Box::new(ResourceError {
                    names: names.clone(),
                    model: Some(model.clone()),
                    failed_kind: ArtifactKind::Controller,
                    source,
                })
            })?;

        info!(resource = %names.singular, "resource generated");
        Ok(ResourceResult {
            names,
            model,
            controller,
        })
    }
}

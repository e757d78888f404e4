//! Single-artifact generator - produces one model, controller, or service.
//!
//! Orchestration for one artifact:
//! 1. Validate the base name
//! 2. Derive names and the canonical (suffix-carrying) artifact name
//! 3. Load and render the template
//! 4. Apply the collision policy
//! 5. Write exactly one file
//!
//! Side effects: exactly one write per successful call; zero writes on any
//! failure path (the template is loaded and rendered before anything
//! touches the filesystem).

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
        services::{
            collision::{CollisionResolver, rewrite_self_references},
            writer::ArtifactWriter,
        },
    },
    domain::{ArtifactKind, ArtifactSpec, DomainError, GenerationResult, NameSet, Placeholders},
    error::CoreResult,
};

/// What to do when the target artifact already exists.
///
/// Both policies are observed behavior at different entry points of the
/// original tool; the engine keeps them caller-selectable rather than
/// unifying them silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Raise `ArtifactExists`; no file written.
    #[default]
    FailFast,
    /// Rename via the CollisionResolver and proceed.
    AutoRename,
}

/// Options for one generation call.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Explicit project root; output paths are composed under it. The
    /// engine never consults the process working directory.
    pub project_root: PathBuf,
    /// Selects the CRUD-shaped template over the minimal one.
    pub resource: bool,
    pub collision: CollisionPolicy,
    /// File extension of the generated artifact, without the dot.
    pub extension: String,
}

impl GenerateOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            resource: false,
            collision: CollisionPolicy::default(),
            extension: "js".into(),
        }
    }

    pub fn resource(mut self, resource: bool) -> Self {
        self.resource = resource;
        self
    }

    pub fn collision(mut self, policy: CollisionPolicy) -> Self {
        self.collision = policy;
        self
    }

    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }
}

/// Generator for one artifact kind.
///
/// Ports are injected by reference so a composer can drive several
/// generators over the same store and filesystem.
pub struct ArtifactGenerator<'a> {
    kind: ArtifactKind,
    store: &'a dyn TemplateStore,
    filesystem: &'a dyn Filesystem,
}

impl<'a> ArtifactGenerator<'a> {
    pub fn new(
        kind: ArtifactKind,
        store: &'a dyn TemplateStore,
        filesystem: &'a dyn Filesystem,
    ) -> Self {
        Self {
            kind,
            store,
            filesystem,
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Generate one artifact from a base name.
    #[instrument(skip_all, fields(kind = %self.kind, name = base_name))]
    pub fn generate(&self, base_name: &str, opts: &GenerateOptions) -> CoreResult<GenerationResult> {
        validate_base_name(base_name)?;
        let names = NameSet::derive(base_name);
        self.generate_with_names(base_name, &names, None, opts)
    }

    /// Generate with an already-derived [`NameSet`].
    ///
    /// Used by the resource composer so every member artifact shares one
    /// name derivation. `model_name` is the model's *final* name (it may
    /// carry a `Copy` suffix); when absent the capitalized singular is
    /// used.
    pub fn generate_with_names(
        &self,
        base_name: &str,
        names: &NameSet,
        model_name: Option<&str>,
        opts: &GenerateOptions,
    ) -> CoreResult<GenerationResult> {
        let canonical = match self.kind.suffix() {
            Some(suffix) => crate::domain::naming::ensure_suffix(&names.capitalized_singular, suffix),
            None => names.capitalized_singular.clone(),
        };

        let spec = ArtifactSpec {
            kind: self.kind,
            base_name: base_name.to_string(),
            target_directory: opts.project_root.clone(),
            template_name: self.kind.template_name(opts.resource),
            placeholders: Placeholders::for_artifact(&canonical, names).with(
                "MODEL_NAME",
                model_name.unwrap_or(&names.capitalized_singular),
            ),
        };

        // Load before any write so a missing template leaves the
        // filesystem untouched.
        let template = self.store.load(&spec.template_name)?;
        let mut rendered = spec.placeholders.render(&template);

        let writer = ArtifactWriter::new(self.filesystem);
        let mut path = ArtifactWriter::resolve_target_path(
            &spec.target_directory,
            self.kind.subdirectory(),
            &canonical,
            &opts.extension,
        );
        let mut final_name = canonical.clone();
        let mut collision_resolved = false;

        if writer.exists(&path) {
            match opts.collision {
                CollisionPolicy::FailFast => {
                    return Err(ApplicationError::ArtifactExists {
                        name: canonical,
                        path,
                    }
                    .into());
                }
                CollisionPolicy::AutoRename => {
                    let resolver = CollisionResolver::new(self.filesystem);
                    let resolved = resolver.resolve(&canonical, &path, &opts.extension);
                    rendered = rewrite_self_references(&rendered, &canonical, &resolved.name);
                    final_name = resolved.name;
                    path = resolved.path;
                    collision_resolved = true;
                }
            }
        }

        writer.write(&path, &rendered)?;
        info!(
            kind = %self.kind,
            name = %final_name,
            path = %path.display(),
            renamed = collision_resolved,
            "artifact generated"
        );

        Ok(GenerationResult {
            path,
            final_name,
            kind: self.kind,
            collision_resolved,
        })
    }
}

/// Reject empty or blank names before any work happens.
pub(crate) fn validate_base_name(base_name: &str) -> CoreResult<()> {
    if base_name.trim().is_empty() {
        return Err(DomainError::InvalidName {
            name: base_name.to_string(),
            reason: "name cannot be empty".into(),
        }
        .into());
    }
    Ok(())
}

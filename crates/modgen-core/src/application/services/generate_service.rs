//! The generation use case: one request in, one ordered set of files out.
//!
//! The pipeline is strict and linear:
//! naming derivation, configuration resolution, target-path resolution,
//! file planning, per-descriptor override resolution, emission, post-emit
//! hooks. Planning is pure (no writes), so a dry run is just the plan.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::application::error::ApplicationError;
use crate::application::ports::{
    Filesystem, PortError, ProcessRunner, TemplateRenderer, TemplateStore,
};
use crate::domain::{
    ConfigResolver, DomainError, FileDescriptor, GeneratorConfig, NamingSet, RelativePath,
    RenderContext, ServiceKind, build_plan, find_override, resolve_target_folder,
};
use crate::error::ModgenResult;

/// One generation request, as assembled by the front end.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Sub-generator id (`cp`, `rt`, `service`, `factory`).
    pub generator: String,
    /// Raw name argument; all naming conventions derive from it.
    pub name: String,
    /// Explicit target folder argument, if any.
    pub target_folder: Option<String>,
    /// Human-readable project name, for templates.
    pub app_name: String,
    /// The script module name templates register artifacts against.
    pub script_app_name: String,
    /// Persisted project configuration (`.modgen.json`), already parsed.
    /// `Value::Null` when the file is absent.
    pub persisted: Value,
    /// Per-invocation override of `createService`.
    pub create_service: Option<ServiceKind>,
    /// Per-invocation suppression of view + style planning.
    pub no_template: bool,
    pub flags: GenerateFlags,
}

/// Behavioral switches for one invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateFlags {
    /// Ignore the persisted configuration entirely.
    pub use_defaults: bool,
    /// Open the emitted files in the configured editor afterwards.
    pub open_in_editor: bool,
    /// Suppress the same-named parent folder for generators that create one.
    pub no_parent_folder: bool,
    /// Skip the asset-injection hook after emission.
    pub skip_inject: bool,
}

/// One descriptor with its fully resolved on-disk target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub descriptor: FileDescriptor,
    pub path: PathBuf,
}

/// Everything decided before any write happens.
#[derive(Debug, Clone)]
pub struct GeneratePlan {
    pub config: GeneratorConfig,
    pub warnings: Vec<DomainError>,
    pub naming: NamingSet,
    /// Target folder relative to the modules directory.
    pub target_folder: RelativePath,
    /// Emission directory relative to the project root.
    pub output_dir: RelativePath,
    pub files: Vec<PlannedFile>,
    pub template_url: Option<RelativePath>,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Files written, in emission order.
    pub created_files: Vec<PathBuf>,
    /// Configuration keys that were malformed and reverted to defaults.
    pub warnings: Vec<DomainError>,
}

/// Orchestrates the generation pipeline over the output ports.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    runner: Box<dyn ProcessRunner>,
}

impl GenerateService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        runner: Box<dyn ProcessRunner>,
    ) -> Self {
        Self {
            filesystem,
            store,
            renderer,
            runner,
        }
    }

    /// Resolve everything a run would do, without writing.
    #[instrument(skip(self, request), fields(generator = %request.generator, name = %request.name))]
    pub fn plan(&self, request: &GenerateRequest) -> ModgenResult<GeneratePlan> {
        let naming = NamingSet::derive(&request.name)?;

        let persisted = if request.flags.use_defaults {
            &Value::Null
        } else {
            &request.persisted
        };
        let resolved = ConfigResolver::resolve(persisted);
        let mut config = resolved.config;
        let warnings = resolved.warnings;

        if let Some(kind) = request.create_service {
            config.create_service = Some(kind);
        }
        if request.no_template {
            config.create_template = false;
        }

        // A configured template root that points at nothing is fatal before
        // any plan is built.
        if let Some(root) = &config.template_root
            && !self.filesystem.exists(root)
        {
            return Err(ApplicationError::TemplateRootNotFound { path: root.clone() }.into());
        }

        let sub = config.sub_generator(&request.generator)?.clone();
        let target_folder = resolve_target_folder(
            request.target_folder.as_deref(),
            &config,
            &sub,
            &naming,
            request.flags.no_parent_folder,
        )?;

        let in_modules = RelativePath::parse(&config.dirs.app_modules)?.join_rel(&target_folder);
        let output_dir = RelativePath::parse(&config.app_path)?.join_rel(&in_modules);

        let file_plan = build_plan(&request.generator, &config, &naming, &in_modules)?;
        let files = file_plan
            .descriptors
            .into_iter()
            .map(|descriptor| PlannedFile {
                path: output_dir.as_path().join(&descriptor.target_file_name),
                descriptor,
            })
            .collect();

        debug!(target_folder = %target_folder, "plan resolved");
        Ok(GeneratePlan {
            config,
            warnings,
            naming,
            target_folder,
            output_dir,
            files,
            template_url: file_plan.template_url,
        })
    }

    /// Run the full pipeline: plan, emit, post-emit hooks.
    ///
    /// Emission is fail-fast without rollback: the first descriptor that
    /// cannot be rendered or written aborts the run, and files already
    /// emitted stay on disk.
    #[instrument(skip(self, request), fields(generator = %request.generator, name = %request.name))]
    pub fn generate(&self, request: &GenerateRequest) -> ModgenResult<GenerateReport> {
        let plan = self.plan(request)?;
        for warning in &plan.warnings {
            warn!(%warning, "configuration recovered to defaults");
        }

        self.filesystem
            .create_dir_all(plan.output_dir.as_path())
            .map_err(|e| ApplicationError::Filesystem {
                path: plan.output_dir.as_path().to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut created_files = Vec::with_capacity(plan.files.len());
        for planned in &plan.files {
            let rendered = self.render_one(request, &plan, &planned.descriptor)?;
            self.filesystem
                .write_file(&planned.path, &rendered)
                .map_err(|e| ApplicationError::Filesystem {
                    path: planned.path.clone(),
                    reason: e.to_string(),
                })?;
            info!(path = %planned.path.display(), "created");
            created_files.push(planned.path.clone());
        }

        self.run_hooks(request, &plan, &created_files);

        Ok(GenerateReport {
            created_files,
            warnings: plan.warnings,
        })
    }

    fn render_one(
        &self,
        request: &GenerateRequest,
        plan: &GeneratePlan,
        descriptor: &FileDescriptor,
    ) -> ModgenResult<String> {
        let owner = descriptor.owner.as_deref().unwrap_or(&request.generator);
        let sub = plan.config.sub_generator(owner)?;
        let context = RenderContext::for_descriptor(
            &request.app_name,
            &request.script_app_name,
            &plan.naming,
            sub,
            plan.template_url.as_ref(),
        );

        let source = match find_override(descriptor, &plan.config, &request.generator) {
            Some(inline) => inline.to_string(),
            None => self
                .store
                .load(&descriptor.template_id, &plan.config.template_root)
                .map_err(|e| match e {
                    PortError::NotFound(_) => ApplicationError::TemplateNotFound {
                        template_id: descriptor.template_id.clone(),
                    },
                    other => ApplicationError::TemplateLoadFailed {
                        template_id: descriptor.template_id.clone(),
                        reason: other.to_string(),
                    },
                })?,
        };

        let rendered = self.renderer.render(&source, &context).map_err(|e| {
            ApplicationError::TemplateRenderFailed {
                template_id: descriptor.template_id.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(rendered)
    }

    /// Post-emit hooks. Failures are warnings, never generation failures.
    fn run_hooks(&self, request: &GenerateRequest, plan: &GeneratePlan, created: &[PathBuf]) {
        if request.flags.open_in_editor && !created.is_empty() {
            let args: Vec<String> = created
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            if let Err(e) = self.spawn_hook(&plan.config.editor_command, &args) {
                warn!(%e, "editor hook failed");
            }
        }

        if !request.flags.skip_inject {
            if let Err(e) = self.spawn_hook("gulp", &["inject".into()]) {
                warn!(%e, "inject hook failed");
            }
        }
    }

    fn spawn_hook(&self, command: &str, args: &[String]) -> Result<(), ApplicationError> {
        self.runner
            .spawn(command, args)
            .map_err(|e| ApplicationError::SpawnFailed {
                command: command.to_string(),
                reason: e.to_string(),
            })
    }
}

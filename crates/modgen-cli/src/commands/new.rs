//! Implementation of the `modgen new` command.
//!
//! Responsibility: translate CLI arguments into a `GenerateRequest`, call
//! the core generate service, and display results. No generation logic
//! lives here.

use tracing::{debug, info, instrument};

use modgen_adapters::{DetachedRunner, LocalFilesystem, LocalTemplateStore, SimpleRenderer};
use modgen_core::prelude::*;

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::ProjectContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `modgen new` command.
///
/// Dispatch sequence:
/// 1. Assemble the request from arguments and project context
/// 2. Early-exit with the resolved plan if `--dry-run`
/// 3. Run the pipeline
/// 4. Print created files and configuration warnings
#[instrument(skip_all, fields(generator = %args.generator, name = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    context: ProjectContext,
    output: OutputManager,
) -> CliResult<()> {
    let request = GenerateRequest {
        generator: args.generator.id().into(),
        name: args.name.clone(),
        target_folder: args.target_folder.clone(),
        app_name: context.app_name.clone(),
        script_app_name: context.script_app_name.clone(),
        persisted: context.persisted.clone(),
        create_service: args.create_service.map(Into::into),
        no_template: args.no_template,
        flags: GenerateFlags {
            use_defaults: args.use_defaults,
            open_in_editor: args.open_in_editor,
            no_parent_folder: args.no_parent_folder,
            skip_inject: args.skip_inject,
        },
    };

    debug!(
        app = %context.app_name,
        module = %context.script_app_name,
        "request assembled"
    );

    let service = GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(LocalTemplateStore::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(DetachedRunner::new()),
    );

    if args.dry_run {
        let plan = service.plan(&request).map_err(CliError::Core)?;
        if output.format() == OutputFormat::Json {
            let summary = serde_json::json!({
                "generator": args.generator.id(),
                "outputDir": plan.output_dir.to_string(),
                "files": plan
                    .files
                    .iter()
                    .map(|f| f.path.display().to_string())
                    .collect::<Vec<_>>(),
                "warnings": plan
                    .warnings
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>(),
            });
            output.print(&summary.to_string())?;
            return Ok(());
        }
        for warning in &plan.warnings {
            output.warning(&warning.to_string())?;
        }
        output.info(&format!(
            "Dry run: would create {} file(s) in {}",
            plan.files.len(),
            plan.output_dir,
        ))?;
        for file in &plan.files {
            output.print(&format!("  {}", file.path.display()))?;
        }
        return Ok(());
    }

    output.header(&format!("Generating {} '{}'...", args.generator, args.name))?;
    info!("generation started");

    let report = service.generate(&request).map_err(CliError::Core)?;

    for warning in &report.warnings {
        output.warning(&warning.to_string())?;
    }
    for file in &report.created_files {
        output.success(&format!("create {}", file.display()))?;
    }

    if !global.quiet && args.skip_inject {
        output.print("")?;
        output.print("Skipped the inject hook; run `gulp inject` to wire up the new files.")?;
    }

    info!(files = report.created_files.len(), "generation completed");
    Ok(())
}

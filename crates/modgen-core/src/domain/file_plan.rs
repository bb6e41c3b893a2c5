//! File planning: which files one invocation produces, in which order.
//!
//! The order is significant and fixed: view + style pair first (when the
//! generator has templates and `createTemplate` is on), then the requested
//! service/factory pair, then the main implementation + test pair. Later
//! stages process descriptors strictly in this order, and the produced-file
//! record preserves it.

use crate::domain::config::GeneratorConfig;
use crate::domain::error::DomainError;
use crate::domain::naming::NamingSet;
use crate::domain::paths::RelativePath;

/// One planned output file.
///
/// `owner` names the sub-generator whose settings (name suffix, overrides)
/// apply when it differs from the invoked one - set for the service/factory
/// pair added to a component run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub template_id: String,
    pub target_file_name: String,
    pub owner: Option<String>,
}

/// The ordered plan plus the context values it determines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    pub descriptors: Vec<FileDescriptor>,
    /// In-modules path of the emitted view file; `None` is the explicit
    /// falsy sentinel templates render against when no view is planned.
    pub template_url: Option<RelativePath>,
}

/// Build the file plan for one invocation.
///
/// Deterministic: identical `(generator_id, cfg, naming, in_modules_path)`
/// inputs always yield an identical descriptor sequence.
pub fn build_plan(
    generator_id: &str,
    cfg: &GeneratorConfig,
    naming: &NamingSet,
    in_modules_path: &RelativePath,
) -> Result<FilePlan, DomainError> {
    let sub = cfg.sub_generator(generator_id)?;
    let ext = &cfg.file_ext;

    let formatted = cfg.path_output_style.pick(naming);
    let standard = format!("{}{}{}", sub.prefix, formatted, sub.suffix);

    let mut descriptors = Vec::new();
    let mut template_url = None;

    if cfg.create_template && sub.has_template {
        template_url = Some(in_modules_path.join(&format!("{standard}{}", ext.view)));

        descriptors.push(FileDescriptor {
            template_id: format!("{generator_id}{}", ext.view),
            target_file_name: format!("{standard}{}", ext.view),
            owner: None,
        });
        descriptors.push(FileDescriptor {
            template_id: format!("{}{generator_id}{}", cfg.style_prefix, ext.style),
            target_file_name: format!("{}{standard}{}", cfg.style_prefix, ext.style),
            owner: None,
        });
    }

    if let Some(kind) = cfg.create_service {
        let svc = cfg.sub_generator(kind.as_str())?;
        let svc_base = format!("{formatted}{}", svc.suffix);

        descriptors.push(FileDescriptor {
            template_id: format!("{kind}{}", ext.script),
            target_file_name: format!("{svc_base}{}", ext.script),
            owner: Some(kind.as_str().into()),
        });
        descriptors.push(FileDescriptor {
            template_id: format!("{kind}{}{}", cfg.test_suffix, ext.script),
            target_file_name: format!("{svc_base}{}{}", cfg.test_suffix, ext.script),
            owner: Some(kind.as_str().into()),
        });
    }

    if !cfg.skip_main_files {
        descriptors.push(FileDescriptor {
            template_id: format!("{generator_id}{}", ext.script),
            target_file_name: format!("{standard}{}", ext.script),
            owner: None,
        });
        descriptors.push(FileDescriptor {
            template_id: format!("{generator_id}{}{}", cfg.test_suffix, ext.script),
            target_file_name: format!("{standard}{}{}", cfg.test_suffix, ext.script),
            owner: None,
        });
    }

    Ok(FilePlan {
        descriptors,
        template_url,
    })
}

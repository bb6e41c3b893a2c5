//! Target folder resolution - pure path algebra, no I/O.

use crate::domain::config::{GeneratorConfig, SubGeneratorConfig};
use crate::domain::error::DomainError;
use crate::domain::naming::NamingSet;
use crate::domain::paths::RelativePath;

/// Compute the output folder relative to the modules directory.
///
/// 1. An explicit path argument is normalized and has any leading `app` /
///    modules-dir segments stripped, so `app/scripts/foo` and `foo` resolve
///    identically (idempotent on already-relative paths).
/// 2. Without an argument the sub-generator's `globalDir` applies, falling
///    back to the current directory.
/// 3. Sub-generators marked `createDirectory` append a same-named child
///    folder, formatted per the configured path output style, unless the
///    no-parent-folder flag is set.
pub fn resolve_target_folder(
    explicit: Option<&str>,
    cfg: &GeneratorConfig,
    sub: &SubGeneratorConfig,
    naming: &NamingSet,
    no_parent_folder: bool,
) -> Result<RelativePath, DomainError> {
    let base = match explicit {
        Some(raw) => clean_up_path(raw, cfg)?,
        None if !sub.global_dir.is_empty() => RelativePath::parse(&sub.global_dir)?,
        None => RelativePath::current(),
    };

    if sub.create_directory && !no_parent_folder {
        Ok(base.join(cfg.path_output_style.pick(naming)))
    } else {
        Ok(base)
    }
}

/// Strip leading application-layout segments from a path argument.
fn clean_up_path(raw: &str, cfg: &GeneratorConfig) -> Result<RelativePath, DomainError> {
    let mut path = RelativePath::parse(raw)?;
    loop {
        let stripped = path
            .strip_leading(&cfg.dirs.app)
            .or_else(|| path.strip_leading(&cfg.dirs.app_modules));
        match stripped {
            Some(next) => path = next,
            None => return Ok(path),
        }
    }
}

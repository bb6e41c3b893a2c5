//! Template stores.

mod builtin;
mod local;
mod memory;

pub use builtin::builtin_template;
pub use local::LocalTemplateStore;
pub use memory::MemoryTemplateStore;

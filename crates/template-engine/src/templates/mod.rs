//! Template catalog and embedded templates

pub mod embedded;
pub mod registry;

pub use registry::{TemplateCatalog, TemplateEntry, TemplateInfo};

//! HTML Rendering Infrastructure
//!
//! Thin wrapper over Tera so handler crates depend on a `render(view, data)`
//! collaborator instead of a concrete template engine.

use tera::Tera;
use thiserror::Error;

pub use tera::Context;

/// Rendering failure. Carries the underlying engine error for the logs.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Template renderer shared across handlers.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Load every template matching the glob, e.g.
    /// `templates/**/*.html`.
    pub fn from_glob(glob: &str) -> Result<Self, RenderError> {
        Ok(Self {
            tera: Tera::new(glob)?,
        })
    }

    /// Build a renderer from in-memory template sources. Used by tests,
    /// which should not depend on the binary crate's template files.
    pub fn from_templates(templates: &[(&str, &str)]) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.to_vec())?;
        Ok(Self { tera })
    }

    /// Render a template by name into an HTML string.
    pub fn render(&self, template: &str, context: &Context) -> Result<String, RenderError> {
        Ok(self.tera.render(template, context)?)
    }
}

//! Phase 4: Rendering
//!
//! This is the fourth phase of the generation pipeline. It turns each
//! signature plan into literal source text for the configured target.
//!
//! The target supplies the fixed templates and the substitution values; the
//! [`TemplateEngine`] performs the substitution. Values are inserted exactly
//! as the target computed them and are never reordered.

use super::{Artifact, EmissionBlock, SignaturePlan};
use crate::error::Result;
use crate::target::Target;
use crate::template::TemplateEngine;

/// Renders plans for one target through a template engine.
#[derive(Debug)]
pub struct Renderer<'a, E: TemplateEngine> {
    engine: &'a E,
    target: Target,
}

impl<'a, E: TemplateEngine> Renderer<'a, E> {
    pub fn new(engine: &'a E, target: Target) -> Self {
        Self { engine, target }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Render the declaration and definition of one plan.
    pub fn render(&self, plan: &SignaturePlan) -> Result<EmissionBlock> {
        let bindings = self.target.plan_bindings(plan);
        let declaration = self
            .target
            .declaration_template()
            .map(|template| self.engine.render(template, &bindings))
            .transpose()?;
        let definition = self
            .engine
            .render(self.target.definition_template(), &bindings)?;

        Ok(EmissionBlock {
            declaration,
            definition,
        })
    }

    /// Render the prologue and epilogue of an artifact spanning
    /// `min_arity..=max_arity`, with no blocks yet.
    pub fn frame(&self, min_arity: usize, max_arity: usize) -> Result<Artifact> {
        let bindings = self.target.frame_bindings(min_arity, max_arity);
        let prologue = self
            .engine
            .render(self.target.prologue_template(), &bindings)?;
        let epilogue = self
            .engine
            .render(self.target.epilogue_template(), &bindings)?;
        Ok(Artifact::new(prologue, epilogue))
    }
}

/// Execute Phase 4: render a sequence of plans in order.
pub fn execute<E: TemplateEngine>(
    renderer: &Renderer<'_, E>,
    plans: &[SignaturePlan],
) -> Result<Vec<EmissionBlock>> {
    plans.iter().map(|plan| renderer.render(plan)).collect()
}

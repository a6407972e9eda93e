//! Orchestrator for a complete generation run
//!
//! This module wires the phases together: for every configured arity it
//! enumerates, plans, checks and renders, then assembles the artifact and
//! hands it to the writer.
//!
//! Arities are processed in parallel with rayon. The per-arity results are
//! collected through an indexed parallel iterator, which keeps them in
//! ascending arity order, so the artifact is identical to a sequential run.
//! Every collision check completes before any file is touched.

use std::path::PathBuf;

use log::{debug, info};
use rayon::prelude::*;

use super::render::Renderer;
use super::{phase1, phase2, phase3, phase4, phase5, Artifact, EmissionBlock, SignaturePlan};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::template::TemplateEngine;

/// Summary of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub min_arity: usize,
    pub max_arity: usize,
    /// Number of overloads in the artifact.
    pub overloads: usize,
    /// Bytes written, or the artifact size on a dry run.
    pub bytes: u64,
    pub destination: PathBuf,
    /// Whether the artifact was written to `destination`.
    pub written: bool,
}

/// Run Phases 1-4 for a single arity.
///
/// The plans of the arity are checked for collisions before anything is
/// rendered.
pub fn process_arity<E: TemplateEngine>(
    arity: usize,
    renderer: &Renderer<'_, E>,
) -> Result<Vec<EmissionBlock>> {
    let plans: Vec<SignaturePlan> = phase1::execute(arity)
        .map(|partition| phase2::execute(&partition))
        .collect();
    phase3::execute(&plans)?;
    debug!("Arity {}: {} overloads planned", arity, plans.len());
    phase4::execute(renderer, &plans)
}

/// Build the artifact for `config` without writing it.
pub fn build_artifact<E: TemplateEngine>(config: &GeneratorConfig, engine: &E) -> Result<Artifact> {
    config.validate()?;
    let renderer = Renderer::new(engine, config.target);

    let per_arity: Vec<Vec<EmissionBlock>> = config
        .arities()
        .into_par_iter()
        .map(|arity| process_arity(arity, &renderer))
        .collect::<Result<_>>()?;

    let mut artifact = renderer.frame(config.min_arity, config.max_arity)?;
    for blocks in per_arity {
        artifact.extend(blocks);
    }
    info!(
        "Planned {} overloads for arities {}..={}",
        artifact.len(),
        config.min_arity,
        config.max_arity
    );
    Ok(artifact)
}

/// Execute the complete generation run.
///
/// Validates the configuration and destination, builds the artifact, and
/// writes it atomically unless `dry_run` is set.
pub fn execute<E: TemplateEngine>(
    config: &GeneratorConfig,
    engine: &E,
    dry_run: bool,
) -> Result<GenerationReport> {
    config.validate()?;
    if !dry_run {
        config.validate_destination()?;
    }

    let artifact = build_artifact(config, engine)?;

    let (bytes, written) = if dry_run {
        (artifact.to_bytes().len() as u64, false)
    } else {
        let bytes = phase5::execute(&artifact, &config.output)?;
        info!("Wrote {} bytes to {}", bytes, config.output.display());
        (bytes, true)
    };

    Ok(GenerationReport {
        min_arity: config.min_arity,
        max_arity: config.max_arity,
        overloads: artifact.len(),
        bytes,
        destination: config.output.clone(),
        written,
    })
}

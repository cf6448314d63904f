//! Read-only lookups over a loaded run log.

use crate::error::{Result, ViewerError};
use crate::run_log::RunLog;
use serde::Serialize;
use std::sync::Arc;

/// Generation whose population size drives `max_index` unless configured.
pub const DEFAULT_REFERENCE_GENERATION: i64 = 1;

/// Initial slider limits for the index page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub max_generation: i64,
    pub max_index: i64,
}

/// A successful chromosome lookup, serialized as the endpoint body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromosomeEntry {
    pub chromosome: Vec<f64>,
    pub fitness: i64,
}

/// Query service over a shared, immutable run log
#[derive(Debug, Clone)]
pub struct QueryService {
    run_log: Arc<RunLog>,
    reference_generation: i64,
}

impl QueryService {
    pub fn new(run_log: Arc<RunLog>) -> Self {
        Self::with_reference_generation(run_log, DEFAULT_REFERENCE_GENERATION)
    }

    pub fn with_reference_generation(run_log: Arc<RunLog>, reference_generation: i64) -> Self {
        Self {
            run_log,
            reference_generation,
        }
    }

    /// `max_generation` is derived from the number of generations, not the
    /// largest key, so non-contiguous logs report fewer generations than the
    /// keys suggest. `max_index` comes from the reference generation only.
    pub fn bounds(&self) -> Result<Bounds> {
        let reference = self
            .run_log
            .get(self.reference_generation)
            .ok_or(ViewerError::MissingReferenceGeneration(
                self.reference_generation,
            ))?;

        Ok(Bounds {
            max_generation: self.run_log.len() as i64 - 1,
            max_index: reference.population.len() as i64 - 1,
        })
    }

    pub fn get_chromosome(&self, generation: i64, index: i64) -> Result<ChromosomeEntry> {
        let not_found = ViewerError::QueryNotFound { generation, index };
        let record = self.run_log.get(generation).ok_or(not_found.clone())?;
        let slot = usize::try_from(index).map_err(|_| not_found.clone())?;
        let chromosome = record.population.get(slot).ok_or(not_found)?;

        Ok(ChromosomeEntry {
            chromosome: chromosome.clone(),
            fitness: record.fitness,
        })
    }

    pub fn generation_count(&self) -> usize {
        self.run_log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.run_log.is_empty()
    }
}

//! In-memory representation of a parsed GA run log.

use std::collections::BTreeMap;

/// Decoded values of one `Chromosome:` line.
pub type Chromosome = Vec<f64>;

/// Fitness and population of one generation
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    pub fitness: i64,
    pub population: Vec<Chromosome>,
}

impl GenerationRecord {
    pub fn new(fitness: i64) -> Self {
        Self {
            fitness,
            population: Vec::new(),
        }
    }
}

/// Generation number -> record. Built once by the parser, read-only after.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunLog {
    generations: BTreeMap<i64, GenerationRecord>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace the record for `generation`.
    pub(crate) fn open_record(&mut self, generation: i64, fitness: i64) {
        self.generations
            .insert(generation, GenerationRecord::new(fitness));
    }

    /// Append to an existing record. Returns false if there is none.
    pub(crate) fn push_chromosome(&mut self, generation: i64, chromosome: Chromosome) -> bool {
        match self.generations.get_mut(&generation) {
            Some(record) => {
                record.population.push(chromosome);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, generation: i64) -> Option<&GenerationRecord> {
        self.generations.get(&generation)
    }

    /// Number of distinct generations
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Generations in ascending numeric order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &GenerationRecord)> {
        self.generations.iter().map(|(g, r)| (*g, r))
    }
}

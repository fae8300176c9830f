use indexmap::IndexMap;
use rand::prelude::*;
use tracing::{debug, warn};

use crate::config::ResampleConfig;
use crate::constants::config::PERCENT_SCALE;
use crate::data::{ClassSchema, Record};
use crate::types::ClassIndex;

#[derive(Debug, Clone)]
/// Small deterministic RNG used for reproducible resampling draws.
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl rand::RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

/// Transient per-class index partition, rebuilt once per resampling pass.
struct ClassPartition {
    /// Record indices per class, keyed in ascending class order.
    by_class: IndexMap<ClassIndex, Vec<usize>>,
    /// Indices of records with a missing (or out-of-schema) class value.
    excluded: Vec<usize>,
}

impl ClassPartition {
    fn build(records: &[Record], schema: ClassSchema) -> Self {
        let mut by_class: IndexMap<ClassIndex, Vec<usize>> = (0..schema.classes)
            .map(|class| (class, Vec::new()))
            .collect();
        let mut excluded = Vec::new();
        for (idx, record) in records.iter().enumerate() {
            match record.class {
                Some(class) if schema.contains(class) => by_class[&class].push(idx),
                _ => excluded.push(idx),
            }
        }
        Self { by_class, excluded }
    }

    fn counts(&self) -> Vec<usize> {
        self.by_class.values().map(Vec::len).collect()
    }

    fn classed(&self) -> usize {
        self.by_class.values().map(Vec::len).sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Telemetry captured for one class during a resampling pass.
pub struct ClassSampleStats {
    /// Class index this row describes.
    pub class: ClassIndex,
    /// Records of this class in the buffered batch.
    pub population: usize,
    /// Interpolated target count before capping.
    pub target: usize,
    /// Records actually emitted for this class.
    pub drawn: usize,
    /// True when the target could not be met from the class population.
    pub capped: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Telemetry for one full resampling pass.
pub struct ResampleStats {
    /// Records in the buffered batch, classed or not.
    pub input_len: usize,
    /// Records with a usable nominal class value.
    pub classed: usize,
    /// Records excluded for a missing (or out-of-schema) class value.
    pub excluded: usize,
    /// Records emitted across all classes.
    pub output_len: usize,
    /// Per-class population/target/drawn breakdown in class order.
    pub per_class: Vec<ClassSampleStats>,
}

/// Target total output size for `classed` records at `size_percent`.
pub fn output_total(classed: usize, size_percent: f64) -> usize {
    (classed as f64 * size_percent / PERCENT_SCALE).round() as usize
}

/// Interpolated per-class target counts for dense per-class populations.
///
/// Index `c` of `counts` holds the population of class `c`. Rounding is
/// applied per class (half away from zero), so the targets may drift from the
/// overall total by a record or two; the drift is deterministic and
/// deliberately not reconciled.
pub fn per_class_targets(counts: &[usize], config: &ResampleConfig) -> Vec<usize> {
    let classed: usize = counts.iter().sum();
    if classed == 0 {
        return vec![0; counts.len()];
    }
    let total = output_total(classed, config.size_percent) as f64;
    let uniform = total / counts.len() as f64;
    counts
        .iter()
        .map(|&population| {
            let empirical = population as f64 / classed as f64 * total;
            let interpolated =
                (1.0 - config.bias_to_uniform) * empirical + config.bias_to_uniform * uniform;
            interpolated.round() as usize
        })
        .collect()
}

/// Resample one fully buffered batch according to `config`.
///
/// The output is a pure function of the record sequence, the schema, and the
/// configuration: classes are drawn in ascending order from one shared RNG
/// stream seeded from `config.seed`, so identical inputs reproduce the output
/// draw for draw. Within a class the draw order is the output order.
pub fn resample(
    records: &[Record],
    schema: ClassSchema,
    config: &ResampleConfig,
) -> (Vec<Record>, ResampleStats) {
    let partition = ClassPartition::build(records, schema);
    let counts = partition.counts();
    let targets = per_class_targets(&counts, config);
    debug!(
        seed = config.seed,
        classes = schema.classes,
        classed = partition.classed(),
        excluded = partition.excluded.len(),
        "computed stratified targets"
    );

    let mut rng = DeterministicRng::new(config.seed);
    let mut output = Vec::new();
    let mut per_class = Vec::with_capacity(schema.classes);
    for (&class, indices) in &partition.by_class {
        let population = indices.len();
        let target = targets[class];
        let before = output.len();
        let capped = if config.with_replacement {
            draw_with_replacement(records, indices, target, &mut rng, &mut output);
            target > 0 && population == 0
        } else {
            let kept = target.min(population);
            draw_without_replacement(
                records,
                indices,
                kept,
                config.invert_selection,
                &mut rng,
                &mut output,
            );
            target > population
        };
        if capped {
            warn!(
                class,
                population, target, "target exceeds class population; capping"
            );
        }
        per_class.push(ClassSampleStats {
            class,
            population,
            target,
            drawn: output.len() - before,
            capped,
        });
    }

    let stats = ResampleStats {
        input_len: records.len(),
        classed: partition.classed(),
        excluded: partition.excluded.len(),
        output_len: output.len(),
        per_class,
    };
    (output, stats)
}

fn draw_with_replacement(
    records: &[Record],
    indices: &[usize],
    target: usize,
    rng: &mut DeterministicRng,
    output: &mut Vec<Record>,
) {
    if indices.is_empty() {
        return;
    }
    for _ in 0..target {
        let pick = indices[rng.random_range(0..indices.len())];
        output.push(records[pick].clone());
    }
}

fn draw_without_replacement(
    records: &[Record],
    indices: &[usize],
    kept: usize,
    invert: bool,
    rng: &mut DeterministicRng,
    output: &mut Vec<Record>,
) {
    let mut shuffled = indices.to_vec();
    shuffled.shuffle(rng);
    let selected = if invert {
        &shuffled[kept..]
    } else {
        &shuffled[..kept]
    };
    output.extend(selected.iter().map(|&idx| records[idx].clone()));
}

use crate::data::{ClassSchema, Record};
use crate::types::ClassIndex;

/// Aggregate balance metrics for per-class record counts.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassBalance {
    pub total: usize,
    pub classes: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub max_share: f64,
    pub min_share: f64,
    pub ratio: f64,
    pub per_class: Vec<ClassShare>,
}

/// Per-class share of a dataset for balance inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassShare {
    pub class: ClassIndex,
    pub count: usize,
    pub share: f64,
}

/// Count classed records per class under `schema`.
/// Records with a missing (or out-of-schema) class value are ignored.
pub fn class_counts(records: &[Record], schema: ClassSchema) -> Vec<usize> {
    let mut counts = vec![0usize; schema.classes];
    for record in records {
        if let Some(class) = record.class
            && schema.contains(class)
        {
            counts[class] += 1;
        }
    }
    counts
}

/// Compute balance metrics from dense per-class counts (index = class).
pub fn class_balance(counts: &[usize]) -> Option<ClassBalance> {
    if counts.is_empty() {
        return None;
    }
    let total: usize = counts.iter().sum();
    let classes = counts.len();
    let min = *counts.iter().min().expect("counts non-empty");
    let max = *counts.iter().max().expect("counts non-empty");
    let mean = total as f64 / classes as f64;
    let max_share = if total == 0 {
        0.0
    } else {
        max as f64 / total as f64
    };
    let min_share = if total == 0 {
        0.0
    } else {
        min as f64 / total as f64
    };
    let ratio = if min == 0 {
        f64::INFINITY
    } else {
        max as f64 / min as f64
    };
    let mut per_class: Vec<ClassShare> = counts
        .iter()
        .enumerate()
        .map(|(class, &count)| ClassShare {
            class,
            count,
            share: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect();
    per_class.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.class.cmp(&b.class)));
    Some(ClassBalance {
        total,
        classes,
        min,
        max,
        mean,
        max_share,
        min_share,
        ratio,
        per_class,
    })
}

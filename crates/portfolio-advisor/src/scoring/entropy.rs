//! Diversity Measure
//!
//! Shannon-entropy based spread score plus the grouping fold every
//! dimension scorer uses to build its allocation totals.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// Ordered group totals, in first-occurrence order of the key
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Breakdown<K> {
    entries: Vec<(K, f64)>,
}

impl<K: PartialEq> Breakdown<K> {
    pub fn entries(&self) -> &[(K, f64)] {
        &self.entries
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, f64)> {
        self.entries.iter()
    }

    /// Total for `key`, 0 when absent
    pub fn get<Q>(&self, key: Q) -> f64
    where
        K: PartialEq<Q>,
    {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(0.0, |(_, v)| *v)
    }

    /// Sum of totals whose key satisfies `predicate`
    pub fn sum_where(&self, predicate: impl Fn(&K) -> bool) -> f64 {
        self.entries
            .iter()
            .filter(|(k, _)| predicate(k))
            .map(|(_, v)| v)
            .sum()
    }

    /// Largest group, first one wins on ties
    pub fn largest(&self) -> Option<&(K, f64)> {
        self.entries
            .iter()
            .fold(None, |best: Option<&(K, f64)>, entry| match best {
                Some(b) if b.1 >= entry.1 => Some(b),
                _ => Some(entry),
            })
    }

    /// Largest group total, 0 when empty
    pub fn max_value(&self) -> f64 {
        self.largest().map_or(0.0, |(_, v)| *v)
    }
}

/// Fold `items` into per-key sums of `value_fn`.
pub fn group_and_sum<'a, T, K, FK, FV>(items: &'a [T], key_fn: FK, value_fn: FV) -> Breakdown<K>
where
    K: Eq + Hash + Clone,
    FK: Fn(&'a T) -> K,
    FV: Fn(&'a T) -> f64,
{
    let (entries, _) = items.iter().fold(
        (Vec::<(K, f64)>::new(), HashMap::<K, usize>::new()),
        |(mut entries, mut index), item| {
            let key = key_fn(item);
            let value = value_fn(item);
            match index.get(&key).copied() {
                Some(slot) => entries[slot].1 += value,
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push((key, value));
                }
            }
            (entries, index)
        },
    );

    Breakdown { entries }
}

/// Normalized diversity score (0-100) over percentage allocations.
///
/// Zero entries are ignored. Fewer than two non-zero entries score 0.
/// A dominant allocation above 50 is penalized quadratically and every
/// allocation below 10 adds a small bonus, capped at +5.
pub fn diversity_score(allocations: &[f64]) -> f64 {
    let non_zero: Vec<f64> = allocations.iter().copied().filter(|a| *a > 0.0).collect();
    if non_zero.len() <= 1 {
        return 0.0;
    }

    let total: f64 = non_zero.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let entropy = -non_zero
        .iter()
        .map(|a| {
            let p = a / total;
            p * p.log2()
        })
        .sum::<f64>();

    let max_entropy = (non_zero.len() as f64).log2();
    let base = if max_entropy > 0.0 {
        entropy / max_entropy * 100.0
    } else {
        0.0
    };

    let max_allocation = non_zero.iter().copied().fold(0.0_f64, f64::max);
    let concentration_penalty = if max_allocation > 50.0 {
        ((max_allocation - 50.0) / 50.0).powi(2) * 20.0
    } else {
        0.0
    };

    let small_count = non_zero.iter().filter(|a| **a < 10.0).count();
    let small_bonus = (small_count as f64 * 0.1).min(1.0) * 5.0;

    (base - concentration_penalty + small_bonus).clamp(0.0, 100.0)
}

//! Concentration Risk Scorer
//!
//! Starts at 100 and subtracts one tier per factor for top-1, top-3 and
//! top-5 weight, adjusts for holding count, and rewards a long tail of
//! small positions.

use std::cmp::Ordering;

use crate::model::Holding;

/// Positions under this weight count toward the small-position bonus
const SMALL_POSITION_PCT: f64 = 2.0;

fn top1_penalty(pct: f64) -> f64 {
    match pct {
        p if p > 70.0 => 50.0,
        p if p > 50.0 => 35.0,
        p if p > 30.0 => 20.0,
        p if p > 20.0 => 10.0,
        p if p > 15.0 => 5.0,
        _ => 0.0,
    }
}

fn top3_penalty(pct: f64) -> f64 {
    match pct {
        p if p > 90.0 => 30.0,
        p if p > 80.0 => 25.0,
        p if p > 70.0 => 20.0,
        p if p > 60.0 => 15.0,
        p if p > 50.0 => 10.0,
        _ => 0.0,
    }
}

fn top5_penalty(pct: f64) -> f64 {
    match pct {
        p if p > 95.0 => 20.0,
        p if p > 85.0 => 15.0,
        p if p > 75.0 => 10.0,
        _ => 0.0,
    }
}

/// Negative for small portfolios, positive for very broad ones
fn count_adjustment(count: usize) -> f64 {
    match count {
        0..=4 => -25.0,
        5..=9 => -15.0,
        10..=14 => -5.0,
        15..=30 => 0.0,
        31..=50 => 5.0,
        _ => 10.0,
    }
}

fn small_position_bonus(holdings: &[Holding]) -> f64 {
    let small = holdings
        .iter()
        .filter(|h| h.percentage < SMALL_POSITION_PCT)
        .count();
    let ratio = small as f64 / holdings.len() as f64;
    if ratio > 0.5 {
        10.0
    } else if ratio > 0.3 {
        5.0
    } else {
        0.0
    }
}

/// Index of the largest element under `cmp`; the first one wins ties
fn first_max_by(holdings: &[Holding], cmp: impl Fn(&Holding, &Holding) -> Ordering) -> Option<usize> {
    holdings
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, &Holding)>, (i, h)| match best {
            Some((_, b)) if cmp(h, b) != Ordering::Greater => best,
            _ => Some((i, h)),
        })
        .map(|(i, _)| i)
}

/// Holdings ordered by descending percentage, stable on ties
fn sorted_by_percentage(holdings: &[Holding]) -> Vec<&Holding> {
    let mut sorted: Vec<&Holding> = holdings.iter().collect();
    sorted.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    sorted
}

/// Concentration risk score (0-100), 0 for an empty portfolio
pub fn concentration_score(holdings: &[Holding]) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }

    let sorted = sorted_by_percentage(holdings);
    let top_n = |n: usize| -> f64 { sorted.iter().take(n).map(|h| h.percentage).sum() };

    let mut score = 100.0;
    score -= top1_penalty(top_n(1));
    score -= top3_penalty(top_n(3));
    score -= top5_penalty(top_n(5));
    score += count_adjustment(holdings.len());

    let top_by_value = first_max_by(holdings, |a, b| a.value.cmp(&b.value));
    let top_by_pct = first_max_by(holdings, |a, b| a.percentage.total_cmp(&b.percentage));
    if let (Some(v), Some(p)) = (top_by_value, top_by_pct) {
        if holdings[v].symbol != holdings[p].symbol {
            score += 5.0;
        }
    }

    score += small_position_bonus(holdings);

    score.clamp(0.0, 100.0)
}

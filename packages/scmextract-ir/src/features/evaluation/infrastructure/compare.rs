//! Graph comparison
//!
//! Every ordered pair `(u, v)`, `u != v`, is classified by membership in the
//! two edge sets: both → TP, predicted only → FP, ground truth only → FN,
//! neither → TN. A reversed edge counts once in SHD.

use std::collections::BTreeSet;

use crate::errors::{Result, ScmError};
use crate::features::causal_graph::CausalGraph;
use crate::features::evaluation::domain::MetricsRecord;

/// TP / (TP + FP), 0 when nothing was predicted
pub fn precision(tp: usize, fp: usize) -> f64 {
    ratio(tp, tp + fp)
}

/// TP / (TP + FN), 0 when ground truth has no edges
pub fn recall(tp: usize, fn_: usize) -> f64 {
    ratio(tp, tp + fn_)
}

/// Harmonic mean of precision and recall, 0 when both are 0
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    }
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom > 0 {
        num as f64 / denom as f64
    } else {
        0.0
    }
}

/// SHD = FP + FN − reversed pairs
///
/// A reversed pair is an unordered `{u, v}` where each graph has exactly one
/// edge between `u` and `v` and the directions disagree.
pub fn structural_hamming_distance(predicted: &CausalGraph, ground_truth: &CausalGraph) -> usize {
    let (_, fp, fn_) = edge_counts(predicted, ground_truth);
    shd(fp, fn_, predicted, ground_truth)
}

fn shd(fp: usize, fn_: usize, predicted: &CausalGraph, ground_truth: &CausalGraph) -> usize {
    fp + fn_ - reversed_pairs(predicted, ground_truth)
}

fn reversed_pairs(predicted: &CausalGraph, ground_truth: &CausalGraph) -> usize {
    predicted
        .edges()
        .filter(|e| {
            !ground_truth.contains_edge(&e.cause, &e.effect)
                && ground_truth.contains_edge(&e.effect, &e.cause)
                && !predicted.contains_edge(&e.effect, &e.cause)
        })
        .count()
}

/// (TP, FP, FN) over the two edge sets
fn edge_counts(predicted: &CausalGraph, ground_truth: &CausalGraph) -> (usize, usize, usize) {
    let pred = predicted.edge_set();
    let truth = ground_truth.edge_set();
    let tp = pred.intersection(truth).count();
    (tp, pred.len() - tp, truth.len() - tp)
}

/// Compare `predicted` against `ground_truth`
///
/// Fails with `NodeSetMismatch` unless both graphs have the same node set.
pub fn evaluate_graph(predicted: &CausalGraph, ground_truth: &CausalGraph) -> Result<MetricsRecord> {
    let pred_nodes = predicted.node_set();
    let truth_nodes = ground_truth.node_set();
    if pred_nodes != truth_nodes {
        return Err(ScmError::NodeSetMismatch {
            only_in_predicted: difference(pred_nodes, truth_nodes),
            only_in_ground_truth: difference(truth_nodes, pred_nodes),
        });
    }

    let n = pred_nodes.len();
    let pairs = n * n.saturating_sub(1);
    let (tp, fp, fn_) = edge_counts(predicted, ground_truth);
    let p = precision(tp, fp);
    let r = recall(tp, fn_);

    Ok(MetricsRecord {
        true_positive: tp,
        false_positive: fp,
        false_negative: fn_,
        true_negative: pairs - tp - fp - fn_,
        precision: p,
        recall: r,
        f1: f1_score(p, r),
        shd: shd(fp, fn_, predicted, ground_truth),
    })
}

fn difference(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Vec<String> {
    a.difference(b).cloned().collect()
}

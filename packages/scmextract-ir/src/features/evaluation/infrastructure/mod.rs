mod compare;

pub use compare::{evaluate_graph, f1_score, precision, recall, structural_hamming_distance};

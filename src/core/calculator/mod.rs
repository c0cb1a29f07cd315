pub mod heatmap;
pub mod stats;

pub mod activity;
pub mod audit;
pub mod backup;
pub mod config;
pub mod export;
pub mod heatmap;
pub mod init;
pub mod log;
pub mod reset;
pub mod stats;

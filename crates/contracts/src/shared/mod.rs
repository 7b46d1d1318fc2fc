pub mod config;
pub mod indicators;
pub mod metadata;
pub mod modal;
pub mod navigation;
pub mod seed;

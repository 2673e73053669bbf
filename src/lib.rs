pub mod aggregator;
pub mod config;
pub mod models;
pub mod registry;
pub mod sources;
pub mod web;

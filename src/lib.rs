//! Reviewcraft - guided review composition engine
//!
//! A multi-step wizard collects a customer's selections (service,
//! problem, highlighted strength, satisfaction rating, free text) and
//! synthesizes a review from templated phrase banks, personalized with
//! per-deployment branding.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

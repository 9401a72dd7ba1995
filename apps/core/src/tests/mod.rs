//! Test Module
//!
//! Cross-module test suite for the marine insight core.
//!
//! ## Test Categories
//! - `interpreter_tests`: Normalization, resolvers, classification, coordinates, analyzer
//! - `reference_tests`: Loading, exporting and rejecting reference tables
//! - `knowledge_tests`: Knowledge base lookup and formatting
//! - `config_tests`: Environment-driven configuration

pub mod config_tests;

//! Scenario support types

pub mod world;

//! Integration tests for Layer 2: Resolver
//!
//! Tests for resolution tiers, field positions, property inheritance,
//! ancestor closures, and resource invalidation.

mod positions;
mod resolution;

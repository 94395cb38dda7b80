// Domain layer - Core automaton logic
pub mod domain;

// Application layer - Simulation driver and configuration
pub mod application;

// Infrastructure layer - Rendering
pub mod rendering;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Neighborhood, Row, RuleTable, SeedError, SeedPosition};
pub use application::{SimConfig, Simulation};

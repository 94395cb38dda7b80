mod config;
mod simulation;

pub use config::SimConfig;
pub use simulation::Simulation;

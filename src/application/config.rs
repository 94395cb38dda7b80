use crate::domain::{Algorithm, SeedPosition};
use clap::Parser;

/// Everything the simulation accepts from the outside.
#[derive(Parser, Clone, Debug)]
#[command(name = "elementary", about = "Elementary cellular automaton viewer")]
pub struct SimConfig {
    /// Wolfram rule number; values above 255 wrap modulo 256
    #[arg(short, long, default_value_t = 30)]
    pub rule: u32,

    /// Number of cells per row
    #[arg(long, default_value_t = 100)]
    pub row_size: usize,

    /// Which cell of the first row starts on
    #[arg(long, value_enum, default_value = "middle")]
    pub seed_position: SeedPosition,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 100)]
    pub step_time: u64,

    /// Evolution strategy
    #[arg(long, value_enum, default_value = "serial")]
    pub algorithm: Algorithm,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rule: 30,
            row_size: 100,
            seed_position: SeedPosition::Middle,
            step_time: 100,
            algorithm: Algorithm::Serial,
        }
    }
}

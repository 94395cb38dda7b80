use crate::application::SimConfig;
use crate::domain::{Algorithm, Row, RuleTable, SeedError};

/// Simulation orchestrates the automaton.
/// It owns the rule table and the most recent row, advances one
/// generation per timer interval, and keeps the produced rows for the
/// renderer to draw.
pub struct Simulation {
    pub table: RuleTable,
    pub current: Row,
    /// All rows produced so far, seed first. Display state only - the
    /// transition reads nothing but `current`.
    pub history: Vec<Row>,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub steps_per_second: f32,
    pub last_step_time_ms: f32, // Evolution performance metric
}

impl Simulation {
    /// Build the rule table and seed row from configuration.
    /// Fails fast on an invalid row size.
    pub fn new(config: &SimConfig) -> Result<Self, SeedError> {
        let table = RuleTable::new(config.rule);
        let seed = Row::seed(config.row_size, config.seed_position)?;
        Ok(Self {
            table,
            current: seed.clone(),
            history: vec![seed],
            algorithm: config.algorithm,
            is_running: true,
            generation: 0,
            update_timer: 0.0,
            steps_per_second: 1000.0 / config.step_time.max(1) as f32,
            last_step_time_ms: 0.0,
        })
    }

    /// Stop producing rows. There is no terminal state otherwise -
    /// generations continue until the owner stops the simulation.
    pub fn stop(&mut self) {
        self.is_running = false;
    }

    /// Toggle play/pause state
    #[allow(dead_code)]
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Advance exactly one generation: replace `current` with its
    /// successor and append it to the history.
    pub fn step(&mut self) {
        let start = std::time::Instant::now();

        let next = match self.algorithm {
            Algorithm::Serial => self.current.next(&self.table),
            Algorithm::Parallel => self.current.next_parallel(&self.table),
        };

        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.history.push(next.clone());
        self.current = next;
        self.generation += 1;
    }

    /// Update the simulation by one frame.
    /// Accumulates frame time and fires `step` once the configured
    /// interval has passed; each step runs to completion before the
    /// next can fire.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.steps_per_second;

        if self.update_timer >= update_interval {
            self.step();
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeedPosition;

    fn config(rule: u32, row_size: usize) -> SimConfig {
        SimConfig {
            rule,
            row_size,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_new_seeds_history() {
        let sim = Simulation::new(&config(30, 7)).unwrap();
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.history.len(), 1);
        assert_eq!(sim.current.to_string(), "0001000");
        assert_eq!(sim.table.rule(), 30);
    }

    #[test]
    fn test_new_rejects_empty_row() {
        assert!(Simulation::new(&config(30, 0)).is_err());
    }

    #[test]
    fn test_step_replaces_current_and_grows_history() {
        let mut sim = Simulation::new(&config(30, 7)).unwrap();
        sim.step();
        assert_eq!(sim.generation, 1);
        assert_eq!(sim.history.len(), 2);
        assert_eq!(sim.current.to_string(), "0011100");
        assert_eq!(sim.history[0].to_string(), "0001000");
        assert_eq!(sim.history[1].to_string(), "0011100");
    }

    #[test]
    fn test_tick_fires_after_interval() {
        // 100ms step time means a 0.06s frame does nothing and a
        // second one crosses the threshold.
        let sim = Simulation::new(&config(30, 7)).unwrap();
        let sim = sim.tick(0.06);
        assert_eq!(sim.generation, 0);
        let sim = sim.tick(0.06);
        assert_eq!(sim.generation, 1);
        assert_eq!(sim.update_timer, 0.0);
    }

    #[test]
    fn test_stopped_simulation_ignores_ticks() {
        let mut sim = Simulation::new(&config(30, 7)).unwrap();
        sim.stop();
        let sim = sim.tick(10.0);
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.history.len(), 1);
    }

    #[test]
    fn test_parallel_algorithm_produces_same_rows() {
        let serial_cfg = config(110, 64);
        let parallel_cfg = SimConfig {
            algorithm: Algorithm::Parallel,
            ..serial_cfg.clone()
        };
        let mut serial = Simulation::new(&serial_cfg).unwrap();
        let mut parallel = Simulation::new(&parallel_cfg).unwrap();
        for _ in 0..10 {
            serial.step();
            parallel.step();
        }
        assert_eq!(serial.current, parallel.current);
    }

    #[test]
    fn test_seed_position_reaches_seed_row() {
        let cfg = SimConfig {
            seed_position: SeedPosition::End,
            ..config(30, 5)
        };
        let sim = Simulation::new(&cfg).unwrap();
        assert_eq!(sim.current.to_string(), "00001");
    }
}

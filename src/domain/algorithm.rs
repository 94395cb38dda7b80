//! Algorithm enum for selecting the row evolution implementation.

/// Available evolution strategies. Serial is plenty for the default
/// row size; Parallel pays off on very wide rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// Cell-by-cell successor on one thread
    #[default]
    Serial,
    /// Row split across rayon workers
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for the status overlay
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "One thread, one pass per row",
            Algorithm::Parallel => "Row chunks across rayon workers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_algorithms_returns_two() {
        assert_eq!(Algorithm::all().len(), 2);
    }

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}

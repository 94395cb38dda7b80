mod algorithm;
mod cell;
mod row;
mod rule;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use row::{Row, SeedError, SeedPosition};
pub use rule::{Neighborhood, RuleTable};

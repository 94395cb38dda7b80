use super::Cell;

/// The (left, center, right) triple a cell's next state depends on.
/// There are exactly 8 distinct neighborhoods, one per 3-bit value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Neighborhood {
    pub left: Cell,
    pub center: Cell,
    pub right: Cell,
}

impl Neighborhood {
    pub const fn new(left: Cell, center: Cell, right: Cell) -> Self {
        Self { left, center, right }
    }

    /// 3-bit value of the triple, left cell most significant ("111" = 7)
    pub const fn value(self) -> usize {
        ((self.left.bit() << 2) | (self.center.bit() << 1) | self.right.bit()) as usize
    }

    /// All 8 neighborhoods in the conventional order, "111" down to "000"
    pub fn all() -> [Neighborhood; 8] {
        std::array::from_fn(|i| {
            let v = (7 - i) as u8;
            Neighborhood::new(
                Cell::from_bit((v >> 2) & 1),
                Cell::from_bit((v >> 1) & 1),
                Cell::from_bit(v & 1),
            )
        })
    }
}

/// RuleTable maps every neighborhood to the resulting cell state,
/// following Wolfram's numbering: bit `v` of the rule's 8-bit binary
/// expansion is the next state for the neighborhood of value `v`.
///
/// The table is a fixed array keyed by neighborhood value, so it is
/// total by construction and immutable after `new`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RuleTable {
    rule: u8,
    states: [Cell; 8],
}

impl RuleTable {
    /// Build the transition table for a rule number.
    ///
    /// Rules outside 0-255 alias modulo 256 (the 8 least-significant
    /// bits); they never fail.
    pub fn new(rule: u32) -> Self {
        let rule = (rule % 256) as u8;
        let states = std::array::from_fn(|v| Cell::from_bit((rule >> v) & 1));
        Self { rule, states }
    }

    /// The effective rule number in 0-255
    pub const fn rule(&self) -> u8 {
        self.rule
    }

    /// Look up the next state for a neighborhood. Total: every
    /// neighborhood has an entry.
    pub const fn next_state(&self, neighborhood: Neighborhood) -> Cell {
        self.states[neighborhood.value()]
    }
}

/// Cell is the fundamental unit of the automaton.
/// Each cell is either Off ("0") or On ("1").
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Off,
    On,
}

impl Cell {
    /// Check if the cell is currently on
    pub const fn is_on(self) -> bool {
        matches!(self, Cell::On)
    }

    /// Toggle the cell state (not used but kept for API completeness)
    #[allow(dead_code)]
    pub const fn toggle(self) -> Self {
        match self {
            Cell::On => Cell::Off,
            Cell::Off => Cell::On,
        }
    }

    /// The cell's contribution to a binary encoding
    pub const fn bit(self) -> u8 {
        match self {
            Cell::Off => 0,
            Cell::On => 1,
        }
    }

    /// Build a cell from one bit; any nonzero value is On
    pub const fn from_bit(bit: u8) -> Self {
        if bit == 0 { Cell::Off } else { Cell::On }
    }

    /// Character form used for display ('0' or '1')
    pub const fn as_char(self) -> char {
        match self {
            Cell::Off => '0',
            Cell::On => '1',
        }
    }
}

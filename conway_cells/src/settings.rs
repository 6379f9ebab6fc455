// settings.rs - Cell size and grid-line choices

use serde::{Deserialize, Serialize};

use crate::env::RandomSource;

pub const CELL_SIZE_MIN: u8 = 2;
pub const CELL_SIZE_MAX: u8 = 8;

/// Settings consumed when the field is (re)built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSettings {
    pub cell_size: u8,
    pub show_grid: bool,
}

impl FieldSettings {
    pub fn new(cell_size: u8, show_grid: bool) -> Self {
        Self { cell_size: clamp_cell_size(cell_size), show_grid }
    }
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self { cell_size: CELL_SIZE_MAX, show_grid: true }
    }
}

pub fn clamp_cell_size(cell_size: u8) -> u8 {
    cell_size.clamp(CELL_SIZE_MIN, CELL_SIZE_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSizeChoice {
    Random,
    Fixed(u8),
}

impl CellSizeChoice {
    /// Random picks from `CELL_SIZE_MIN..CELL_SIZE_MAX`.
    pub fn resolve(self, rng: &mut dyn RandomSource) -> u8 {
        match self {
            CellSizeChoice::Random => {
                rng.range(CELL_SIZE_MIN as i32, CELL_SIZE_MAX as i32) as u8
            }
            CellSizeChoice::Fixed(size) => clamp_cell_size(size),
        }
    }

    /// Next option in the settings page: Random, 2, 3, .., 8, Random, ..
    pub fn next(self) -> Self {
        match self {
            CellSizeChoice::Random => CellSizeChoice::Fixed(CELL_SIZE_MIN),
            CellSizeChoice::Fixed(size) if size >= CELL_SIZE_MAX => CellSizeChoice::Random,
            CellSizeChoice::Fixed(size) => CellSizeChoice::Fixed(clamp_cell_size(size + 1)),
        }
    }

    pub fn label(self) -> String {
        match self {
            CellSizeChoice::Random => "Random".to_string(),
            CellSizeChoice::Fixed(size) => format!("{} px", size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridChoice {
    Shown,
    Hidden,
    Random,
}

impl GridChoice {
    pub fn resolve(self, rng: &mut dyn RandomSource) -> bool {
        match self {
            GridChoice::Shown => true,
            GridChoice::Hidden => false,
            GridChoice::Random => rng.coin(),
        }
    }

    pub fn next(self) -> Self {
        match self {
            GridChoice::Shown => GridChoice::Hidden,
            GridChoice::Hidden => GridChoice::Random,
            GridChoice::Random => GridChoice::Shown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GridChoice::Shown => "Shown",
            GridChoice::Hidden => "Hidden",
            GridChoice::Random => "Random",
        }
    }
}

/// What the menu hands out with a pattern: choices, not yet resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsChoice {
    pub cell_size: CellSizeChoice,
    pub grid: GridChoice,
}

impl Default for SettingsChoice {
    fn default() -> Self {
        Self { cell_size: CellSizeChoice::Random, grid: GridChoice::Random }
    }
}

impl SettingsChoice {
    pub fn resolve(self, rng: &mut dyn RandomSource) -> FieldSettings {
        let cell_size = self.cell_size.resolve(rng);
        let show_grid = self.grid.resolve(rng);
        FieldSettings { cell_size, show_grid }
    }
}

// grid.rs - Toroidal cell grid with a bit-packed generation history

use std::collections::TryReserveError;

use bitflags::bitflags;
use thiserror::Error;

use crate::font::Font;

bitflags! {
    /// One cell: the current generation, the six before it and a scratch bit.
    ///
    /// `evolve` shifts the byte left, so `GEN(n)` always holds the state the
    /// cell had `n` steps ago.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellBits: u8 {
        const DATA = 1 << 0;
        const GEN1 = 1 << 1;
        const GEN2 = 1 << 2;
        const GEN3 = 1 << 3;
        const GEN4 = 1 << 4;
        const GEN5 = 1 << 5;
        const GEN6 = 1 << 6;
        const TEMP = 1 << 7;

        const HISTORY = Self::GEN1.bits() | Self::GEN2.bits() | Self::GEN3.bits()
                      | Self::GEN4.bits() | Self::GEN5.bits() | Self::GEN6.bits();
    }
}

/// Number of past generations a cell remembers.
pub const HISTORY_DEPTH: u8 = 6;

impl CellBits {
    /// The history bit for `n` generations ago (1..=6).
    pub fn generation(n: u8) -> CellBits {
        debug_assert!((1..=HISTORY_DEPTH).contains(&n));
        CellBits::from_bits_retain(1 << n)
    }

    pub fn is_alive(self) -> bool {
        self.contains(CellBits::DATA)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub rows: u16,
    pub columns: u16,
}

impl GridSize {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid of {rows}x{columns} has no cells")]
    EmptyGrid { rows: u16, columns: u16 },
    #[error("could not allocate {cells} cells")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Map any coordinate onto `0..dimension`, wrapping around both edges.
pub fn wrap(coord: i32, dimension: u16) -> usize {
    coord.rem_euclid(dimension as i32) as usize
}

pub struct Grid {
    size: GridSize,
    cells: Vec<CellBits>,
    generation: u32,
}

impl Grid {
    /// Allocate an all-dead grid with empty history.
    pub fn new(size: GridSize) -> Result<Self, GridError> {
        if size.rows == 0 || size.columns == 0 {
            return Err(GridError::EmptyGrid { rows: size.rows, columns: size.columns });
        }
        let count = size.cell_count();
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|source| GridError::Allocation { cells: count, source })?;
        cells.resize(count, CellBits::empty());

        log::debug!("grid allocated: {}x{}", size.rows, size.columns);
        Ok(Self { size, cells, generation: 0 })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Steps taken since the grid was last seeded.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn index(&self, row: i32, col: i32) -> usize {
        wrap(row, self.size.rows) * self.size.columns as usize + wrap(col, self.size.columns)
    }

    /// Current-generation state. Callers stay within `0..rows` x `0..columns`.
    pub fn is_alive(&self, row: u16, col: u16) -> bool {
        debug_assert!(row < self.size.rows && col < self.size.columns);
        self.cells[row as usize * self.size.columns as usize + col as usize].is_alive()
    }

    pub fn cell(&self, row: u16, col: u16) -> CellBits {
        self.cells[self.index(row as i32, col as i32)]
    }

    /// Set the current-generation bit, wrapping the coordinate onto the torus.
    pub fn set_cell(&mut self, row: i32, col: i32, alive: bool) {
        let index = self.index(row, col);
        self.cells[index].set(CellBits::DATA, alive);
    }

    /// Kill every cell and forget all history.
    pub fn clear(&mut self) {
        self.cells.fill(CellBits::empty());
        self.generation = 0;
    }

    /// Copy a stencil onto the grid with its top-left corner at (row, col).
    ///
    /// Stencil cells overwrite both ways: 1 sets, 0 clears. Placement wraps.
    pub fn blit(&mut self, font: &Font, row: i32, col: i32) {
        for r in 0..font.height {
            for c in 0..font.width {
                self.set_cell(row + r as i32, col + c as i32, font.is_set(r, c));
            }
        }
    }

    /// Alive cells among the 8 neighbours of (row, col), current generation.
    pub fn live_neighbors(&self, row: u16, col: u16) -> u8 {
        self.count_neighbors(row, col, CellBits::DATA)
    }

    fn count_neighbors(&self, row: u16, col: u16, bit: CellBits) -> u8 {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if self.cells[self.index(row as i32 + dr, col as i32 + dc)].contains(bit) {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Advance one generation. Returns `false` once the new generation equals
    /// one of the last six, which covers still lifes and short oscillators.
    pub fn evolve(&mut self) -> bool {
        // Shift history along and snapshot the outgoing generation into TEMP.
        for cell in self.cells.iter_mut() {
            let was_alive = cell.is_alive();
            *cell = CellBits::from_bits_retain(cell.bits() << 1);
            cell.set(CellBits::TEMP, was_alive);
        }

        for row in 0..self.size.rows {
            for col in 0..self.size.columns {
                let count = self.count_neighbors(row, col, CellBits::TEMP);
                let index = row as usize * self.size.columns as usize + col as usize;
                let was_alive = self.cells[index].contains(CellBits::TEMP);

                let next = match (was_alive, count) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3) => true,   // Birth
                    _ => false,  // Death or stays dead
                };
                self.cells[index].set(CellBits::DATA, next);
            }
        }

        self.generation = self.generation.saturating_add(1);

        match self.repeated_generation() {
            Some(period) => {
                log::debug!("generation {} repeats {} back", self.generation, period);
                false
            }
            None => true,
        }
    }

    /// How many generations back the current state last appeared, if within
    /// the remembered history. Slots not yet filled since seeding read as an
    /// all-dead grid.
    pub fn repeated_generation(&self) -> Option<u8> {
        // Bit n of `mismatch` ends up set when GEN(n) differs from DATA somewhere.
        let mut mismatch = 0u8;
        for cell in &self.cells {
            let current = if cell.is_alive() { CellBits::HISTORY.bits() } else { 0 };
            mismatch |= (cell.bits() ^ current) & CellBits::HISTORY.bits();
            if mismatch == CellBits::HISTORY.bits() {
                return None;
            }
        }
        (1..=HISTORY_DEPTH).find(|&n| mismatch & CellBits::generation(n).bits() == 0)
    }
}

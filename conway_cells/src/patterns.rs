// patterns.rs - Seeding the grid: clock digits and the classic starting shapes

use serde::{Deserialize, Serialize};

use crate::env::{ClockTime, RandomSource, WallClock};
use crate::font::{self, Font, DIGIT_HEIGHT, DIGIT_WIDTH};
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    None,
    Clock,
    Glider,
    Spaceship,
    RPentomino,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::None,
        Pattern::Clock,
        Pattern::Glider,
        Pattern::Spaceship,
        Pattern::RPentomino,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::None => "None",
            Pattern::Clock => "Clock",
            Pattern::Glider => "Glider",
            Pattern::Spaceship => "Spaceship",
            Pattern::RPentomino => "R-pentomino",
        }
    }
}

/// Blank columns between the two digits of the hour (and of the minute).
const DIGIT_GAP: i32 = 1;
/// Blank columns on each side of the separator dots.
const SEPARATOR_GAP: i32 = 1;
/// Rows between the digit centre and each separator dot.
const DOT_OFFSET: i32 = 2;
pub const CLOCK_WIDTH: i32 =
    4 * DIGIT_WIDTH as i32 + 2 * DIGIT_GAP + 2 * SEPARATOR_GAP + 1;

/// Distance kept from the grid edge before jitter is added.
const EDGE_MARGIN: i32 = 1;
/// Random offsets are drawn from `0..PLACEMENT_JITTER`.
const PLACEMENT_JITTER: i32 = 3;
const SPACESHIP_ATTEMPTS: usize = 10;
/// Blank rows between stacked spaceships.
const SPACESHIP_GAP: i32 = 2;

/// Grid coordinates of each glyph of the `HH:MM` face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockLayout {
    pub top: i32,
    pub hour_tens: i32,
    pub hour_ones: i32,
    pub separator: i32,
    pub minute_tens: i32,
    pub minute_ones: i32,
    pub dot_rows: [i32; 2],
}

impl ClockLayout {
    /// Centre the `HH:MM` block on a grid of the given size.
    pub fn centred(rows: u16, columns: u16) -> Self {
        let top = (rows as i32 - DIGIT_HEIGHT as i32) / 2;
        let left = (columns as i32 - CLOCK_WIDTH) / 2;
        let step = DIGIT_WIDTH as i32 + DIGIT_GAP;

        let hour_tens = left;
        let hour_ones = hour_tens + step;
        let separator = hour_ones + DIGIT_WIDTH as i32 + SEPARATOR_GAP;
        let minute_tens = separator + 1 + SEPARATOR_GAP;
        let minute_ones = minute_tens + step;

        let centre_row = top + DIGIT_HEIGHT as i32 / 2;
        Self {
            top,
            hour_tens,
            hour_ones,
            separator,
            minute_tens,
            minute_ones,
            dot_rows: [centre_row - DOT_OFFSET, centre_row + DOT_OFFSET],
        }
    }
}

impl Grid {
    /// Replace the whole grid (history included) with a freshly seeded pattern.
    pub fn set_pattern(
        &mut self,
        pattern: Pattern,
        clock: &dyn WallClock,
        rng: &mut dyn RandomSource,
    ) {
        log::debug!("seeding {}", pattern.name());
        match pattern {
            Pattern::None => self.clear(),
            Pattern::Clock => self.set_clock(clock.now()),
            Pattern::Glider => self.seed_gliders(rng),
            Pattern::Spaceship => self.seed_spaceships(rng),
            Pattern::RPentomino => self.seed_centred(&font::R_PENTOMINO),
        }
    }

    /// Draw `HH:MM` centred on an otherwise empty grid.
    pub fn set_clock(&mut self, time: ClockTime) {
        self.clear();
        let layout = ClockLayout::centred(self.size().rows, self.size().columns);
        let (hour_tens, hour_ones) = time.hour_digits();
        let (minute_tens, minute_ones) = time.minute_digits();

        for (value, col) in [
            (hour_tens, layout.hour_tens),
            (hour_ones, layout.hour_ones),
            (minute_tens, layout.minute_tens),
            (minute_ones, layout.minute_ones),
        ] {
            if let Some(glyph) = font::digit(value) {
                self.blit(glyph, layout.top, col);
            }
        }
        for row in layout.dot_rows {
            self.set_cell(row, layout.separator, true);
        }
    }

    fn seed_centred(&mut self, font: &Font) {
        self.clear();
        let size = self.size();
        let row = (size.rows as i32 - font.height as i32) / 2;
        let col = (size.columns as i32 - font.width as i32) / 2;
        self.blit(font, row, col);
    }

    /// Room for a glider in each corner, jitter included, without overlap.
    fn fits_four_gliders(&self) -> bool {
        let span = 2 * (EDGE_MARGIN + PLACEMENT_JITTER + font::GLIDER_SE.width as i32);
        let size = self.size();
        size.columns as i32 >= span && size.rows as i32 >= span
    }

    fn seed_gliders(&mut self, rng: &mut dyn RandomSource) {
        self.clear();
        let size = self.size();
        let bottom = size.rows as i32 - EDGE_MARGIN - font::GLIDER_SE.height as i32;
        let right = size.columns as i32 - EDGE_MARGIN - font::GLIDER_SE.width as i32;

        let row = EDGE_MARGIN + rng.range(0, PLACEMENT_JITTER);
        let col = EDGE_MARGIN + rng.range(0, PLACEMENT_JITTER);
        self.blit(&font::GLIDER_SE, row, col);

        if !self.fits_four_gliders() {
            return;
        }
        // Each corner launches a glider heading back across the face.
        let corners: [(&Font, bool, bool); 3] = [
            (&font::GLIDER_SW, false, true),
            (&font::GLIDER_NE, true, false),
            (&font::GLIDER_NW, true, true),
        ];
        for (glider, from_bottom, from_right) in corners {
            if !rng.coin() {
                continue;
            }
            let dr = rng.range(0, PLACEMENT_JITTER);
            let dc = rng.range(0, PLACEMENT_JITTER);
            let row = if from_bottom { bottom - dr } else { EDGE_MARGIN + dr };
            let col = if from_right { right - dc } else { EDGE_MARGIN + dc };
            self.blit(glider, row, col);
        }
    }

    fn seed_spaceships(&mut self, rng: &mut dyn RandomSource) {
        self.clear();
        let size = self.size();

        let mut row = EDGE_MARGIN + rng.range(0, PLACEMENT_JITTER);
        for _ in 0..SPACESHIP_ATTEMPTS {
            let ship = font::SPACESHIPS[rng.range(0, font::SPACESHIPS.len() as i32) as usize];
            if row + ship.height as i32 > size.rows as i32 {
                break;
            }
            let col = EDGE_MARGIN + rng.range(0, PLACEMENT_JITTER);
            self.blit(ship, row, col);
            row += ship.height as i32 + SPACESHIP_GAP;
        }

        if rng.coin() {
            let row = EDGE_MARGIN + rng.range(0, PLACEMENT_JITTER);
            let col = size.columns as i32
                - EDGE_MARGIN
                - font::GLIDER_SW.width as i32
                - rng.range(0, PLACEMENT_JITTER);
            self.blit(&font::GLIDER_SW, row, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedClock, SequenceRandom};
    use crate::grid::GridSize;

    fn clock_at(hour: u8, minute: u8) -> FixedClock {
        FixedClock(ClockTime::new(hour, minute).unwrap())
    }

    #[test]
    fn clock_block_is_seventeen_wide() {
        assert_eq!(CLOCK_WIDTH, 17);
        let layout = ClockLayout::centred(22, 18);
        assert_eq!(layout.top, 7);
        assert_eq!(layout.hour_tens, 0);
        assert_eq!(layout.hour_ones, 4);
        assert_eq!(layout.separator, 8);
        assert_eq!(layout.minute_tens, 10);
        assert_eq!(layout.minute_ones, 14);
        assert_eq!(layout.dot_rows, [8, 12]);
    }

    #[test]
    fn none_pattern_empties_the_grid() {
        let mut grid = Grid::new(GridSize::new(20, 20)).unwrap();
        let mut rng = SequenceRandom::new(vec![0]);
        grid.set_pattern(Pattern::RPentomino, &clock_at(0, 0), &mut rng);
        grid.set_pattern(Pattern::None, &clock_at(0, 0), &mut rng);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn small_grid_gets_a_single_glider() {
        let mut grid = Grid::new(GridSize::new(10, 10)).unwrap();
        // Coins would all land heads if they were tossed.
        let mut rng = SequenceRandom::new(vec![0]);
        grid.set_pattern(Pattern::Glider, &clock_at(0, 0), &mut rng);
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn large_grid_fills_every_corner_on_heads() {
        let mut grid = Grid::new(GridSize::new(30, 30)).unwrap();
        let mut rng = SequenceRandom::new(vec![0]);
        grid.set_pattern(Pattern::Glider, &clock_at(0, 0), &mut rng);
        assert_eq!(grid.population(), 20);
        // Bottom-right glider heads north-west from (26, 26).
        assert!(grid.is_alive(26, 26));
        assert!(grid.is_alive(26, 28));
        assert!(grid.is_alive(28, 27));
    }

    #[test]
    fn tails_leave_only_the_top_left_glider() {
        let mut grid = Grid::new(GridSize::new(30, 30)).unwrap();
        let mut rng = SequenceRandom::new(vec![1]);
        grid.set_pattern(Pattern::Glider, &clock_at(0, 0), &mut rng);
        assert_eq!(grid.population(), 5);
        // Jitter of 1 moves the glider to (2, 2).
        assert!(grid.is_alive(2, 3));
        assert!(grid.is_alive(4, 2));
    }

    #[test]
    fn spaceships_stop_before_the_bottom_edge() {
        let mut grid = Grid::new(GridSize::new(24, 30)).unwrap();
        let mut rng = SequenceRandom::new(vec![0]);
        grid.set_pattern(Pattern::Spaceship, &clock_at(0, 0), &mut rng);
        // Lightweight ships land at rows 1, 7, 13 and 19; a fifth at row 25
        // would cross the bottom edge.
        let ships = 4 * font::LWSS.population();
        let glider = font::GLIDER_SW.population();
        assert_eq!(grid.population(), ships + glider);
        for col in 0..8 {
            assert!(!grid.is_alive(0, col));
            assert!(!grid.is_alive(23, col));
        }
        assert!(grid.is_alive(19, 1));
    }

    #[test]
    fn spaceships_stop_after_ten_attempts() {
        let mut grid = Grid::new(GridSize::new(200, 30)).unwrap();
        let mut rng = SequenceRandom::new(vec![0]);
        grid.set_pattern(Pattern::Spaceship, &clock_at(0, 0), &mut rng);
        let ships = SPACESHIP_ATTEMPTS * font::LWSS.population();
        assert_eq!(grid.population(), ships + font::GLIDER_SW.population());
        assert_eq!(grid.population(), 95);
        // The tenth ship sits at row 55; there is room for more below it.
        assert!(grid.is_alive(55, 1));
        for row in 61..200 {
            for col in 0..30 {
                assert!(!grid.is_alive(row, col));
            }
        }
    }

    #[test]
    fn spaceship_row_too_short_for_any_ship() {
        let mut grid = Grid::new(GridSize::new(4, 30)).unwrap();
        let mut rng = SequenceRandom::new(vec![1]);
        grid.set_pattern(Pattern::Spaceship, &clock_at(0, 0), &mut rng);
        assert_eq!(grid.population(), 0);
    }
}

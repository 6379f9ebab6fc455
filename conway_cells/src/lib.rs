// lib.rs - Cell-grid engine for a Game of Life watch face

pub mod config;
pub mod env;
pub mod field;
pub mod font;
pub mod grid;
pub mod menu;
pub mod patterns;
pub mod playback;
pub mod settings;

pub use config::{ConfigError, FaceConfig};
pub use env::{ClockTime, FixedClock, LocalClock, RandomSource, SeededRandom, SequenceRandom, WallClock};
pub use field::{DisplaySize, FieldLayout, Line, Rect};
pub use grid::{wrap, CellBits, Grid, GridError, GridSize};
pub use menu::{Menu, MenuOutcome, MenuPage};
pub use patterns::{ClockLayout, Pattern};
pub use playback::{Session, Timer};
pub use settings::{FieldSettings, CELL_SIZE_MAX, CELL_SIZE_MIN};

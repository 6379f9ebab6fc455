// playback.rs - Session controller: auto-play, single steps, reseeding, menu

use std::time::Duration;

use log::{debug, info};

use crate::env::{RandomSource, WallClock};
use crate::field::{DisplaySize, FieldLayout};
use crate::grid::{Grid, GridError};
use crate::menu::{Menu, MenuOutcome};
use crate::patterns::Pattern;
use crate::settings::{FieldSettings, SettingsChoice};

pub const EVOLVE_INTERVAL: Duration = Duration::from_millis(200);

/// One-shot host timer. Firing is reported back through `Session::on_timer`.
pub trait Timer {
    /// Arm the timer, replacing any pending firing.
    fn schedule(&mut self, after: Duration);
    fn cancel(&mut self);
    fn is_scheduled(&self) -> bool;
}

/// Everything a running face owns: grid, settings, timer and host services.
pub struct Session<T: Timer> {
    display: DisplaySize,
    settings: FieldSettings,
    layout: FieldLayout,
    grid: Grid,
    pattern: Pattern,
    choice: SettingsChoice,
    menu: Option<Menu>,
    interval: Duration,
    timer: T,
    clock: Box<dyn WallClock>,
    rng: Box<dyn RandomSource>,
}

impl<T: Timer> Session<T> {
    /// Build the field, seed `pattern` and leave playback paused.
    pub fn new(
        display: DisplaySize,
        settings: FieldSettings,
        pattern: Pattern,
        timer: T,
        clock: Box<dyn WallClock>,
        mut rng: Box<dyn RandomSource>,
    ) -> Result<Self, GridError> {
        let layout = FieldLayout::new(display, settings.cell_size);
        let mut grid = Grid::new(layout.grid_size)?;
        grid.set_pattern(pattern, clock.as_ref(), rng.as_mut());
        info!(
            "session started: {} on {}x{} cells of {} px",
            pattern.name(),
            layout.grid_size.rows,
            layout.grid_size.columns,
            layout.cell_size,
        );

        Ok(Self {
            display,
            settings,
            layout,
            grid,
            pattern,
            choice: SettingsChoice::default(),
            menu: None,
            interval: EVOLVE_INTERVAL,
            timer,
            clock,
            rng,
        })
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    pub fn settings(&self) -> FieldSettings {
        self.settings
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_scheduled()
    }

    /// Up button: (re)start auto-play.
    pub fn play(&mut self) {
        self.timer.cancel();
        self.timer.schedule(self.interval);
    }

    /// Down button: stop auto-play and advance a single generation.
    pub fn step(&mut self) -> bool {
        self.timer.cancel();
        self.grid.evolve()
    }

    /// Select button: stop auto-play and show the menu.
    pub fn open_menu(&mut self) {
        self.timer.cancel();
        self.menu = Some(Menu::new(self.pattern, self.choice));
    }

    pub fn menu_up(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            menu.up();
        }
    }

    pub fn menu_down(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            menu.down();
        }
    }

    pub fn menu_select(&mut self) -> Result<(), GridError> {
        let Some(menu) = self.menu.as_mut() else {
            return Ok(());
        };
        let outcome = menu.select(self.rng.as_mut());
        self.choice = menu.choice();
        match outcome {
            MenuOutcome::Apply(pattern, settings) => {
                self.menu = None;
                self.apply(pattern, settings)?;
                self.play();
            }
            MenuOutcome::Close => self.menu = None,
            MenuOutcome::Stay => {}
        }
        Ok(())
    }

    pub fn menu_back(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            if menu.back() == MenuOutcome::Close {
                self.menu = None;
            }
        }
    }

    /// Switch pattern and settings. A new cell size rebuilds the grid.
    pub fn apply(&mut self, pattern: Pattern, settings: FieldSettings) -> Result<(), GridError> {
        self.timer.cancel();
        if settings.cell_size != self.settings.cell_size {
            let layout = FieldLayout::new(self.display, settings.cell_size);
            self.grid = Grid::new(layout.grid_size)?;
            self.layout = layout;
            debug!(
                "field rebuilt: {}x{} cells of {} px",
                layout.grid_size.rows, layout.grid_size.columns, layout.cell_size,
            );
        }
        self.settings = settings;
        self.pattern = pattern;
        self.reseed();
        Ok(())
    }

    fn reseed(&mut self) {
        self.grid.set_pattern(self.pattern, self.clock.as_ref(), self.rng.as_mut());
    }

    /// The auto-play timer fired.
    pub fn on_timer(&mut self) {
        if self.menu.is_some() {
            return;
        }
        if self.grid.evolve() {
            self.timer.schedule(self.interval);
            return;
        }

        info!(
            "{} stagnated after {} generations",
            self.pattern.name(),
            self.grid.generation(),
        );
        match self.pattern {
            Pattern::Clock | Pattern::None => self.timer.cancel(),
            _ => {
                self.reseed();
                self.play();
            }
        }
    }

    /// Called on every wall-clock minute boundary.
    pub fn on_minute_tick(&mut self) {
        if self.pattern != Pattern::Clock || self.menu.is_some() {
            return;
        }
        self.timer.cancel();
        self.reseed();
        self.play();
    }
}

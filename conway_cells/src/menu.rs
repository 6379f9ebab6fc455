// menu.rs - List model behind the pattern/settings menu

use crate::env::RandomSource;
use crate::patterns::Pattern;
use crate::settings::{FieldSettings, SettingsChoice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Pattern(Pattern),
    Settings,
}

pub struct MenuItem {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub action: MenuAction,
}

pub struct MenuSection {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

pub const SECTIONS: &[MenuSection] = &[
    MenuSection {
        title: "Special pattern",
        items: &[
            MenuItem { title: "Clock", subtitle: "The present time", action: MenuAction::Pattern(Pattern::Clock) },
        ],
    },
    MenuSection {
        title: "Popular pattern",
        items: &[
            MenuItem { title: "Glider", subtitle: "Most popular glider", action: MenuAction::Pattern(Pattern::Glider) },
            MenuItem { title: "Spaceship", subtitle: "Light, middle, heavy", action: MenuAction::Pattern(Pattern::Spaceship) },
            MenuItem { title: "R-pentomino", subtitle: "Slow to stabilize", action: MenuAction::Pattern(Pattern::RPentomino) },
        ],
    },
    MenuSection {
        title: "Other",
        items: &[
            MenuItem { title: "Settings", subtitle: "for size, display", action: MenuAction::Settings },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPage {
    List,
    Settings,
}

/// Rows of the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    CellSize,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuOutcome {
    Stay,
    Apply(Pattern, FieldSettings),
    Close,
}

pub struct Menu {
    page: MenuPage,
    cursor: usize,
    settings_row: SettingsRow,
    choice: SettingsChoice,
}

fn items() -> impl Iterator<Item = &'static MenuItem> {
    SECTIONS.iter().flat_map(|section| section.items.iter())
}

fn item_count() -> usize {
    items().count()
}

impl Menu {
    /// Opens on the row of `current`; `None` lands on the first row.
    pub fn new(current: Pattern, choice: SettingsChoice) -> Self {
        let cursor = items()
            .position(|item| item.action == MenuAction::Pattern(current))
            .unwrap_or(0);
        Self { page: MenuPage::List, cursor, settings_row: SettingsRow::CellSize, choice }
    }

    pub fn page(&self) -> MenuPage {
        self.page
    }

    /// Index into the flattened list of rows.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// (section, row within section) of the cursor.
    pub fn cursor_index(&self) -> (usize, usize) {
        let mut remaining = self.cursor;
        for (section_index, section) in SECTIONS.iter().enumerate() {
            if remaining < section.items.len() {
                return (section_index, remaining);
            }
            remaining -= section.items.len();
        }
        (0, 0)
    }

    pub fn selected(&self) -> &'static MenuItem {
        let (section, row) = self.cursor_index();
        &SECTIONS[section].items[row]
    }

    pub fn settings_row(&self) -> SettingsRow {
        self.settings_row
    }

    pub fn choice(&self) -> SettingsChoice {
        self.choice
    }

    pub fn up(&mut self) {
        match self.page {
            MenuPage::List => {
                let count = item_count();
                self.cursor = (self.cursor + count - 1) % count;
            }
            MenuPage::Settings => self.toggle_settings_row(),
        }
    }

    pub fn down(&mut self) {
        match self.page {
            MenuPage::List => self.cursor = (self.cursor + 1) % item_count(),
            MenuPage::Settings => self.toggle_settings_row(),
        }
    }

    fn toggle_settings_row(&mut self) {
        self.settings_row = match self.settings_row {
            SettingsRow::CellSize => SettingsRow::Grid,
            SettingsRow::Grid => SettingsRow::CellSize,
        };
    }

    pub fn select(&mut self, rng: &mut dyn RandomSource) -> MenuOutcome {
        match self.page {
            MenuPage::List => match self.selected().action {
                MenuAction::Pattern(pattern) => {
                    MenuOutcome::Apply(pattern, self.choice.resolve(rng))
                }
                MenuAction::Settings => {
                    self.page = MenuPage::Settings;
                    MenuOutcome::Stay
                }
            },
            MenuPage::Settings => {
                match self.settings_row {
                    SettingsRow::CellSize => self.choice.cell_size = self.choice.cell_size.next(),
                    SettingsRow::Grid => self.choice.grid = self.choice.grid.next(),
                }
                MenuOutcome::Stay
            }
        }
    }

    pub fn back(&mut self) -> MenuOutcome {
        match self.page {
            MenuPage::Settings => {
                self.page = MenuPage::List;
                MenuOutcome::Stay
            }
            MenuPage::List => MenuOutcome::Close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceRandom;
    use crate::settings::{CellSizeChoice, GridChoice};

    #[test]
    fn opens_on_current_pattern() {
        let menu = Menu::new(Pattern::Spaceship, SettingsChoice::default());
        assert_eq!(menu.cursor_index(), (1, 1));
        assert_eq!(menu.selected().title, "Spaceship");

        let menu = Menu::new(Pattern::None, SettingsChoice::default());
        assert_eq!(menu.cursor_index(), (0, 0));
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut menu = Menu::new(Pattern::Clock, SettingsChoice::default());
        menu.up();
        assert_eq!(menu.selected().action, MenuAction::Settings);
        menu.down();
        assert_eq!(menu.selected().action, MenuAction::Pattern(Pattern::Clock));
    }

    #[test]
    fn selecting_a_pattern_resolves_settings() {
        let mut rng = SequenceRandom::new(vec![1, 1]);
        let mut menu = Menu::new(Pattern::Glider, SettingsChoice::default());
        // Cell size draws 2 + 1, the grid coin lands tails.
        assert_eq!(
            menu.select(&mut rng),
            MenuOutcome::Apply(Pattern::Glider, FieldSettings { cell_size: 3, show_grid: false }),
        );
    }

    #[test]
    fn settings_page_cycles_choices() {
        let mut rng = SequenceRandom::new(vec![0]);
        let mut menu = Menu::new(Pattern::Clock, SettingsChoice::default());
        menu.up();
        assert_eq!(menu.select(&mut rng), MenuOutcome::Stay);
        assert_eq!(menu.page(), MenuPage::Settings);

        menu.select(&mut rng);
        menu.down();
        menu.select(&mut rng);
        assert_eq!(
            menu.choice(),
            SettingsChoice { cell_size: CellSizeChoice::Fixed(2), grid: GridChoice::Shown },
        );

        assert_eq!(menu.back(), MenuOutcome::Stay);
        assert_eq!(menu.page(), MenuPage::List);
        assert_eq!(menu.back(), MenuOutcome::Close);
    }
}

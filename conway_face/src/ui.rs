// ui.rs - Drawing the face and turning key presses into button clicks

use std::time::{Duration, Instant};

use conway_cells::menu::{MenuPage, SettingsRow, SECTIONS};
use conway_cells::{FieldLayout, Menu, Rect as CellRect};
use eframe::egui;
use egui::{Color32, Key, Pos2, Rect, Stroke, Vec2};
use log::error;

use crate::FaceApp;

const LIVE_COLOR: Color32 = Color32::WHITE;
const DEAD_COLOR: Color32 = Color32::BLACK;
const GRID_COLOR: Color32 = Color32::from_gray(70);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Button {
    Up,
    Select,
    Down,
    Back,
}

impl FaceApp {
    fn click(&mut self, button: Button) {
        if self.session.menu().is_some() {
            match button {
                Button::Up => self.session.menu_up(),
                Button::Down => self.session.menu_down(),
                Button::Back => self.session.menu_back(),
                Button::Select => {
                    if let Err(err) = self.session.menu_select() {
                        error!("could not rebuild the field: {}", err);
                    }
                }
            }
            return;
        }
        match button {
            Button::Up => self.session.play(),
            Button::Select => self.session.open_menu(),
            Button::Down => {
                self.session.step();
                self.last_step = Instant::now();
            }
            Button::Back => {}
        }
    }

    fn keyboard(&mut self, ctx: &egui::Context) {
        let (up, select, down, back, down_held) = ctx.input(|i| {
            (
                i.key_pressed(Key::ArrowUp),
                i.key_pressed(Key::Enter) || i.key_pressed(Key::Space),
                i.key_pressed(Key::ArrowDown),
                i.key_pressed(Key::Escape) || i.key_pressed(Key::Backspace),
                i.key_down(Key::ArrowDown),
            )
        });

        if up { self.click(Button::Up); }
        if select { self.click(Button::Select); }
        if back { self.click(Button::Back); }
        if down {
            self.click(Button::Down);
        } else if down_held
            && self.session.menu().is_none()
            && self.last_step.elapsed() >= self.config.step_repeat()
        {
            // Holding Down keeps stepping at the repeat interval.
            self.click(Button::Down);
        }
        if down_held {
            ctx.request_repaint_after(self.config.step_repeat());
        }
    }
}

fn to_screen(origin: Pos2, zoom: f32, rect: CellRect) -> Rect {
    Rect::from_min_size(
        egui::pos2(origin.x + rect.x as f32 * zoom, origin.y + rect.y as f32 * zoom),
        Vec2::new(rect.w as f32 * zoom, rect.h as f32 * zoom),
    )
}

fn draw_field(painter: &egui::Painter, origin: Pos2, zoom: f32, layout: &FieldLayout, app: &FaceApp) {
    let grid = app.session.grid();
    for rect in layout.alive_rects(grid) {
        painter.rect_filled(to_screen(origin, zoom, rect), 0.0, LIVE_COLOR);
    }

    if app.session.settings().show_grid {
        let stroke = Stroke::new(1.0, GRID_COLOR);
        for line in layout.grid_lines() {
            let start = egui::pos2(origin.x + line.start.0 as f32 * zoom, origin.y + line.start.1 as f32 * zoom);
            let end = egui::pos2(origin.x + line.end.0 as f32 * zoom, origin.y + line.end.1 as f32 * zoom);
            painter.line_segment([start, end], stroke);
        }
    }
}

fn draw_menu(ui: &mut egui::Ui, menu: &Menu) {
    match menu.page() {
        MenuPage::List => {
            let (cursor_section, cursor_row) = menu.cursor_index();
            for (section_index, section) in SECTIONS.iter().enumerate() {
                ui.label(egui::RichText::new(section.title).strong());
                for (row, item) in section.items.iter().enumerate() {
                    let selected = section_index == cursor_section && row == cursor_row;
                    ui.horizontal(|ui| {
                        let _ = ui.selectable_label(selected, item.title);
                        ui.label(egui::RichText::new(item.subtitle).small().weak());
                    });
                }
            }
        }
        MenuPage::Settings => {
            let choice = menu.choice();
            ui.label(egui::RichText::new("Settings").strong());
            let _ = ui.selectable_label(
                menu.settings_row() == SettingsRow::CellSize,
                format!("Cell size: {}", choice.cell_size.label()),
            );
            let _ = ui.selectable_label(
                menu.settings_row() == SettingsRow::Grid,
                format!("Grid: {}", choice.grid.label()),
            );
            ui.label(egui::RichText::new("Select cycles, Back returns").small().weak());
        }
    }
}

impl eframe::App for FaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        self.keyboard(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway Face");

            // Watch buttons
            let mut clicked = None;
            ui.horizontal(|ui| {
                if ui.button("▲ Play").clicked() { clicked = Some(Button::Up); }
                if ui.button("● Select").clicked() { clicked = Some(Button::Select); }
                if ui.button("▼ Step").clicked() { clicked = Some(Button::Down); }
                if ui.button("◀ Back").clicked() { clicked = Some(Button::Back); }
            });
            if let Some(button) = clicked {
                self.click(button);
            }

            ui.separator();

            let zoom = self.config.zoom;
            let display = self.config.display();
            let size = Vec2::new(display.width as f32 * zoom, display.height as f32 * zoom);

            if let Some(menu) = self.session.menu() {
                ui.allocate_ui(size, |ui| {
                    ui.set_min_size(size);
                    draw_menu(ui, menu);
                });
            } else {
                let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
                let origin = response.rect.min;
                painter.rect_filled(response.rect, 0.0, DEAD_COLOR);
                let layout = *self.session.layout();
                draw_field(&painter, origin, zoom, &layout, self);
            }

            ui.separator();

            let grid = self.session.grid();
            ui.horizontal(|ui| {
                ui.label(format!("Pattern: {}", self.session.pattern().name()));
                ui.label(format!("Generation: {}", grid.generation()));
                ui.label(format!("Live cells: {}", grid.population()));
                ui.label(if self.session.is_playing() { "▶" } else { "⏸" });
            });
        });

        // Keep the minute ticker and timer tasks honest even if a wake was missed.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}

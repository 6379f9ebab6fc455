//! Playback decisions driven through `Session`.
use std::time::Duration;

use conway_cells::{
    ClockTime, DisplaySize, FieldSettings, FixedClock, Pattern, SequenceRandom, Session, Timer,
};

#[derive(Default)]
struct ManualTimer {
    pending: Option<Duration>,
}

impl Timer for ManualTimer {
    fn schedule(&mut self, after: Duration) {
        self.pending = Some(after);
    }

    fn cancel(&mut self) {
        self.pending = None;
    }

    fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}

/// 9x9 px display with 2 px cells: a 3x3 torus where everything dies at once.
fn tiny_session(pattern: Pattern) -> Session<ManualTimer> {
    Session::new(
        DisplaySize { width: 9, height: 9 },
        FieldSettings::new(2, false),
        pattern,
        ManualTimer::default(),
        Box::new(FixedClock(ClockTime::new(7, 5).unwrap())),
        Box::new(SequenceRandom::new(vec![0])),
    )
    .unwrap()
}

#[test]
fn stagnant_glider_is_reseeded_and_resumed() {
    let mut session = tiny_session(Pattern::Glider);
    assert_eq!(session.grid().size().rows, 3);
    session.play();

    // The glider dies out on its first step, which matches the empty history.
    session.on_timer();
    assert_eq!(session.grid().generation(), 0);
    assert_eq!(session.grid().population(), 5);
    assert!(session.is_playing());
}

#[test]
fn stagnant_clock_waits_for_the_next_minute() {
    let mut session = tiny_session(Pattern::Clock);
    session.play();
    for _ in 0..8 {
        if !session.is_playing() {
            break;
        }
        session.on_timer();
    }
    assert!(!session.is_playing());

    session.on_minute_tick();
    assert!(session.is_playing());
    assert_eq!(session.grid().generation(), 0);
}

#[test]
fn settings_page_choice_survives_reopening_the_menu() {
    let mut session = tiny_session(Pattern::Clock);
    session.open_menu();
    session.menu_up();
    session.menu_select().unwrap();
    session.menu_select().unwrap();
    session.menu_back();
    session.menu_back();
    assert!(session.menu().is_none());

    session.open_menu();
    let choice = session.menu().map(|menu| menu.choice());
    assert_eq!(
        choice.map(|c| c.cell_size),
        Some(conway_cells::settings::CellSizeChoice::Fixed(2)),
    );
}

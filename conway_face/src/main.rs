// main.rs - Game of Life watch face in a desktop window
// Buttons: Up plays, Select opens the menu, Down steps, Back leaves the menu.

use std::time::Instant;

use conway_cells::{FaceConfig, LocalClock, RandomSource, SeededRandom, Session};
use eframe::egui;
use log::info;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

mod host;
mod ui;

use host::{HostEvent, TokioTimer, Waker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = FaceConfig::from_env()?;
    let runtime = tokio::runtime::Runtime::new()?;
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let waker = Waker::default();

    let rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(SeededRandom::from_seed(seed)),
        None => Box::new(SeededRandom::from_clock()),
    };
    let timer = TokioTimer::new(runtime.handle().clone(), events_tx.clone(), waker.clone());

    // Without a grid there is nothing to show: bail out before opening a window.
    let session = Session::new(
        config.display(),
        config.field_settings(),
        config.pattern,
        timer,
        Box::new(LocalClock),
        rng,
    )?
    .with_interval(config.evolve_interval());

    let ticker = host::spawn_minute_ticker(runtime.handle(), events_tx, waker.clone());

    let zoom = config.zoom;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            config.display_width as f32 * zoom + 40.0,
            config.display_height as f32 * zoom + 160.0,
        ]),
        ..Default::default()
    };

    info!("opening face window");
    eframe::run_native(
        "Conway Face",
        options,
        Box::new(move |cc| {
            waker.attach(cc.egui_ctx.clone());
            Box::new(FaceApp::new(config, session, events_rx, runtime, ticker))
        }),
    )?;
    Ok(())
}

pub struct FaceApp {
    pub session: Session<TokioTimer>,
    pub config: FaceConfig,
    pub last_step: Instant,
    events: UnboundedReceiver<HostEvent>,
    ticker: JoinHandle<()>,
    // Keeps the timer tasks alive; dropped last.
    _runtime: tokio::runtime::Runtime,
}

impl FaceApp {
    fn new(
        config: FaceConfig,
        mut session: Session<TokioTimer>,
        events: UnboundedReceiver<HostEvent>,
        runtime: tokio::runtime::Runtime,
        ticker: JoinHandle<()>,
    ) -> Self {
        if config.autoplay {
            session.play();
        }
        Self { session, config, last_step: Instant::now(), events, ticker, _runtime: runtime }
    }

    /// Feed queued timer firings and minute ticks to the session.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                HostEvent::TimerFired(ticket) => {
                    if self.session.timer_mut().fire(ticket) {
                        self.session.on_timer();
                    }
                }
                HostEvent::MinuteTick => self.session.on_minute_tick(),
            }
        }
    }
}

impl Drop for FaceApp {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}

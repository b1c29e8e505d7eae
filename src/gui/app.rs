// src/gui/app.rs
use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
        mpsc::Receiver,
    },
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{Settings, consts::WINDOW_TITLE},
    core::StatsClient,
    error::{AppError, Result},
    model::{GameRecord, PlayEvent},
    seasons::{self, Season},
    teams,
};

use super::{
    actions,
    components,
    form::{FormState, Query},
};

/// A finished season search, tagged with the query it ran.
pub type SearchDone = (Query, std::result::Result<Vec<GameRecord>, String>);

/// A finished play-by-play fetch for one game.
pub struct PlayByPlayDone {
    pub game_id: String,
    pub label: String,
    pub result: std::result::Result<Vec<PlayEvent>, String>,
}

/// Play-by-play currently on screen.
pub struct PlayByPlayView {
    pub game_id: String,
    pub label: String,
    pub events: Vec<PlayEvent>,
}

pub fn run(options: eframe::NativeOptions, settings: Settings) -> Result<()> {
    let client = StatsClient::new(&settings)?;
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(client, &settings)))),
    )
    .map_err(|e| AppError::Gui(e.to_string()))
}

pub struct App {
    pub client: StatsClient,

    // dropdown contents, fixed for the session
    pub seasons: Vec<Season>,
    pub teams: Vec<String>,

    // single source of truth for the form (UI thread only)
    pub form: FormState,

    // status line (workers write here while their epoch is current)
    pub status: Arc<Mutex<String>>,
    pub epoch: Arc<AtomicU64>,

    // background work in flight
    pub search_rx: Option<Receiver<SearchDone>>,
    pub pbp_rx: Option<Receiver<PlayByPlayDone>>,

    pub play_by_play: Option<PlayByPlayView>,
}

impl App {
    pub fn new(client: StatsClient, settings: &Settings) -> Self {
        // Blocks startup on one request; falls back to the static list.
        let teams = teams::load_or_fallback(&client, settings.since_year, None);
        let seasons = seasons::generate_seasons(settings.since_year, seasons::today());

        logf!(
            "Init: teams={}, seasons={}..{}",
            teams.len(),
            seasons.first().map(|s| s.to_string()).unwrap_or_default(),
            seasons.last().map(|s| s.to_string()).unwrap_or_default(),
        );

        Self::from_parts(client, seasons, teams)
    }

    /// An idle app over an already-loaded roster.
    pub fn from_parts(client: StatsClient, seasons: Vec<Season>, teams: Vec<String>) -> Self {
        Self {
            client,
            seasons,
            teams,
            form: FormState::default(),
            status: Arc::new(Mutex::new(s!("Choose a year to begin"))),
            epoch: Arc::new(AtomicU64::new(0)),
            search_rx: None,
            pbp_rx: None,
            play_by_play: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Workers started before this call stop writing to the status line.
    pub fn bump_epoch(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    /// Drop the shown play-by-play and abandon any fetch still running.
    pub fn clear_play_by_play(&mut self) {
        if self.pbp_rx.take().is_some() {
            logd!("PlayByPlay: abandoning fetch in flight");
            self.bump_epoch();
        }
        self.play_by_play = None;
    }

    #[inline]
    pub fn busy(&self) -> bool {
        self.search_rx.is_some() || self.pbp_rx.is_some()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_search(self);
        actions::poll_play_by_play(self);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            logf!("UI: Escape pressed, closing");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.busy() {
                    ui.add(egui::Spinner::new().size(14.0));
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(WINDOW_TITLE);
                ui.add_space(8.0);

                components::selectors::draw(ui, self);
                ui.add_space(8.0);

                components::buttons::draw(ui, self);
                ui.add_space(8.0);

                components::results::draw(ui, self);
            });

            if self.play_by_play.is_some() {
                ui.separator();
                components::play_by_play_table::draw(ui, self);
            }
        });

        if self.busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

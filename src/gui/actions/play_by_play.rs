// src/gui/actions/play_by_play.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    gui::{
        app::{App, PlayByPlayDone, PlayByPlayView},
        progress::GuiProgress,
    },
    progress::Progress,
    specs::play_by_play as pbp,
};

pub fn play_by_play(app: &mut App, ctx: &egui::Context) {
    let Some(game) = app.form.selected_game() else {
        app.status("Choose a game first");
        logd!("PlayByPlay: Clicked, but no game is selected");
        return;
    };
    if app.pbp_rx.is_some() {
        logd!("PlayByPlay: Clicked while a fetch is running");
        return;
    }

    let game_id = game.game_id.clone();
    let label = game.label();
    logf!("PlayByPlay: Begin game_id={game_id} ({label})");
    app.status(format!("Loading play-by-play for {label}…"));

    let (tx, rx) = mpsc::channel();
    app.pbp_rx = Some(rx);

    let client = app.client.clone();
    let ctx = ctx.clone();
    let mut prog = GuiProgress::new(app.status.clone(), Some(ctx.clone())).tied_to(&app.epoch);

    thread::spawn(move || {
        prog.begin(1);
        let result = pbp::fetch(&client, &game_id).map_err(|e| e.to_string());
        if result.is_ok() {
            prog.step_done("play-by-play");
        }
        prog.finish();

        let _ = tx.send(PlayByPlayDone { game_id, label, result });
        ctx.request_repaint();
    });
}

pub fn poll_play_by_play(app: &mut App) {
    let polled = match &app.pbp_rx {
        Some(rx) => rx.try_recv(),
        None => return,
    };

    let done = match polled {
        Ok(done) => done,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            loge!("PlayByPlay: worker exited without a result");
            app.pbp_rx = None;
            app.status("Error: play-by-play stopped unexpectedly");
            return;
        }
    };
    app.pbp_rx = None;

    // The game may have changed (or gone) since the fetch started.
    let still_selected = app.form.selected_game().map(|g| g.game_id.as_str());
    if still_selected != Some(done.game_id.as_str()) {
        logd!(
            "PlayByPlay: dropping result for game_id={} (selected: {:?})",
            done.game_id, still_selected
        );
        return;
    }

    match done.result {
        Ok(events) => {
            logf!("PlayByPlay: OK game_id={}, events={}", done.game_id, events.len());
            app.status(format!("{} plays for {}", events.len(), done.label));
            app.play_by_play = Some(PlayByPlayView {
                game_id: done.game_id,
                label: done.label,
                events,
            });
        }
        Err(e) => {
            loge!("PlayByPlay: Error game_id={}: {}", done.game_id, e);
            app.status(format!("Error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Sender};

    use super::*;
    use crate::{
        config::Settings,
        core::StatsClient,
        model::{GameRecord, PlayEvent},
        seasons::Season,
    };

    fn game(id: &str, matchup: &str) -> GameRecord {
        GameRecord {
            season_id: s!("22022"),
            team_id: 1610612744,
            team_abbreviation: s!("GSW"),
            team_name: s!("Golden State Warriors"),
            game_id: s!(id),
            game_date: s!("2023-01-19"),
            matchup: s!(matchup),
            outcome: None,
            points: None,
            plus_minus: None,
        }
    }

    /// Results for GSW vs BOS with the first game picked.
    fn app_with_results() -> App {
        let client = StatsClient::new(&Settings::default()).unwrap();
        let mut app = App::from_parts(
            client,
            vec![Season::new(2022)],
            vec![s!("BOS"), s!("GSW"), s!("LAL")],
        );
        app.form.select_season(Season::new(2022)).unwrap();
        app.form.select_team1("GSW").unwrap();
        app.form.select_team2("BOS").unwrap();
        let q = app.form.begin_search().unwrap();
        app.form
            .finish_search(&q, Ok(vec![game("A", "GSW vs. BOS"), game("B", "GSW @ BOS")]))
            .unwrap();
        app.form.select_game(0).unwrap();
        app
    }

    fn pending(app: &mut App) -> Sender<PlayByPlayDone> {
        let (tx, rx) = mpsc::channel();
        app.pbp_rx = Some(rx);
        tx
    }

    fn done(id: &str) -> PlayByPlayDone {
        PlayByPlayDone {
            game_id: s!(id),
            label: format!("game {id}"),
            result: Ok(vec![PlayEvent::default(), PlayEvent::default()]),
        }
    }

    #[test]
    fn result_for_selected_game_is_shown() {
        let mut app = app_with_results();
        let tx = pending(&mut app);
        tx.send(done("A")).unwrap();

        poll_play_by_play(&mut app);
        assert!(app.pbp_rx.is_none());
        let view = app.play_by_play.as_ref().unwrap();
        assert_eq!(view.game_id, "A");
        assert_eq!(view.events.len(), 2);
    }

    #[test]
    fn result_for_a_previous_game_is_dropped() {
        let mut app = app_with_results();
        let tx = pending(&mut app);

        app.form.select_game(1).unwrap();
        tx.send(done("A")).unwrap();
        poll_play_by_play(&mut app);

        assert!(app.pbp_rx.is_none());
        assert!(app.play_by_play.is_none());
    }

    #[test]
    fn result_after_changing_team2_is_dropped() {
        let mut app = app_with_results();
        let tx = pending(&mut app);

        app.form.select_team2("LAL").unwrap();
        tx.send(done("A")).unwrap();
        poll_play_by_play(&mut app);

        assert_eq!(app.form.team2(), Some("LAL"));
        assert!(app.form.outcome().is_none());
        assert!(app.play_by_play.is_none());
    }

    #[test]
    fn clearing_abandons_the_fetch_in_flight() {
        let mut app = app_with_results();
        let tx = pending(&mut app);

        app.clear_play_by_play();
        assert!(app.pbp_rx.is_none());
        assert_eq!(app.epoch.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert!(tx.send(done("A")).is_err(), "receiver is gone");
    }
}

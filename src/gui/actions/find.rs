// src/gui/actions/find.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    gui::{app::App, form::FormState, progress::GuiProgress},
    matchups,
};

pub fn find(app: &mut App, ctx: &egui::Context) {
    let query = match app.form.begin_search() {
        Ok(q) => q,
        Err(e) => {
            logd!("Find: Clicked, but {e}");
            app.status("Please select Year, Team 1, and Team 2");
            return;
        }
    };

    logf!("Find: Begin season={} teams={} vs {}", query.season, query.team1, query.team2);

    // Old game is gone from the dropdown; so is its play-by-play.
    app.clear_play_by_play();
    app.status(format!("Searching {} for {} vs {}…", query.season, query.team1, query.team2));

    let (tx, rx) = mpsc::channel();
    app.search_rx = Some(rx);

    let client = app.client.clone();
    let ctx = ctx.clone();
    let mut prog = GuiProgress::new(app.status.clone(), Some(ctx.clone())).tied_to(&app.epoch);

    thread::spawn(move || {
        // → This is where the search happens ←
        let res = matchups::find_matchups(
            &client,
            query.season,
            &query.team1,
            &query.team2,
            Some(&mut prog),
        )
        .map_err(|e| e.to_string());

        // Receiver is gone after a reset; nothing to do then.
        let _ = tx.send((query, res));
        ctx.request_repaint();
    });
}

/// Pick up a finished search, if any.
pub fn poll_search(app: &mut App) {
    let polled = match &app.search_rx {
        Some(rx) => rx.try_recv(),
        None => return,
    };

    let (query, res) = match polled {
        Ok(done) => done,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            loge!("Find: worker exited without a result");
            app.search_rx = None;
            let FormState::Searching(q) = &app.form else { return };
            (q.clone(), Err(s!("search stopped unexpectedly")))
        }
    };
    app.search_rx = None;

    let msg = match &res {
        Ok(games) if games.is_empty() => s!("No games found"),
        Ok(games) => format!("Found {} game(s)", matchups::distinct_games(games).len()),
        Err(e) => format!("Error: {e}"),
    };

    match app.form.finish_search(&query, res) {
        Ok(()) => {
            logf!("Find: Done {} vs {} in {}: {}", query.team1, query.team2, query.season, msg);
            app.status(msg);
        }
        Err(e) => logd!("Find: dropping stale result ({e})"),
    }
}

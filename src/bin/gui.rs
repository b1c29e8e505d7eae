// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use nba_match_finder::{
    config::{Settings, consts::WINDOW_TITLE},
    gui, log,
};

/// Basketball drawn in code: orange disc, dark seams.
fn app_icon() -> IconData {
    const SIZE: u32 = 64;
    let c = (SIZE as f32 - 1.0) / 2.0;
    let orange = image::Rgba([230, 110, 30, 255]);
    let seam = image::Rgba([40, 25, 15, 255]);

    let img = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let (dx, dy) = (x as f32 - c, y as f32 - c);
        let r = (dx * dx + dy * dy).sqrt();
        if r > c {
            return image::Rgba([0, 0, 0, 0]);
        }
        // side seams: arcs of circles centred just outside the ball
        let side = ((dx.abs() - c * 1.25).powi(2) + dy * dy).sqrt();
        if r > c - 2.0 || dx.abs() < 1.2 || dy.abs() < 1.2 || (side - c * 0.8).abs() < 1.2 {
            seam
        } else {
            orange
        }
    });

    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Config: {e}; using defaults");
        Settings::default()
    });

    // Hold the guard for the whole run so buffered log lines get flushed.
    let _log_guard = log::init(&settings, false)
        .map_err(|e| eprintln!("{e}"))
        .ok();

    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_fullscreen(true)
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, settings) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

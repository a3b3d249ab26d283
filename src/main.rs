//! Statue Lift entry point
//!
//! Headless run of the statue puzzle: loads settings (JSON path as the first
//! argument, built-in scene otherwise), replays scripted contacts on a fixed
//! timestep and logs what happens.

use std::collections::BTreeMap;
use std::process::ExitCode;

use glam::Vec3;

use statue_lift::Settings;
use statue_lift::audio::LogAudio;
use statue_lift::consts::*;
use statue_lift::settings::PuzzleSettings;
use statue_lift::sim::{
    Contact, DecorationId, Expiry, ObjectId, PuzzleController, SurfaceLift, TickInput, tick,
};
use statue_lift::ui::RevealText;

/// Simulated render frame length (30 fps host)
const FRAME_DT: f32 = 1.0 / 30.0;
/// Seconds the reveal text stays up
const REVEAL_SECONDS: f32 = 3.0;

fn demo_settings() -> Settings {
    let tags = ["Fish", "Bird", "Snake", "Moon", "Sun"];
    let mut settings = Settings::default();
    settings.puzzle = PuzzleSettings {
        allowed_tags: tags.map(String::from).to_vec(),
        linked_statues: (1..=tags.len() as u32).map(|i| Some(DecorationId(i))).collect(),
        required_sequence: ["Snake", "Fish", "Bird"].map(String::from).to_vec(),
        reset_object: Some(ObjectId(100)),
        ..Default::default()
    };
    settings
}

/// Statues in a row, one per linked id
fn placements(puzzle: &PuzzleSettings) -> BTreeMap<DecorationId, Vec3> {
    puzzle
        .linked_statues
        .iter()
        .flatten()
        .enumerate()
        .map(|(i, id)| (*id, Vec3::new(i as f32 * 2.0, 0.5, 6.0)))
        .collect()
}

/// Touch the first statue, reset, then play the full sequence
fn script(puzzle: &PuzzleSettings) -> Vec<Contact> {
    let mut contacts = Vec::new();
    if let Some(first) = puzzle.required_sequence.first() {
        contacts.push(Contact::tagged(first.clone()));
    }
    contacts.push(Contact::tagged("Seaweed"));
    contacts.push(Contact::terrain(puzzle.terrain_tag.clone()));
    contacts.push(Contact::tagged(puzzle.reset_tag.clone()));
    contacts.extend(puzzle.required_sequence.iter().cloned().map(Contact::tagged));
    contacts
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Statue Lift (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => demo_settings(),
    };

    let relic = SurfaceLift::new(
        Vec3::new(0.0, -3.0, 0.0),
        &settings.surface,
        Box::new(LogAudio::new()),
        RevealText::new("The relic has risen"),
    );
    let mut scene = PuzzleController::new(
        settings.puzzle.clone(),
        &placements(&settings.puzzle),
        Box::new(LogAudio::new()),
        relic,
    );
    if let Some(err) = scene.config_error() {
        log::error!("Scene configuration rejected: {}", err);
        return ExitCode::FAILURE;
    }

    let mut script = script(&settings.puzzle).into_iter();
    let mut expiry: Option<Expiry> = None;
    let mut accumulator = 0.0;
    let mut frame = 0u32;

    // Deliver one scripted contact every second of scene time
    while frame < 30 * 60 {
        let mut input = TickInput::default();
        if frame % 30 == 0 && !scene.is_animating() {
            input.contacts.extend(script.next());
        }

        accumulator += FRAME_DT;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut scene, &input, SIM_DT);
            // Contacts are delivered once per frame
            input.contacts.clear();
            accumulator -= SIM_DT;
            substeps += 1;
        }

        for event in scene.drain_events() {
            log::info!("frame {}: {:?}", frame, event);
        }

        let text = scene.surface().text();
        if text.is_visible() && expiry.is_none() {
            println!("{}", text.text());
            expiry = Some(Expiry::new(REVEAL_SECONDS));
        }
        if let Some(timer) = expiry.as_mut() {
            if timer.tick(FRAME_DT) {
                scene.surface_mut().text_mut().hide();
                log::info!("Reveal text hidden");
                break;
            }
        }

        frame += 1;
    }

    if scene.is_activated() && scene.surface().is_surfaced() {
        log::info!("Puzzle solved in {} frames", frame);
        ExitCode::SUCCESS
    } else {
        log::warn!("Puzzle not solved, progress {:?}", scene.progress());
        ExitCode::FAILURE
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web
}

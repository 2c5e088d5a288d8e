//! Motion Sandbox - Headless Locomotion Demo
//!
//! Run with: `cargo run --bin motion-sandbox [settings.json]`
//!
//! Drives one character through a scripted session over the flat ground
//! solver and prints its motion state as it goes: warm up, run, a held
//! jump, an aborted ascent, braking to a stop, and a camera orbit. With
//! `RUST_LOG=debug` the locomotion transitions and jump launches from the
//! core are logged between the status lines.
//!
//! Passing a JSON settings path swaps in custom tuning for the session,
//! e.g. `{ "movement": { "jump_launch_speed": 12.0 } }`.

use std::path::Path;

use glam::Vec2;

use strider_motion::camera::FollowCamera;
use strider_motion::input::{InputSample, InputSource};
use strider_motion::physics::PlanarGround;
use strider_motion::settings::MotionSettings;
use strider_motion::sim::Simulation;

const FRAME_DT: f32 = 1.0 / 60.0;
const STATUS_EVERY_FRAMES: usize = 15;

/// Input source that replays a pre-built list of per-frame samples.
struct ScriptedInput {
    frames: Vec<InputSample>,
    cursor: usize,
}

impl ScriptedInput {
    fn new(frames: Vec<InputSample>) -> Self {
        Self { frames, cursor: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> InputSample {
        let frame = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        frame
    }
}

/// The scripted session: phase label and per-frame input, 60 fps.
fn session_script() -> Vec<(&'static str, usize, InputSample)> {
    let idle = InputSample::default();
    let run = InputSample::new(Vec2::new(0.0, 1.0), Vec2::ZERO, false);
    let run_jump = InputSample::new(Vec2::new(0.0, 1.0), Vec2::ZERO, true);
    let orbit = InputSample::new(Vec2::ZERO, Vec2::new(15.0, 0.0), false);

    // Jump phases release the button before touchdown; holding it across
    // a landing would launch again straight away.
    vec![
        ("warm-up", 30, idle),
        ("run", 90, run),
        ("jump, button held", 25, run_jump),
        ("fall out", 60, run),
        ("run-up", 15, run),
        ("jump, button tapped", 6, run_jump),
        ("abort out", 60, run),
        ("brake", 60, idle),
        ("orbit camera", 60, orbit),
    ]
}

fn load_settings() -> MotionSettings {
    match std::env::args().nth(1) {
        Some(path) => match MotionSettings::from_json_file(Path::new(&path)) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("failed to load settings from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => MotionSettings::default(),
    }
}

fn print_status(time_s: f32, sim: &Simulation) {
    let character = sim.character();
    let position = character.position();
    println!(
        "  {:5.2}s  pos ({:6.2} {:5.2} {:7.2})  h {:4.2} m/s  v {:6.2} m/s  yaw {:6.1}  {:?}",
        time_s,
        position.x,
        position.y,
        position.z,
        character.horizontal_speed(),
        character.vertical_speed(),
        character.control_rotation().yaw,
        character.locomotion_state(),
    );
}

fn main() {
    env_logger::init();

    println!("=== Motion Sandbox ===");
    let settings = load_settings();
    println!(
        "max speed {} m/s, jump {} m/s, gravity {} m/s^2",
        settings.movement.max_horizontal_speed,
        settings.movement.jump_launch_speed,
        settings.gravity.gravity
    );

    let script = session_script();
    let mut frames = Vec::new();
    let mut labels = Vec::new();
    for (label, count, input) in &script {
        for _ in 0..*count {
            frames.push(*input);
            labels.push(*label);
        }
    }

    let mut sim = Simulation::new(
        settings,
        Box::new(ScriptedInput::new(frames)),
        Box::new(PlanarGround::new()),
        Box::new(FollowCamera::new()),
    );

    let mut time_s = 0.0;
    let mut ticks_total = 0usize;
    let mut current_phase = "";
    for (frame, label) in labels.iter().enumerate() {
        if *label != current_phase {
            current_phase = *label;
            println!("--- {current_phase} ---");
        }

        ticks_total += sim.advance(FRAME_DT);
        time_s += FRAME_DT;

        if (frame + 1) % STATUS_EVERY_FRAMES == 0 {
            print_status(time_s, &sim);
        }
    }

    let final_position = sim.character().position();
    println!("=== Session Complete ===");
    println!(
        "{} frames, {} fixed ticks, travelled {:.2} m, final state {:?}",
        labels.len(),
        ticks_total,
        final_position.length(),
        sim.character().locomotion_state(),
    );
}

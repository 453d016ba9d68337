//! Skyhop - a small arcade flight toy: one aircraft, one airfield, a chase camera.

mod config;
mod events;
mod sim;

use anyhow::Result;
use engine_core::Time;
use input::{InputState, KeyBindings};
use renderer::{ChaseCamera, CONTROLS_HELP, PANEL_TITLE};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Fullscreen, Window, WindowId},
};

use config::GameConfig;
use sim::Simulation;

/// Frames between window title refreshes.
const TITLE_REFRESH_FRAMES: u64 = 6;

/// Main game state: the simulation plus everything that feeds or shows it.
pub struct GameState {
    window: Arc<Window>,
    time: Time,
    input: InputState,
    bindings: KeyBindings,
    sim: Simulation,
    camera: ChaseCamera,
    running: bool,
}

impl GameState {
    fn new(window: Arc<Window>, config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let mut time = Time::new();
        time.set_fixed_rate(config.tick_rate_hz);
        time.set_max_backlog_ticks(config.max_ticks_per_frame);

        let seed = config.seed.unwrap_or_else(rand::random);
        let sim = Simulation::new(config.flight, config.controls, seed);

        let size = window.inner_size();
        let camera = ChaseCamera::new(size.width, size.height);

        Ok(Self {
            window,
            time,
            input: InputState::new(),
            bindings: KeyBindings::default(),
            sim,
            camera,
            running: true,
        })
    }

    /// Poll input once, then run however many fixed ticks the frame owes.
    fn update(&mut self) {
        self.time.update();

        let controls = self.input.control_input(&self.bindings);
        if controls.quit {
            log::info!("Quit requested");
            self.running = false;
            return;
        }

        while self.time.should_fixed_update() {
            self.sim.tick(&controls);
        }
        self.input.begin_frame();
    }

    /// Show the current frame. Drawing the scene is up to whatever renders the
    /// frame snapshot; here the instruments go to the window title and the log.
    fn present(&mut self) {
        let frame = self.sim.frame(&self.camera);
        if self.time.frame_count() % TITLE_REFRESH_FRAMES == 0 {
            self.window
                .set_title(&format!("Skyhop | {}", frame.panel.summary()));
        }
        log::trace!(
            "tick {} at {:?} eye {:?} {}: {}",
            frame.tick,
            frame.state.position,
            frame.camera.eye,
            PANEL_TITLE,
            frame.panel.lines().join(" | ")
        );
        if self.time.frame_count() % 600 == 0 {
            log::debug!(
                "{:.0} fps, {} ticks, throttle {:.2}, {} trees, {} flowers",
                self.time.fps(),
                self.sim.ticks(),
                self.sim.state().throttle,
                self.sim.vegetation().trees.len(),
                self.sim.vegetation().flowers.len()
            );
        }
    }
}

/// Application handler for winit.
struct App {
    state: Option<GameState>,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() {
            let config = GameConfig::load();
            let mut window_attrs = Window::default_attributes()
                .with_title("Skyhop")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    config.window_width,
                    config.window_height,
                ));
            if config.fullscreen {
                window_attrs = window_attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }

            let window = match event_loop.create_window(window_attrs) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            match GameState::new(window.clone(), &config) {
                Ok(s) => {
                    self.state = Some(s);
                    window.request_redraw();
                }
                Err(e) => {
                    log::error!("Failed to initialize game: {:#}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if state.handle_window_event(event) || !state.running {
                event_loop.exit();
            }
        }
    }
}

fn print_controls(bindings: &KeyBindings) {
    let rows = [
        ("Throttle up / down", [&bindings.throttle_up[..], &bindings.throttle_down[..]].concat()),
        ("Yaw left / right", [&bindings.yaw_left[..], &bindings.yaw_right[..]].concat()),
        ("Nose up / down", [&bindings.pitch_up[..], &bindings.pitch_down[..]].concat()),
        ("Roll left / right", [&bindings.roll_left[..], &bindings.roll_right[..]].concat()),
        ("Restart", bindings.reset.clone()),
        ("Quit", bindings.quit.clone()),
    ];

    println!("╔══════════════════════════════════════════╗");
    println!("║ {:<40} ║", "SKYHOP");
    println!("╠══════════════════════════════════════════╣");
    for (action, keys) in rows {
        println!("║   {:<20}{:>17}  ║", action, KeyBindings::describe(&keys));
    }
    println!("╠══════════════════════════════════════════╣");
    for line in CONTROLS_HELP.iter().skip_while(|l| !l.is_empty()).skip(1) {
        println!("║   {:<38} ║", line);
    }
    println!("╚══════════════════════════════════════════╝");
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    print_controls(&KeyBindings::default());

    log::info!("Starting Skyhop");

    let event_loop = EventLoop::new()?;
    // The simulation ticks from the redraw loop, so keep it spinning.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}

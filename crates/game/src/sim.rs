//! The simulation owner: flight state, scenery and the random source behind it.

use engine_core::{ControlInput, TransformRaw, GROUND_LEVEL, RUNWAY};
use physics::{
    apply_controls, step, ControlOutcome, ControlRates, FlightParams, FlightState, StepOutcome,
};
use procgen::Vegetation;
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::{CameraFrame, CameraUniform, ChaseCamera, InstrumentPanel};

/// What a call to [`Simulation::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The reset control was held; the world was rebuilt and nothing else ran.
    Reset,
    Stepped(StepOutcome),
}

/// Copy of everything presentation needs for one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub tick: u64,
    pub state: FlightState,
    pub camera: CameraFrame,
    pub camera_uniform: CameraUniform,
    /// Aircraft model matrix, ready for upload.
    pub aircraft: TransformRaw,
    pub panel: InstrumentPanel,
}

pub struct Simulation {
    state: FlightState,
    vegetation: Vegetation,
    rng: StdRng,
    params: FlightParams,
    rates: ControlRates,
    ticks: u64,
}

impl Simulation {
    pub fn new(params: FlightParams, rates: ControlRates, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let vegetation = Vegetation::generate(&mut rng);
        log::info!(
            "Scenery seed {}: {} trees, {} flowers",
            seed,
            vegetation.trees.len(),
            vegetation.flowers.len()
        );
        Self {
            state: FlightState::default(),
            vegetation,
            rng,
            params,
            rates,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn vegetation(&self) -> &Vegetation {
        &self.vegetation
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Put the aircraft back at the start and grow fresh scenery.
    pub fn reset(&mut self) {
        if self.state != FlightState::default() {
            log::info!("Restarting flight");
        }
        self.state = FlightState::default();
        self.vegetation = Vegetation::generate(&mut self.rng);
    }

    /// Run one fixed tick: controls, then the flight model.
    pub fn tick(&mut self, input: &ControlInput) -> TickOutcome {
        self.ticks += 1;

        match apply_controls(&mut self.state, input, &self.rates) {
            ControlOutcome::Reset => {
                self.reset();
                return TickOutcome::Reset;
            }
            ControlOutcome::Ignored if !input.is_neutral() => {
                log::trace!("Controls ignored, aircraft is wrecked");
            }
            _ => {}
        }

        let was_airborne = self.state.position.y > GROUND_LEVEL;
        let (next, outcome) = step(&self.state, &self.params);
        self.state = next;

        match outcome {
            StepOutcome::Crashed => log::warn!(
                "Crashed at ({:.1}, {:.1}) doing {:.2} (pitch {:.1}°, roll {:.1}°)",
                next.position.x,
                next.position.z,
                next.speed,
                next.rotation.pitch,
                next.rotation.roll
            ),
            StepOutcome::Landed if was_airborne => log::info!(
                "Touchdown {} at ({:.1}, {:.1}), rolling at {:.2}",
                if RUNWAY.contains(next.position.x, next.position.z) {
                    "on the runway"
                } else {
                    "off field"
                },
                next.position.x,
                next.position.z,
                next.speed
            ),
            _ => {}
        }

        TickOutcome::Stepped(outcome)
    }

    /// Snapshot for presentation. The simulation keeps running on its own copy.
    pub fn frame(&self, camera: &ChaseCamera) -> Frame {
        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update(camera, &self.state);
        Frame {
            tick: self.ticks,
            state: self.state,
            camera: camera.frame(&self.state),
            camera_uniform,
            aircraft: self.state.model_transform().into(),
            panel: InstrumentPanel::from_state(&self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Vec3;
    use physics::Attitude;

    fn sim() -> Simulation {
        Simulation::new(FlightParams::default(), ControlRates::default(), 1234)
    }

    fn holding(f: impl FnOnce(&mut ControlInput)) -> ControlInput {
        let mut input = ControlInput::default();
        f(&mut input);
        input
    }

    fn vegetation_within_bounds(veg: &Vegetation) -> bool {
        veg.trees.len() <= 10 && veg.flowers.len() <= 20
    }

    #[test]
    fn reset_twice_matches_reset_once() {
        let mut sim = sim();
        let climb = holding(|i| i.throttle_up = true);
        for _ in 0..50 {
            sim.tick(&climb);
        }
        assert_ne!(*sim.state(), FlightState::default());

        sim.reset();
        let once = *sim.state();
        assert!(vegetation_within_bounds(sim.vegetation()));
        sim.reset();
        assert_eq!(*sim.state(), once);
        assert_eq!(once, FlightState::default());
        assert!(vegetation_within_bounds(sim.vegetation()));
    }

    #[test]
    fn reset_control_skips_the_rest_of_the_tick() {
        let mut sim = sim();
        let outcome = sim.tick(&holding(|i| {
            i.reset = true;
            i.throttle_up = true;
        }));
        assert_eq!(outcome, TickOutcome::Reset);
        // No gravity, no throttle: the tick ended at the reset.
        assert_eq!(*sim.state(), FlightState::default());
    }

    #[test]
    fn throttle_takes_a_hundred_ticks_to_reach_half() {
        let mut sim = sim();
        let input = holding(|i| i.throttle_up = true);
        for _ in 0..100 {
            sim.tick(&input);
        }
        assert!((sim.state().throttle - 0.5).abs() < 1e-4);
        assert!(!sim.state().crashed);
    }

    #[test]
    fn idle_aircraft_settles_on_the_ground() {
        let mut sim = sim();
        let idle = ControlInput::default();
        let mut landed = false;
        for _ in 0..400 {
            if sim.tick(&idle) == TickOutcome::Stepped(StepOutcome::Landed) {
                landed = true;
            }
        }
        assert!(landed);
        assert!(!sim.state().crashed);
        assert_eq!(sim.state().position.y, GROUND_LEVEL);
    }

    #[test]
    fn wreck_stays_put_until_reset() {
        let mut sim = sim();
        sim.state = FlightState {
            position: Vec3::new(5.0, -4.99, 5.0),
            speed: 1.5,
            throttle: 0.75,
            ..Default::default()
        };
        assert_eq!(
            sim.tick(&ControlInput::default()),
            TickOutcome::Stepped(StepOutcome::Crashed)
        );
        let wreck = *sim.state();
        assert_eq!(wreck.speed, 1.5);

        let full_power = holding(|i| {
            i.throttle_up = true;
            i.pitch_up = true;
        });
        for n in 1..=30 {
            assert_eq!(sim.tick(&full_power), TickOutcome::Stepped(StepOutcome::Wreckage));
            let s = sim.state();
            assert_eq!(s.position, wreck.position);
            assert_eq!(s.speed, wreck.speed);
            assert_eq!(s.throttle, wreck.throttle);
            assert!((s.crash_effect - 0.1 * n as f32).abs() < 1e-4);
            assert!((s.rotation.roll - (wreck.rotation.roll + n as f32)).abs() < 1e-4);
        }

        assert_eq!(sim.tick(&holding(|i| i.reset = true)), TickOutcome::Reset);
        assert!(!sim.state().crashed);
    }

    #[test]
    fn same_seed_same_scenery() {
        assert_eq!(sim().vegetation(), sim().vegetation());
    }

    #[test]
    fn frame_is_a_detached_copy() {
        let mut sim = sim();
        sim.state = FlightState {
            position: Vec3::new(0.0, 20.0, 0.0),
            rotation: Attitude::new(0.0, 0.0, 0.0),
            speed: 1.0,
            throttle: 0.5,
            ..Default::default()
        };
        let camera = ChaseCamera::default();
        let frame = sim.frame(&camera);
        sim.tick(&ControlInput::default());

        assert_eq!(frame.state.position, Vec3::new(0.0, 20.0, 0.0));
        assert_ne!(sim.state().position, frame.state.position);
        assert!((frame.camera.eye - Vec3::new(0.0, 25.0, -15.0)).length() < 1e-5);
        assert_eq!(frame.camera_uniform.position, [0.0, 25.0, -15.0, 1.0]);
        // Level flight: the model matrix is a pure translation.
        assert_eq!(frame.aircraft.model[3], [0.0, 20.0, 0.0, 1.0]);
        assert_eq!(frame.panel.altitude, 25.0);
    }
}

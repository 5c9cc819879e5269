//! The visualizer session: settings, the current array, the active run,
//! and the sink everything is presented through.
//!
//! [`Controller`] is the only owner of mutable visualizer state. Hosts
//! drive it through its methods or through [`ControlEvent`]s, and it
//! reports every visible change to its [`RenderSink`]. It never sleeps;
//! pacing belongs to [`realtime`](crate::realtime).

use std::time::Duration;

use indexmap::IndexSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sortviz_algos::{generate, generate_array, pseudocode};
use sortviz_core::{AlgorithmKind, ArrayShape, PlaybackState, Value};
use sortviz_render::{render, Frame};
use tracing::{debug, info};

use crate::config::{validate_size, ConfigError, Speed, VisualizerConfig};
use crate::metrics::RunMetrics;
use crate::player::{Outcome, Player, PlayerEvent};
use crate::sink::{RenderSink, Status};

// ── ControlEvent ───────────────────────────────────────────────────

/// One input from the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// Start a run from the current array.
    Start,
    /// Pause or resume the active run.
    TogglePause,
    /// Apply one action, starting a run if none is active.
    Step,
    /// Abandon the active run.
    Cancel,
    /// Generate a fresh array.
    NewArray,
    /// Change the array size and regenerate.
    SetSize(usize),
    /// Change the array shape and regenerate.
    SetShape(ArrayShape),
    /// Select another algorithm.
    SetAlgorithm(AlgorithmKind),
    /// Change the playback pace.
    SetSpeed(Speed),
    /// Stop the driver loop.
    Quit,
}

// ── Controller ─────────────────────────────────────────────────────

/// Owns a visualizer session and presents it through `S`.
///
/// # Examples
///
/// ```
/// use sortviz_core::PlaybackState;
/// use sortviz_engine::{Controller, NullSink, VisualizerConfig};
///
/// let config = VisualizerConfig { size: 10, ..VisualizerConfig::default() };
/// let mut ctl = Controller::new(config, NullSink).unwrap();
///
/// ctl.start();
/// while ctl.state() == PlaybackState::Running {
///     ctl.tick(ctl.delay());
/// }
/// assert_eq!(ctl.state(), PlaybackState::Completed);
/// assert!(ctl.values().windows(2).all(|w| w[0] <= w[1]));
/// ```
pub struct Controller<S: RenderSink> {
    config: VisualizerConfig,
    rng: ChaCha8Rng,
    values: Vec<Value>,
    player: Option<Player>,
    sink: S,
}

impl<S: RenderSink> Controller<S> {
    /// Validate `config`, generate the first array and present the
    /// algorithm's pseudocode, then the initial frame, zeroed metrics and
    /// `Ready`.
    pub fn new(config: VisualizerConfig, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let values = generate_array(config.shape, config.size, &mut rng);
        let mut ctl = Self {
            config,
            rng,
            values,
            player: None,
            sink,
        };
        ctl.sink.code(ctl.config.algorithm, pseudocode(ctl.config.algorithm));
        ctl.present_idle();
        Ok(ctl)
    }

    /// Current settings.
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// The current array. During a run this is the array the run started
    /// from; after it finishes, the run's final state.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The most recent run, if one was started since the array changed.
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Playback state of the most recent run, or idle.
    pub fn state(&self) -> PlaybackState {
        self.player
            .as_ref()
            .map_or(PlaybackState::Idle, Player::state)
    }

    /// Whether a run is running or paused.
    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }

    /// Metrics of the most recent run, or zero.
    pub fn metrics(&self) -> RunMetrics {
        self.player
            .as_ref()
            .map(Player::metrics)
            .unwrap_or_default()
    }

    /// The frame currently shown.
    pub fn frame(&self) -> Frame {
        match &self.player {
            Some(player) => player.frame(),
            None => render(&self.values, None, &IndexSet::new()),
        }
    }

    /// Delay between two applied actions at the current speed.
    pub fn delay(&self) -> Duration {
        self.config.speed.delay()
    }

    /// The sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the controller, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // ── Array and settings ─────────────────────────────────────────

    /// Replace the array with a fresh one. Ignored while a run is active;
    /// returns whether it happened.
    pub fn generate_array(&mut self) -> bool {
        if self.is_active() {
            debug!("new array ignored during a run");
            return false;
        }
        self.values = generate_array(self.config.shape, self.config.size, &mut self.rng);
        self.player = None;
        debug!(size = self.config.size, shape = %self.config.shape, "generated array");
        self.present_idle();
        true
    }

    /// Change the array size and regenerate. Out-of-range sizes are
    /// rejected; valid changes are ignored while a run is active.
    pub fn set_size(&mut self, size: usize) -> Result<bool, ConfigError> {
        validate_size(size)?;
        if self.is_active() {
            debug!(size, "resize ignored during a run");
            return Ok(false);
        }
        self.config.size = size;
        Ok(self.generate_array())
    }

    /// Change the array shape and regenerate. Ignored while a run is active.
    pub fn set_shape(&mut self, shape: ArrayShape) -> bool {
        if self.is_active() {
            debug!(%shape, "shape change ignored during a run");
            return false;
        }
        self.config.shape = shape;
        self.generate_array()
    }

    /// Select the algorithm used by the next run. Ignored while a run is
    /// active.
    pub fn set_algorithm(&mut self, algorithm: AlgorithmKind) -> bool {
        if self.is_active() {
            debug!(%algorithm, "algorithm change ignored during a run");
            return false;
        }
        self.config.algorithm = algorithm;
        self.sink.code(algorithm, pseudocode(algorithm));
        true
    }

    /// Change the pace. Allowed at any time; applies from the next tick.
    pub fn set_speed(&mut self, speed: Speed) -> Result<(), ConfigError> {
        speed.validate()?;
        self.config.speed = speed;
        debug!(%speed, "speed changed");
        Ok(())
    }

    // ── Playback ───────────────────────────────────────────────────

    /// Start a run from the current array.
    pub fn start(&mut self) -> Outcome {
        if self.is_active() {
            return Outcome::ignored(self.state());
        }
        self.begin_run();
        self.forward(PlayerEvent::Start)
    }

    /// Pause or resume the active run.
    pub fn toggle_pause(&mut self) -> Outcome {
        self.forward(PlayerEvent::TogglePause)
    }

    /// Apply exactly one action and pause, starting a run if none is
    /// active.
    pub fn step(&mut self) -> Outcome {
        if !self.is_active() {
            self.begin_run();
        }
        self.forward(PlayerEvent::Step)
    }

    /// Abandon the active run, leaving its partial state on screen.
    pub fn cancel(&mut self) -> Outcome {
        self.forward(PlayerEvent::Cancel)
    }

    /// Report that `dt` of running time passed.
    pub fn tick(&mut self, dt: Duration) -> Outcome {
        self.forward(PlayerEvent::Tick(dt))
    }

    /// Apply one control-surface input. [`ControlEvent::Quit`] is the
    /// driver's business and does nothing here.
    pub fn handle(&mut self, event: ControlEvent) -> Result<(), ConfigError> {
        match event {
            ControlEvent::Start => {
                self.start();
            }
            ControlEvent::TogglePause => {
                self.toggle_pause();
            }
            ControlEvent::Step => {
                self.step();
            }
            ControlEvent::Cancel => {
                self.cancel();
            }
            ControlEvent::NewArray => {
                self.generate_array();
            }
            ControlEvent::SetSize(size) => {
                self.set_size(size)?;
            }
            ControlEvent::SetShape(shape) => {
                self.set_shape(shape);
            }
            ControlEvent::SetAlgorithm(algorithm) => {
                self.set_algorithm(algorithm);
            }
            ControlEvent::SetSpeed(speed) => self.set_speed(speed)?,
            ControlEvent::Quit => {}
        }
        Ok(())
    }

    fn begin_run(&mut self) {
        let algorithm = self.config.algorithm;
        let log = generate(algorithm, &self.values);
        info!(%algorithm, size = self.values.len(), actions = log.len(), "run started");
        self.player = Some(Player::new(&self.values, log));
    }

    fn forward(&mut self, event: PlayerEvent) -> Outcome {
        let Some(player) = self.player.as_mut() else {
            return Outcome::ignored(PlaybackState::Idle);
        };
        let outcome = player.handle(event);
        if outcome.is_ignored() {
            debug!(?event, state = %outcome.before, "event ignored");
            return outcome;
        }

        let status = match (outcome.after, &outcome.applied) {
            (PlaybackState::Completed, _) => Status::Completed,
            (PlaybackState::Cancelled, _) => Status::Cancelled,
            (_, Some(action)) => Status::for_action(action),
            (PlaybackState::Paused, None) => Status::Paused,
            (_, None) => Status::Running,
        };

        if outcome.after.is_terminal() {
            let metrics = player.metrics();
            self.values = player.visual().values().to_vec();
            info!(state = %outcome.after, %metrics, "run finished");
        }

        let frame = player.frame();
        let metrics = player.metrics();
        self.sink.render(&frame);
        self.sink.metrics(&metrics);
        self.sink.status(status);
        outcome
    }

    fn present_idle(&mut self) {
        let frame = render(&self.values, None, &IndexSet::new());
        self.sink.render(&frame);
        self.sink.metrics(&RunMetrics::default());
        self.sink.status(Status::Ready);
    }
}

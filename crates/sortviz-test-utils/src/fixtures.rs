//! Reusable arrays, configs and playback helpers.
//!
//! - [`EXAMPLE`] and [`EXAMPLE_BUBBLE`]: the four-element bubble sort
//!   walkthrough.
//! - [`config()`]: a valid config with a fixed seed.
//! - [`play_straight()`] and [`play_interrupted()`]: run a player to its
//!   end with and without pauses.

use std::time::Duration;

use sortviz_algos::generate;
use sortviz_core::{AlgorithmKind, PlaybackState, Value};
use sortviz_engine::{Controller, Player, PlayerEvent, RenderSink, Speed, VisualizerConfig};

/// Four values whose bubble sort log is small enough to write out.
pub const EXAMPLE: [Value; 4] = [5, 3, 8, 1];

/// Every action bubble sort records for [`EXAMPLE`], in order.
pub const EXAMPLE_BUBBLE: [&str; 14] = [
    "compare 0 1",
    "swap 0 1 [3, 5, 8, 1]",
    "compare 1 2",
    "compare 2 3",
    "swap 2 3 [3, 5, 1, 8]",
    "set-sorted 3",
    "compare 0 1",
    "compare 1 2",
    "swap 1 2 [3, 1, 5, 8]",
    "set-sorted 2",
    "compare 0 1",
    "swap 0 1 [1, 3, 5, 8]",
    "set-sorted 1",
    "set-sorted 0",
];

/// A valid config of `size` elements with zero delay and a fixed seed.
pub fn config(algorithm: AlgorithmKind, size: usize, seed: u64) -> VisualizerConfig {
    VisualizerConfig {
        size,
        algorithm,
        speed: Speed::DelayMs(0),
        seed,
        ..VisualizerConfig::default()
    }
}

/// Tick `controller` until its run is no longer running. Each tick
/// reports one millisecond.
pub fn finish<S: RenderSink>(controller: &mut Controller<S>) {
    while controller.state() == PlaybackState::Running {
        controller.tick(Duration::from_millis(1));
    }
}

/// Play `kind` on `values` start to end without interruption.
pub fn play_straight(kind: AlgorithmKind, values: &[Value]) -> Player {
    let mut player = Player::new(values, generate(kind, values));
    player.handle(PlayerEvent::Start);
    while player.state() == PlaybackState::Running {
        player.handle(PlayerEvent::Tick(Duration::from_millis(1)));
    }
    player
}

/// Play `kind` on `values`, cycling through `pattern` instead of plain
/// ticks until the run finishes. A pattern must contain a `Step` or a
/// `TogglePause` followed by ticks, or the run never advances.
pub fn play_interrupted(kind: AlgorithmKind, values: &[Value], pattern: &[PlayerEvent]) -> Player {
    let mut player = Player::new(values, generate(kind, values));
    player.handle(PlayerEvent::Start);
    for event in pattern.iter().cycle() {
        if player.state().is_terminal() {
            break;
        }
        player.handle(*event);
    }
    player
}

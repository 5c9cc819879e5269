//! Wall-clock pacing for a [`Controller`].
//!
//! The controller and player never sleep; this module is the only place
//! that reads a clock. [`run()`] owns the controller on the current
//! thread and interleaves control events with ticks:
//!
//! ```text
//! Host thread                 Driver thread
//!     |                           |
//!     |--ControlEvent------------>| events.recv_timeout(delay - carry)
//!     |  [crossbeam unbounded]    |   event   -> controller.handle()
//!     |                           |   timeout -> controller.tick(carry + waited)
//!     |                           | idle/paused/finished: events.recv()
//!     |--Quit-------------------->| return controller
//!     |--drop sender------------->| play out a running run, then return
//! ```
//!
//! Running time that elapses before an event arrives is carried into the
//! next tick, so input never stretches the pace. Time spent paused is not
//! carried.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, SendError, Sender};
use sortviz_core::PlaybackState;
use tracing::{debug, warn};

use crate::controller::{ControlEvent, Controller};
use crate::sink::RenderSink;

/// Drive `controller` from `events` until [`ControlEvent::Quit`] arrives
/// or every sender is dropped, then hand the controller back.
///
/// When the senders go away mid-run, the run keeps its pace until it
/// completes, so a scripted session that starts a run and closes its input
/// still sees the whole sort. Idle or paused controllers return at once.
pub fn run<S: RenderSink>(
    mut controller: Controller<S>,
    events: Receiver<ControlEvent>,
) -> Controller<S> {
    let mut carry = Duration::ZERO;
    loop {
        let event = if controller.state() == PlaybackState::Running {
            let wait = controller.delay().saturating_sub(carry);
            let waited_from = Instant::now();
            match events.recv_timeout(wait) {
                Ok(event) => {
                    carry += waited_from.elapsed();
                    event
                }
                Err(RecvTimeoutError::Timeout) => {
                    let dt = carry + waited_from.elapsed();
                    carry = Duration::ZERO;
                    controller.tick(dt);
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    play_out(&mut controller, carry + waited_from.elapsed());
                    break;
                }
            }
        } else {
            match events.recv() {
                Ok(event) => event,
                Err(_) => break,
            }
        };

        if event == ControlEvent::Quit {
            break;
        }
        if let Err(e) = controller.handle(event) {
            warn!(?event, error = %e, "control event rejected");
        }
        if !controller.is_active() {
            carry = Duration::ZERO;
        }
    }
    debug!(state = %controller.state(), "driver stopped");
    controller
}

/// Tick a running controller at its pace until the run ends. No input can
/// arrive, so the waits are plain sleeps.
fn play_out<S: RenderSink>(controller: &mut Controller<S>, mut carry: Duration) {
    debug!("input closed, playing out the run");
    while controller.state() == PlaybackState::Running {
        let wait = controller.delay().saturating_sub(carry);
        let slept_from = Instant::now();
        thread::sleep(wait);
        controller.tick(carry + slept_from.elapsed());
        carry = Duration::ZERO;
    }
}

/// Play the current run, or a new one, to its end as fast as possible.
///
/// Each tick reports the wall time since the previous one, so the elapsed
/// metric reflects real playback cost rather than the configured delay.
pub fn run_headless<S: RenderSink>(mut controller: Controller<S>) -> Controller<S> {
    match controller.state() {
        PlaybackState::Running => {}
        PlaybackState::Paused => {
            controller.toggle_pause();
        }
        _ => {
            controller.start();
        }
    }
    let mut last = Instant::now();
    while controller.state() == PlaybackState::Running {
        let now = Instant::now();
        controller.tick(now - last);
        last = now;
    }
    controller
}

// ── Driver thread ──────────────────────────────────────────────────

/// A [`run()`] loop on its own thread.
///
/// Dropping the handle without calling [`shutdown()`](Self::shutdown)
/// disconnects the channel, which also stops the loop.
pub struct DriverHandle<S: RenderSink> {
    events: Sender<ControlEvent>,
    thread: JoinHandle<Controller<S>>,
}

impl<S: RenderSink + Send + 'static> DriverHandle<S> {
    /// Move `controller` to a new driver thread.
    pub fn spawn(controller: Controller<S>) -> std::io::Result<Self> {
        let (events, rx) = crossbeam_channel::unbounded();
        let thread = thread::Builder::new()
            .name("sortviz-driver".into())
            .spawn(move || run(controller, rx))?;
        Ok(Self { events, thread })
    }

    /// A sender for feeding the driver from other threads.
    pub fn sender(&self) -> Sender<ControlEvent> {
        self.events.clone()
    }

    /// Queue one event.
    pub fn send(&self, event: ControlEvent) -> Result<(), SendError<ControlEvent>> {
        self.events.send(event)
    }

    /// Stop the driver and take the controller back. Returns `None` if
    /// the driver thread panicked.
    pub fn shutdown(self) -> Option<Controller<S>> {
        // The driver may already have stopped; the join below covers it.
        let _ = self.events.send(ControlEvent::Quit);
        self.thread.join().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Speed, VisualizerConfig};
    use crate::sink::NullSink;

    fn controller(speed: Speed) -> Controller<NullSink> {
        let config = VisualizerConfig {
            size: 12,
            speed,
            seed: 3,
            ..VisualizerConfig::default()
        };
        Controller::new(config, NullSink).unwrap()
    }

    #[test]
    fn disconnect_while_idle_returns_controller() {
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(tx);
        let ctl = run(controller(Speed::DelayMs(0)), rx);
        assert_eq!(ctl.state(), PlaybackState::Idle);
    }

    #[test]
    fn events_are_handled_in_order() {
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send(ControlEvent::Step).unwrap();
        tx.send(ControlEvent::Step).unwrap();
        tx.send(ControlEvent::Quit).unwrap();
        tx.send(ControlEvent::Step).unwrap();
        let ctl = run(controller(Speed::DelayMs(0)), rx);
        assert_eq!(ctl.state(), PlaybackState::Paused);
        assert_eq!(ctl.player().unwrap().position(), 2);
    }

    #[test]
    fn paused_run_accrues_no_time() {
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send(ControlEvent::Start).unwrap();
        tx.send(ControlEvent::TogglePause).unwrap();
        let worker = thread::spawn(move || run(controller(Speed::DelayMs(5000)), rx));
        thread::sleep(Duration::from_millis(50));
        tx.send(ControlEvent::Quit).unwrap();
        let ctl = worker.join().unwrap();
        assert_eq!(ctl.state(), PlaybackState::Paused);
        assert_eq!(ctl.player().unwrap().position(), 0);
        assert_eq!(ctl.metrics().elapsed, Duration::ZERO);
    }

    #[test]
    fn disconnect_while_running_plays_out_the_run() {
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send(ControlEvent::Start).unwrap();
        drop(tx);
        let ctl = run(controller(Speed::DelayMs(1)), rx);
        assert_eq!(ctl.state(), PlaybackState::Completed);
        assert!(ctl.values().windows(2).all(|w| w[0] <= w[1]));
        assert!(ctl.metrics().elapsed > Duration::ZERO);
    }

    #[test]
    fn disconnect_while_paused_returns_at_once() {
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send(ControlEvent::Step).unwrap();
        drop(tx);
        let ctl = run(controller(Speed::DelayMs(5000)), rx);
        assert_eq!(ctl.state(), PlaybackState::Paused);
        assert_eq!(ctl.player().unwrap().position(), 1);
    }

    #[test]
    fn senders_feed_the_driver_from_other_threads() {
        let handle = DriverHandle::spawn(controller(Speed::DelayMs(5000))).unwrap();
        let events = handle.sender();
        thread::spawn(move || {
            events.send(ControlEvent::Step).unwrap();
            events.send(ControlEvent::Step).unwrap();
        })
        .join()
        .unwrap();
        handle.send(ControlEvent::Step).unwrap();
        let ctl = handle.shutdown().unwrap();
        assert_eq!(ctl.state(), PlaybackState::Paused);
        assert_eq!(ctl.player().unwrap().position(), 3);
    }

    #[test]
    fn zero_delay_run_completes() {
        let handle = DriverHandle::spawn(controller(Speed::DelayMs(0))).unwrap();
        handle.send(ControlEvent::Start).unwrap();
        thread::sleep(Duration::from_millis(200));
        let ctl = handle.shutdown().unwrap();
        assert_eq!(ctl.state(), PlaybackState::Completed);
        assert!(ctl.values().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn cancel_is_observed_before_the_next_tick() {
        let handle = DriverHandle::spawn(controller(Speed::DelayMs(5000))).unwrap();
        handle.send(ControlEvent::Start).unwrap();
        handle.send(ControlEvent::Cancel).unwrap();
        let ctl = handle.shutdown().unwrap();
        assert_eq!(ctl.state(), PlaybackState::Cancelled);
        assert_eq!(ctl.player().unwrap().position(), 0);
    }

    #[test]
    fn headless_finishes_every_state() {
        let ctl = run_headless(controller(Speed::DelayMs(5000)));
        assert_eq!(ctl.state(), PlaybackState::Completed);

        let mut paused = controller(Speed::DelayMs(5000));
        paused.step();
        let ctl = run_headless(paused);
        assert_eq!(ctl.state(), PlaybackState::Completed);
        assert!(ctl.player().unwrap().visual().all_sorted());
    }
}

//! Line commands read from stdin during `sortviz play`.

use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use anyhow::{bail, Context, Result};
use crossbeam_channel::Sender;
use sortviz_engine::{ControlEvent, Speed};
use tracing::{debug, warn};

/// Shown before playback starts.
pub const HELP: &str = "\
commands: r start | p pause/resume | s step | c cancel | n new array | q quit
          size <n> | shape <name> | algo <name> | delay <ms> | speed <level>";

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ControlEvent>> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if let Some(extra) = words.next() {
        bail!("unexpected argument `{extra}`");
    }

    let event = match (head, arg) {
        ("r" | "start", None) => ControlEvent::Start,
        ("p" | "pause", None) => ControlEvent::TogglePause,
        ("s" | "step", None) => ControlEvent::Step,
        ("c" | "cancel", None) => ControlEvent::Cancel,
        ("n" | "new", None) => ControlEvent::NewArray,
        ("q" | "quit", None) => ControlEvent::Quit,
        ("size", Some(n)) => ControlEvent::SetSize(n.parse().context("size must be a number")?),
        ("shape", Some(name)) => ControlEvent::SetShape(name.parse()?),
        ("algo", Some(name)) => ControlEvent::SetAlgorithm(name.parse()?),
        ("delay", Some(ms)) => {
            ControlEvent::SetSpeed(Speed::DelayMs(ms.parse().context("delay must be a number")?))
        }
        ("speed", Some(level)) => {
            ControlEvent::SetSpeed(Speed::Level(level.parse().context("speed must be a number")?))
        }
        _ => bail!("unknown command `{}`", line.trim()),
    };
    Ok(Some(event))
}

/// Read commands from `input` on a helper thread and forward them.
///
/// The thread stops after `q`, at end of input, or once the receiver is
/// gone. Dropping its sender on exit disconnects the driver, which plays
/// out a running sort before it returns.
pub fn spawn_reader<R>(input: R, events: Sender<ControlEvent>) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("sortviz-stdin".into())
        .spawn(move || {
            for line in input.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!(error = %e, "stdin read failed");
                        break;
                    }
                };
                match parse_command(&line) {
                    Ok(Some(event)) => {
                        debug!(?event, "command");
                        if events.send(event).is_err() || event == ControlEvent::Quit {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => warn!("{e:#}"),
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::{AlgorithmKind, ArrayShape};
    use std::io::Cursor;

    #[test]
    fn single_letter_commands() {
        let cases = [
            ("r", ControlEvent::Start),
            ("p", ControlEvent::TogglePause),
            ("s", ControlEvent::Step),
            ("c", ControlEvent::Cancel),
            ("n", ControlEvent::NewArray),
            ("q", ControlEvent::Quit),
        ];
        for (line, event) in cases {
            assert_eq!(parse_command(line).unwrap(), Some(event), "{line}");
        }
    }

    #[test]
    fn commands_with_arguments() {
        assert_eq!(
            parse_command("size 40").unwrap(),
            Some(ControlEvent::SetSize(40))
        );
        assert_eq!(
            parse_command("  shape nearly-sorted ").unwrap(),
            Some(ControlEvent::SetShape(ArrayShape::NearlySorted))
        );
        assert_eq!(
            parse_command("algo merge").unwrap(),
            Some(ControlEvent::SetAlgorithm(AlgorithmKind::Merge))
        );
        assert_eq!(
            parse_command("delay 50").unwrap(),
            Some(ControlEvent::SetSpeed(Speed::DelayMs(50)))
        );
        assert_eq!(
            parse_command("speed 900").unwrap(),
            Some(ControlEvent::SetSpeed(Speed::Level(900)))
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn bad_input_is_an_error() {
        assert!(parse_command("x").is_err());
        assert!(parse_command("size").is_err());
        assert!(parse_command("size many").is_err());
        assert!(parse_command("algo heap").is_err());
        assert!(parse_command("p now").is_err());
        assert!(parse_command("delay 5 6").is_err());
    }

    #[test]
    fn reader_forwards_until_quit() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let input = Cursor::new("r\n\nbogus\np\nq\ns\n");
        spawn_reader(input, tx).unwrap().join().unwrap();
        let events: Vec<ControlEvent> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                ControlEvent::Start,
                ControlEvent::TogglePause,
                ControlEvent::Quit
            ]
        );
    }
}

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, SessionError};
use crate::host::Host;
use crate::session::{Session, Tick};
use crate::terminal_ui::{TerminalGuard, TerminalUi};

/// How long to wait for input while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    /// A run was started; the first step is due now.
    Started,
    Quit,
}

/// Runs the demo until the user quits.
///
/// Input and animation share this one thread: the wait between two steps
/// is spent polling for keys, so stop and delay changes land mid-run.
pub fn run(config: Config) -> Result<(), AppError> {
    let _guard = TerminalGuard::enter()?;
    let mut ui = TerminalUi::new(io::stdout(), &config);
    let mut session = Session::new(config);
    let mut rng = rand::thread_rng();
    session.publish_actions(&mut ui);
    info!("demo started");

    let mut next_step: Option<Instant> = None;
    loop {
        ui.flush(&session)?;
        let timeout = match next_step {
            Some(at) => at.saturating_duration_since(Instant::now()),
            None => IDLE_POLL,
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match handle_key(key, &mut session, &mut ui, &mut rng) {
                    Control::Quit => break,
                    Control::Started => next_step = Some(Instant::now()),
                    Control::Continue => {}
                }
            }
        } else if next_step.is_some() {
            next_step = match session.tick(&mut ui) {
                Tick::Wait(delay) => Some(Instant::now() + delay),
                Tick::Idle => None,
            };
        }
    }
    info!("demo closed");
    Ok(())
}

fn handle_key<W, R>(
    key: KeyEvent,
    session: &mut Session,
    ui: &mut TerminalUi<W>,
    rng: &mut R,
) -> Control
where
    W: Write,
    R: Rng + ?Sized,
{
    if key.kind != KeyEventKind::Press {
        return Control::Continue;
    }
    let result = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Control::Quit
        }
        KeyCode::Char('g') => session
            .generate_array(rng, ui)
            .map(|_| Control::Continue),
        KeyCode::Char('s') => session.start_quadratic(ui).map(|_| Control::Started),
        KeyCode::Char('i') => session.start_improved(ui).map(|_| Control::Started),
        KeyCode::Char('x') => {
            session.stop(ui);
            Ok(Control::Continue)
        }
        KeyCode::Char('a') => {
            session.select_quadratic(session.quadratic().next());
            ui.mark_dirty();
            Ok(Control::Continue)
        }
        KeyCode::Char('b') => {
            session.select_improved(session.improved().next());
            ui.mark_dirty();
            Ok(Control::Continue)
        }
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            session.nudge_delay(1);
            ui.mark_dirty();
            Ok(Control::Continue)
        }
        KeyCode::Char('-') | KeyCode::Left => {
            session.nudge_delay(-1);
            ui.mark_dirty();
            Ok(Control::Continue)
        }
        _ => Ok(Control::Continue),
    };
    result.unwrap_or_else(|err: SessionError| {
        ui.append_log(&err.to_string());
        Control::Continue
    })
}

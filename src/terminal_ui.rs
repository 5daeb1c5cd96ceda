use std::collections::VecDeque;
use std::io::{self, Write};

use colored::Colorize;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    ExecutableCommand, QueueableCommand,
};

use crate::array::ARRAY_SIZE;
use crate::config::Config;
use crate::host::{Action, Host};
use crate::renderer;
use crate::session::Session;
use crate::sorting_algorithms::{Algorithm, Highlights};

const TITLE: &str = "Sorting algorithms";

/// Raw mode and the alternate screen for as long as it lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Hide)?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(Show);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Terminal window: bar chart, status line, action bar and log pane.
pub struct TerminalUi<W: Write> {
    out: W,
    values: Vec<i32>,
    highlights: Highlights,
    log: VecDeque<String>,
    enabled: [bool; 4],
    bar_scale: f32,
    log_capacity: usize,
    dirty: bool,
}

impl<W: Write> TerminalUi<W> {
    pub fn new(out: W, config: &Config) -> Self {
        TerminalUi {
            out,
            values: Vec::new(),
            highlights: Highlights::none(),
            log: VecDeque::with_capacity(config.log_capacity),
            enabled: [false; 4],
            bar_scale: config.bar_scale,
            log_capacity: config.log_capacity,
            dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn chart_rows(&self) -> u16 {
        ((ARRAY_SIZE as f32 * self.bar_scale).ceil() as u16).max(1)
    }

    fn status_line(session: &Session) -> String {
        let array = match session.values() {
            None => "not generated",
            Some(_) if session.is_running() => "sorting",
            Some(values) if values.windows(2).all(|w| w[0] <= w[1]) => "sorted",
            Some(_) => "unsorted",
        };
        format!(
            "Array: {} | Delay: {} ms | Quadratic: {} | Improved: {}",
            array,
            session.delay().as_millis(),
            Algorithm::from(session.quadratic()),
            Algorithm::from(session.improved()),
        )
    }

    fn action_bar(&self) -> String {
        let label = |action: Action, key: &str| {
            let text = format!("[{}] {}", key, action);
            if self.enabled[action.index()] {
                text.bold().to_string()
            } else {
                text.dimmed().to_string()
            }
        };
        format!(
            "{}  {}  {}  {}  [a/b] pick algorithm  [+/-] delay  [q] quit",
            label(Action::Generate, "g"),
            label(Action::StartQuadratic, "s"),
            label(Action::StartImproved, "i"),
            label(Action::Stop, "x"),
        )
    }

    /// Redraws the whole screen if anything changed since the last flush.
    pub fn flush(&mut self, session: &Session) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let mut lines = Vec::new();
        lines.push(TITLE.bold().to_string());
        let bars = renderer::bars(&self.values, self.highlights, self.bar_scale);
        lines.extend(renderer::paint(&bars, self.chart_rows()));
        lines.push(String::new());
        lines.push(Self::status_line(session));
        lines.push(self.action_bar());
        lines.push(String::new());
        lines.extend(self.log.iter().cloned());

        self.out.queue(MoveTo(0, 0))?;
        for (row, line) in lines.iter().enumerate() {
            self.out
                .queue(MoveTo(0, row as u16))?
                .queue(Print(line))?
                .queue(Clear(ClearType::UntilNewLine))?;
        }
        self.out.queue(Clear(ClearType::FromCursorDown))?;
        self.out.flush()?;
        self.dirty = false;
        Ok(())
    }
}

impl<W: Write> Host for TerminalUi<W> {
    fn append_log(&mut self, line: &str) {
        self.log.push_back(line.to_string());
        while self.log.len() > self.log_capacity {
            self.log.pop_front();
        }
        self.dirty = true;
    }

    fn clear_log(&mut self) {
        self.log.clear();
        self.dirty = true;
    }

    fn set_action_enabled(&mut self, action: Action, enabled: bool) {
        self.enabled[action.index()] = enabled;
        self.dirty = true;
    }

    fn draw_bars(&mut self, values: &[i32], highlights: Highlights) {
        self.values.clear();
        self.values.extend_from_slice(values);
        self.highlights = highlights;
        self.dirty = true;
    }
}

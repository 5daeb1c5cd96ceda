use std::fmt;

use crate::sorting_algorithms::Highlights;

/// User actions that the host can enable or disable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Generate,
    StartQuadratic,
    StartImproved,
    Stop,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Generate,
        Action::StartQuadratic,
        Action::StartImproved,
        Action::Stop,
    ];

    pub fn index(self) -> usize {
        match self {
            Action::Generate => 0,
            Action::StartQuadratic => 1,
            Action::StartImproved => 2,
            Action::Stop => 3,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Generate => "generate",
            Action::StartQuadratic => "start quadratic",
            Action::StartImproved => "start improved",
            Action::Stop => "stop",
        })
    }
}

/// What the sorting session needs from the window it runs in.
pub trait Host {
    fn append_log(&mut self, line: &str);
    fn clear_log(&mut self);
    fn set_action_enabled(&mut self, action: Action, enabled: bool);
    fn draw_bars(&mut self, values: &[i32], highlights: Highlights);
}

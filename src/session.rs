use std::time::Duration;

use rand::Rng;
use tracing::{info, warn};

use crate::animation::{Animation, Progress};
use crate::array::generate_array;
use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::error::SessionError;
use crate::host::{Action, Host};
use crate::sorting_algorithms::{
    Algorithm, Family, Highlights, ImprovedAlgorithm, QuadraticAlgorithm,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    RunningQuadratic,
    RunningImproved,
}

impl SessionState {
    /// Whether `action` is offered to the user in this state.
    ///
    /// A running family leaves its own start action enabled unless
    /// `lock_own_start` is set; starting it again is refused as busy.
    pub fn is_enabled(self, action: Action, lock_own_start: bool) -> bool {
        match (self, action) {
            (SessionState::Idle, Action::Stop) => false,
            (SessionState::Idle, _) => true,
            (_, Action::Stop) => true,
            (_, Action::Generate) => false,
            (SessionState::RunningQuadratic, Action::StartImproved) => false,
            (SessionState::RunningImproved, Action::StartQuadratic) => false,
            (_, Action::StartQuadratic) | (_, Action::StartImproved) => !lock_own_start,
        }
    }
}

/// What the event loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Suspend for this long, then tick again.
    Wait(Duration),
    Idle,
}

/// The sorting session: owns the array, the running flag and the current run.
pub struct Session {
    config: Config,
    values: Option<Vec<i32>>,
    state: SessionState,
    delay: Duration,
    quadratic: QuadraticAlgorithm,
    improved: ImprovedAlgorithm,
    token: CancellationToken,
    run: Option<Animation>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let delay = config.default_delay();
        Session {
            config,
            values: None,
            state: SessionState::Idle,
            delay,
            quadratic: QuadraticAlgorithm::default(),
            improved: ImprovedAlgorithm::default(),
            token: CancellationToken::new(),
            run: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn quadratic(&self) -> QuadraticAlgorithm {
        self.quadratic
    }

    pub fn improved(&self) -> ImprovedAlgorithm {
        self.improved
    }

    /// The array as it currently stands, mid-run included.
    pub fn values(&self) -> Option<&[i32]> {
        match &self.run {
            Some(run) => Some(run.values()),
            None => self.values.as_deref(),
        }
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        self.state.is_enabled(action, self.config.lock_own_start)
    }

    /// Pushes the enabled state of every action to the host.
    pub fn publish_actions<H: Host + ?Sized>(&self, host: &mut H) {
        for action in Action::ALL {
            host.set_action_enabled(action, self.is_enabled(action));
        }
    }

    pub fn generate_array<R, H>(&mut self, rng: &mut R, host: &mut H) -> Result<(), SessionError>
    where
        R: Rng + ?Sized,
        H: Host + ?Sized,
    {
        if self.is_running() {
            warn!("generate refused while sorting");
            return Err(SessionError::Busy);
        }
        let values = generate_array(rng);
        host.draw_bars(&values, Highlights::none());
        host.clear_log();
        host.append_log("Array generated.");
        info!(len = values.len(), "array generated");
        self.values = Some(values);
        Ok(())
    }

    pub fn start_quadratic<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<(), SessionError> {
        self.start(self.quadratic.into(), host)
    }

    pub fn start_improved<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<(), SessionError> {
        self.start(self.improved.into(), host)
    }

    fn start<H: Host + ?Sized>(
        &mut self,
        algorithm: Algorithm,
        host: &mut H,
    ) -> Result<(), SessionError> {
        if self.is_running() {
            warn!(%algorithm, "start refused, a sort is already running");
            return Err(SessionError::Busy);
        }
        let values = match self.values.take() {
            Some(values) if !values.is_empty() => values,
            _ => {
                warn!(%algorithm, "start refused, no array");
                return Err(SessionError::NoArray);
            }
        };

        self.token.arm();
        self.state = match algorithm.family() {
            Family::Quadratic => SessionState::RunningQuadratic,
            Family::Improved => SessionState::RunningImproved,
        };
        self.publish_actions(host);
        host.append_log(&format!("Starting {}...", algorithm));
        info!(%algorithm, delay_ms = self.delay.as_millis() as u64, "sort started");
        self.run = Some(Animation::new(algorithm, values, self.token.clone()));
        Ok(())
    }

    /// Clears the running flag. The run notices at its next check.
    pub fn stop<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.is_running() || !self.token.is_running() {
            return;
        }
        self.token.cancel();
        host.append_log("Sorting stopped.");
        info!("stop requested");
    }

    pub fn set_delay(&mut self, delay_ms: u64) {
        self.delay = Duration::from_millis(self.config.clamp_delay(delay_ms));
    }

    /// Moves the delay by `steps` increments of the configured step.
    pub fn nudge_delay(&mut self, steps: i64) {
        let current = self.delay.as_millis() as i64;
        let target = current + steps * self.config.delay_step_ms as i64;
        self.set_delay(target.max(0) as u64);
    }

    pub fn select_quadratic(&mut self, algorithm: QuadraticAlgorithm) {
        self.quadratic = algorithm;
    }

    pub fn select_improved(&mut self, algorithm: ImprovedAlgorithm) {
        self.improved = algorithm;
    }

    /// Advances the current run by one tick.
    pub fn tick<H: Host + ?Sized>(&mut self, host: &mut H) -> Tick {
        let progress = match self.run.as_mut() {
            Some(run) => run.tick(host),
            None => return Tick::Idle,
        };
        match progress {
            Progress::Pending => Tick::Wait(self.delay),
            Progress::Completed => {
                host.append_log("Sorting finished.");
                self.finish(host, "sort finished");
                Tick::Idle
            }
            Progress::Stopped => {
                self.finish(host, "sort stopped");
                Tick::Idle
            }
        }
    }

    fn finish<H: Host + ?Sized>(&mut self, host: &mut H, outcome: &str) {
        if let Some(run) = self.run.take() {
            info!(
                algorithm = %run.algorithm(),
                steps = run.steps(),
                swaps = run.swaps(),
                "{}",
                outcome
            );
            self.values = Some(run.into_values());
        }
        self.token.cancel();
        self.state = SessionState::Idle;
        self.publish_actions(host);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::host::recording::{Call, RecordingHost};

    fn generated_session(config: Config) -> (Session, RecordingHost) {
        let mut session = Session::new(config);
        let mut host = RecordingHost::default();
        let mut rng = StdRng::seed_from_u64(1);
        session.generate_array(&mut rng, &mut host).unwrap();
        session.publish_actions(&mut host);
        (session, host)
    }

    fn run_to_idle(session: &mut Session, host: &mut RecordingHost) -> usize {
        let mut ticks = 0;
        while let Tick::Wait(_) = session.tick(host) {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn start_without_array_is_refused() {
        let mut session = Session::new(Config::default());
        let mut host = RecordingHost::default();
        assert_eq!(session.start_quadratic(&mut host), Err(SessionError::NoArray));
        assert_eq!(session.start_improved(&mut host), Err(SessionError::NoArray));
        assert_eq!(session.state(), SessionState::Idle);
        assert!(host.calls.is_empty());
        assert_eq!(session.tick(&mut host), Tick::Idle);
    }

    #[test]
    fn generate_clears_log_and_draws() {
        let (session, host) = generated_session(Config::default());
        assert_eq!(host.calls[1], Call::ClearLog);
        assert_eq!(host.logs(), vec!["Array generated."]);
        let mut values = session.values().unwrap().to_vec();
        values.sort_unstable();
        assert_eq!(values, (1..=50).collect::<Vec<_>>());
    }

    #[test]
    fn quadratic_run_sorts_in_place_and_restores_actions() {
        let (mut session, mut host) = generated_session(Config::default());
        session.select_quadratic(QuadraticAlgorithm::BubbleSort);
        session.start_quadratic(&mut host).unwrap();

        assert_eq!(session.state(), SessionState::RunningQuadratic);
        assert!(host.is_enabled(Action::Stop));
        assert!(!host.is_enabled(Action::StartImproved));
        assert!(host.is_enabled(Action::StartQuadratic));
        assert!(!host.is_enabled(Action::Generate));
        assert_eq!(host.logs().last(), Some(&"Starting Bubble sort (BubbleSort)..."));

        assert!(run_to_idle(&mut session, &mut host) > 0);
        assert_eq!(host.logs().last(), Some(&"Sorting finished."));
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!host.is_enabled(Action::Stop));
        assert!(host.is_enabled(Action::StartImproved));
        assert!(host.is_enabled(Action::StartQuadratic));
        assert_eq!(session.values().unwrap(), (1..=50).collect::<Vec<_>>());
        assert_eq!(host.last_draw().unwrap().1, Highlights::none());
    }

    #[test]
    fn improved_run_disables_quadratic_start() {
        let (mut session, mut host) = generated_session(Config::default());
        session.select_improved(ImprovedAlgorithm::HeapSort);
        session.start_improved(&mut host).unwrap();
        assert_eq!(session.state(), SessionState::RunningImproved);
        assert!(!host.is_enabled(Action::StartQuadratic));
        assert!(host.is_enabled(Action::StartImproved));

        assert_eq!(session.start_improved(&mut host), Err(SessionError::Busy));
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(session.generate_array(&mut rng, &mut host), Err(SessionError::Busy));

        run_to_idle(&mut session, &mut host);
        assert_eq!(session.values().unwrap(), (1..=50).collect::<Vec<_>>());
    }

    #[test]
    fn lock_own_start_disables_both_starts() {
        let config = Config {
            lock_own_start: true,
            ..Config::default()
        };
        let (mut session, mut host) = generated_session(config);
        session.start_quadratic(&mut host).unwrap();
        assert!(!host.is_enabled(Action::StartQuadratic));
        assert!(!host.is_enabled(Action::StartImproved));
    }

    #[test]
    fn stop_freezes_the_array_where_it_was() {
        let (mut session, mut host) = generated_session(Config::default());
        session.start_improved(&mut host).unwrap();
        for _ in 0..20 {
            assert!(matches!(session.tick(&mut host), Tick::Wait(_)));
        }
        let logged_steps = host.logs().len();

        session.stop(&mut host);
        assert!(session.is_running(), "stop must not wait for the run");
        assert_eq!(host.logs().last(), Some(&"Sorting stopped."));

        assert_eq!(session.tick(&mut host), Tick::Idle);
        assert_eq!(host.logs().len(), logged_steps + 1);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(host.is_enabled(Action::StartQuadratic));
        assert!(!host.is_enabled(Action::Stop));

        let frozen = session.values().unwrap().to_vec();
        assert_ne!(frozen, (1..=50).collect::<Vec<_>>());
        let mut sorted = frozen.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=50).collect::<Vec<_>>());

        // a second stop while idle is ignored
        session.stop(&mut host);
        assert_eq!(host.logs().len(), logged_steps + 1);
    }

    #[test]
    fn delay_changes_apply_to_the_next_wait() {
        let (mut session, mut host) = generated_session(Config::default());
        session.start_quadratic(&mut host).unwrap();
        assert_eq!(session.tick(&mut host), Tick::Wait(Duration::from_millis(100)));
        session.set_delay(5000);
        assert_eq!(session.tick(&mut host), Tick::Wait(Duration::from_millis(1000)));
        session.nudge_delay(-3);
        assert_eq!(session.delay(), Duration::from_millis(970));
        session.set_delay(0);
        session.nudge_delay(-1);
        assert_eq!(session.delay(), Duration::ZERO);
    }
}

/// Delay between starting the exit animation and swapping the content.
pub const EXIT_DELAY: f64 = 0.25;
/// Delay between swapping the content and settling.
pub const ENTER_DELAY: f64 = 0.30;

/// Visible state of the projects section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Grid,
    Exiting,
    Entering,
    Detail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Detail(usize),
    Grid,
}

/// Timed grid <-> detail transition for the projects section.
///
/// Driven by explicit timestamps (seconds) instead of timers:
/// `Grid -> Exiting -> Entering -> Detail` on select and
/// `Detail -> Exiting -> Entering -> Grid` on back. The selection is
/// swapped at the Exiting -> Entering edge.
#[derive(Clone, Debug)]
pub struct ProjectTransition {
    state: ViewState,
    selected: Option<usize>,
    target: Option<Target>,
    deadline: f64,
}

impl Default for ProjectTransition {
    fn default() -> Self {
        Self {
            state: ViewState::Grid,
            selected: None,
            target: None,
            deadline: 0.0,
        }
    }
}

impl ProjectTransition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the card grid (rather than a detail view) is mounted.
    pub fn shows_grid(&self) -> bool {
        self.selected.is_none()
    }

    /// Open `project`. Ignored unless the grid is settled.
    pub fn select(&mut self, project: usize, now: f64) -> bool {
        if self.state != ViewState::Grid {
            return false;
        }
        self.begin_exit(Target::Detail(project), now);
        true
    }

    /// Return to the grid. Ignored unless a detail view is settled.
    pub fn back(&mut self, now: f64) -> bool {
        if self.state != ViewState::Detail {
            return false;
        }
        self.begin_exit(Target::Grid, now);
        true
    }

    /// Apply every transition whose deadline has passed by `now`.
    /// Returns whether the state changed.
    pub fn advance(&mut self, now: f64) -> bool {
        let before = self.state;
        loop {
            match self.state {
                ViewState::Exiting if now >= self.deadline => {
                    self.selected = match self.target {
                        Some(Target::Detail(p)) => Some(p),
                        _ => None,
                    };
                    self.state = ViewState::Entering;
                    self.deadline += ENTER_DELAY;
                }
                ViewState::Entering if now >= self.deadline => {
                    self.state = match self.target.take() {
                        Some(Target::Detail(_)) => ViewState::Detail,
                        _ => ViewState::Grid,
                    };
                }
                _ => break,
            }
        }
        self.state != before
    }

    fn begin_exit(&mut self, target: Target, now: f64) {
        self.target = Some(target);
        self.state = ViewState::Exiting;
        self.deadline = now + EXIT_DELAY;
    }
}

//! Top-level view coordination.
//!
//! [`ViewCoordinator`] owns the shell's UI state (dark-mode flag, location,
//! date range, active screen), runs the root theme side effect, and derives the
//! [`RenderPlan`] for each frame. Collaborators talk to it only through
//! [`Intent`]s.

use tracing::{debug, info};

use crate::date_range::DateRange;
use crate::theme_applier::ThemeApplier;
use crate::view::{
    BackgroundProps, Branch, ChartProps, HeaderProps, Intent, LocationInputProps, OverlayProps,
    RenderPlan, ResultsProps, ViewState,
};

/// Location shown before the user picks one.
pub const DEFAULT_LOCATION: &str = "Current Location";

/// Values the coordinator starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialState {
    pub dark_mode: bool,
    pub location: String,
    pub date_range: DateRange,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            dark_mode: true,
            location: DEFAULT_LOCATION.to_string(),
            date_range: DateRange::today(),
        }
    }
}

/// Owns top-level UI state and selects which branch is rendered.
///
/// State is private; it changes only through the setters below or
/// [`ViewCoordinator::dispatch`]. The injected [`ThemeApplier`] runs once at
/// mount and then synchronously after every commit that changes the flag.
pub struct ViewCoordinator<A: ThemeApplier> {
    dark_mode: bool,
    location: String,
    date_range: DateRange,
    view_state: ViewState,
    applier: A,
}

impl<A: ThemeApplier> std::fmt::Debug for ViewCoordinator<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewCoordinator")
            .field("dark_mode", &self.dark_mode)
            .field("location", &self.location)
            .field("date_range", &self.date_range)
            .field("view_state", &self.view_state)
            .finish_non_exhaustive()
    }
}

impl<A: ThemeApplier> ViewCoordinator<A> {
    /// Mounts a coordinator with the default state.
    pub fn mount(applier: A) -> Self {
        Self::with_initial(InitialState::default(), applier)
    }

    /// Mounts a coordinator starting from `initial`.
    ///
    /// Always starts on the input screen.
    pub fn with_initial(initial: InitialState, applier: A) -> Self {
        let mut coordinator = Self {
            dark_mode: initial.dark_mode,
            location: initial.location,
            date_range: initial.date_range,
            view_state: ViewState::Input,
            applier,
        };
        debug!(state = ?coordinator, "mounted view coordinator");
        coordinator.applier.apply(coordinator.dark_mode);
        coordinator
    }

    // ===== State Queries =====

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date_range(&self) -> &DateRange {
        &self.date_range
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    /// Returns the injected theme applier.
    pub fn applier(&self) -> &A {
        &self.applier
    }

    // ===== State Mutations =====

    /// Replaces the dark-mode flag, re-applying the root marker if it changed.
    pub fn set_theme(&mut self, dark_mode: bool) {
        if self.dark_mode == dark_mode {
            return;
        }
        self.dark_mode = dark_mode;
        info!(dark_mode, "theme changed");
        self.applier.apply(dark_mode);
    }

    /// Replaces the location. Any string is accepted, including an empty one.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Replaces the date range wholesale. Ordering is not checked.
    pub fn set_date_range(&mut self, date_range: DateRange) {
        self.date_range = date_range;
    }

    /// Switches to the results screen.
    pub fn on_analyze(&mut self) {
        let previous = self.view_state;
        self.view_state = previous.analyze();
        debug!(
            from = ?previous,
            location = %self.location,
            start = %self.date_range.start,
            end = %self.date_range.end,
            "analyze requested"
        );
    }

    /// Returns to the input screen. Does nothing while already there.
    pub fn on_back(&mut self) {
        let previous = self.view_state;
        self.view_state = previous.back();
        debug!(from = ?previous, to = ?self.view_state, "back requested");
    }

    /// Applies an intent emitted by a collaborator.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::SetTheme(dark_mode) => self.set_theme(dark_mode),
            Intent::SetLocation(location) => self.set_location(location),
            Intent::SetDateRange(range) => self.set_date_range(range),
            Intent::Analyze => self.on_analyze(),
            Intent::Back => self.on_back(),
        }
    }

    // ===== Rendering =====

    /// Derives what the current frame shows.
    pub fn render(&self) -> RenderPlan {
        let branch = match self.view_state {
            ViewState::Input => Branch::Input {
                location_input: LocationInputProps {
                    location: self.location.clone(),
                    date_range: self.date_range.clone(),
                },
                preview_chart: ChartProps {
                    location: self.location.clone(),
                    date: self.date_range.start.clone(),
                    preview: true,
                },
            },
            ViewState::Results => Branch::Results(ResultsProps {
                location: self.location.clone(),
                date_range: self.date_range.clone(),
            }),
        };

        RenderPlan {
            background: BackgroundProps {
                location: self.location.clone(),
            },
            overlay: OverlayProps {
                dark_mode: self.dark_mode,
            },
            header: HeaderProps {
                dark_mode: self.dark_mode,
            },
            branch,
        }
    }
}

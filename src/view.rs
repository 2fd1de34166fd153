//! View states, collaborator props and the messages collaborators emit.
//!
//! Everything a frame shows is described by a [`RenderPlan`]: the parts drawn on
//! every frame plus exactly one [`Branch`]. Collaborators never mutate state;
//! they return a message which converts into an [`Intent`] for the coordinator.

use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;

/// Which of the two screens is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewState {
    /// Location/date picker with animation and preview chart
    #[default]
    Input,
    /// Analysis results for the chosen location and range
    Results,
}

impl ViewState {
    /// State after an analyze request. Always `Results`.
    pub fn analyze(self) -> Self {
        ViewState::Results
    }

    /// State after a back request. Only leaves `Results`.
    pub fn back(self) -> Self {
        match self {
            ViewState::Results => ViewState::Input,
            ViewState::Input => ViewState::Input,
        }
    }
}

/// A state transition requested by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    SetTheme(bool),
    SetLocation(String),
    SetDateRange(DateRange),
    Analyze,
    Back,
}

// ===== Collaborator props =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderProps {
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundProps {
    pub location: String,
}

/// Glass tint drawn between the background and the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayProps {
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInputProps {
    pub location: String,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartProps {
    pub location: String,
    pub date: String,
    pub preview: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsProps {
    pub location: String,
    pub date_range: DateRange,
}

// ===== Collaborator messages =====

/// Emitted by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderMessage {
    SetTheme(bool),
}

/// Emitted by the location/date picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationInputMessage {
    SetLocation(String),
    SetDateRange(DateRange),
    Analyze,
}

/// Emitted by the results view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsMessage {
    Back,
}

impl From<HeaderMessage> for Intent {
    fn from(message: HeaderMessage) -> Self {
        match message {
            HeaderMessage::SetTheme(dark_mode) => Intent::SetTheme(dark_mode),
        }
    }
}

impl From<LocationInputMessage> for Intent {
    fn from(message: LocationInputMessage) -> Self {
        match message {
            LocationInputMessage::SetLocation(location) => Intent::SetLocation(location),
            LocationInputMessage::SetDateRange(range) => Intent::SetDateRange(range),
            LocationInputMessage::Analyze => Intent::Analyze,
        }
    }
}

impl From<ResultsMessage> for Intent {
    fn from(message: ResultsMessage) -> Self {
        match message {
            ResultsMessage::Back => Intent::Back,
        }
    }
}

// ===== Render plan =====

/// The branch-specific part of a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    /// Also shows the condensation animation, which takes no props.
    Input {
        location_input: LocationInputProps,
        preview_chart: ChartProps,
    },
    Results(ResultsProps),
}

impl Branch {
    pub fn view_state(&self) -> ViewState {
        match self {
            Branch::Input { .. } => ViewState::Input,
            Branch::Results(_) => ViewState::Results,
        }
    }
}

/// Everything one frame renders, derived purely from coordinator state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub background: BackgroundProps,
    pub overlay: OverlayProps,
    pub header: HeaderProps,
    pub branch: Branch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_transitions() {
        assert_eq!(ViewState::default(), ViewState::Input);
        assert_eq!(ViewState::Input.analyze(), ViewState::Results);
        assert_eq!(ViewState::Results.analyze(), ViewState::Results);
        assert_eq!(ViewState::Results.back(), ViewState::Input);
        assert_eq!(ViewState::Input.back(), ViewState::Input);
    }

    #[test]
    fn test_messages_map_to_intents() {
        assert_eq!(Intent::from(HeaderMessage::SetTheme(false)), Intent::SetTheme(false));
        assert_eq!(
            Intent::from(LocationInputMessage::SetLocation("Oslo".into())),
            Intent::SetLocation("Oslo".into())
        );
        assert_eq!(Intent::from(LocationInputMessage::Analyze), Intent::Analyze);
        assert_eq!(Intent::from(ResultsMessage::Back), Intent::Back);
    }
}

pub mod coordinator;
pub mod date_range;
pub mod theme;
pub mod theme_applier;
pub mod view;

// Export the coordinator
pub use coordinator::{ViewCoordinator, InitialState, DEFAULT_LOCATION};

// Export state and render plan types
pub use date_range::{DateRange, Chronology, DATE_FORMAT, parse_date, today_string};
pub use view::{
    ViewState, Intent, RenderPlan, Branch,
    HeaderProps, BackgroundProps, OverlayProps, LocationInputProps, ChartProps, ResultsProps,
    HeaderMessage, LocationInputMessage, ResultsMessage
};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};
pub use theme_applier::{ThemeApplier, RootClassList, DARK_CLASS};

use dewscope::{
    Branch, ChartProps, DateRange, Intent, LocationInputProps, ResultsProps, RootClassList,
    ThemeApplier, ViewCoordinator, ViewState, DATE_FORMAT, DEFAULT_LOCATION,
};

/// Applier that records every flag it is handed.
#[derive(Default)]
struct RecordingApplier {
    calls: Vec<bool>,
}

impl ThemeApplier for RecordingApplier {
    fn apply(&mut self, dark_mode: bool) {
        self.calls.push(dark_mode);
    }
}

#[test]
fn test_mount_defaults_render_input_branch() {
    let coordinator = ViewCoordinator::mount(RootClassList::new());
    let today = DateRange::today();

    assert!(coordinator.dark_mode());
    assert!(coordinator.applier().is_dark());
    assert_eq!(coordinator.location(), DEFAULT_LOCATION);
    assert_eq!(coordinator.date_range(), &today);
    assert_eq!(coordinator.view_state(), ViewState::Input);

    let plan = coordinator.render();
    assert_eq!(plan.background.location, DEFAULT_LOCATION);
    assert!(plan.header.dark_mode);
    assert!(plan.overlay.dark_mode);
    assert_eq!(
        plan.branch,
        Branch::Input {
            location_input: LocationInputProps {
                location: DEFAULT_LOCATION.to_string(),
                date_range: today.clone(),
            },
            preview_chart: ChartProps {
                location: DEFAULT_LOCATION.to_string(),
                date: today.start.clone(),
                preview: true,
            },
        }
    );
}

#[test]
fn test_default_dates_are_utc_today() {
    let before = chrono::Utc::now().date_naive().format(DATE_FORMAT).to_string();
    let coordinator = ViewCoordinator::mount(RootClassList::new());
    let after = chrono::Utc::now().date_naive().format(DATE_FORMAT).to_string();

    let range = coordinator.date_range();
    assert!(range.start == before || range.start == after);
    assert_eq!(range.end, range.start);
}

#[test]
fn test_analyze_shows_results_for_new_location() {
    let mut coordinator = ViewCoordinator::mount(RootClassList::new());
    coordinator.set_location("Boston");
    coordinator.on_analyze();

    let plan = coordinator.render();
    assert_eq!(
        plan.branch,
        Branch::Results(ResultsProps {
            location: "Boston".to_string(),
            date_range: coordinator.date_range().clone(),
        })
    );
    // Background and header are not part of the branch
    assert_eq!(plan.background.location, "Boston");
    assert!(plan.header.dark_mode);
}

#[test]
fn test_analyze_has_no_validation_gate() {
    let ranges = [
        DateRange::new("2024-09-10", "2024-09-01"),
        DateRange::new("", ""),
        DateRange::new("tomorrow", "next week"),
    ];
    for (location, range) in ["", "   ", "Nowhere"].into_iter().zip(ranges) {
        let mut coordinator = ViewCoordinator::mount(RootClassList::new());
        coordinator.set_location(location);
        coordinator.set_date_range(range.clone());
        coordinator.on_analyze();

        assert_eq!(coordinator.view_state(), ViewState::Results);
        assert_eq!(coordinator.location(), location);
        assert_eq!(coordinator.date_range(), &range);
    }
}

#[test]
fn test_back_keeps_location_and_range() {
    let mut coordinator = ViewCoordinator::mount(RootClassList::new());
    let range = DateRange::new("2024-11-01", "2024-11-07");
    coordinator.set_location("Hamburg");
    coordinator.set_date_range(range.clone());
    coordinator.on_analyze();
    assert_eq!(coordinator.render().branch.view_state(), ViewState::Results);

    coordinator.on_back();

    assert_eq!(coordinator.view_state(), ViewState::Input);
    assert_eq!(coordinator.location(), "Hamburg");
    assert_eq!(coordinator.date_range(), &range);
    match coordinator.render().branch {
        Branch::Input { location_input, preview_chart } => {
            assert_eq!(location_input.date_range, range);
            assert_eq!(preview_chart.date, "2024-11-01");
            assert_eq!(preview_chart.location, "Hamburg");
        }
        Branch::Results(_) => panic!("expected input branch after back"),
    }
}

#[test]
fn test_theme_marker_toggles() {
    let mut coordinator = ViewCoordinator::mount(RootClassList::new());
    assert!(coordinator.applier().is_dark());

    coordinator.set_theme(false);
    assert!(!coordinator.applier().is_dark());

    coordinator.set_theme(true);
    assert!(coordinator.applier().is_dark());
}

#[test]
fn test_theme_marker_is_last_write_wins() {
    let sequences: [&[bool]; 4] = [
        &[false],
        &[true, true, false, false],
        &[false, true, false, true],
        &[true, false, true, false, false, true, true],
    ];

    for sequence in sequences {
        let mut coordinator = ViewCoordinator::mount(RootClassList::new());
        for &dark_mode in sequence {
            coordinator.set_theme(dark_mode);
        }
        let last = *sequence.last().unwrap();
        assert_eq!(coordinator.applier().is_dark(), last);
        assert_eq!(coordinator.dark_mode(), last);
    }
}

#[test]
fn test_theme_effect_runs_only_on_change() {
    let mut coordinator = ViewCoordinator::mount(RecordingApplier::default());
    coordinator.set_theme(true);
    coordinator.set_theme(false);
    coordinator.set_theme(false);
    coordinator.set_location("Oslo");
    coordinator.on_analyze();
    coordinator.set_theme(true);

    assert_eq!(coordinator.applier().calls, vec![true, false, true]);
}

#[test]
fn test_render_is_pure() {
    let mut coordinator = ViewCoordinator::mount(RootClassList::new());
    coordinator.dispatch(Intent::SetLocation("Lisbon".into()));
    coordinator.dispatch(Intent::SetTheme(false));

    let first = coordinator.render();
    let second = coordinator.render();
    assert_eq!(first, second);

    coordinator.dispatch(Intent::Analyze);
    coordinator.dispatch(Intent::Back);
    assert_eq!(coordinator.render(), first);
}

#[test]
fn test_instances_do_not_share_state() {
    let mut a = ViewCoordinator::mount(RootClassList::new());
    let b = ViewCoordinator::mount(RootClassList::new());

    a.set_location("Cairo");
    a.set_theme(false);
    a.on_analyze();

    assert_eq!(b.location(), DEFAULT_LOCATION);
    assert!(b.applier().is_dark());
    assert_eq!(b.view_state(), ViewState::Input);
}

#[test]
fn test_render_plan_serializes() -> anyhow::Result<()> {
    let mut coordinator = ViewCoordinator::mount(RootClassList::new());
    coordinator.set_date_range(DateRange::new("2024-02-01", "2024-02-03"));
    coordinator.on_analyze();

    let json = serde_json::to_value(coordinator.render())?;
    assert_eq!(json["branch"]["Results"]["date_range"]["end"], "2024-02-03");
    assert_eq!(json["header"]["dark_mode"], true);
    Ok(())
}

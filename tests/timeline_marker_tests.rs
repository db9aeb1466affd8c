use savings_projection::api::{ProjectionInputs, ProjectionSession};
use savings_projection::core::{MarkerRole, MarkerSet};

#[test]
fn short_horizons_mark_every_month() {
    let set = MarkerSet::for_horizon(24);
    assert_eq!(set.len(), 25);
    assert_eq!(set.months(), (0..=24).collect::<Vec<_>>().as_slice());
}

#[test]
fn thirty_six_months_is_still_dense() {
    let set = MarkerSet::for_horizon(36);
    assert_eq!(set.len(), 37);
}

#[test]
fn long_horizon_divisible_by_three_marks_quarters() {
    let set = MarkerSet::for_horizon(120);
    assert_eq!(set.len(), 41);
    assert!(set.months().iter().all(|month| month % 3 == 0));
    assert_eq!(set.months().last(), Some(&120));
}

#[test]
fn long_horizon_always_includes_final_month() {
    let set = MarkerSet::for_horizon(41);
    assert!(set.contains(39));
    assert!(!set.contains(40));
    assert!(set.contains(41));
    assert_eq!(set.len(), 15);
}

#[test]
fn single_month_horizon_has_start_and_end() {
    let roles: Vec<MarkerRole> = MarkerSet::for_horizon(1)
        .markers()
        .map(|marker| marker.role)
        .collect();
    assert_eq!(roles, vec![MarkerRole::Start, MarkerRole::End]);
}

#[test]
fn markers_carry_labels_and_hints() {
    let set = MarkerSet::for_horizon(6);
    let markers: Vec<_> = set.markers().collect();

    assert_eq!(markers[0].label(), "Month 0");
    assert_eq!(markers[0].role.hint(), "start");
    assert_eq!(markers[3].role, MarkerRole::Intermediate);
    assert_eq!(markers[6].accessible_label(), "Open details for month 6");
    assert_eq!(markers[6].role.hint(), "end");
}

#[test]
fn session_markers_follow_latest_horizon() {
    let mut session = ProjectionSession::new();
    assert!(session.markers().is_none());

    session
        .compute(&ProjectionInputs::default().with_horizon_months(120))
        .expect("compute");
    let markers = session.markers().expect("markers");
    assert_eq!(markers.horizon_months(), 120);
    assert_eq!(markers.len(), 41);
}

//! Integration tests for the roadmap view state machine.

use async_trait::async_trait;
use waypoint_core::{
    generator::{CannedGenerator, RoadmapGenerator},
    models::ViewStatus,
    view::RoadmapView,
    Result, WaypointError,
};

/// Generator that always fails, for exercising the failure path.
struct FailingGenerator;

#[async_trait]
impl RoadmapGenerator for FailingGenerator {
    async fn generate(&self, _topic: &str) -> Result<String> {
        Err(WaypointError::generation("service unavailable"))
    }
}

const SAMPLE: &str = "### Week 1: Basics\n**Set up**\n- Install\n### Week 2: Practice\n**Drill**\n";

#[tokio::test]
async fn test_successful_request_loads_model_and_pre_expands_week_one() {
    let mut view = RoadmapView::new();
    view.request_roadmap("learn rust", &CannedGenerator::new(SAMPLE))
        .await
        .expect("valid topic");

    assert_eq!(view.status(), &ViewStatus::Ready);
    assert_eq!(view.topic(), "learn rust");

    let roadmap = view.model().expect("model loaded");
    assert_eq!(roadmap.len(), 2);

    // Only week 1 is pre-expanded.
    assert!(view.is_expanded(1));
    assert!(!view.is_expanded(2));
}

#[tokio::test]
async fn test_pre_expansion_uses_fixed_key_one() {
    // No week numbered 1: nothing visible is pre-expanded.
    let mut view = RoadmapView::new();
    view.request_roadmap("x", &CannedGenerator::new("### Week 2: Y\n**A**\n"))
        .await
        .unwrap();

    assert_eq!(view.status(), &ViewStatus::Ready);
    assert!(!view.is_expanded(2));
}

#[tokio::test]
async fn test_empty_topic_rejected_without_state_change() {
    let mut view = RoadmapView::new();
    let err = view
        .request_roadmap("   ", &CannedGenerator::new(SAMPLE))
        .await
        .unwrap_err();

    assert!(matches!(err, WaypointError::InvalidInput { .. }));
    assert_eq!(view.status(), &ViewStatus::Idle);
    assert!(view.model().is_none());
}

#[tokio::test]
async fn test_generation_failure_sets_failed_status() {
    let mut view = RoadmapView::new();
    view.request_roadmap("anything", &FailingGenerator)
        .await
        .expect("validation passes; failure lands in status");

    match view.status() {
        ViewStatus::Failed(message) => assert!(message.contains("service unavailable")),
        other => panic!("Expected Failed status, got {other:?}"),
    }
    assert!(view.model().is_none());
}

#[tokio::test]
async fn test_failed_rerequest_preserves_stale_model() {
    let mut view = RoadmapView::new();
    view.request_roadmap("first", &CannedGenerator::new(SAMPLE))
        .await
        .unwrap();
    let before = view.model().cloned();

    view.request_roadmap("second", &FailingGenerator)
        .await
        .unwrap();

    // The old model stays visible alongside the error.
    assert!(matches!(view.status(), ViewStatus::Failed(_)));
    assert_eq!(view.model().cloned(), before);
}

#[tokio::test]
async fn test_success_resets_expansion_from_previous_roadmap() {
    let mut view = RoadmapView::new();
    view.request_roadmap("first", &CannedGenerator::new(SAMPLE))
        .await
        .unwrap();
    view.toggle_week(2);
    assert!(view.is_expanded(2));

    view.request_roadmap("second", &CannedGenerator::new(SAMPLE))
        .await
        .unwrap();

    assert!(view.is_expanded(1));
    assert!(!view.is_expanded(2));
}

#[test]
fn test_toggle_is_self_inverse() {
    let mut view = RoadmapView::new();

    for week in [1, 5, 42] {
        let original = view.is_expanded(week);
        view.toggle_week(week);
        assert_eq!(view.is_expanded(week), !original);
        view.toggle_week(week);
        assert_eq!(view.is_expanded(week), original);
    }
}

#[test]
fn test_toggle_does_not_touch_model_or_status() {
    let mut view = RoadmapView::new();
    view.toggle_week(3);

    assert_eq!(view.status(), &ViewStatus::Idle);
    assert!(view.model().is_none());
    assert!(view.is_expanded(3));
}

#[test]
fn test_stale_response_is_discarded() {
    let mut view = RoadmapView::new();

    // Two overlapping requests; the first one's response arrives last.
    let stale = view.begin_request("first").unwrap();
    let current = view.begin_request("second").unwrap();

    view.complete(current, "### Week 1: Current\n");
    view.complete(stale, "### Week 1: Stale\n");

    let roadmap = view.model().expect("model loaded");
    assert_eq!(roadmap.weeks[0].focus, "Current");
}

#[test]
fn test_stale_failure_is_discarded() {
    let mut view = RoadmapView::new();

    let stale = view.begin_request("first").unwrap();
    let current = view.begin_request("second").unwrap();

    view.complete(current, "### Week 1: Current\n");
    view.fail(stale, "too late");

    assert_eq!(view.status(), &ViewStatus::Ready);
}

#[test]
fn test_begin_request_enters_loading_and_keeps_model() {
    let mut view = RoadmapView::new();
    let id = view.begin_request("topic").unwrap();
    view.complete(id, SAMPLE);

    let id = view.begin_request("another").unwrap();
    assert_eq!(view.status(), &ViewStatus::Loading);
    assert!(view.model().is_some());
    view.fail(id, "nope");
    assert!(view.model().is_some());
}

#[tokio::test]
async fn test_view_render_honors_expansion() {
    let mut view = RoadmapView::new();
    view.request_roadmap("learn rust", &CannedGenerator::new(SAMPLE))
        .await
        .unwrap();

    let rendered = format!("{view}");
    assert!(rendered.contains("# Roadmap for learn rust"));
    // Week 1 expanded: its task is visible. Week 2 collapsed: header only.
    assert!(rendered.contains("**Set up**"));
    assert!(!rendered.contains("**Drill**"));

    view.toggle_week(2);
    let rendered = format!("{view}");
    assert!(rendered.contains("**Drill**"));
}

#[tokio::test]
async fn test_failed_view_renders_error_and_stale_model() {
    let mut view = RoadmapView::new();
    view.request_roadmap("first", &CannedGenerator::new(SAMPLE))
        .await
        .unwrap();
    view.request_roadmap("second", &FailingGenerator)
        .await
        .unwrap();

    let rendered = format!("{view}");
    assert!(rendered.contains("Error:"));
    assert!(rendered.contains("Week 1"));
}

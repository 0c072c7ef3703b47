use catering_planner_rs::models::{RecipeBook, StockLedger};
use catering_planner_rs::state::{parse_servings, FinalizeOutcome, PlanningSession};

fn biriyani_session() -> PlanningSession {
    let recipes =
        RecipeBook::from_table(&[("Biriyani", &[("Rice", 1.0), ("Chicken", 1.0)])]).unwrap();
    let stock = StockLedger::from_table(&[("Rice", 5.0), ("Chicken", 4.0)]).unwrap();
    PlanningSession::new(recipes, stock)
}

fn two_dish_session() -> PlanningSession {
    let recipes = RecipeBook::from_table(&[
        ("Sambar", &[("Toor Dal", 0.05), ("Tamarind", 0.005), ("Vegetables", 0.08)]),
        ("Rasam", &[("Toor Dal", 0.03), ("Tamarind", 0.008), ("Tomatoes", 0.04)]),
    ])
    .unwrap();
    let stock = StockLedger::from_table(&[
        ("Toor Dal", 15.0),
        ("Tamarind", 3.0),
        ("Vegetables", 25.0),
        ("Tomatoes", 20.0),
    ])
    .unwrap();
    PlanningSession::new(recipes, stock)
}

#[test]
fn test_add_selects_one_serving_within_stock() {
    let mut session = biriyani_session();
    assert!(session.add("Biriyani"));

    assert_eq!(session.selection().get("Biriyani"), Some(&1));
    assert_eq!(session.views().requirement.get("Rice"), Some(1.0));
    assert_eq!(session.views().requirement.get("Chicken"), Some(1.0));
    assert!(session.views().shortage.is_empty());
}

#[test]
fn test_raising_servings_creates_shortages() {
    let mut session = biriyani_session();
    session.add("Biriyani");
    session.set_quantity("Biriyani", 6);

    assert_eq!(session.views().requirement.get("Rice"), Some(6.0));
    assert_eq!(session.views().requirement.get("Chicken"), Some(6.0));
    assert_eq!(session.views().shortage.get("Rice"), Some(1.0));
    assert_eq!(session.views().shortage.get("Chicken"), Some(2.0));
}

#[test]
fn test_finalize_clamps_stock_and_clears_selection() {
    let mut session = biriyani_session();
    session.add("Biriyani");
    session.set_quantity("Biriyani", 6);

    let outcome = session.finalize();
    assert!(outcome.is_applied());

    assert_eq!(session.stock().get("Rice"), Some(0.0));
    assert_eq!(session.stock().get("Chicken"), Some(0.0));
    assert!(session.selection().is_empty());
    assert!(session.views().requirement.is_empty());
    assert!(session.views().shortage.is_empty());
}

#[test]
fn test_negative_quantity_removes_dish() {
    let mut session = biriyani_session();
    session.add("Biriyani");
    assert!(session.set_quantity("Biriyani", -3));

    assert!(session.selection().is_empty());
    assert!(session.views().requirement.is_empty());
}

#[test]
fn test_finalize_on_empty_selection_is_noop() {
    let mut session = biriyani_session();
    let before = session.stock().clone();

    assert_eq!(session.finalize(), FinalizeOutcome::NothingToFinalize);
    assert_eq!(session.stock(), &before);
}

#[test]
fn test_add_unknown_dish_leaves_selection_unchanged() {
    let mut session = biriyani_session();
    assert!(!session.add("UnknownDish"));
    assert!(session.selection().is_empty());
}

#[test]
fn test_set_quantity_is_idempotent() {
    let mut session = biriyani_session();
    assert!(session.set_quantity("Biriyani", 3));
    let once = session.selection().clone();
    assert!(!session.set_quantity("Biriyani", 3));
    assert_eq!(session.selection(), &once);
}

#[test]
fn test_removal_keeps_shared_materials() {
    let mut session = two_dish_session();
    session.set_quantity("Sambar", 100);
    session.set_quantity("Rasam", 100);
    assert!(session.views().requirement.contains("Vegetables"));

    session.set_quantity("Sambar", 0);
    let req = &session.views().requirement;
    assert!(!req.contains("Vegetables"));
    assert!(req.contains("Toor Dal"));
    assert!(req.contains("Tamarind"));
    assert!(req.contains("Tomatoes"));
}

#[test]
fn test_finalize_deducts_exact_requirement() {
    let mut session = two_dish_session();
    session.set_quantity("Sambar", 100);
    session.set_quantity("Rasam", 50);

    let required_dal = session.views().requirement.get("Toor Dal").unwrap();
    let FinalizeOutcome::Applied(report) = session.finalize() else {
        panic!("expected finalize to apply");
    };

    let dal = session.stock().get("Toor Dal").unwrap();
    assert!((dal - (15.0 - required_dal)).abs() < 1e-9);
    assert_eq!(report.deductions.len(), 4);
    assert!(report.untracked.is_empty());
    assert_eq!(report.committed.len(), 2);
}

#[test]
fn test_invalid_text_input_removes_dish() {
    let mut session = biriyani_session();
    session.set_quantity("Biriyani", 4);
    session.set_quantity("Biriyani", parse_servings("lots"));
    assert!(session.selection().is_empty());
}

#[test]
fn test_summary_tracks_views() {
    let mut session = biriyani_session();
    session.set_quantity("Biriyani", 5);

    let summary = session.summary();
    assert_eq!(summary.total_servings, 5);
    assert_eq!(summary.materials_needed, 2);
    assert_eq!(summary.items_to_purchase, 1);
    assert_eq!(summary.materials_in_stock, 1);
}

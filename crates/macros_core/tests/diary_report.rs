use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use macros_core::db::open_db_in_memory;
use macros_core::{
    to_calories, CatalogService, DiaryService, RecorderService, SqliteConsumptionRepository,
    SqliteFoodRepository, UnitMode, BAR_WIDTH,
};
use rusqlite::Connection;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

fn add_food(conn: &Connection, name: &str, mode: UnitMode, macros: (f64, f64, f64)) -> i64 {
    CatalogService::new(SqliteFoodRepository::new(conn))
        .add_food(name, mode, macros.0, macros.1, macros.2)
        .unwrap()
}

fn recorder(conn: &Connection) -> RecorderService<SqliteConsumptionRepository<'_>> {
    RecorderService::new(SqliteConsumptionRepository::new(conn))
}

fn diary(conn: &Connection) -> DiaryService<SqliteConsumptionRepository<'_>> {
    DiaryService::new(SqliteConsumptionRepository::new(conn))
}

#[test]
fn rice_scenario_reports_one_unscaled_row() {
    let conn = open_db_in_memory().unwrap();
    let now = fixed_now();
    let rice = add_food(&conn, "Rice", UnitMode::Per100Grams, (28.0, 2.7, 0.3));
    recorder(&conn)
        .add_item_at(rice, 200.0, now - Duration::hours(1))
        .unwrap();

    let report = diary(&conn).show_diary_at(now).unwrap();

    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row.name, "Rice");
    assert_eq!(row.amount_label(), "200 g");
    assert_eq!(row.carbs, 28.0);
    assert_eq!(row.protein, 2.7);
    assert_eq!(row.fat, 0.3);
    assert_eq!(row.time_of_day(), "11:30");

    let expected = to_calories(28.0, 2.7, 0.3);
    assert!((report.totals.calories - expected).abs() < 1e-9);
    assert!((report.totals.calories - 125.5).abs() < 1e-9);
    assert_eq!(report.totals.macros.carbs, 28.0);
}

#[test]
fn empty_window_reports_zero_totals_and_empty_bars() {
    let conn = open_db_in_memory().unwrap();

    let report = diary(&conn).show_diary_at(fixed_now()).unwrap();

    assert!(report.rows.is_empty());
    assert_eq!(report.totals.calories, 0.0);
    let progress = report.progress();
    let labels: Vec<&str> = progress.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Calories", "Carbs", "Protein", "Fat"]);
    let goals: Vec<i64> = progress.iter().map(|p| p.goal_whole()).collect();
    assert_eq!(goals, vec![2140, 250, 150, 60]);
    for indicator in &progress {
        assert_eq!(indicator.achieved_whole(), 0);
        assert_eq!(indicator.remaining_cells(), BAR_WIDTH);
    }
}

#[test]
fn dangling_food_reference_is_excluded() {
    let conn = open_db_in_memory().unwrap();
    let now = fixed_now();
    let bread = add_food(&conn, "Bread", UnitMode::PerUnit, (15.0, 3.0, 1.0));

    recorder(&conn)
        .add_item_at(bread + 100, 1.0, now - Duration::minutes(5))
        .unwrap();
    recorder(&conn)
        .add_item_at(bread, 2.0, now - Duration::minutes(4))
        .unwrap();

    let report = diary(&conn).show_diary_at(now).unwrap();
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].amount_label(), "2 units");
}

#[test]
fn window_lower_bound_is_exclusive() {
    let conn = open_db_in_memory().unwrap();
    let now = fixed_now();
    let apple = add_food(&conn, "Apple", UnitMode::PerUnit, (25.0, 0.5, 0.3));
    let recorder = recorder(&conn);

    recorder
        .add_item_at(apple, 1.0, now - Duration::days(1) - Duration::seconds(1))
        .unwrap();
    recorder
        .add_item_at(apple, 2.0, now - Duration::days(1))
        .unwrap();
    recorder
        .add_item_at(apple, 3.0, now - Duration::days(1) + Duration::seconds(1))
        .unwrap();

    let report = diary(&conn).show_diary_at(now).unwrap();
    let amounts: Vec<f64> = report.rows.iter().map(|row| row.amount).collect();
    assert_eq!(amounts, vec![3.0]);
}

#[test]
fn rows_are_ordered_by_time_and_totals_accumulate() {
    let conn = open_db_in_memory().unwrap();
    let now = fixed_now();
    let oats = add_food(&conn, "Oats", UnitMode::Per100Grams, (60.0, 13.0, 7.0));
    let egg = add_food(&conn, "Egg", UnitMode::PerUnit, (0.6, 6.3, 5.3));
    let recorder = recorder(&conn);

    recorder
        .add_item_at(egg, 3.0, now - Duration::hours(2))
        .unwrap();
    recorder
        .add_item_at(oats, 80.0, now - Duration::hours(5))
        .unwrap();

    let report = diary(&conn).show_diary_at(now).unwrap();
    let names: Vec<&str> = report.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Oats", "Egg"]);

    assert!((report.totals.macros.carbs - 60.6).abs() < 1e-9);
    assert!((report.totals.macros.protein - 19.3).abs() < 1e-9);
    assert!((report.totals.macros.fat - 12.3).abs() < 1e-9);
    let expected = to_calories(60.0, 13.0, 7.0) + to_calories(0.6, 6.3, 5.3);
    assert!((report.totals.calories - expected).abs() < 1e-9);
}

#[test]
fn exceeding_a_goal_fills_the_bar() {
    let conn = open_db_in_memory().unwrap();
    let now = fixed_now();
    let butter = add_food(&conn, "Butter", UnitMode::Per100Grams, (0.1, 0.9, 81.0));
    recorder(&conn)
        .add_item_at(butter, 100.0, now - Duration::minutes(1))
        .unwrap();

    let report = diary(&conn).show_diary_at(now).unwrap();
    let fat = report
        .progress()
        .into_iter()
        .find(|indicator| indicator.label == "Fat")
        .unwrap();
    assert_eq!(fat.achieved_cells(), BAR_WIDTH);
    assert_eq!(fat.remaining_cells(), 0);
    assert_eq!(fat.achieved_whole(), 81);
}

#[test]
fn add_item_uses_current_time() {
    let conn = open_db_in_memory().unwrap();
    let milk = add_food(&conn, "Milk", UnitMode::Per100Grams, (4.8, 3.4, 1.0));

    let event = recorder(&conn).add_item(milk, 250.0).unwrap();
    assert_eq!(event.food_id, milk);
    assert_eq!(event.amount, 250.0);

    let report = diary(&conn).show_diary().unwrap();
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].amount_label(), "250 g");
}

#[test]
fn recorded_event_matches_the_stored_row_time() {
    let conn = open_db_in_memory().unwrap();
    let now = fixed_now();
    let tea = add_food(&conn, "Tea", UnitMode::PerUnit, (0.0, 0.0, 0.0));
    let at = now - Duration::minutes(10) + Duration::milliseconds(875);

    let event = recorder(&conn).add_item_at(tea, 1.0, at).unwrap();
    assert_eq!(event.time.nanosecond(), 0);

    let report = diary(&conn).show_diary_at(now).unwrap();
    assert_eq!(report.rows[0].time, event.time);
}

#[test]
fn add_item_returns_whole_second_time() {
    let conn = open_db_in_memory().unwrap();
    let tea = add_food(&conn, "Tea", UnitMode::PerUnit, (0.0, 0.0, 0.0));

    let event = recorder(&conn).add_item(tea, 1.0).unwrap();
    assert_eq!(event.time.nanosecond(), 0);
}

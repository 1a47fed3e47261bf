use chrono::NaiveDate;
use macros_core::{ConsumptionEvent, FoodDefinition, UnitMode};

#[test]
fn food_serialization_uses_snake_case_unit_mode() {
    let food = FoodDefinition {
        id: 7,
        name: "Rice".to_string(),
        unit_mode: UnitMode::Per100Grams,
        carbs: 28.0,
        protein: 2.7,
        fat: 0.3,
    };

    let json = serde_json::to_value(&food).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["unit_mode"], "per_100_grams");

    let decoded: FoodDefinition = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, food);
}

#[test]
fn per_unit_mode_serializes_as_per_unit() {
    assert_eq!(
        serde_json::to_value(UnitMode::PerUnit).unwrap(),
        serde_json::json!("per_unit")
    );
}

#[test]
fn consumption_event_serializes_food_reference_and_time() {
    let event = ConsumptionEvent {
        food_id: 3,
        time: NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(7, 45, 0)
            .unwrap(),
        amount: 1.5,
    };

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["food_id"], 3);
    assert_eq!(json["time"], "2026-01-02T07:45:00");
    assert_eq!(json["amount"], 1.5);
}

use macros_core::db::open_db_in_memory;
use macros_core::{
    CatalogService, FoodDefinition, FoodRepository, NewFood, RepoError, SqliteFoodRepository,
    UnitMode,
};

#[test]
fn add_food_then_list_roundtrips_values() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteFoodRepository::new(&conn));

    let id = catalog
        .add_food("Rice", UnitMode::Per100Grams, 28.0, 2.7, 0.3)
        .unwrap();

    let foods = catalog.list_foods().unwrap();
    assert_eq!(
        foods,
        vec![FoodDefinition {
            id,
            name: "Rice".to_string(),
            unit_mode: UnitMode::Per100Grams,
            carbs: 28.0,
            protein: 2.7,
            fat: 0.3,
        }]
    );
}

#[test]
fn list_foods_is_ordered_by_assigned_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFoodRepository::new(&conn);

    let banana = repo
        .create_food(&NewFood::new("Banana", UnitMode::PerUnit, 27.0, 1.3, 0.4))
        .unwrap();
    let almonds = repo
        .create_food(&NewFood::new("Almonds", UnitMode::Per100Grams, 22.0, 21.0, 49.0))
        .unwrap();
    assert!(almonds > banana);

    let names: Vec<String> = repo
        .list_foods()
        .unwrap()
        .into_iter()
        .map(|food| food.name)
        .collect();
    assert_eq!(names, vec!["Banana", "Almonds"]);
}

#[test]
fn list_foods_on_empty_catalog_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteFoodRepository::new(&conn));

    assert!(catalog.list_foods().unwrap().is_empty());
}

#[test]
fn add_food_stores_values_without_range_checks() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteFoodRepository::new(&conn));

    let id = catalog
        .add_food("", UnitMode::PerUnit, -1.0, 0.0, 0.0)
        .unwrap();

    let food = catalog.get_food(id).unwrap().unwrap();
    assert_eq!(food.name, "");
    assert_eq!(food.carbs, -1.0);
    assert_eq!(food.unit_mode, UnitMode::PerUnit);
}

#[test]
fn get_food_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteFoodRepository::new(&conn));

    assert_eq!(catalog.get_food(42).unwrap(), None);
}

#[test]
fn unknown_unit_flag_is_rejected_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO foods (name, is_per_100g, carbs, protein, fat) VALUES ('Odd', 7, 1, 1, 1);",
        [],
    )
    .unwrap();

    let err = SqliteFoodRepository::new(&conn).list_foods().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("is_per_100g")));
}

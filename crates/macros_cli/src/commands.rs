//! Menu and the four diary operations.

use crate::error::{CliError, CliResult};
use crate::prompt::Session;
use crate::render;
use log::info;
use macros_core::{
    CatalogService, DiaryService, FoodId, RecorderService, SqliteConsumptionRepository,
    SqliteFoodRepository, UnitMode,
};
use rusqlite::Connection;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    ShowDiary,
    AddFood,
    ListFoods,
}

impl MenuChoice {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Self::AddItem),
            "2" => Some(Self::ShowDiary),
            "3" => Some(Self::AddFood),
            "4" => Some(Self::ListFoods),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::AddItem => "add_item",
            Self::ShowDiary => "show_diary",
            Self::AddFood => "add_food",
            Self::ListFoods => "list_foods",
        }
    }
}

const MENU: &str = "[1] Add new item
[2] Today's diary
[3] Add food type
[4] List food types";

/// Prints the menu, reads one selection and services it.
pub fn run<R: BufRead, W: Write>(conn: &Connection, session: &mut Session<R, W>) -> CliResult<()> {
    writeln!(session.output(), "{MENU}")?;
    let selection = session.line("")?;
    let choice = MenuChoice::parse(&selection)
        .ok_or_else(|| CliError::InvalidSelection(selection.trim().to_string()))?;
    info!("event=menu_select module=cli status=ok choice={}", choice.name());

    match choice {
        MenuChoice::AddItem => {
            writeln!(session.output(), "Adding item to diary...")?;
            add_item(conn, session)
        }
        MenuChoice::ShowDiary => {
            writeln!(session.output())?;
            show_diary(conn, session)
        }
        MenuChoice::AddFood => {
            writeln!(session.output(), "Adding new food type to db...")?;
            add_food(conn, session)
        }
        MenuChoice::ListFoods => {
            writeln!(session.output())?;
            list_foods(conn, session)
        }
    }
}

pub fn add_item<R: BufRead, W: Write>(
    conn: &Connection,
    session: &mut Session<R, W>,
) -> CliResult<()> {
    writeln!(session.output())?;
    list_foods(conn, session)?;
    writeln!(session.output())?;

    let food_id: FoodId = session.number("ID: ", "food id")?;
    let amount: f64 = session.number("Amount: ", "amount")?;

    RecorderService::new(SqliteConsumptionRepository::new(conn)).add_item(food_id, amount)?;
    Ok(())
}

pub fn show_diary<R: BufRead, W: Write>(
    conn: &Connection,
    session: &mut Session<R, W>,
) -> CliResult<()> {
    let report = DiaryService::new(SqliteConsumptionRepository::new(conn)).show_diary()?;
    writeln!(session.output(), "{}", render::diary(&report))?;
    Ok(())
}

pub fn add_food<R: BufRead, W: Write>(
    conn: &Connection,
    session: &mut Session<R, W>,
) -> CliResult<()> {
    writeln!(session.output())?;
    let name = session.line("Name: ")?;
    let unit_mode = if session.confirm_default_yes("Per 100 grams? [Y/n]: ")? {
        UnitMode::Per100Grams
    } else {
        UnitMode::PerUnit
    };
    let carbs: f64 = session.number("Carbs: ", "carbs")?;
    let protein: f64 = session.number("Protein: ", "protein")?;
    let fat: f64 = session.number("Fat: ", "fat")?;

    let out = session.output();
    writeln!(out)?;
    writeln!(out, "Adding:")?;
    writeln!(out, "  name         = {name}")?;
    writeln!(
        out,
        "  is_per_100g  = {}",
        u8::from(unit_mode.is_per_100_grams())
    )?;
    writeln!(out, "  carbs        = {carbs}")?;
    writeln!(out, "  protein      = {protein}")?;
    writeln!(out, "  fat          = {fat}")?;
    session.line("")?;

    let catalog = CatalogService::new(SqliteFoodRepository::new(conn));
    let id = catalog.add_food(name, unit_mode, carbs, protein, fat)?;
    match catalog.get_food(id)? {
        Some(food) => writeln!(
            session.output(),
            "Added food #{}: {} ({})",
            food.id,
            food.name,
            food.unit_mode
        )?,
        None => writeln!(session.output(), "Added food #{id}")?,
    }
    Ok(())
}

pub fn list_foods<R: BufRead, W: Write>(
    conn: &Connection,
    session: &mut Session<R, W>,
) -> CliResult<()> {
    let foods = CatalogService::new(SqliteFoodRepository::new(conn)).list_foods()?;
    writeln!(session.output(), "{}", render::food_table(&foods))?;
    Ok(())
}

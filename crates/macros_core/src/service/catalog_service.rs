//! Food catalog use-case service.

use crate::model::food::{FoodDefinition, FoodId, NewFood, UnitMode};
use crate::repo::food_repo::FoodRepository;
use crate::repo::RepoResult;

/// Creates and lists food definitions.
pub struct CatalogService<R: FoodRepository> {
    repo: R,
}

impl<R: FoodRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a new food definition and returns its assigned id.
    ///
    /// Values are stored as given; no range checks are applied.
    pub fn add_food(
        &self,
        name: impl Into<String>,
        unit_mode: UnitMode,
        carbs: f64,
        protein: f64,
        fat: f64,
    ) -> RepoResult<FoodId> {
        self.repo
            .create_food(&NewFood::new(name, unit_mode, carbs, protein, fat))
    }

    pub fn get_food(&self, id: FoodId) -> RepoResult<Option<FoodDefinition>> {
        self.repo.get_food(id)
    }

    /// Lists every food in id order.
    pub fn list_foods(&self) -> RepoResult<Vec<FoodDefinition>> {
        self.repo.list_foods()
    }
}

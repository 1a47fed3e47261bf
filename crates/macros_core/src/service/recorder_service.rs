//! Consumption recording use-case service.

use crate::model::consumption::ConsumptionEvent;
use crate::model::food::FoodId;
use crate::repo::consumption_repo::ConsumptionRepository;
use crate::repo::RepoResult;
use chrono::{NaiveDateTime, SubsecRound, Utc};

/// Appends consumption events to the diary.
pub struct RecorderService<R: ConsumptionRepository> {
    repo: R,
}

impl<R: ConsumptionRepository> RecorderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records `amount` of `food_id` at the current UTC time.
    ///
    /// `food_id` is not checked; an unknown id is stored and later ignored
    /// by the diary.
    pub fn add_item(&self, food_id: FoodId, amount: f64) -> RepoResult<ConsumptionEvent> {
        self.add_item_at(food_id, amount, Utc::now().naive_utc())
    }

    /// Records `amount` of `food_id` at `time` (naive UTC).
    ///
    /// Storage keeps whole seconds, so the returned event is truncated to
    /// match the persisted row.
    pub fn add_item_at(
        &self,
        food_id: FoodId,
        amount: f64,
        time: NaiveDateTime,
    ) -> RepoResult<ConsumptionEvent> {
        let event = ConsumptionEvent {
            food_id,
            time: time.trunc_subsecs(0),
            amount,
        };
        self.repo.record_consumption(&event)?;
        Ok(event)
    }
}

//! Ordering workflow
//!
//! Runs the order from start to finish:
//!
//! 1. Ask whether to continue a saved order, and load it if so
//! 2. Choose the main dish, unless already set
//! 3. Choose toppings, unless already set
//! 4. Choose a cooking level for hamburgers, unless already set
//! 5. Save the order to a new file
//!
//! Steps 2-4 only touch fields that are still empty, so resuming a complete
//! order goes straight to saving. No step is retried here; retries on bad
//! input belong to the [`Chooser`].

pub mod import;
pub mod persist;
pub mod toppings;

pub use import::{ask_to_import, import_order, read_order_file, validate_order_path};
pub use persist::save_order;
pub use toppings::pick_toppings;

use crate::catalog;
use crate::error::{common, Result};
use crate::interaction::Chooser;
use crate::order::{CookingLevel, MainDish, Order};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DISH_LABEL: &str = "Please select a main dish";
pub const COOKING_LEVEL_LABEL: &str = "Please select a cooking level for the hamburger";

/// Drives one order through every step using a [`Chooser`]
pub struct OrderWorkflow<C> {
    chooser: C,
    working_dir: PathBuf,
    output_dir: PathBuf,
}

impl<C: Chooser> OrderWorkflow<C> {
    pub fn new(
        chooser: C,
        working_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            chooser,
            working_dir: working_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn into_chooser(self) -> C {
        self.chooser
    }

    /// Run every step and return the path of the saved order
    pub fn run(&mut self) -> Result<PathBuf> {
        let mut order = Order::new();

        if ask_to_import(&mut self.chooser)? {
            order = import_order(&mut self.chooser, &self.working_dir)
                .map_err(|e| e.with_context("importing order"))?;
        }

        self.complete(&mut order)?;
        self.save(&order)
    }

    /// Fill in whatever `order` is still missing
    pub fn complete(&mut self, order: &mut Order) -> Result<()> {
        if order.main_dish.is_none() {
            order.main_dish = Some(self.select_main_dish()?);
        } else {
            debug!(dish = ?order.main_dish, "main dish already set");
        }

        if order.toppings.is_empty() {
            order.toppings = self.select_toppings(order.main_dish.as_ref());
        } else {
            debug!(count = order.toppings.len(), "toppings already set");
        }

        if order.is_hamburger() && order.cooking_level().is_none() {
            let level = self.select_cooking_level()?;
            order.set_cooking_level(level);
        }

        Ok(())
    }

    fn save(&self, order: &Order) -> Result<PathBuf> {
        save_order(order, &self.output_dir).map_err(|e| e.with_context("saving order"))
    }

    fn select_main_dish(&mut self) -> Result<MainDish> {
        let step = "selecting a main dish";
        let dishes = catalog::dishes();
        let items: Vec<String> = dishes.iter().map(ToString::to_string).collect();
        let answer = self
            .chooser
            .select_one(DISH_LABEL, &items)
            .map_err(|e| common::no_answer(step, e))?;

        dishes
            .get(answer.index)
            .filter(|dish| dish.as_str() == answer.value)
            .cloned()
            .ok_or_else(|| common::unexpected_answer(step, &answer.value))
    }

    // A failure here is logged and leaves the toppings empty rather than
    // ending the run, unlike every other step.
    fn select_toppings(&mut self, dish: Option<&MainDish>) -> Vec<String> {
        let Some(candidates) = dish.and_then(catalog::toppings_for) else {
            debug!(?dish, "no toppings offered");
            return Vec::new();
        };

        match pick_toppings(&mut self.chooser, candidates) {
            Ok(toppings) => toppings,
            Err(e) => {
                warn!("failed to get response while selecting toppings: {e:#}");
                Vec::new()
            }
        }
    }

    fn select_cooking_level(&mut self) -> Result<CookingLevel> {
        let step = "selecting a cooking level";
        let items: Vec<String> = CookingLevel::ALL.iter().map(ToString::to_string).collect();
        let answer = self
            .chooser
            .select_one(COOKING_LEVEL_LABEL, &items)
            .map_err(|e| common::no_answer(step, e))?;

        answer
            .value
            .parse()
            .map_err(|_| common::unexpected_answer(step, &answer.value))
    }
}

/// Convenience wrapper: run a workflow to completion
pub fn run_order<C: Chooser>(chooser: C, working_dir: &Path, output_dir: &Path) -> Result<PathBuf> {
    OrderWorkflow::new(chooser, working_dir, output_dir).run()
}

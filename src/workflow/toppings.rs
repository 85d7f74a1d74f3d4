//! Topping selection

use crate::interaction::Chooser;
use anyhow::{bail, Result};
use std::cmp::Ordering;
use tracing::{debug, trace};

pub const TOPPINGS_LABEL: &str =
    "Please enter a topping from the following list, or select done to continue";

/// Label of the entry that ends topping selection
pub const DONE: &str = "Done";

/// Ask for toppings one at a time until the user picks [`DONE`]
///
/// Each pick is removed from the candidates so no topping can be chosen twice,
/// and picks are returned in the order they were made. The candidate list
/// shrinks on every pick, so the loop ends once it is exhausted at the latest
/// (only [`DONE`] left).
pub fn pick_toppings<C: Chooser + ?Sized>(
    chooser: &mut C,
    candidates: &[&str],
) -> Result<Vec<String>> {
    let mut remaining: Vec<String> = candidates.iter().map(|t| t.to_string()).collect();
    let mut selected = Vec::new();

    loop {
        let mut items = remaining.clone();
        items.push(DONE.to_string());

        let selection = chooser.select_one(TOPPINGS_LABEL, &items)?;
        trace!(index = selection.index, value = %selection.value, "topping answer");

        // Done is recognised by position so a topping named "Done" still works
        match selection.index.cmp(&remaining.len()) {
            Ordering::Less => {}
            Ordering::Equal => break,
            Ordering::Greater => bail!(
                "failed to understand choice '{}': not one of the offered toppings",
                selection.value
            ),
        }

        let topping = remaining.remove(selection.index);
        debug!(%topping, left = remaining.len(), "topping selected");
        selected.push(topping);
    }

    Ok(selected)
}

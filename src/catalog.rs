//! Static menu: which toppings each dish allows

use crate::order::MainDish;

const HAMBURGER_TOPPINGS: &[&str] = &["Cheder", "Onion"];
const PIZZA_TOPPINGS: &[&str] = &["Tuna", "Olives"];

static DISHES: [MainDish; 2] = MainDish::ALL;

/// Dishes that can be picked from the menu
pub fn dishes() -> &'static [MainDish] {
    &DISHES
}

/// Toppings offered for `dish`, in menu order
///
/// Returns `None` for dishes that are not on the menu. Callers treat that as
/// "nothing to offer", not as a failure.
pub fn toppings_for(dish: &MainDish) -> Option<&'static [&'static str]> {
    match dish {
        MainDish::Hamburger => Some(HAMBURGER_TOPPINGS),
        MainDish::Pizza => Some(PIZZA_TOPPINGS),
        MainDish::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_dish_has_toppings() {
        for dish in dishes() {
            let toppings = toppings_for(dish).expect("menu dish should have toppings");
            assert!(!toppings.is_empty(), "{dish} has no toppings");
        }
    }

    #[test]
    fn test_toppings_are_in_menu_order() {
        assert_eq!(
            toppings_for(&MainDish::Hamburger),
            Some(&["Cheder", "Onion"][..])
        );
        assert_eq!(toppings_for(&MainDish::Pizza), Some(&["Tuna", "Olives"][..]));
    }

    #[test]
    fn test_unknown_dish_is_not_found() {
        assert_eq!(toppings_for(&MainDish::Other("Sushi".to_string())), None);
        assert_eq!(toppings_for(&MainDish::Other(String::new())), None);
    }
}

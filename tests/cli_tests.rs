//! Integration tests for the CLI interface
//!
//! Drives the binary through stdin the way a user would. Choices are 1-based.

mod common;

use assert_cmd::Command;
use common::OrderDir;
use predicates::prelude::*;
use takeaway::codec::{self, Format};
use takeaway::order::MainDish;

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("takeaway").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn test_invalid_flag() {
    let mut cmd = Command::cargo_bin("takeaway").unwrap();
    cmd.arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_new_pizza_with_olives() {
    let dir = OrderDir::new();

    // Create new, Pizza, Olives, Done
    dir.command()
        .write_stdin("2\n2\n2\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please select a main dish"))
        .stdout(predicate::str::contains("Successfully wrote down order at"))
        .stdout(predicate::str::contains("Your order is done."));

    let yaml = dir.only_saved_order();
    let order = codec::decode(yaml.as_bytes(), Format::Yaml).unwrap();
    assert_eq!(order.main_dish, Some(MainDish::Pizza));
    assert_eq!(order.toppings, vec!["Olives"]);
    assert!(!yaml.contains("extras"));
    assert!(!yaml.contains("cookingLevel"));
}

#[test]
fn test_new_hamburger_without_toppings() {
    let dir = OrderDir::new();

    // Create new, Hamburger, Done, M
    dir.command()
        .write_stdin("2\n1\n3\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please select a cooking level for the hamburger",
        ));

    let yaml = dir.only_saved_order();
    let order = codec::decode(yaml.as_bytes(), Format::Yaml).unwrap();
    assert_eq!(order.main_dish, Some(MainDish::Hamburger));
    assert!(order.toppings.is_empty());
    assert_eq!(order.cooking_level(), Some("M"));
    assert!(!yaml.contains("toppings"));
}

#[test]
fn test_invalid_choice_is_reasked() {
    let dir = OrderDir::new();

    // "7" and "x" are rejected before "2" (Create new) is accepted
    dir.command()
        .write_stdin("7\nx\n2\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice."));

    let order = codec::decode(dir.only_saved_order().as_bytes(), Format::Yaml).unwrap();
    assert_eq!(order.main_dish, Some(MainDish::Pizza));
    assert!(order.toppings.is_empty());
}

#[test]
fn test_import_complete_order_goes_straight_to_save() {
    let dir = OrderDir::new();
    dir.write("saved.yaml", "main_dish: Pizza\ntoppings:\n- Tuna\n");

    dir.command()
        .write_stdin("1\nsaved.yaml\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please select a main dish").not())
        .stdout(predicate::str::contains("Please enter a topping").not())
        .stdout(predicate::str::contains("Your order is done."));

    let order = codec::decode(dir.only_saved_order().as_bytes(), Format::Yaml).unwrap();
    assert_eq!(order.main_dish, Some(MainDish::Pizza));
    assert_eq!(order.toppings, vec!["Tuna"]);
}

#[test]
fn test_import_json_reasks_for_missing_file() {
    let dir = OrderDir::new();
    dir.write(
        "saved.json",
        r#"{"main_dish": "Hamburger", "toppings": ["Onion"], "extras": {"cookingLevel": "WD"}}"#,
    );

    dir.command()
        .write_stdin("1\nmissing.json\nsaved.json\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("failed to stat file"));

    let order = codec::decode(dir.only_saved_order().as_bytes(), Format::Yaml).unwrap();
    assert_eq!(order.main_dish, Some(MainDish::Hamburger));
    assert_eq!(order.toppings, vec!["Onion"]);
    assert_eq!(order.cooking_level(), Some("WD"));
}

#[test]
fn test_import_unknown_extension_fails() {
    let dir = OrderDir::new();
    dir.write("saved.txt", "main_dish: Pizza\n");

    dir.command()
        .write_stdin("1\nsaved.txt\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("failed to determine file type"));

    assert!(dir.saved_orders().is_empty());
}

#[test]
fn test_import_malformed_file_fails() {
    let dir = OrderDir::new();
    dir.write("saved.yml", "main_dish: [Pizza\n");

    dir.command()
        .write_stdin("1\nsaved.yml\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Order file is malformed"));
}

#[test]
fn test_closed_input_fails() {
    let dir = OrderDir::new();

    dir.command()
        .write_stdin("2\n")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("selecting a main dish"));

    assert!(dir.saved_orders().is_empty());
}

#[test]
fn test_missing_output_dir_fails() {
    let dir = OrderDir::new();

    let mut cmd = Command::cargo_bin("takeaway").unwrap();
    cmd.current_dir(dir.path())
        .arg("--output-dir")
        .arg(dir.path().join("nope"))
        .write_stdin("2\n2\n3\n")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("Could not save order"));
}

#[test]
fn test_output_dir_from_environment() {
    let dir = OrderDir::new();

    let mut cmd = Command::cargo_bin("takeaway").unwrap();
    cmd.current_dir(dir.path())
        .env("TAKEAWAY_OUTPUT_DIR", dir.path())
        .write_stdin("2\n2\n3\n")
        .assert()
        .success();

    assert_eq!(dir.saved_orders().len(), 1);
}

//! Integration tests for the vet-cli menu binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn vet() -> Command {
    let mut cmd = Command::cargo_bin("vet").unwrap();
    cmd.args(["--no-color", "--seed", "42"]);
    cmd
}

#[test]
fn quit_says_goodbye() {
    vet()
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("~ The Virtual Esoteric Toolkit ~"))
        .stdout(predicate::str::contains(
            "Thank you for using The Virtual Esoteric Toolkit.",
        ));
}

#[test]
fn end_of_input_exits_cleanly() {
    vet().write_stdin("").assert().success();
}

#[test]
fn invalid_selection_warns() {
    vet()
        .write_stdin("42\nX\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid selection."));
}

#[test]
fn numerology_report() {
    vet()
        .write_stdin("9\n\n1990 05 15\nAnna\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Numerology Report ---"))
        .stdout(predicate::str::contains(
            "Life Path Number: 3 - Creativity, Expression",
        ));
}

#[test]
fn dice_roll() {
    vet()
        .write_stdin("4\nd6(2),d20(1)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 x d6: ["))
        .stdout(predicate::str::contains("1 x d20: ["))
        .stdout(predicate::str::contains("Overall Total: "));
}

#[test]
fn bad_dice_notation_keeps_the_tool_open() {
    vet()
        .write_stdin("4\nd7(2)\nd4(1)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 x d4: ["));
}

#[test]
fn rune_set_runs_out_after_24_draws() {
    let input = format!("2\nn\nn\n{}", "\n".repeat(25));
    vet()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fehu"))
        .stdout(predicate::str::contains("No More Runes to Draw"));
}

#[test]
fn sigil_consonants() {
    vet()
        .write_stdin("10\nlove\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sigil consonants (no vowels, no repeats): LV",
        ));
}

#[test]
fn iching_reading() {
    vet()
        .write_stdin(format!("5\n{}", "\n".repeat(7)))
        .assert()
        .success()
        .stdout(predicate::str::contains("Primary Hexagram:"))
        .stdout(predicate::str::contains("Lower trigram:"));
}

#[test]
fn moon_phase_on_eclipse_day() {
    vet()
        .write_stdin("8\n2024 04 08\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-04-08: New Moon"));
}

#[test]
fn menu_key_returns_to_menu() {
    vet()
        .write_stdin("3\nm\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Virtual Coin Toss"))
        .stdout(predicate::str::contains("Thank you for using"));
}

fn stdout_of(input: &str) -> String {
    let output = vet().write_stdin(input.to_string()).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn reset_clears_the_dice_total() {
    let out = stdout_of("4\nd20(3)\n\nr\nd4(1)\nm\nx\n");
    let totals: Vec<u64> = out
        .lines()
        .filter_map(|l| l.strip_prefix("Overall Total: "))
        .map(|n| n.parse().unwrap())
        .collect();
    assert_eq!(totals.len(), 3);
    assert!((1..=4).contains(&totals[2]), "total after reset: {}", totals[2]);
    let d4 = format!("1 x d4: [{0}] (Total: {0})", totals[2]);
    assert!(out.contains(&d4));
}

#[test]
fn reset_refills_the_rune_set() {
    let input = format!("2\nn\nn\n{}r\nn\nn\n\nm\nx\n", "\n".repeat(25));
    let out = stdout_of(&input);
    assert_eq!(out.matches("No More Runes to Draw").count(), 1);
    let after_reset = out.rsplit("Virtual Runes Set").next().unwrap();
    assert!(!after_reset.contains("No More Runes"));
    assert!(out.contains("Thank you for using"));
}

#[test]
fn padded_menu_numbers_are_rejected() {
    vet()
        .write_stdin("01\n+1\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid selection."))
        .stdout(predicate::str::contains("Virtual Tarot Deck").not());
}

#[test]
fn no_color_output_is_plain() {
    vet()
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

//! Integration tests for the `rps-cli` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

const WIN: &str = "Congrats🥂, You Win!";
const LOSE: &str = "So sorry😢, You Lose!";
const TIE: &str = "🤷It's a Tie! I guess it was inevitable";

fn rps() -> Command {
    let mut cmd = Command::cargo_bin("rps").unwrap();
    cmd.env("NO_COLOR", "1").args(["--seed", "7"]);
    cmd
}

fn any_verdict() -> impl Predicate<str> {
    predicate::str::contains(WIN)
        .or(predicate::str::contains(LOSE))
        .or(predicate::str::contains(TIE))
}

// ---------------------------------------------------------------------------
// attempts prompt
// ---------------------------------------------------------------------------

#[test]
fn prompts_for_attempts() {
    rps()
        .write_stdin("1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\nChoose number of Game attempts to begin.\nAttempts = ",
        ));
}

#[test]
fn prompts_for_move_after_attempts() {
    rps()
        .write_stdin("1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\nChoose number of Game attempts to begin.\nAttempts = \n\
             Enter:\n1 for Rock,\n2 for Paper,\n3 for Scissior.\n\nChoice: Your choice is Rock!",
        ));
}

#[test]
fn oversized_numbers_keep_their_meaning() {
    rps()
        .write_stdin("100000000000000000000\n-99999999999999999999\n1\n99999999999999999999\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ensure number of attempt is an odd number")
                .and(predicate::str::contains("Attemtps must be greater than zero!"))
                .and(predicate::str::contains("Invalid Number. Please enter 1,2 or 3"))
                .and(predicate::str::contains("Error!").not()),
        );
}

#[test]
fn non_integer_attempts_reprompt() {
    rps()
        .write_stdin("abc\n1\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Error! Please ensure your input is a positive integer")
                .and(any_verdict()),
        );
}

#[test]
fn non_positive_attempts_reprompt() {
    rps()
        .write_stdin("0\n-5\n1\n2\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Attemtps must be greater than zero!")
                .count(2)
                .and(any_verdict()),
        );
}

#[test]
fn even_attempts_reprompt() {
    rps()
        .write_stdin("4\n1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ensure number of attempt is an odd number to help determine a winner.\nTry Again!",
        ));
}

// ---------------------------------------------------------------------------
// rounds
// ---------------------------------------------------------------------------

#[test]
fn invalid_moves_reprompt() {
    rps()
        .write_stdin("1\nrock\n0\n2\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Error! Input must be a number.")
                .and(predicate::str::contains("Invalid Number. Please enter 1,2 or 3"))
                .and(
                    predicate::str::contains(
                        "\nEnter:\n1 for Rock,\n2 for Paper,\n3 for Scissior.\n\nChoice: ",
                    )
                    .count(3),
                )
                .and(predicate::str::contains("Player's score =").count(1)),
        );
}

#[test]
fn plays_exactly_the_chosen_number_of_rounds() {
    rps()
        .write_stdin("5\n1\n2\n3\n1\n2\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Player's score =")
                .count(5)
                .and(predicate::str::contains("System's choice is").count(5)),
        );
}

#[test]
fn round_lines_name_both_moves() {
    rps()
        .write_stdin("1\n3\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Your choice is Scissors!")
                .and(predicate::str::is_match("System's choice is (Rock|Paper|Scissors)!").unwrap()),
        );
}

// ---------------------------------------------------------------------------
// verdict
// ---------------------------------------------------------------------------

#[test]
fn exactly_one_verdict() {
    let output = rps().write_stdin("3\n1\n1\n1\n").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let verdicts = [WIN, LOSE, TIE]
        .iter()
        .map(|v| stdout.matches(v).count())
        .sum::<usize>();
    assert_eq!(verdicts, 1);
    assert!([WIN, LOSE, TIE].iter().any(|v| stdout.trim_end().ends_with(v)));
}

#[test]
fn verdict_matches_final_score() {
    let output = rps().write_stdin("1\n2\n").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let expected = if stdout.contains("System's choice is Rock!") {
        ("Player's score = 1 : System's score = 0", WIN)
    } else if stdout.contains("System's choice is Scissors!") {
        ("Player's score = 0 : System's score = 1", LOSE)
    } else {
        ("Player's score = 0 : System's score = 0", TIE)
    };
    assert!(stdout.contains(expected.0), "{stdout}");
    assert!(stdout.trim_end().ends_with(expected.1), "{stdout}");
}

#[test]
fn same_seed_same_series() {
    let first = rps().write_stdin("5\n1\n1\n1\n1\n1\n").output().unwrap();
    let second = rps().write_stdin("5\n1\n1\n1\n1\n1\n").output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

// ---------------------------------------------------------------------------
// process behavior
// ---------------------------------------------------------------------------

#[test]
fn closed_stdin_fails() {
    rps()
        .write_stdin("3\n1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: input closed"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    rps()
        .args(["-vv"])
        .write_stdin("1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("starting a series").not())
        .stderr(predicate::str::contains("starting a series of 1 attempts"));
}

#[test]
fn help_lists_flags() {
    Command::cargo_bin("rps")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--seed").and(predicate::str::contains("--verbose")));
}

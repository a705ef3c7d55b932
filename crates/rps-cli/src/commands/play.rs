use std::io::{self, BufRead, Write};

use colored::Colorize;

use rps_game::{GameConfig, GameSession, Verdict};

const ATTEMPTS_PROMPT: &str = "Choose number of Game attempts to begin.\nAttempts = ";
const MOVE_PROMPT: &str = "Enter:\n1 for Rock,\n2 for Paper,\n3 for Scissior.\n\nChoice: ";

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let config = match seed {
        Some(seed) => GameConfig::default().with_seed(seed),
        None => GameConfig::default(),
    };
    let mut session = GameSession::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_series(&mut session, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive a session to its verdict, re-prompting on every rejected line.
fn play_series<R: BufRead, W: Write>(
    session: &mut GameSession,
    reader: &mut R,
    out: &mut W,
) -> Result<(), String> {
    loop {
        let line = ask(reader, out, ATTEMPTS_PROMPT)?;
        match session.start(&line) {
            Ok(_) => break,
            Err(e) => writeln!(out, "{}", e.to_string().yellow()).map_err(|e| e.to_string())?,
        }
    }

    while !session.is_finished() {
        let line = ask(reader, out, MOVE_PROMPT)?;
        match session.play(&line) {
            Ok(report) => writeln!(out, "{report}").map_err(|e| e.to_string())?,
            Err(e) if e.is_retryable() => {
                writeln!(out, "{}", e.to_string().yellow()).map_err(|e| e.to_string())?
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    let verdict = session.verdict().ok_or("series ended without a verdict")?;
    let message = match verdict {
        Verdict::Win => verdict.to_string().green().bold(),
        Verdict::Lose => verdict.to_string().red().bold(),
        Verdict::Tie => verdict.to_string().bold(),
    };
    writeln!(out, "{message}").map_err(|e| e.to_string())
}

/// Print a blank line and `prompt`, then read one line of input.
fn ask<R: BufRead, W: Write>(reader: &mut R, out: &mut W, prompt: &str) -> Result<String, String> {
    writeln!(out).map_err(|e| e.to_string())?;
    write!(out, "{prompt}").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Err("input closed before the game finished".into()),
        Ok(_) => Ok(line),
        Err(e) => Err(e.to_string()),
    }
}

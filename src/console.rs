//! Where guesses come from and where narration goes.
//!
//! The game loop only sees the two traits below. The console types wire them
//! to stdin/stdout; `ScriptedGuesses` and `Vec<String>` stand in for a human
//! in tests and demos.

use crate::error::{QuizError, QuizResult};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Prompt shown before every guess on the console
pub const GUESS_PROMPT: &str = "Guess> ";

/// Blocking source of player guesses, one line at a time
pub trait GuessSource {
    fn read_guess(&mut self) -> QuizResult<String>;
}

/// One-way sink for round narration
pub trait Announcer {
    fn announce(&mut self, message: &str);
}

/// Reads guesses line by line, printing a prompt first
#[derive(Debug)]
pub struct ConsoleGuessSource<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ConsoleGuessSource<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }

    /// Ask a free-form question (file paths, usernames) on the same console
    pub fn ask(&mut self, question: &str) -> QuizResult<String> {
        write!(self.prompt_out, "{}", question)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QuizError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl ConsoleGuessSource<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> GuessSource for ConsoleGuessSource<R, W> {
    fn read_guess(&mut self) -> QuizResult<String> {
        self.ask(GUESS_PROMPT)
    }
}

/// Writes each message on its own line
#[derive(Debug)]
pub struct ConsoleAnnouncer<W> {
    out: W,
}

impl<W: Write> ConsoleAnnouncer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleAnnouncer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Announcer for ConsoleAnnouncer<W> {
    fn announce(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", message) {
            tracing::warn!("Failed to write announcement: {}", e);
        }
    }
}

/// Pre-recorded answers, handed out in order
#[derive(Debug, Clone, Default)]
pub struct ScriptedGuesses {
    answers: VecDeque<String>,
}

impl ScriptedGuesses {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl GuessSource for ScriptedGuesses {
    fn read_guess(&mut self) -> QuizResult<String> {
        self.answers.pop_front().ok_or(QuizError::InputClosed)
    }
}

/// Collects narration, mostly for assertions in tests
impl Announcer for Vec<String> {
    fn announce(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::quiz::{QuizSession, QuizState};

/// Line-based front end for a `QuizSession`.
pub struct Terminal<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Terminal<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Drive the session until the player quits or input runs out.
    pub fn run<R: Rng>(&mut self, session: &mut QuizSession<R>) -> io::Result<()> {
        loop {
            match session.state() {
                QuizState::Answering => {
                    self.show_question(session)?;
                    let Some(line) = self.read_line()? else {
                        return Ok(());
                    };
                    // Input is checked here, the session only ever sees real options
                    match parse_choice(session, &line) {
                        Some(choice) => session.select_option(choice),
                        None => writeln!(self.output, "Please enter a number from 1 to 4")?,
                    }
                }
                QuizState::Feedback => {
                    if let Some(feedback) = session.feedback() {
                        if feedback.is_correct {
                            writeln!(self.output, "Correct!")?;
                        } else {
                            writeln!(
                                self.output,
                                "Wrong! The correct answer is: {}",
                                feedback.answer
                            )?;
                        }
                    }
                    self.prompt("Press Enter for the next question")?;
                    if self.read_line()?.is_none() {
                        return Ok(());
                    }
                    session.advance();
                }
                QuizState::Finished => {
                    writeln!(self.output, "Quiz Over!")?;
                    writeln!(
                        self.output,
                        "Your Score: {} / {}",
                        session.score().unwrap_or_default(),
                        session.total()
                    )?;
                    self.prompt("Retake quiz? [y/N]")?;
                    match self.read_line()? {
                        Some(line) if line.trim().eq_ignore_ascii_case("y") => session.restart(),
                        _ => return Ok(()),
                    }
                }
            }
        }
    }

    fn show_question<R: Rng>(&mut self, session: &QuizSession<R>) -> io::Result<()> {
        let Some(question) = session.current_question() else {
            return Ok(());
        };
        let (position, total) = session.progress();
        writeln!(self.output)?;
        writeln!(self.output, "Question {} of {}", position, total)?;
        writeln!(self.output, "{}", question.text)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, option)?;
        }
        self.prompt(">")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{} ", text)?;
        self.output.flush()
    }

    /// `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Maps a 1-based option number to the option text.
fn parse_choice<R: Rng>(session: &QuizSession<R>, line: &str) -> Option<&'static str> {
    let question = session.current_question()?;
    let number: usize = line.trim().parse().ok()?;
    question.options.get(number.checked_sub(1)?).copied()
}

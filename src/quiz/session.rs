use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::{bank::BANK, Question, QuizState};

/// What the player sees between answering a question and moving on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback<'a> {
    pub chosen: &'a str,
    pub answer: &'static str,
    pub is_correct: bool,
}

/// One play-through of the bank: a shuffle order plus the answers given so far.
///
/// Out-of-turn calls (`select_option` outside `Answering`, `advance` outside
/// `Feedback`) are ignored, so a double click never records two answers.
#[derive(Debug)]
pub struct QuizSession<R = ThreadRng> {
    rng: R,
    questions: Vec<Question>,
    current: usize,
    answers: Vec<String>,
    state: QuizState,
    score: Option<usize>,
}

impl QuizSession<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for QuizSession<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizSession<R> {
    pub fn with_rng(rng: R) -> Self {
        let mut session = Self {
            rng,
            questions: Vec::with_capacity(BANK.len()),
            current: 0,
            answers: Vec::with_capacity(BANK.len()),
            state: QuizState::Answering,
            score: None,
        };
        session.reset();
        info!("Started a quiz session with {} questions", session.total());
        session
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// `None` once the session is finished.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::Finished => None,
            _ => self.questions.get(self.current),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn ordered_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn recorded_answers(&self) -> &[String] {
        &self.answers
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// 1-based position of the current question and the question count.
    pub fn progress(&self) -> (usize, usize) {
        let position = (self.current + 1).min(self.total());
        (position, self.total())
    }

    pub fn score(&self) -> Option<usize> {
        self.score
    }

    pub fn feedback(&self) -> Option<Feedback<'_>> {
        if self.state != QuizState::Feedback {
            return None;
        }
        let question = self.questions.get(self.current)?;
        let chosen = self.answers.get(self.current)?;
        Some(Feedback {
            chosen,
            answer: question.answer,
            is_correct: question.is_correct(chosen),
        })
    }

    pub fn select_option(&mut self, choice: &str) {
        if self.state != QuizState::Answering {
            debug!("Ignoring choice {:?} in state {:?}", choice, self.state);
            return;
        }

        self.answers.push(choice.to_owned());
        self.state = QuizState::Feedback;
        debug!(
            "Recorded answer {:?} for question {}",
            choice,
            self.current + 1
        );
    }

    pub fn advance(&mut self) {
        if self.state != QuizState::Feedback {
            debug!("Ignoring advance in state {:?}", self.state);
            return;
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.state = QuizState::Answering;
            debug!("Moved to question {}", self.current + 1);
            return;
        }

        let score = self.compute_score();
        self.score = Some(score);
        self.state = QuizState::Finished;
        info!("Quiz finished with score {}/{}", score, self.total());
    }

    pub fn restart(&mut self) {
        self.reset();
        info!("Quiz restarted");
    }

    fn reset(&mut self) {
        self.questions.clear();
        self.questions.extend_from_slice(&BANK);
        self.questions.shuffle(&mut self.rng);
        self.current = 0;
        self.answers.clear();
        self.score = None;
        self.state = QuizState::Answering;
    }

    fn compute_score(&self) -> usize {
        self.answers
            .iter()
            .zip(&self.questions)
            .filter(|(answer, question)| question.is_correct(answer))
            .count()
    }
}

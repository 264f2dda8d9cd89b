//! A ten-question animal quiz: shuffled order, one question at a time,
//! feedback after every answer and a final score.

pub mod config;
pub mod quiz;
pub mod terminal;

pub use quiz::{Question, QuizSession, QuizState};

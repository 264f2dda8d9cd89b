pub mod bank;
pub mod session;

pub use bank::{BankError, BANK};
pub use session::{Feedback, QuizSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
}

impl Question {
    pub const fn new(text: &'static str, options: [&'static str; 4], answer: &'static str) -> Self {
        Self {
            text,
            options,
            answer,
        }
    }

    /// Exact match only, options come from the bank so no normalisation is done.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum QuizState {
    /// Current question is waiting for a choice.
    Answering,
    /// Current question was answered, correctness is shown until `advance`.
    Feedback,
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_correct_is_case_sensitive() {
        let q = Question::new("Q?", ["Lion", "Tiger", "Bear", "Wolf"], "Lion");
        assert!(q.is_correct("Lion"));
        assert!(!q.is_correct("lion"));
        assert!(!q.is_correct("Lion "));
    }

    #[test]
    fn state_serializes_as_plain_name() {
        let json = serde_json::to_string(&QuizState::Feedback).unwrap();
        assert_eq!(json, "\"Feedback\"");
    }
}

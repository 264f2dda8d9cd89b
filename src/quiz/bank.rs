use std::collections::HashSet;

use thiserror::Error;

use crate::quiz::Question;

pub const BANK: [Question; 10] = [
    Question::new(
        "What is the largest land animal?",
        ["Elephant", "Giraffe", "Whale", "Tiger"],
        "Elephant",
    ),
    Question::new(
        "Which bird is known for its colorful feathers?",
        ["Penguin", "Peacock", "Eagle", "Sparrow"],
        "Peacock",
    ),
    Question::new(
        "What is the fastest land animal?",
        ["Cheetah", "Horse", "Leopard", "Tiger"],
        "Cheetah",
    ),
    Question::new(
        "Which animal is known as the king of the jungle?",
        ["Lion", "Tiger", "Elephant", "Bear"],
        "Lion",
    ),
    Question::new(
        "Which animal is known for its ability to change colors?",
        ["Octopus", "Chameleon", "Frog", "Snake"],
        "Chameleon",
    ),
    Question::new(
        "Which mammal is capable of true flight?",
        ["Bat", "Flying Squirrel", "Eagle", "Owl"],
        "Bat",
    ),
    Question::new(
        "Which animal is known for building dams?",
        ["Beaver", "Otter", "Duck", "Swan"],
        "Beaver",
    ),
    Question::new(
        "What is the tallest animal?",
        ["Elephant", "Giraffe", "Kangaroo", "Rhino"],
        "Giraffe",
    ),
    Question::new(
        "Which sea creature has eight legs?",
        ["Jellyfish", "Octopus", "Starfish", "Crab"],
        "Octopus",
    ),
    Question::new(
        "Which animal is the largest mammal?",
        ["Elephant", "Blue Whale", "Hippopotamus", "Shark"],
        "Blue Whale",
    ),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error("answer {answer:?} is not one of the options of {question:?}")]
    AnswerNotAnOption {
        question: &'static str,
        answer: &'static str,
    },

    #[error("option {option:?} appears more than once in {question:?}")]
    DuplicateOption {
        question: &'static str,
        option: &'static str,
    },

    #[error("question {question:?} appears more than once")]
    DuplicateQuestion { question: &'static str },
}

/// Check the integrity of a question bank.
///
/// # Errors
///
/// Returns the first `BankError` found, in bank order.
pub fn validate(bank: &[Question]) -> Result<(), BankError> {
    if bank.is_empty() {
        return Err(BankError::Empty);
    }

    let mut texts = HashSet::new();
    for question in bank {
        if !texts.insert(question.text) {
            return Err(BankError::DuplicateQuestion {
                question: question.text,
            });
        }

        let mut seen = HashSet::new();
        for option in question.options {
            if !seen.insert(option) {
                return Err(BankError::DuplicateOption {
                    question: question.text,
                    option,
                });
            }
        }

        if !question.options.contains(&question.answer) {
            return Err(BankError::AnswerNotAnOption {
                question: question.text,
                answer: question.answer,
            });
        }
    }

    Ok(())
}

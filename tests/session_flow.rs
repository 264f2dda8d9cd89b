use animal_quiz::quiz::{bank, QuizSession, BANK};
use animal_quiz::QuizState;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn play_through(session: &mut QuizSession<StdRng>, pick: impl Fn(usize, &[&'static str; 4]) -> &'static str) {
    while let Some(question) = session.current_question().copied() {
        let index = session.current_index();
        session.select_option(pick(index, &question.options));
        session.advance();
    }
}

#[test]
fn bank_passes_integrity_check() {
    assert!(bank::validate(&BANK).is_ok());
}

#[test]
fn score_counts_exact_matches_only() {
    let mut session = QuizSession::with_rng(StdRng::seed_from_u64(2024));
    let order = session.ordered_questions().to_vec();

    play_through(&mut session, |i, options| {
        let answer = order[i].answer;
        if i == 0 || i == 2 {
            answer
        } else {
            options.iter().copied().find(|o| *o != answer).unwrap()
        }
    });

    assert_eq!(session.state(), QuizState::Finished);
    assert_eq!(session.score(), Some(2));
    assert_eq!(session.recorded_answers().len(), BANK.len());
}

#[test]
fn rapid_double_clicks_record_one_answer_per_question() {
    let mut session = QuizSession::with_rng(StdRng::seed_from_u64(99));
    while let Some(question) = session.current_question().copied() {
        session.select_option(question.answer);
        session.select_option(question.options[0]);
        session.advance();
        session.advance();
    }
    assert_eq!(session.recorded_answers().len(), BANK.len());
    assert_eq!(session.score(), Some(BANK.len()));
}

#[test]
fn restarting_twice_gives_two_valid_sessions() {
    let mut session = QuizSession::with_rng(StdRng::seed_from_u64(5));
    play_through(&mut session, |_, options| options[0]);

    for _ in 0..2 {
        session.restart();
        assert_eq!(session.state(), QuizState::Answering);
        assert_eq!(session.current_index(), 0);
        assert!(session.recorded_answers().is_empty());
        assert_eq!(session.score(), None);

        let mut texts: Vec<_> = session.ordered_questions().iter().map(|q| q.text).collect();
        let mut expected: Vec<_> = BANK.iter().map(|q| q.text).collect();
        texts.sort_unstable();
        expected.sort_unstable();
        assert_eq!(texts, expected);
    }
}

use std::sync::Arc;

use engine::{Game, GameFlow, Screen, SessionEnd, STARTING_LIVES, WIN_SCORE};
use quiz_core::model::{VocabularyEntry, OPTION_COUNT};
use words::InMemoryProvider;

fn build_provider() -> Arc<InMemoryProvider> {
    let entries = vec![
        VocabularyEntry::new("dog", "犬", 1).unwrap(),
        VocabularyEntry::new("cat", "猫", 1).unwrap(),
        VocabularyEntry::new("bird", "鳥", 1).unwrap(),
        VocabularyEntry::new("fish", "魚", 1).unwrap(),
        VocabularyEntry::new("abandon", "放棄する", 2).unwrap(),
        VocabularyEntry::new("benefit", "利益", 2).unwrap(),
        VocabularyEntry::new("candidate", "候補者", 2).unwrap(),
    ];
    Arc::new(InMemoryProvider::new(entries))
}

#[test]
fn perfect_run_wins_at_ten() {
    let mut game = Game::with_seed(build_provider(), 42);
    game.start(1).unwrap();

    let mut answers = 0;
    while game.ended().is_none() {
        let correct = game.current_question().unwrap().correct_index();
        let outcome = game.submit_answer(correct).unwrap();
        answers += 1;
        assert!(outcome.correct);
        assert!(answers <= WIN_SCORE, "game should end after {WIN_SCORE} answers");
    }

    assert_eq!(game.ended(), Some(SessionEnd::Win));
    let state = game.state().unwrap();
    assert_eq!(state.correct_count(), WIN_SCORE);
    assert_eq!(state.questions_answered(), WIN_SCORE);
    assert_eq!(state.life(), STARTING_LIVES);
    assert_eq!(state.stage().value(), 3);
}

#[test]
fn three_misses_lose_with_a_full_recap() {
    let mut game = Game::with_seed(build_provider(), 7);
    game.start(1).unwrap();

    while game.ended().is_none() {
        let question = game.current_question().unwrap();
        let wrong = (question.correct_index() + 1) % OPTION_COUNT;
        let outcome = game.submit_answer(wrong).unwrap();
        assert!(!outcome.correct);
    }

    assert_eq!(game.ended(), Some(SessionEnd::Loss));
    let state = game.state().unwrap();
    assert_eq!(state.life(), 0);
    assert_eq!(state.correct_count(), 0);
    assert_eq!(state.questions_answered(), STARTING_LIVES);
    assert_eq!(state.missed_entries().len(), STARTING_LIVES as usize);
    for missed in state.missed_entries() {
        assert_eq!(missed.level(), 1);
    }
}

#[test]
fn mixed_run_tracks_score_life_and_stage_bounds() {
    let mut game = Game::with_seed(build_provider(), 99);
    game.start(2).unwrap();

    // alternate right and wrong answers until the session ends
    let mut answer_correctly = true;
    while game.ended().is_none() {
        let question = game.current_question().unwrap();
        let selected = if answer_correctly {
            question.correct_index()
        } else {
            (question.correct_index() + 1) % OPTION_COUNT
        };
        answer_correctly = !answer_correctly;
        game.submit_answer(selected).unwrap();

        let state = game.state().unwrap();
        assert!(state.correct_count() <= WIN_SCORE);
        assert!(state.life() <= STARTING_LIVES);
        assert!(state.stage().value() <= 3);
        assert!(state.correct_count() <= state.questions_answered());
    }

    // 3 misses arrive before the 10th correct answer on an alternating run
    assert_eq!(game.ended(), Some(SessionEnd::Loss));
    assert_eq!(game.state().unwrap().missed_entries().len(), 3);
}

#[test]
fn full_flow_win_then_replay_from_home() {
    let provider = build_provider();
    let mut flow = GameFlow::new(Game::with_seed(provider, 5));

    flow.select_level(1).unwrap();
    while flow.screen() == Screen::Quiz {
        let correct = flow.game().current_question().unwrap().correct_index();
        flow.answer(correct).unwrap();
    }
    assert_eq!(flow.screen(), Screen::StageClear);

    flow.retry();
    assert_eq!(flow.screen(), Screen::Home);
    assert!(flow.game().is_idle());

    // a fresh session starts clean after the reset
    flow.select_level(2).unwrap();
    let state = flow.game().state().unwrap();
    assert_eq!(state.correct_count(), 0);
    assert_eq!(state.life(), STARTING_LIVES);
    assert_eq!(state.character().level(), 2);
}

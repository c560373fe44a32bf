//! End-to-end game scenarios driven through the public controller API.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rk_core::{Catalog, RiddleId, RiddleSet};
use rk_engine::{GameConfig, GameEvent, GameState, Input, SessionController};

fn riddle(id: u32, words: &[&str], options: &[&str], correct: usize) -> RiddleSet {
    RiddleSet {
        id: RiddleId(id),
        words: words.iter().map(|w| w.to_string()).collect(),
        question: format!("Riddle {id}?"),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct,
        theme: format!("Theme {id}"),
    }
}

fn type_word(c: &mut SessionController<'_>, word: &str) {
    for ch in word.chars() {
        c.handle(Input::Key(ch));
    }
}

#[test]
fn single_set_walkthrough() {
    let catalog = Catalog::new(vec![riddle(1, &["CAT", "DOG"], &["A", "B"], 1)]).unwrap();
    let config = GameConfig::default().with_initial_time(30);
    let mut c = SessionController::with_seed(&catalog, config, 7).unwrap();

    c.handle(Input::Start(30));
    type_word(&mut c, "CAT");
    assert_eq!(c.score(), 5);

    type_word(&mut c, "DOG");
    assert_eq!(c.score(), 10);
    assert_eq!(c.state(), GameState::Riddle);

    let snap = c.handle(Input::Answer(1));
    assert_eq!(snap.state, GameState::GameOver);
    assert_eq!(snap.score, 30);

    let events = c.drain_events();
    assert!(events.contains(&GameEvent::CatalogExhausted));
    assert_eq!(events.last(), Some(&GameEvent::GameOver { score: 30 }));
}

#[test]
fn full_catalog_run_visits_every_set_once() {
    let sets: Vec<RiddleSet> = (1..=5)
        .map(|id| riddle(id, &["AB", "CD"], &["yes", "no"], 0))
        .collect();
    let catalog = Catalog::new(sets).unwrap();
    let mut c = SessionController::with_seed(&catalog, GameConfig::default(), 2024).unwrap();
    c.start(60);

    let mut order = Vec::new();
    while c.state() == GameState::Playing {
        let session = c.session().unwrap();
        order.push(session.active().id);
        assert_eq!(session.round_number() as usize, order.len());
        type_word(&mut c, "ABCD");
        c.answer_riddle(0);
    }

    assert_eq!(c.state(), GameState::GameOver);
    let unique: BTreeSet<RiddleId> = order.iter().copied().collect();
    assert_eq!(unique.len(), 5);
    assert_eq!(order.len(), 5);
    // 5 rounds x (2 words x 5 + 20)
    assert_eq!(c.score(), 150);
}

#[test]
fn time_runs_out_mid_word() {
    let catalog = Catalog::builtin().unwrap();
    let mut c = SessionController::with_seed(&catalog, GameConfig::default(), 1).unwrap();
    c.start(30);
    c.submit_key('Z');
    for _ in 0..29 {
        c.tick();
    }
    assert_eq!(c.state(), GameState::Playing);
    c.tick();
    assert_eq!(c.state(), GameState::GameOver);

    for _ in 0..5 {
        c.tick();
    }
    assert_eq!(c.session().unwrap().time_remaining(), 0);
}

#[test]
fn clock_pauses_for_riddle_and_resumes_with_bonus() {
    let catalog = Catalog::new(vec![
        riddle(1, &["HI"], &["a", "b"], 0),
        riddle(2, &["HI"], &["a", "b"], 0),
    ])
    .unwrap();
    let mut c = SessionController::with_seed(&catalog, GameConfig::default(), 3).unwrap();
    c.start(30);
    c.tick();
    type_word(&mut c, "HI");
    for _ in 0..10 {
        c.tick();
    }
    assert_eq!(c.session().unwrap().time_remaining(), 29);

    c.answer_riddle(0);
    assert_eq!(c.session().unwrap().time_remaining(), 39);
    c.tick();
    assert_eq!(c.session().unwrap().time_remaining(), 38);
}

#[test]
fn custom_rules_apply() {
    let catalog = Catalog::new(vec![riddle(1, &["ABC", "DEF"], &["a"], 0)]).unwrap();
    let config = GameConfig::default()
        .with_points_per_word(10)
        .with_penalties(1, 4)
        .with_max_wrong_keys(3);
    let mut c = SessionController::with_seed(&catalog, config, 3).unwrap();
    c.start(30);
    type_word(&mut c, "ABC");
    assert_eq!(c.score(), 10);
    type_word(&mut c, "XY");
    assert_eq!(c.score(), 8);
    assert_eq!(c.state(), GameState::Playing);
    c.submit_key('Z');
    // third wrong key: -1 and -4 for the word
    assert_eq!(c.score(), 3);
    assert_eq!(c.state(), GameState::Riddle);
}

#[test]
fn injected_rng_controls_riddle_order() {
    let sets: Vec<RiddleSet> = (1..=6).map(|id| riddle(id, &["A"], &["x"], 0)).collect();
    let catalog = Catalog::new(sets).unwrap();

    let run = |seed: u64| {
        let rng = StdRng::seed_from_u64(seed);
        let mut c = SessionController::new(&catalog, GameConfig::default(), rng).unwrap();
        c.start(60);
        let mut order = Vec::new();
        while c.state() == GameState::Playing {
            order.push(c.session().unwrap().active().id);
            c.submit_key('A');
            c.answer_riddle(0);
        }
        order
    };

    assert_eq!(run(11), run(11));
    assert_eq!(run(11).len(), 6);
}

fn arb_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        prop::sample::select(vec![30u32, 45, 60]).prop_map(Input::Start),
        prop::sample::select(vec!['C', 'A', 'T', 'D', 'O', 'G', 'x', ' ', '7'])
            .prop_map(Input::Key),
        Just(Input::Backspace),
        (0usize..5).prop_map(Input::Answer),
        Just(Input::Tick),
        Just(Input::Reset),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_for_any_input_sequence(
        seed in any::<u64>(),
        inputs in prop::collection::vec(arb_input(), 0..300),
    ) {
        let catalog = Catalog::new(vec![
            riddle(1, &["CAT", "DOG"], &["A", "B"], 1),
            riddle(2, &["DOG", "CAT"], &["A", "B"], 0),
            riddle(3, &["GOAT"], &["A", "B", "C"], 2),
        ]).unwrap();
        let config = GameConfig::default();
        let mut c = SessionController::with_seed(&catalog, config.clone(), seed).unwrap();

        for input in inputs {
            let before_state = c.state();
            let before = c.snapshot().to_json().unwrap();
            let snap = c.handle(input);

            prop_assert!(snap.time_remaining <= config.max_time);
            if snap.state == GameState::Playing {
                let set = snap.active_riddle_set.unwrap();
                prop_assert!(snap.current_word_index < set.words.len());
            }
            if before_state == GameState::GameOver && input != Input::Reset {
                prop_assert_eq!(c.snapshot().to_json().unwrap(), before);
            }
            if let Some(session) = c.session() {
                prop_assert!(session.used_ids().len() <= catalog.len());
                prop_assert!(session.used_ids().contains(&session.active().id));
                prop_assert!(session.round_number() as usize == session.used_ids().len());
            }
        }
    }
}

#![allow(clippy::unwrap_used)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rs_eclair::adapter::{no_qualifier, TagSink, TagStreamAdapter};
use rs_eclair::fsm::{State, Symbol, Target, TransitionTable, Transitions, TraversalEngine};
use rs_eclair::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum St {
    Start,
    Found,
    Exact,
    Wild,
    Closing,
    Text,
}

/// Accumulator recording which callbacks fired, in order.
type Calls = Vec<&'static str>;

fn record(name: &'static str) -> impl Fn(&mut Calls, Option<&str>) -> rs_eclair::Result<()> {
    move |calls: &mut Calls, _: Option<&str>| {
        calls.push(name);
        Ok(())
    }
}

#[test]
fn depth_tracks_open_minus_close() {
    let table: TransitionTable<St, Calls> = TransitionTable::new()
        .with(
            State::Skip,
            Transitions::new()
                .tag("b", None, Target::new(St::Found))
                .data(Target::new(St::Text)),
        )
        .with(
            State::Named(St::Found),
            Transitions::new().any(Target::new(St::Wild)),
        );
    let names = ["a", "b", "c", "div", "p"];
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..20 {
        let mut calls = Calls::new();
        let mut engine = TraversalEngine::new(State::Named(St::Start), &table);
        let mut open = 0usize;

        for _ in 0..200 {
            let roll: u8 = rng.gen_range(0..10);
            if open > 0 && roll < 4 {
                engine.transition(&mut calls, Symbol::Back).unwrap();
                open -= 1;
            } else if roll < 8 {
                let name = names[rng.gen_range(0..names.len())];
                engine.transition(&mut calls, Symbol::tag(name)).unwrap();
                open += 1;
            } else {
                engine.transition(&mut calls, Symbol::Data("text")).unwrap();
                engine.transition(&mut calls, Symbol::Back).unwrap();
            }

            assert_eq!(engine.depth(), 1 + open);
            assert_eq!(engine.states().last().copied(), Some(engine.current_state()));
        }
    }
}

#[test]
fn exact_entry_beats_wildcard() {
    let table: TransitionTable<St, Calls> = TransitionTable::new().with(
        State::Named(St::Start),
        Transitions::new()
            .any(Target::new(St::Wild).on_enter(record("wildcard")))
            .tag("b", None, Target::new(St::Exact).on_enter(record("exact")))
            .data(Target::new(St::Text).on_enter(record("data"))),
    );
    let mut calls = Calls::new();
    let mut engine = TraversalEngine::new(State::Named(St::Start), &table);

    engine.transition(&mut calls, Symbol::tag("b")).unwrap();
    assert_eq!(engine.current_state(), State::Named(St::Exact));
    engine.transition(&mut calls, Symbol::Back).unwrap();

    engine.transition(&mut calls, Symbol::Data("x")).unwrap();
    engine.transition(&mut calls, Symbol::Back).unwrap();

    engine.transition(&mut calls, Symbol::tag("i")).unwrap();
    assert_eq!(engine.current_state(), State::Named(St::Wild));

    assert_eq!(calls, vec!["exact", "data", "wildcard"]);
}

#[test]
fn wildcard_covers_data_without_exact_entry() {
    let table: TransitionTable<St, Calls> = TransitionTable::new().with(
        State::Named(St::Start),
        Transitions::new().any(Target::new(St::Wild).on_enter(record("wildcard"))),
    );
    let mut calls = Calls::new();
    let mut engine = TraversalEngine::new(State::Named(St::Start), &table);

    engine.transition(&mut calls, Symbol::Data("x")).unwrap();

    assert_eq!(engine.current_state(), State::Named(St::Wild));
    assert_eq!(calls, vec!["wildcard"]);
}

#[test]
fn recognition_resumes_inside_unmatched_structure() {
    let table: TransitionTable<St, Calls> = TransitionTable::new().with(
        State::Skip,
        Transitions::new().tag("b", None, Target::new(St::Found).on_enter(record("found"))),
    );
    let mut calls = Calls::new();
    let mut engine = TraversalEngine::new(State::Named(St::Start), &table);

    engine.transition(&mut calls, Symbol::tag("a")).unwrap();
    assert_eq!(engine.current_state(), State::Skip);
    engine.transition(&mut calls, Symbol::tag("b")).unwrap();

    assert_eq!(calls, vec!["found"]);
    assert_eq!(engine.current_state(), State::Named(St::Found));
    assert_eq!(engine.depth(), 3);
}

#[test]
fn recognition_resumes_at_any_skip_depth() {
    let table: TransitionTable<St, Calls> = TransitionTable::new().with(
        State::Skip,
        Transitions::new().tag("b", None, Target::new(St::Found).on_enter(record("found"))),
    );
    let mut calls = Calls::new();
    let mut engine = TraversalEngine::new(State::Named(St::Start), &table);

    for name in ["html", "body", "div", "section", "span"] {
        engine.transition(&mut calls, Symbol::tag(name)).unwrap();
    }
    engine.transition(&mut calls, Symbol::tag("b")).unwrap();

    assert_eq!(calls, vec!["found"]);
    assert_eq!(engine.depth(), 7);
}

#[test]
fn exit_fires_once_on_pop() {
    let table: TransitionTable<St, Calls> = TransitionTable::new()
        .with(
            State::Skip,
            Transitions::new().tag(
                "p",
                None,
                Target::new(St::Closing)
                    .on_enter(record("enter"))
                    .on_exit(|calls: &mut Calls| {
                        calls.push("exit");
                        Ok(())
                    }),
            ),
        );
    let mut calls = Calls::new();
    let mut engine = TraversalEngine::new(State::Skip, &table);

    engine.transition(&mut calls, Symbol::tag("p")).unwrap();
    assert_eq!(calls, vec!["enter"]);

    // Nested structure and text inside the frame do not trigger the exit.
    engine.transition(&mut calls, Symbol::tag("em")).unwrap();
    engine.transition(&mut calls, Symbol::Data("x")).unwrap();
    engine.transition(&mut calls, Symbol::Back).unwrap();
    engine.transition(&mut calls, Symbol::Back).unwrap();
    assert_eq!(calls, vec!["enter"]);

    engine.transition(&mut calls, Symbol::Back).unwrap();
    assert_eq!(calls, vec!["enter", "exit"]);

    // Further pops do not re-fire it.
    engine.transition(&mut calls, Symbol::tag("div")).unwrap();
    engine.transition(&mut calls, Symbol::Back).unwrap();
    assert_eq!(calls, vec!["enter", "exit"]);
}

#[test]
fn data_leaf_leaves_depth_unchanged() {
    let table: TransitionTable<St, Calls> = TransitionTable::new().with(
        State::Skip,
        Transitions::new().data(Target::new(St::Text).on_enter(record("data"))),
    );
    let mut adapter = TagStreamAdapter::new(State::Skip, &table, Calls::new(), no_qualifier);

    adapter.element_open("div", &[]).unwrap();
    let depth = adapter.depth();
    adapter.text("x").unwrap();

    assert_eq!(adapter.depth(), depth);
    assert_eq!(adapter.into_context(), vec!["data"]);
}

#[test]
fn close_past_root_is_fatal() {
    let table: TransitionTable<St, Calls> = TransitionTable::new();
    let mut calls = Calls::new();
    let mut engine = TraversalEngine::new(State::Named(St::Start), &table);

    engine.transition(&mut calls, Symbol::tag("a")).unwrap();
    engine.transition(&mut calls, Symbol::Back).unwrap();
    let err = engine.transition(&mut calls, Symbol::Back).unwrap_err();

    assert!(matches!(err, Error::UnbalancedClose));
}

#[test]
fn handler_errors_propagate_to_caller() {
    let table: TransitionTable<St, Calls> = TransitionTable::new()
        .with(
            State::Skip,
            Transitions::new().tag(
                "p",
                None,
                Target::new(St::Closing)
                    .on_exit(|_: &mut Calls| Err(Error::Handler("exit failed".to_string()))),
            ),
        );
    let mut calls = Calls::new();
    let mut engine = TraversalEngine::new(State::Skip, &table);

    engine.transition(&mut calls, Symbol::tag("p")).unwrap();
    let err = engine.transition(&mut calls, Symbol::Back).unwrap_err();

    assert!(matches!(err, Error::Handler(ref msg) if msg == "exit failed"));
}

#[test]
fn table_is_reusable_across_traversals() {
    let table: TransitionTable<St, Calls> = TransitionTable::new().with(
        State::Skip,
        Transitions::new().tag("b", None, Target::new(St::Found).on_enter(record("found"))),
    );

    for _ in 0..3 {
        let mut calls = Calls::new();
        let mut engine = TraversalEngine::new(State::Skip, &table);
        engine.transition(&mut calls, Symbol::tag("b")).unwrap();
        engine.transition(&mut calls, Symbol::Back).unwrap();
        assert_eq!(calls, vec!["found"]);
        assert!(engine.is_at_root());
    }
}

use serde_json::{json, Value};

use crate::chain_reducers;
use crate::runtime::{chain_reducers, ChainElement, ChainReducers, Error};
use crate::types::{NextState, State};
use crate::unit_tests::{state, TestEnv};

fn noop(state: &State, _: &Value) -> NextState {
    NextState::Present(state.to_owned())
}

#[test]
fn chains_nest() {
    let inner: ChainReducers<TestEnv, Value> = chain_reducers![
        env: TestEnv;
        |_: &State, _: &Value| NextState::Present(state(json!({ "inner": true }))),
    ];
    let outer: ChainReducers<TestEnv, Value> = chain_reducers(vec![
        ChainElement::from(inner),
        ChainElement::reducer(|_: &State, _: &Value| {
            NextState::Present(state(json!({ "outer": true })))
        }),
    ]);
    let next = outer
        .apply(Some(state(json!({ "a": 1 }))), &json!({ "type": "NEST" }))
        .expect("Should apply");
    assert_eq!(
        next,
        state(json!({ "a": 1, "inner": true, "outer": true }))
    );
}

#[test]
fn unchanged_nested_chain_keeps_identity() {
    let inner: ChainReducers<TestEnv, Value> = chain_reducers![env: TestEnv; noop, noop];
    let outer: ChainReducers<TestEnv, Value> =
        chain_reducers(vec![ChainElement::from(inner), ChainElement::reducer(noop)]);
    let initial = state(json!({ "a": 1 }));
    let next = outer
        .apply(Some(initial.to_owned()), &json!({ "type": "NEST" }))
        .expect("Should apply");
    assert!(next.ptr_eq(&initial));
}

#[test]
fn nested_configuration_error_propagates() {
    let inner: ChainReducers<TestEnv, Value> =
        chain_reducers(vec![ChainElement::reducer(noop), ChainElement::from(json!(42))]);
    let outer: ChainReducers<TestEnv, Value> =
        chain_reducers(vec![ChainElement::reducer(noop), ChainElement::from(inner)]);
    assert_eq!(
        outer.apply(None, &json!({ "type": "NEST" })),
        Err(Error::Configuration { index: 1 })
    );
}

#[test]
fn cloned_chain_shares_reducers() {
    let chain: ChainReducers<TestEnv, Value> = chain_reducers![
        env: TestEnv;
        |_: &State, _: &Value| NextState::Present(state(json!({ "a": 1 }))),
    ];
    let cloned = chain.clone();
    let action = json!({ "type": "SET" });
    assert_eq!(
        chain.apply(None, &action).expect("Should apply"),
        cloned.apply(None, &action).expect("Should apply")
    );
}

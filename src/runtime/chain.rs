use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use derivative::Derivative;
use serde_json::Value;
use tracing::trace;

use crate::runtime::{Diagnostic, Env, Error, Reducer};
use crate::types::{Action, NextState, State};

/// A single entry of a chain.
///
/// Chains assembled from untyped sources may contain arbitrary values, these are only
/// rejected once the chain is applied.
pub enum ChainElement<A: ?Sized> {
    Reducer(Arc<dyn Reducer<A>>),
    Value(Value),
}

impl<A: ?Sized> ChainElement<A> {
    pub fn reducer<R: Reducer<A> + 'static>(reducer: R) -> Self {
        ChainElement::Reducer(Arc::new(reducer))
    }
}

impl<A: ?Sized> Clone for ChainElement<A> {
    fn clone(&self) -> Self {
        match self {
            ChainElement::Reducer(reducer) => ChainElement::Reducer(reducer.clone()),
            ChainElement::Value(value) => ChainElement::Value(value.clone()),
        }
    }
}

impl<A: ?Sized> From<Value> for ChainElement<A> {
    fn from(value: Value) -> Self {
        ChainElement::Value(value)
    }
}

impl<A: ?Sized> From<Arc<dyn Reducer<A>>> for ChainElement<A> {
    fn from(reducer: Arc<dyn Reducer<A>>) -> Self {
        ChainElement::Reducer(reducer)
    }
}

impl<E, A> From<ChainReducers<E, A>> for ChainElement<A>
where
    E: Env + 'static,
    A: Action + ?Sized + 'static,
{
    fn from(chain: ChainReducers<E, A>) -> Self {
        ChainElement::reducer(chain)
    }
}

impl<A: ?Sized> fmt::Debug for ChainElement<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainElement::Reducer(_) => f.write_str("Reducer"),
            ChainElement::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// Reducers applied one after another, left to right, each result shallow-merged into the
/// state handed to the next one.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct ChainReducers<E, A: ?Sized> {
    elements: Arc<[ChainElement<A>]>,
    env: PhantomData<fn() -> E>,
}

impl<E, A: ?Sized> ChainReducers<E, A> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<E, A> ChainReducers<E, A>
where
    E: Env,
    A: Action + ?Sized,
{
    /// Runs the whole chain once.
    ///
    /// A missing `state` is the empty record. Whenever a reducer hands back the state it was
    /// given, the accumulator keeps its identity. Anything else produces a new record with
    /// the previous keys overwritten by the returned ones.
    pub fn apply(&self, state: Option<State>, action: &A) -> Result<State, Error> {
        let mut state = state.unwrap_or_default();
        for (index, element) in self.elements.iter().enumerate() {
            let reducer = match element {
                ChainElement::Reducer(reducer) => reducer,
                ChainElement::Value(_) => return Err(Error::Configuration { index }),
            };
            let next_state = reducer.reduce(&state, action)?;
            if next_state.is_undefined() {
                E::log(Diagnostic::UndefinedState {
                    action: action.kind().map(Cow::into_owned),
                    index,
                });
            }
            state = match next_state {
                NextState::Present(next_state) if next_state.ptr_eq(&state) => {
                    trace!(reducer = index, "state unchanged");
                    state
                }
                NextState::Present(next_state) => {
                    trace!(reducer = index, keys = next_state.len(), "state merged");
                    state.merged(&next_state)
                }
                NextState::Null | NextState::Undefined => {
                    trace!(reducer = index, "state copied");
                    state.shallow_copy()
                }
            };
        }
        Ok(state)
    }
}

impl<E, A> Reducer<A> for ChainReducers<E, A>
where
    E: Env,
    A: Action + ?Sized,
{
    fn reduce(&self, state: &State, action: &A) -> Result<NextState, Error> {
        self.apply(Some(state.to_owned()), action).map(NextState::Present)
    }
}

impl<E, A: ?Sized> fmt::Debug for ChainReducers<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainReducers")
            .field("elements", &self.elements)
            .finish()
    }
}

/// Composes `elements` into a single reducer reporting diagnostics to `E`.
///
/// Nothing is validated here, a malformed chain fails only when applied.
pub fn chain_reducers<E, A, I>(elements: I) -> ChainReducers<E, A>
where
    E: Env,
    A: ?Sized,
    I: IntoIterator<Item = ChainElement<A>>,
{
    ChainReducers {
        elements: elements.into_iter().collect(),
        env: PhantomData,
    }
}

/// Variadic form of [`chain_reducers`].
///
/// `chain_reducers![a, b]` reports to [`TracingEnv`](crate::runtime::TracingEnv),
/// `chain_reducers![env: MyEnv; a, b]` to `MyEnv`.
#[macro_export]
macro_rules! chain_reducers {
    (env: $env:ty; $($reducer:expr),* $(,)?) => {
        $crate::runtime::chain_reducers::<$env, _, _>(::std::vec![
            $($crate::runtime::ChainElement::reducer($reducer)),*
        ])
    };
    ($($reducer:expr),* $(,)?) => {
        $crate::chain_reducers![env: $crate::runtime::TracingEnv; $($reducer),*]
    };
}

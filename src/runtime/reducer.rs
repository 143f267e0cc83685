use crate::runtime::Error;
use crate::types::{NextState, State};

pub trait Reducer<A: ?Sized>: Send + Sync {
    fn reduce(&self, state: &State, action: &A) -> Result<NextState, Error>;
}

impl<A, F> Reducer<A> for F
where
    A: ?Sized,
    F: Fn(&State, &A) -> NextState + Send + Sync,
{
    fn reduce(&self, state: &State, action: &A) -> Result<NextState, Error> {
        Ok(self(state, action))
    }
}

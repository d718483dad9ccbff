use super::Sample;

/// A single-input single-output stage with owned state.
///
/// Stages are owned by exactly one pipeline and advanced once per incoming
/// sample. Construction parameters are fixed for the lifetime of the stage.
pub trait Filter {
    /// Feed a new input sample, advance the state by one step, and return the
    /// new output.
    fn update(&mut self, x: Sample) -> Sample;

    /// Feed the output of `self` into `next`.
    fn then<F: Filter>(self, next: F) -> Chain<Self, F>
    where
        Self: Sized,
    {
        Chain::new(self, next)
    }
}

/// Two filters in series.
///
/// Built by [`chain!`](crate::chain) or [`Filter::then`]. Nesting is resolved
/// statically: the update of a chain is the updates of its stages, inlined,
/// in order.
#[derive(Clone, Debug, Default)]
pub struct Chain<A, B> {
    first: A,
    rest: B,
}

impl<A: Filter, B: Filter> Chain<A, B> {
    pub fn new(first: A, rest: B) -> Self {
        Self { first, rest }
    }

    /// The constituent stages.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.rest)
    }
}

impl<A: Filter, B: Filter> Filter for Chain<A, B> {
    #[inline(always)]
    fn update(&mut self, x: Sample) -> Sample {
        self.rest.update(self.first.update(x))
    }
}

/// Compose filters left to right into a single [`Filter`].
///
/// A single filter is returned unchanged. Otherwise the first filter is
/// chained with the composition of the remaining ones:
///
/// ```
/// use envelope::{chain, Derivative, Filter, Squared, Tma};
///
/// let mut f = chain!(Derivative::new(), Squared, Tma::<4>::new());
/// let y = f.update(1000);
/// ```
#[macro_export]
macro_rules! chain {
    ($filter:expr $(,)?) => {
        $filter
    };
    ($filter:expr, $($filters:expr),+ $(,)?) => {
        $crate::Chain::new($filter, $crate::chain!($($filters),+))
    };
}

use std::fmt::Debug;

/// The contract shared by every link of a chain, base or decorator.
///
/// Both operations are pure queries: calling them any number of times on the
/// same chain yields the same answer.
pub trait Component: Debug {
    fn describe(&self) -> String;
    fn cost(&self) -> u64;
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn cost(&self) -> u64 {
        (**self).cost()
    }
}

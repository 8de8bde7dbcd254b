use core::convert::Infallible;

// compile-time accessor bindings: implemented by marker types that are
// never constructed, one per bound getter or setter. the associated types
// recover the exact owning type and the failure signature of the bound
// member logic.

pub trait Accessor {
    type Owner;
    type Value;
    // Infallible when the bound getter cannot fail
    type Error;

    fn read(owner: &Self::Owner) -> Result<Self::Value, Self::Error>;
}

pub trait Mutator {
    type Owner;
    type Value;
    // Infallible when the bound setter cannot fail
    type Error;

    fn write(owner: &mut Self::Owner, val: Self::Value) -> Result<(), Self::Error>;
}

// declared mutability of a slot's setter position: a bound mutator marker
// answers true, the hole answers false
pub trait MaybeMutator {
    const WRITABLE: bool;
}

// marker type; never constructed
pub enum NoMutator {}

impl MaybeMutator for NoMutator {
    const WRITABLE: bool = false;
}

// a cross-slot assignment reads the source slot, then writes the
// destination slot; either side's failure passes through unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignError<G, S> {
    Get(G),
    Set(S),
}

#[inline(always)]
pub(crate) fn into_ok<T>(res: Result<T, Infallible>) -> T {
    match res {
        Ok(val) => val,
        Err(never) => match never {},
    }
}

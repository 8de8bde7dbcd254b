use crate::accessor::{into_ok, Accessor, AssignError, MaybeMutator, Mutator, NoMutator};
use crate::offset::RawOffset;
use bytemuck::TransparentWrapper;
use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;

// the entire runtime state of a slot is the group-shared offset; which
// accessor it forwards to lives in G and S alone
#[repr(transparent)]
pub struct BoundSlot<G, S = NoMutator> {
    offset: RawOffset,
    _bind: PhantomData<(G, S)>,
}

pub type ReadSlot<G> = BoundSlot<G>;

impl<G, S> Clone for BoundSlot<G, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G, S> Copy for BoundSlot<G, S> {}

// every group member is byte-for-byte one RawOffset
unsafe impl<G, S> TransparentWrapper<RawOffset> for BoundSlot<G, S> {}

impl<G, S: MaybeMutator> BoundSlot<G, S> {
    pub const WRITABLE: bool = S::WRITABLE;
}

impl<G: Accessor, S> BoundSlot<G, S> {
    // container_of-style recovery: a slot is only reachable embedded in
    // its owner, `offset` bytes past the owner's start
    #[inline(always)]
    fn owner(&self) -> &G::Owner {
        let slot = self as *const Self as *const u8;
        unsafe { &*slot.sub(self.offset.as_usize()).cast::<G::Owner>() }
    }

    #[inline(always)]
    pub fn try_get(&self) -> Result<G::Value, G::Error> {
        G::read(self.owner())
    }
}

impl<G, S> BoundSlot<G, S>
where
    G: Accessor<Error = Infallible>,
{
    #[inline(always)]
    pub fn get(&self) -> G::Value {
        into_ok(G::read(self.owner()))
    }
}

impl<G, S> BoundSlot<G, S>
where
    G: Accessor,
    S: Mutator<Owner = G::Owner, Value = G::Value>,
{
    #[inline(always)]
    fn owner_mut(&mut self) -> &mut G::Owner {
        let slot = self as *mut Self as *mut u8;
        unsafe { &mut *slot.sub(self.offset.as_usize()).cast::<G::Owner>() }
    }

    // validation is the mutator's policy; the slot only forwards
    #[inline(always)]
    pub fn try_set(&mut self, val: G::Value) -> Result<(), S::Error> {
        S::write(self.owner_mut(), val)
    }

    #[inline]
    pub fn try_assign_from<G2, S2>(
        &mut self,
        rhs: &BoundSlot<G2, S2>,
    ) -> Result<(), AssignError<G2::Error, S::Error>>
    where
        G2: Accessor,
        G2::Value: Into<G::Value>,
    {
        let val = rhs.try_get().map_err(AssignError::Get)?;
        self.try_set(val.into()).map_err(AssignError::Set)
    }
}

impl<G, S> BoundSlot<G, S>
where
    G: Accessor,
    S: Mutator<Owner = G::Owner, Value = G::Value, Error = Infallible>,
{
    #[inline(always)]
    pub fn set(&mut self, val: G::Value) {
        into_ok(S::write(self.owner_mut(), val));
    }

    #[inline]
    pub fn assign_from<G2, S2>(&mut self, rhs: &BoundSlot<G2, S2>)
    where
        G2: Accessor<Error = Infallible>,
        G2::Value: Into<G::Value>,
    {
        self.set(rhs.get().into());
    }
}

impl<G, S> fmt::Display for BoundSlot<G, S>
where
    G: Accessor<Error = Infallible>,
    G::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl<G, S> fmt::Debug for BoundSlot<G, S>
where
    G: Accessor<Error = Infallible>,
    G::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

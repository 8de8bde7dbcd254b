use bytemuck::{Pod, TransparentWrapper, Zeroable};
use core::fmt::Display;

// one signed 32-bit offset covers groups up to 2 GiB into their owner;
// larger layouts are rejected at group declaration, never wrapped
pub const MAX_GROUP_OFFSET: usize = i32::MAX as usize;

#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct RawOffset(i32);

impl RawOffset {
    #[inline(always)]
    pub const fn from_usize(n: usize) -> Self {
        assert!(n <= MAX_GROUP_OFFSET);
        Self(n as i32)
    }

    #[inline(always)]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Display for RawOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "+{:#x}", self.0)
    }
}

// the relative anchor: distance from the owner's start to the slot group
// holding it, established once per owner instance
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GroupAnchor(RawOffset);

unsafe impl TransparentWrapper<RawOffset> for GroupAnchor {}

impl GroupAnchor {
    // Safety: the group initialized with this anchor must live exactly
    // `group_offset` bytes into a live `Owner` for as long as any of its
    // slots are accessed; a group moved or copied out of its owner makes
    // every derived slot access undefined
    pub const unsafe fn within<Owner>(group_offset: usize) -> Self {
        assert!(group_offset < core::mem::size_of::<Owner>());
        Self(RawOffset::from_usize(group_offset))
    }
}

// the shared storage read through any member of a slot group
pub fn shared_offset<M: TransparentWrapper<RawOffset>>(member: &M) -> RawOffset {
    *M::peel_ref(member)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_round_trips() {
        let off = RawOffset::from_usize(40);
        assert_eq!(off.as_usize(), 40);
    }

    #[test]
    fn offset_covers_design_limit() {
        let off = RawOffset::from_usize(MAX_GROUP_OFFSET);
        assert_eq!(off.as_usize(), MAX_GROUP_OFFSET);
    }

    #[test]
    #[should_panic]
    fn oversized_offset_is_rejected() {
        let _ = RawOffset::from_usize(MAX_GROUP_OFFSET + 1);
    }

    #[test]
    fn anchor_is_one_offset_wide() {
        assert_eq!(
            core::mem::size_of::<GroupAnchor>(),
            core::mem::size_of::<RawOffset>()
        );
    }
}

// The declaration macro is sugar: a group built by hand out of the public
// pieces (anchor, slot type, binding traits) behaves identically. The
// setter here transforms its input, so reads observe the setter's result,
// not the written value.

use core::convert::Infallible;
use mooring::{Accessor, BoundSlot, GroupAnchor, MaybeMutator, Mutator};

struct Dial {
    angle: i16,
    slots: DialSlots,
}

impl Dial {
    fn new() -> Self {
        Dial {
            angle: 90,
            slots: DialSlots::new(),
        }
    }

    fn angle(&self) -> i16 {
        self.angle
    }

    // normalizes into [0, 360)
    fn set_angle(&mut self, a: i16) {
        self.angle = a.rem_euclid(360);
    }
}

enum DialAngleGet {}

impl Accessor for DialAngleGet {
    type Owner = Dial;
    type Value = i16;
    type Error = Infallible;

    fn read(owner: &Dial) -> Result<i16, Infallible> {
        Ok(owner.angle())
    }
}

enum DialAngleSet {}

impl Mutator for DialAngleSet {
    type Owner = Dial;
    type Value = i16;
    type Error = Infallible;

    fn write(owner: &mut Dial, val: i16) -> Result<(), Infallible> {
        owner.set_angle(val);
        Ok(())
    }
}

impl MaybeMutator for DialAngleSet {
    const WRITABLE: bool = true;
}

type AngleSlot = BoundSlot<DialAngleGet, DialAngleSet>;

#[derive(Clone, Copy)]
#[repr(C)]
union DialSlots {
    anchor: GroupAnchor,
    angle: AngleSlot,
}

impl DialSlots {
    const fn new() -> Self {
        // Safety: DialSlots lives at Dial.slots for the life of each Dial
        DialSlots {
            anchor: unsafe {
                GroupAnchor::within::<Dial>(core::mem::offset_of!(Dial, slots))
            },
        }
    }

    fn angle(&self) -> &AngleSlot {
        unsafe { &self.angle }
    }

    fn angle_mut(&mut self) -> &mut AngleSlot {
        unsafe { &mut self.angle }
    }
}

#[test]
fn hand_bound_group_forwards() {
    let mut d = Dial::new();
    assert_eq!(d.slots.angle().get(), 90);

    d.slots.angle_mut().set(45);
    assert_eq!(d.slots.angle().get(), 45);
}

#[test]
fn reads_observe_the_setter_result() {
    let mut d = Dial::new();
    d.slots.angle_mut().set(370);
    assert_eq!(d.slots.angle().get(), 10);

    d.slots.angle_mut().set(-90);
    assert_eq!(d.slots.angle().get(), 270);
}

#[test]
fn hand_bound_slot_reports_writable() {
    assert!(AngleSlot::WRITABLE);
}

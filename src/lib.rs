//! Self-locating property slots.
//!
//! A [`BoundSlot`] embedded in a struct forwards reads and writes to
//! accessor methods on that same struct. Slots carry no per-instance state
//! beyond one relative offset shared by every slot in their
//! [`slot_group!`] through storage aliasing; which accessor a slot calls
//! is part of its type, so dispatch costs nothing at runtime and a copied
//! or moved owner needs no fix-up.
//!
//! ```
//! struct Gauge {
//!     level: i32,
//!     slots: GaugeSlots,
//! }
//!
//! impl Gauge {
//!     fn new() -> Self {
//!         Gauge { level: 5, slots: GaugeSlots::new() }
//!     }
//!
//!     fn level(&self) -> i32 {
//!         self.level
//!     }
//!
//!     fn set_level(&mut self, v: i32) {
//!         if (0..=10).contains(&v) {
//!             self.level = v;
//!         }
//!     }
//! }
//!
//! mooring::slot_group! {
//!     union GaugeSlots for Gauge.slots {
//!         level: i32 => { get Gauge::level, set Gauge::set_level }
//!     }
//! }
//!
//! let mut g = Gauge::new();
//! g.slots.level_mut().set(6);
//! assert_eq!(g.slots.level().get(), 6);
//! g.slots.level_mut().set(20); // out of range, the setter drops it
//! assert_eq!(g.slots.level().get(), 6);
//! ```
//!
//! A slot declared without a setter has no write path in its type;
//! writing through it does not compile:
//!
//! ```compile_fail
//! struct Meter {
//!     slots: MeterSlots,
//! }
//!
//! impl Meter {
//!     fn ratio(&self) -> f32 {
//!         50.0
//!     }
//! }
//!
//! mooring::slot_group! {
//!     union MeterSlots for Meter.slots {
//!         ratio: f32 => { get Meter::ratio }
//!     }
//! }
//!
//! let mut m = Meter { slots: MeterSlots::new() };
//! m.slots.ratio().set(7.0); // no write capability for this slot
//! ```
//!
//! The mechanism adds no synchronization of its own: the shared offset is
//! read-only after construction, but serializing concurrent calls into the
//! bound accessors is the caller's obligation, as is never accessing a
//! group that was moved or copied out of its owning struct.

#![no_std]

mod accessor;
mod group;
mod offset;
mod slot;

pub use accessor::{Accessor, AssignError, MaybeMutator, Mutator, NoMutator};
pub use offset::{shared_offset, GroupAnchor, RawOffset, MAX_GROUP_OFFSET};
pub use slot::{BoundSlot, ReadSlot};

#[doc(hidden)]
pub use paste::paste as __paste;

// Property-based forwarding tests: for arbitrary write sequences, a slot
// observes exactly what driving the setter directly would produce.

use proptest::prelude::*;

#[derive(Clone, Copy)]
struct Gauge {
    level: i32,
    slots: GaugeSlots,
}

impl Gauge {
    fn new() -> Self {
        Gauge {
            level: 5,
            slots: GaugeSlots::new(),
        }
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn set_level(&mut self, v: i32) {
        if (0..=10).contains(&v) {
            self.level = v;
        }
    }
}

mooring::slot_group! {
    union GaugeSlots for Gauge.slots {
        level: i32 => { get Gauge::level, set Gauge::set_level }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn slot_writes_match_direct_setter_calls(ops in proptest::collection::vec(-50i32..50, 1..64)) {
        let mut through_slot = Gauge::new();
        let mut direct = Gauge::new();

        for v in ops {
            through_slot.slots.level_mut().set(v);
            direct.set_level(v);
            prop_assert_eq!(through_slot.slots.level().get(), direct.level);
        }
    }

    #[test]
    fn reads_are_stable_between_writes(v in -50i32..50) {
        let mut g = Gauge::new();
        g.slots.level_mut().set(v);

        let first = g.slots.level().get();
        prop_assert_eq!(g.slots.level().get(), first);
    }

    #[test]
    fn copies_never_see_the_original(a in 0i32..=10, b in 0i32..=10) {
        let mut x = Gauge::new();
        x.slots.level_mut().set(a);

        let mut y = x;
        y.slots.level_mut().set(b);

        prop_assert_eq!(x.slots.level().get(), a);
        prop_assert_eq!(y.slots.level().get(), b);
    }
}

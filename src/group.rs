// declares a slot group: an aliased union of one relative anchor and any
// number of bound slots, all byte-for-byte a single shared offset.
//
// per slot this expands to a getter marker (and setter marker for
// read-write slots) implementing the binding traits, a slot type alias,
// and projection methods on the group; the group itself gets an
// anchor-initializing `new`, a `Default` impl, and compile-time layout
// assertions.
#[macro_export]
macro_rules! slot_group {
    (
        $(#[$meta:meta])*
        $vis:vis union $group:ident for $owner:ident . $field:ident {
            $( $slot:ident : $value:ty => $bind:tt )+
        }
    ) => {
        $( $crate::slot_group!(@bind [$vis] [$group] [$owner] [$slot] [$value] $bind); )+

        $crate::__paste! {
            $(#[$meta])*
            #[derive(Clone, Copy)]
            #[repr(C)]
            $vis union $group {
                anchor: $crate::GroupAnchor,
                $( $slot: [<$group $slot:camel Slot>], )+
            }

            impl $group {
                // the anchor relation is re-established for every owner
                // constructed; its value is a layout constant of the
                // owning type
                $vis const fn new() -> Self {
                    // Safety: the assertions below pin this group to the
                    // declared field of the owning type, and slots are
                    // only reachable through an owner embedding it there
                    Self {
                        anchor: unsafe {
                            $crate::GroupAnchor::within::<$owner>(::core::mem::offset_of!(
                                $owner, $field
                            ))
                        },
                    }
                }
            }

            impl ::core::default::Default for $group {
                #[inline]
                fn default() -> Self {
                    Self::new()
                }
            }

            // every member of the group is exactly one offset integer
            $(
                const _: () = ::core::assert!(
                    ::core::mem::size_of::<[<$group $slot:camel Slot>]>()
                        == ::core::mem::size_of::<$crate::GroupAnchor>()
                );
            )+
            const _: () = ::core::assert!(
                ::core::mem::offset_of!($owner, $field) <= $crate::MAX_GROUP_OFFSET
            );
        }

        $( $crate::slot_group!(@project [$vis] [$group] [$slot] $bind); )+
    };

    (@bind [$vis:vis] [$group:ident] [$owner:ident] [$slot:ident] [$value:ty]
        { get $get:path, set $set:path $(,)? }) => {
        $crate::__paste! {
            #[doc(hidden)]
            $vis enum [<$group $slot:camel Get>] {}

            impl $crate::Accessor for [<$group $slot:camel Get>] {
                type Owner = $owner;
                type Value = $value;
                type Error = ::core::convert::Infallible;

                #[inline(always)]
                fn read(
                    owner: &$owner,
                ) -> ::core::result::Result<$value, ::core::convert::Infallible> {
                    ::core::result::Result::Ok($get(owner))
                }
            }

            #[doc(hidden)]
            $vis enum [<$group $slot:camel Set>] {}

            impl $crate::Mutator for [<$group $slot:camel Set>] {
                type Owner = $owner;
                type Value = $value;
                type Error = ::core::convert::Infallible;

                #[inline(always)]
                fn write(
                    owner: &mut $owner,
                    val: $value,
                ) -> ::core::result::Result<(), ::core::convert::Infallible> {
                    $set(owner, val);
                    ::core::result::Result::Ok(())
                }
            }

            impl $crate::MaybeMutator for [<$group $slot:camel Set>] {
                const WRITABLE: bool = true;
            }

            $vis type [<$group $slot:camel Slot>] =
                $crate::BoundSlot<[<$group $slot:camel Get>], [<$group $slot:camel Set>]>;
        }
    };

    (@bind [$vis:vis] [$group:ident] [$owner:ident] [$slot:ident] [$value:ty]
        { get $get:path $(,)? }) => {
        $crate::__paste! {
            #[doc(hidden)]
            $vis enum [<$group $slot:camel Get>] {}

            impl $crate::Accessor for [<$group $slot:camel Get>] {
                type Owner = $owner;
                type Value = $value;
                type Error = ::core::convert::Infallible;

                #[inline(always)]
                fn read(
                    owner: &$owner,
                ) -> ::core::result::Result<$value, ::core::convert::Infallible> {
                    ::core::result::Result::Ok($get(owner))
                }
            }

            $vis type [<$group $slot:camel Slot>] =
                $crate::BoundSlot<[<$group $slot:camel Get>]>;
        }
    };

    (@bind [$vis:vis] [$group:ident] [$owner:ident] [$slot:ident] [$value:ty]
        { try($err:ty) get $get:path, set $set:path $(,)? }) => {
        $crate::__paste! {
            #[doc(hidden)]
            $vis enum [<$group $slot:camel Get>] {}

            impl $crate::Accessor for [<$group $slot:camel Get>] {
                type Owner = $owner;
                type Value = $value;
                type Error = $err;

                #[inline(always)]
                fn read(owner: &$owner) -> ::core::result::Result<$value, $err> {
                    $get(owner)
                }
            }

            #[doc(hidden)]
            $vis enum [<$group $slot:camel Set>] {}

            impl $crate::Mutator for [<$group $slot:camel Set>] {
                type Owner = $owner;
                type Value = $value;
                type Error = $err;

                #[inline(always)]
                fn write(owner: &mut $owner, val: $value) -> ::core::result::Result<(), $err> {
                    $set(owner, val)
                }
            }

            impl $crate::MaybeMutator for [<$group $slot:camel Set>] {
                const WRITABLE: bool = true;
            }

            $vis type [<$group $slot:camel Slot>] =
                $crate::BoundSlot<[<$group $slot:camel Get>], [<$group $slot:camel Set>]>;
        }
    };

    (@bind [$vis:vis] [$group:ident] [$owner:ident] [$slot:ident] [$value:ty]
        { try($err:ty) get $get:path $(,)? }) => {
        $crate::__paste! {
            #[doc(hidden)]
            $vis enum [<$group $slot:camel Get>] {}

            impl $crate::Accessor for [<$group $slot:camel Get>] {
                type Owner = $owner;
                type Value = $value;
                type Error = $err;

                #[inline(always)]
                fn read(owner: &$owner) -> ::core::result::Result<$value, $err> {
                    $get(owner)
                }
            }

            $vis type [<$group $slot:camel Slot>] =
                $crate::BoundSlot<[<$group $slot:camel Get>]>;
        }
    };

    (@project [$vis:vis] [$group:ident] [$slot:ident]
        { get $get:path, set $set:path $(,)? }) => {
        $crate::slot_group!(@project_rw [$vis] [$group] [$slot]);
    };

    (@project [$vis:vis] [$group:ident] [$slot:ident]
        { try($err:ty) get $get:path, set $set:path $(,)? }) => {
        $crate::slot_group!(@project_rw [$vis] [$group] [$slot]);
    };

    (@project [$vis:vis] [$group:ident] [$slot:ident]
        { get $get:path $(,)? }) => {
        $crate::slot_group!(@project_ro [$vis] [$group] [$slot]);
    };

    (@project [$vis:vis] [$group:ident] [$slot:ident]
        { try($err:ty) get $get:path $(,)? }) => {
        $crate::slot_group!(@project_ro [$vis] [$group] [$slot]);
    };

    (@project_rw [$vis:vis] [$group:ident] [$slot:ident]) => {
        $crate::__paste! {
            impl $group {
                #[inline(always)]
                $vis fn $slot(&self) -> &[<$group $slot:camel Slot>] {
                    // all members alias the one shared offset
                    unsafe { &self.$slot }
                }

                #[inline(always)]
                $vis fn [<$slot _mut>](&mut self) -> &mut [<$group $slot:camel Slot>] {
                    unsafe { &mut self.$slot }
                }
            }
        }
    };

    (@project_ro [$vis:vis] [$group:ident] [$slot:ident]) => {
        $crate::__paste! {
            impl $group {
                #[inline(always)]
                $vis fn $slot(&self) -> &[<$group $slot:camel Slot>] {
                    unsafe { &self.$slot }
                }
            }
        }
    };
}

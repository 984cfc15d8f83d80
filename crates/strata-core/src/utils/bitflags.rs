// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Declares flag sets over an unsigned integer.
//!
//! A set gets one constant per named flag, the set operators, and a `Debug`
//! that prints flag names. Everything is driven by a generated name table.

#[macro_export]
#[doc(hidden)]
macro_rules! strata_bitflags {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident: $ty:ty {
            $(
                $(#[$flag_attr:meta])*
                const $flag:ident = $value:expr;
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name($ty);

        impl $name {
            $(
                $(#[$flag_attr])*
                pub const $flag: Self = Self($value);
            )*

            /// No flag set.
            pub const EMPTY: Self = Self(0);

            /// Every named flag.
            pub const ALL: Self = Self(0 $(| $value)*);

            /// Each named flag with its name, in declaration order.
            pub const NAMED: &'static [(&'static str, Self)] =
                &[$((stringify!($flag), Self($value))),*];

            /// Builds a set from raw bits, or `None` if a bit has no name.
            pub const fn from_bits(bits: $ty) -> Option<Self> {
                if bits & !Self::ALL.0 == 0 {
                    Some(Self(bits))
                } else {
                    None
                }
            }

            /// Builds a set from raw bits, keeping the unnamed ones.
            pub const fn from_bits_retain(bits: $ty) -> Self {
                Self(bits)
            }

            /// The raw bits.
            pub const fn bits(self) -> $ty {
                self.0
            }

            /// Whether no bit is set.
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Whether every flag of `other` is set.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Whether at least one flag of `other` is set.
            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// `self` plus `other`. Usable in constants.
            #[must_use]
            pub const fn with(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// `self` minus `other`. Usable in constants.
            #[must_use]
            pub const fn without(self, other: Self) -> Self {
                Self(self.0 & !other.0)
            }

            /// Sets the flags of `other`.
            pub fn insert(&mut self, other: Self) {
                *self = self.with(other);
            }

            /// Clears the flags of `other`.
            pub fn remove(&mut self, other: Self) {
                *self = self.without(other);
            }

            /// Names of the set flags, in declaration order.
            pub fn iter_names(self) -> impl Iterator<Item = &'static str> {
                Self::NAMED
                    .iter()
                    .filter(move |(_, flag)| !flag.is_empty() && self.contains(*flag))
                    .map(|(name, _)| *name)
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, other: Self) -> Self {
                self.with(other)
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, other: Self) {
                self.insert(other);
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, other: Self) -> Self {
                Self(self.0 & other.0)
            }
        }

        impl core::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, other: Self) {
                self.0 &= other.0;
            }
        }

        // Complement within the named flags.
        impl core::ops::Not for $name {
            type Output = Self;
            fn not(self) -> Self {
                Self(!self.0 & Self::ALL.0)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}(", stringify!($name))?;
                let mut written = 0usize;
                for name in self.iter_names() {
                    if written > 0 {
                        f.write_str(" | ")?;
                    }
                    f.write_str(name)?;
                    written += 1;
                }
                let unnamed = self.0 & !Self::ALL.0;
                if unnamed != 0 {
                    if written > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{:#x}", unnamed)?;
                    written += 1;
                }
                if written == 0 {
                    f.write_str("EMPTY")?;
                }
                f.write_str(")")
            }
        }
    };
}

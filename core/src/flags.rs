/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::fmt::{Display, Formatter, Result};

/// A set of boolean flags packed into a single [`u32`].
///
/// Each bit is one independent flag. Bit positions are chosen by the caller, usually as
/// `const` powers of two, and several of them can be combined with `|` and passed to any
/// of the methods below in one go.
///
/// Packing flags like this only pays off when a type that is instantiated many times
/// needs to track more than a handful of booleans. For one or two flags just use `bool`
/// fields.
///
/// # Example
///
/// ```
/// use r3bl_android_core::Flags;
///
/// const SELECTED: u32 = 1 << 0;
/// const EXPANDED: u32 = 1 << 1;
///
/// let mut flags = Flags::new(SELECTED);
/// flags.add(EXPANDED);
/// assert_eq!(flags.get(), SELECTED | EXPANDED);
///
/// flags.reset();
/// assert_eq!(flags.get(), 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags(u32);

impl Flags {
    /// Creates a new set of flags initialized to `initial`. Use [`Flags::default`] to
    /// start from `0`.
    #[must_use]
    pub const fn new(initial: u32) -> Self { Self(initial) }

    /// Adds the bits in `flag` to the current ones. Adding a flag that is already present
    /// does nothing.
    pub fn add(&mut self, flag: u32) { self.0 |= flag; }

    /// Removes the bits in `flag` from the current ones. Removing a flag that is not
    /// present does nothing.
    pub fn remove(&mut self, flag: u32) { self.0 &= !flag; }

    /// Returns `true` if **any** of the bits in `flag` are currently set.
    ///
    /// When `flag` combines several bits, a single matching bit is enough. Use
    /// [`Flags::has_all`] to require every one of them.
    #[must_use]
    pub const fn has(&self, flag: u32) -> bool { self.0 & flag != 0 }

    /// Returns `true` only if **every** bit in `flag` is currently set.
    #[must_use]
    pub const fn has_all(&self, flag: u32) -> bool { self.0 & flag == flag }

    /// The raw value of all the flags.
    #[must_use]
    pub const fn get(&self) -> u32 { self.0 }

    /// Clears every flag.
    pub fn reset(&mut self) { self.0 = 0; }
}

impl From<u32> for Flags {
    fn from(value: u32) -> Self { Self(value) }
}

impl From<Flags> for u32 {
    fn from(flags: Flags) -> Self { flags.0 }
}

/// Renders the flags as a binary literal, eg: `0b10100`.
impl Display for Flags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{:#b}", self.0) }
}

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

//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Introduction](#introduction)
//! - [Flags](#flags)
//! - [Platform collaborators](#platform-collaborators)
//!
//! <!-- /TOC -->
//!
//! # Introduction
//!
//! This crate provides a handful of small, independent helpers that are used by
//! applications that run on a mobile platform (or a desktop stand in for one). None of
//! them talk to each other. Each one is a thin layer over a single platform
//! collaborator, which is modeled as a trait so that it can be swapped out in tests.
//!
//! 1. [`Flags`] packs many boolean flags into one integer.
//! 2. [`CodedError`] is an error that carries an integer code for caller side dispatch.
//! 3. [`Localer`] switches the application locale on a [`ResourceStore`].
//! 4. [`Toaster`] shows short lived messages on a [`ToastSurface`].
//! 5. [`Permissions`] asks a [`PermissionAuthority`] whether permissions are granted.
//!
//! The gated logging facade lives in the `r3bl_android_log` crate.
//!
//! # Flags
//!
//! ```
//! use r3bl_android_core::Flags;
//!
//! const DIRTY: u32 = 1 << 2;
//! const VISIBLE: u32 = 1 << 4;
//!
//! let mut flags = Flags::default();
//! flags.add(DIRTY);
//! flags.add(VISIBLE);
//! flags.remove(DIRTY);
//! assert!(!flags.has(DIRTY));
//! assert!(flags.has(VISIBLE));
//! ```
//!
//! # Platform collaborators
//!
//! The resource store, the toast surface, and the permission authority are all traits.
//! Implement them over the real platform in the application, and over plain structs in
//! tests.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod coded_error;
pub mod decl_macros;
pub mod flags;
pub mod localer;
pub mod permissions;
pub mod toaster;

// Re-export.
pub use coded_error::*;
pub use flags::*;
pub use localer::*;
pub use permissions::*;
pub use toaster::*;

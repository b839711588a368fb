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

/// Whether a permission has been granted to the calling process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// The platform component that decides whether the calling process holds a permission.
pub trait PermissionAuthority {
    fn check(&self, permission: &str) -> PermissionStatus;
}

/// Permission checks against a [`PermissionAuthority`].
#[derive(Debug)]
pub struct Permissions;

impl Permissions {
    #[must_use]
    pub fn has(authority: &impl PermissionAuthority, permission: &str) -> bool {
        authority.check(permission) == PermissionStatus::Granted
    }

    /// `true` if at least one of `permissions` is granted. An empty list is never
    /// granted.
    #[must_use]
    pub fn has_any_of(authority: &impl PermissionAuthority, permissions: &[&str]) -> bool {
        permissions.iter().any(|it| Self::has(authority, it))
    }

    /// `true` if every one of `permissions` is granted. An empty list is granted.
    #[must_use]
    pub fn has_all_of(authority: &impl PermissionAuthority, permissions: &[&str]) -> bool {
        permissions.iter().all(|it| Self::has(authority, it))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const CAMERA: &str = "android.permission.CAMERA";
    const RECORD_AUDIO: &str = "android.permission.RECORD_AUDIO";
    const READ_CONTACTS: &str = "android.permission.READ_CONTACTS";

    struct FakeAuthority {
        granted: HashSet<&'static str>,
    }

    impl FakeAuthority {
        fn granting(granted: &[&'static str]) -> Self {
            Self {
                granted: granted.iter().copied().collect(),
            }
        }
    }

    impl PermissionAuthority for FakeAuthority {
        fn check(&self, permission: &str) -> PermissionStatus {
            if self.granted.contains(permission) {
                PermissionStatus::Granted
            } else {
                PermissionStatus::Denied
            }
        }
    }

    #[test]
    fn test_has() {
        let authority = FakeAuthority::granting(&[CAMERA]);
        assert!(Permissions::has(&authority, CAMERA));
        assert!(!Permissions::has(&authority, RECORD_AUDIO));
    }

    #[test]
    fn test_has_any_of() {
        let authority = FakeAuthority::granting(&[RECORD_AUDIO]);
        assert!(Permissions::has_any_of(&authority, &[CAMERA, RECORD_AUDIO]));
        assert!(!Permissions::has_any_of(&authority, &[CAMERA, READ_CONTACTS]));
        assert!(!Permissions::has_any_of(&authority, &[]));
    }

    #[test]
    fn test_has_all_of() {
        let authority = FakeAuthority::granting(&[CAMERA, RECORD_AUDIO]);
        assert!(Permissions::has_all_of(&authority, &[CAMERA, RECORD_AUDIO]));
        assert!(!Permissions::has_all_of(&authority, &[CAMERA, READ_CONTACTS]));
        assert!(Permissions::has_all_of(&authority, &[]));
    }
}

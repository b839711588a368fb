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

use std::fmt::{Arguments, Display, Write as _};

/// How long a toast stays on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
pub enum ToastDuration {
    #[default]
    Short,
    Long,
}

impl ToastDuration {
    pub const LENGTH_SHORT: i32 = 0;
    pub const LENGTH_LONG: i32 = 1;
}

/// Raw platform duration values. Anything that isn't [`ToastDuration::LENGTH_LONG`]
/// falls back to [`ToastDuration::Short`].
impl From<i32> for ToastDuration {
    fn from(value: i32) -> Self {
        match value {
            ToastDuration::LENGTH_LONG => ToastDuration::Long,
            _ => ToastDuration::Short,
        }
    }
}

/// The platform surface that displays transient notifications.
pub trait ToastSurface {
    fn show(&mut self, text: &str, duration: ToastDuration);

    /// Look up a string resource by id. Returns `None` if there is no such resource.
    fn text(&self, res_id: u32) -> Option<String>;

    /// Look up a string resource by id and fill in its placeholders w/ `args`. Returns
    /// `None` if there is no such resource.
    ///
    /// The default fills each `{}` in the resource w/ the next arg, in order. Extra
    /// placeholders are left as is and extra args are ignored. Surfaces w/ their own
    /// resource formatter override this.
    fn string(&self, res_id: u32, args: &[&dyn Display]) -> Option<String> {
        let template = self.text(res_id)?;
        let mut args = args.iter();
        let mut acc = String::with_capacity(template.len());
        let mut rest = template.as_str();

        while let Some(index) = rest.find("{}") {
            acc.push_str(&rest[..index]);
            match args.next() {
                Some(arg) => {
                    // Writing to a String can't fail.
                    let _ = write!(acc, "{arg}");
                }
                None => acc.push_str("{}"),
            }
            rest = &rest[index + 2..];
        }
        acc.push_str(rest);

        Some(acc)
    }
}

/// Convenience functions to show toasts on a [`ToastSurface`].
#[derive(Debug)]
pub struct Toaster;

impl Toaster {
    /// Show `text` for [`ToastDuration::Short`].
    pub fn show(surface: &mut impl ToastSurface, text: &str) {
        Self::show_with_duration(surface, text, ToastDuration::default());
    }

    pub fn show_with_duration(
        surface: &mut impl ToastSurface,
        text: &str,
        duration: ToastDuration,
    ) {
        surface.show(text, duration);
    }

    /// Show the string resource `res_id`. Nothing is shown if the resource can't be
    /// found.
    pub fn show_res(surface: &mut impl ToastSurface, res_id: u32, duration: ToastDuration) {
        match surface.text(res_id) {
            Some(text) => surface.show(&text, duration),
            None => tracing::warn!(res_id, "No string resource to show as a toast"),
        }
    }

    /// Show the string resource `res_id` w/ its placeholders filled in by `args`, see
    /// [`ToastSurface::string`]. Nothing is shown if the resource can't be found.
    pub fn show_res_fmt(
        surface: &mut impl ToastSurface,
        res_id: u32,
        duration: ToastDuration,
        args: &[&dyn Display],
    ) {
        match surface.string(res_id, args) {
            Some(text) => surface.show(&text, duration),
            None => tracing::warn!(res_id, "No string resource to format as a toast"),
        }
    }

    /// Show formatted text, eg: `Toaster::show_fmt(surface, duration, format_args!(..))`.
    pub fn show_fmt(
        surface: &mut impl ToastSurface,
        duration: ToastDuration,
        args: Arguments<'_>,
    ) {
        let text = std::fmt::format(args);
        surface.show(&text, duration);
    }
}

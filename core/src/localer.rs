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

use std::{fmt::{Display, Formatter},
          str::FromStr};

/// A language w/ an optional country (region), eg: `en` or `en_US`.
///
/// Both `_` and `-` are accepted as the separator when parsing. [`Display`] always uses
/// `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    pub fn new(language: impl Into<String>, country: Option<&str>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            country: country.map(str::to_uppercase),
        }
    }

    /// The locale that [`Localer`] starts with.
    #[must_use]
    pub fn english() -> Self { Self::new("en", None) }

    #[must_use]
    pub fn language(&self) -> &str { &self.language }

    #[must_use]
    pub fn country(&self) -> Option<&str> { self.country.as_deref() }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{country}", self.language),
            None => write!(f, "{}", self.language),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum LocaleParseError {
    #[error("Locale tag is empty")]
    #[diagnostic(
        code(r3bl_android_core::locale::empty),
        help("Use a tag like `en` or `en_US`")
    )]
    Empty,

    #[error("Locale tag '{tag}' has an empty language or country part")]
    #[diagnostic(code(r3bl_android_core::locale::malformed))]
    Malformed { tag: String },
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(LocaleParseError::Empty);
        }

        let mut parts = tag.splitn(2, ['_', '-']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next();

        if language.is_empty() || country.is_some_and(str::is_empty) {
            return Err(LocaleParseError::Malformed { tag: tag.to_string() });
        }

        Ok(Self::new(language, country))
    }
}

/// The part of the platform configuration that [`Localer`] cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub locale: Option<Locale>,
}

/// The platform resource store. It owns the current [`Configuration`] and resolves
/// localized resources against it.
pub trait ResourceStore {
    /// A copy of the configuration that is currently in effect.
    fn configuration(&self) -> Configuration;

    /// Replace the configuration that is in effect, so that subsequent resource lookups
    /// use it.
    fn update_configuration(&mut self, config: Configuration);

    /// Set the process wide default locale.
    fn set_default_locale(&mut self, locale: &Locale);
}

/// Keeps the application locale in effect regardless of what the system locale is.
///
/// The platform resets the configuration whenever it changes (eg: on rotation), so the
/// application has to call [`Localer::dispatch_application_created`] once at start up
/// and [`Localer::dispatch_configuration_changed`] every time it is told about a new
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localer {
    locale: Locale,
}

impl Default for Localer {
    fn default() -> Self { Self::new(Locale::english()) }
}

impl Localer {
    #[must_use]
    pub fn new(locale: Locale) -> Self { Self { locale } }

    pub fn dispatch_application_created(&self, store: &mut impl ResourceStore) {
        let config = store.configuration();
        self.update_locale(config, store);
    }

    pub fn dispatch_configuration_changed(
        &self,
        new_config: &Configuration,
        store: &mut impl ResourceStore,
    ) {
        self.update_locale(new_config.clone(), store);
    }

    /// Switch to `locale` and apply it to `store` right away.
    pub fn set_locale(&mut self, locale: Locale, store: &mut impl ResourceStore) {
        self.locale = locale;
        let config = store.configuration();
        self.update_locale(config, store);
    }

    #[must_use]
    pub fn locale(&self) -> &Locale { &self.locale }

    fn update_locale(&self, mut config: Configuration, store: &mut impl ResourceStore) {
        store.set_default_locale(&self.locale);
        config.locale = Some(self.locale.clone());
        store.update_configuration(config);
        tracing::debug!(locale = %self.locale, "Application locale applied");
    }
}

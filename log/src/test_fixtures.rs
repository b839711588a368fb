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

//! Captures what a thread local subscriber, rendering w/ [`LogcatEventFormatter`],
//! writes while a block runs.

use std::{io,
          sync::{Arc, Mutex, PoisonError}};

use tracing::{Level, subscriber::set_default};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::LogcatEventFormatter;

#[derive(Debug, Clone, Default)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).to_string()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

/// Everything logged at `TRACE` and above while `block` runs, in logcat form.
pub fn capture_logcat(block: impl FnOnce()) -> String {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = SubscriberBuilder::default()
        .with_max_level(Level::TRACE)
        .event_format(LogcatEventFormatter)
        .with_writer(move || writer.clone())
        .finish();

    // Tests shouldn't set the global default subscriber.
    let _drop_guard = set_default(subscriber);
    block();

    output.contents()
}

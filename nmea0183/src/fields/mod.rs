// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

//! Typed field values shared by the sentence decoders.

use std::fmt;

mod coordinate;
mod date;
mod time;

pub use coordinate::{parse_position, Hemisphere};
pub use date::{date_time, Date};
pub use time::Time;

/// Error for a field value that does not match its transmitted format.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct InvalidFormat {
    /// The format the value should have had.
    pub expected: &'static str,
}

impl fmt::Display for InvalidFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}", self.expected)
    }
}

impl std::error::Error for InvalidFormat {}

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

use crate::error::{FieldError, FieldErrorKind};
use crate::fields::{parse_position, Date, Time};
use crate::{Error, RawSentence};

/// Typed accessor over the fields of one [`RawSentence`].
///
/// Each getter converts one field and, on failure, records the field's
/// index, name and raw value instead of returning early, so that every
/// problem in a garbled sentence is reported in a single pass. A failed
/// conversion yields the type's zero value and extraction continues;
/// [`finish`](FieldReader::finish) turns the collected failures into one
/// terminal error.
///
/// A reader is owned by exactly one decode call and never shared.
pub struct FieldReader<'a> {
    sentence: &'a RawSentence,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(sentence: &'a RawSentence) -> Self {
        Self {
            sentence,
            errors: Vec::new(),
        }
    }

    /// The raw field at `index`, or an empty string for a missing field.
    pub fn string(&mut self, index: usize, name: &'static str) -> String {
        match self.field(index, name) {
            Some(value) => value.to_owned(),
            None => String::new(),
        }
    }

    /// The non-empty fields in `index..to`, for variable-length tails such
    /// as satellite lists.
    pub fn string_list(&mut self, index: usize, to: usize, name: &'static str) -> Vec<String> {
        (index..to)
            .filter_map(|i| self.field(i, name))
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// The field at `index`, which must be exactly one of `allowed`.
    ///
    /// Anything else, including an empty field, is recorded as a failure.
    pub fn enum_string(
        &mut self,
        index: usize,
        name: &'static str,
        allowed: &'static [&'static str],
    ) -> String {
        let Some(value) = self.field(index, name) else {
            return String::new();
        };
        if allowed.iter().any(|option| *option == value) {
            value.to_owned()
        } else {
            self.errors.push(FieldError {
                index,
                field: name,
                kind: FieldErrorKind::InvalidEnum {
                    value: value.to_owned(),
                    allowed,
                },
            });
            String::new()
        }
    }

    /// The field at `index` as a signed decimal number.
    ///
    /// An empty field decodes to `0.0`, the protocol's "no fix" value. Use
    /// [`opt_float64`](FieldReader::opt_float64) where absent must stay
    /// distinguishable from zero.
    pub fn float64(&mut self, index: usize, name: &'static str) -> f64 {
        self.opt_float64(index, name).unwrap_or(0.0)
    }

    /// Like [`float64`](FieldReader::float64), but an empty field decodes
    /// to `None`.
    pub fn opt_float64(&mut self, index: usize, name: &'static str) -> Option<f64> {
        let value = self.field(index, name)?;
        if value.is_empty() {
            return None;
        }
        match value.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.record_invalid(index, name, value.to_owned());
                None
            }
        }
    }

    /// The field at `index` as a signed integer.
    ///
    /// An empty field decodes to `0`.
    pub fn int64(&mut self, index: usize, name: &'static str) -> i64 {
        self.opt_int64(index, name).unwrap_or(0)
    }

    /// Like [`int64`](FieldReader::int64), but an empty field decodes to
    /// `None`.
    pub fn opt_int64(&mut self, index: usize, name: &'static str) -> Option<i64> {
        let value = self.field(index, name)?;
        if value.is_empty() {
            return None;
        }
        match value.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.record_invalid(index, name, value.to_owned());
                None
            }
        }
    }

    /// The field at `index` as a time of day.
    ///
    /// An empty field decodes to a value with `valid == false`.
    pub fn time(&mut self, index: usize, name: &'static str) -> Time {
        let Some(value) = self.field(index, name) else {
            return Time::default();
        };
        match value.parse() {
            Ok(time) => time,
            Err(_) => {
                self.record_invalid(index, name, value.to_owned());
                Time::default()
            }
        }
    }

    /// The field at `index` as a date.
    ///
    /// An empty field decodes to a value with `valid == false`.
    pub fn date(&mut self, index: usize, name: &'static str) -> Date {
        let Some(value) = self.field(index, name) else {
            return Date::default();
        };
        match value.parse() {
            Ok(date) => date,
            Err(_) => {
                self.record_invalid(index, name, value.to_owned());
                Date::default()
            }
        }
    }

    /// A coordinate split over a `ddmm.mmmm` value field and a hemisphere
    /// field, as signed decimal degrees.
    ///
    /// A pair of empty fields decodes to `0.0`, the protocol's "no fix"
    /// value.
    pub fn lat_long(&mut self, index: usize, hemisphere: usize, name: &'static str) -> f64 {
        let Some(value) = self.field(index, name) else {
            return 0.0;
        };
        let Some(designator) = self.field(hemisphere, name) else {
            return 0.0;
        };
        if value.is_empty() && designator.is_empty() {
            return 0.0;
        }
        match parse_position(value, designator) {
            Ok(degrees) => degrees,
            Err(_) => {
                self.record_invalid(index, name, format!("{value} {designator}"));
                0.0
            }
        }
    }

    /// The failures recorded so far.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Terminal decision point for one decode pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFields`] carrying every recorded failure if
    /// there was any; the sentence must not be used as a record then.
    pub fn finish(self) -> Result<(), Error> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidFields {
                prefix: self.sentence.prefix(),
                errors: self.errors,
            })
        }
    }

    fn field(&mut self, index: usize, name: &'static str) -> Option<&'a str> {
        let fields: &'a [String] = self.sentence.fields();
        match fields.get(index) {
            Some(value) => Some(value.as_str()),
            None => {
                self.record_invalid(index, name, "index out of range".to_owned());
                None
            }
        }
    }

    fn record_invalid(&mut self, index: usize, field: &'static str, value: String) {
        self.errors.push(FieldError {
            index,
            field,
            kind: FieldErrorKind::InvalidValue { value },
        });
    }
}

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

use std::str::FromStr;

use super::InvalidFormat;

/// Hemisphere designator of a coordinate pair.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Sign of decimal degrees on this hemisphere.
    fn sign(self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }

    /// Largest angle in degrees valid on this hemisphere.
    fn limit(self) -> f64 {
        match self {
            Self::North | Self::South => 90.0,
            Self::East | Self::West => 180.0,
        }
    }
}

impl FromStr for Hemisphere {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            _ => Err(InvalidFormat {
                expected: "N, S, E or W",
            }),
        }
    }
}

/// Parses a `ddmm.mmmm` value with its hemisphere designator into signed
/// decimal degrees.
///
/// # Errors
///
/// Returns an error if the value is not an unsigned decimal, the minutes
/// reach 60, the angle exceeds the hemisphere's range or the designator is
/// not one of `N`, `S`, `E` or `W`.
pub fn parse_position(value: &str, hemisphere: &str) -> Result<f64, InvalidFormat> {
    const ERR: InvalidFormat = InvalidFormat {
        expected: "ddmm.mmmm with hemisphere N, S, E or W",
    };

    let hemisphere: Hemisphere = hemisphere.parse().map_err(|_| ERR)?;
    let degrees_minutes: f64 = value.parse().map_err(|_| ERR)?;
    if !degrees_minutes.is_finite() || degrees_minutes < 0.0 {
        return Err(ERR);
    }

    let degrees = (degrees_minutes / 100.0).trunc();
    let minutes = degrees_minutes - degrees * 100.0;
    let angle = degrees + minutes / 60.0;
    if minutes >= 60.0 || angle > hemisphere.limit() {
        return Err(ERR);
    }

    Ok(hemisphere.sign() * angle)
}

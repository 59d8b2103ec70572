/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

use std::fmt::{Display, Formatter};
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::SpaceError;
use crate::Int;

/// A Location is just a list of integer coordinates, one per dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location(Vec<Int>);

impl Location {
    pub fn new(coordinates: Vec<Int>) -> Self {
        Self(coordinates)
    }

    pub fn coordinates(&self) -> &[Int] {
        &self.0
    }

    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns this location moved by `delta` along `axis`, or None if the location has no
    /// coordinate for that axis.
    pub fn offset(&self, axis: usize, delta: Int) -> Option<Location> {
        let mut coordinates = self.0.clone();
        let coordinate = coordinates.get_mut(axis)?;
        *coordinate = coordinate.checked_add(delta)?;
        Some(Self(coordinates))
    }
}

impl From<Vec<Int>> for Location {
    fn from(coordinates: Vec<Int>) -> Self {
        Self(coordinates)
    }
}

impl<const N: usize> From<[Int; N]> for Location {
    fn from(coordinates: [Int; N]) -> Self {
        Self(coordinates.to_vec())
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, coordinate) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coordinate)?;
        }
        write!(f, "]")
    }
}

/// An N-dimensional space of integer coordinates where N >= 0. Each dimension is a half-open
/// interval such as `0..10` or `-5..5`.
///
/// For the two-square vacuum world use `Space::new(vec![0..2])`, which has the two locations
/// `[0]` and `[1]`. `Space::nothing()` is the zero-dimensional space: it contains nothing, not
/// even the empty location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Space {
    intervals: Vec<Range<Int>>,
}

impl Space {
    pub fn new(intervals: Vec<Range<Int>>) -> Result<Self, SpaceError> {
        for (dimension, interval) in intervals.iter().enumerate() {
            if interval.start > interval.end {
                return Err(SpaceError::InvalidInterval {
                    dimension,
                    start: interval.start,
                    end: interval.end,
                });
            }
        }
        Ok(Self { intervals })
    }

    pub fn nothing() -> Self {
        Self::default()
    }

    pub fn dimension(&self) -> usize {
        self.intervals.len()
    }

    pub fn intervals(&self) -> &[Range<Int>] {
        &self.intervals
    }

    /// A location is inside iff it is not empty, has no more coordinates than the space has
    /// dimensions, and each coordinate lies in the corresponding interval. Shorter locations
    /// are checked against the leading dimensions only.
    ///
    /// Nothing contains nothing: an empty space or an empty location is always false.
    pub fn contains(&self, location: &Location) -> bool {
        if self.intervals.is_empty() || location.is_empty() {
            return false;
        }
        if self.intervals.len() < location.dimension() {
            return false;
        }
        self.intervals
            .iter()
            .zip(location.coordinates())
            .all(|(interval, coordinate)| interval.contains(coordinate))
    }

    /// Draws each coordinate uniformly and independently from its interval. Returns None if an
    /// interval is empty since there is nothing to draw from it.
    pub fn random_location<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Option<Location> {
        self.intervals
            .iter()
            .map(|interval| {
                if interval.is_empty() {
                    None
                } else {
                    Some(rng.gen_range(interval.clone()))
                }
            })
            .collect::<Option<Vec<Int>>>()
            .map(Location)
    }

    /// Number of distinct locations inside the space.
    pub fn volume(&self) -> usize {
        if self.intervals.is_empty() {
            return 0;
        }
        self.intervals.iter().map(|interval| interval.len()).product()
    }

    /// Every location inside the space, first dimension varying slowest.
    pub fn locations(&self) -> Vec<Location> {
        if self.volume() == 0 {
            return Vec::new();
        }
        let mut prefixes: Vec<Vec<Int>> = vec![Vec::with_capacity(self.dimension())];
        for interval in &self.intervals {
            prefixes = prefixes
                .into_iter()
                .flat_map(|prefix| {
                    interval.clone().map(move |coordinate| {
                        let mut next = prefix.clone();
                        next.push(coordinate);
                        next
                    })
                })
                .collect();
        }
        prefixes.into_iter().map(Location).collect()
    }
}

impl Display for Space {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}..{}", interval.start, interval.end)?;
        }
        write!(f, ")")
    }
}

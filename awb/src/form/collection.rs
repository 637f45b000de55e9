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

use std::fmt;

use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kind of the repeated lines of a form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineKind {
    Rate,
    Dimension,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rate => write!(f, "rate"),
            Self::Dimension => write!(f, "dimension"),
        }
    }
}

/// A repeated line of a form.
pub trait Line: Default + Clone {
    const KIND: LineKind;

    /// Clears all inputs of the line.
    fn clear(&mut self);
}

/// An ordered collection of lines that holds between one and `limit` lines.
///
/// A new collection starts with one default line. Adding beyond the limit or
/// removing the last line is rejected and leaves the collection unchanged.
///
/// # Examples
///
/// ```
/// # use awb::form::{LineCollection, RateLine};
/// let mut lines: LineCollection<RateLine> = LineCollection::new(2);
/// assert_eq!(lines.len(), 1);
///
/// assert_eq!(lines.add(), Ok(1));
/// assert!(lines.add().is_err());
///
/// assert!(lines.remove(0).is_ok());
/// assert!(lines.remove(0).is_err());
/// assert_eq!(lines.len(), 1);
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineCollection<T> {
    lines: Vec<T>,
    limit: usize,
}

impl<T: Line> LineCollection<T> {
    /// Creates a collection with one default line.
    ///
    /// A `limit` below one is raised to one.
    pub fn new(limit: usize) -> Self {
        Self {
            lines: vec![T::default()],
            limit: limit.max(1),
        }
    }

    /// Appends a default line and returns its index.
    pub fn add(&mut self) -> Result<usize> {
        if self.lines.len() >= self.limit {
            warn!("maximum {} {} line(s) allowed", self.limit, T::KIND);
            return Err(Error::LineLimitReached {
                kind: T::KIND,
                limit: self.limit,
            });
        }

        self.lines.push(T::default());
        debug!("{} line added ({} of {})", T::KIND, self.lines.len(), self.limit);
        Ok(self.lines.len() - 1)
    }

    /// Removes and returns the line at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.lines.len() {
            return Err(Error::LineNotFound {
                kind: T::KIND,
                index,
            });
        }

        if self.lines.len() == 1 {
            warn!("last {} line can't be removed", T::KIND);
            return Err(Error::LastLine { kind: T::KIND });
        }

        let line = self.lines.remove(index);
        debug!("{} line {} removed", T::KIND, index);
        Ok(line)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.lines.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.lines.get_mut(index)
    }

    /// Returns the line at `index` or an error if there is none.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.lines.get_mut(index).ok_or(Error::LineNotFound {
            kind: T::KIND,
            index,
        })
    }

    /// Clears the inputs of all lines but keeps the lines.
    pub fn clear(&mut self) {
        self.lines.iter_mut().for_each(Line::clear);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.lines.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.lines.iter_mut()
    }

    pub fn lines(&self) -> &[T] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always `false` since a collection holds at least one line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns `true` if no more lines can be added.
    pub fn is_full(&self) -> bool {
        self.lines.len() >= self.limit
    }
}

impl<'a, T> IntoIterator for &'a LineCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{DimensionLine, RateLine};

    #[test]
    fn starts_with_one_line() {
        let lines: LineCollection<DimensionLine> = LineCollection::new(25);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.get(0), Some(&DimensionLine::default()));
    }

    #[test]
    fn rejects_add_at_limit() {
        let mut lines: LineCollection<RateLine> = LineCollection::new(1);
        let before = lines.clone();

        assert_eq!(
            lines.add(),
            Err(Error::LineLimitReached {
                kind: LineKind::Rate,
                limit: 1
            })
        );
        assert_eq!(lines, before);
    }

    #[test]
    fn rejects_removing_last_line() {
        let mut lines: LineCollection<DimensionLine> = LineCollection::new(25);
        lines
            .get_mut(0)
            .expect("first line should exist")
            .pieces
            .set("3");
        let before = lines.clone();

        assert_eq!(
            lines.remove(0),
            Err(Error::LastLine {
                kind: LineKind::Dimension
            })
        );
        assert_eq!(lines, before);
    }

    #[test]
    fn removes_line_in_order() {
        let mut lines: LineCollection<DimensionLine> = LineCollection::new(25);
        lines.add().expect("line should be added");
        lines.add().expect("line should be added");
        lines.get_mut(1).expect("line should exist").pieces.set("7");

        let removed = lines.remove(1).expect("line should be removed");

        assert_eq!(removed.pieces.as_str(), "7");
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines.remove(5),
            Err(Error::LineNotFound {
                kind: LineKind::Dimension,
                index: 5
            })
        );
    }

    #[test]
    fn zero_limit_holds_one_line() {
        let mut lines: LineCollection<RateLine> = LineCollection::new(0);
        assert_eq!(lines.limit(), 1);
        assert!(lines.is_full());
        assert!(lines.add().is_err());
    }
}

// Copyright 2023 Datafuse Labs
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

use std::collections::HashSet;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::dummy::sealed::RowCount;
use crate::dummy::DummyColumn;

/// The right-hand side of an `IN` predicate, built once and probed with
/// serialized row keys.
#[derive(Debug, Default)]
pub struct PreparedSet {
    keys: HashSet<Vec<u8>>,
}

impl PreparedSet {
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        PreparedSet {
            keys: keys.into_iter().map(|k| k.as_ref().to_vec()).collect(),
        }
    }

    pub fn insert(&mut self, key: &[u8]) -> bool {
        self.keys.insert(key.to_vec())
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Placeholder standing for a prepared set in a block.
///
/// Every row refers to the same set, so resizing only changes the row count
/// and the set handle is shared with the new column.
#[derive(Clone)]
pub struct SetColumn {
    rows: usize,
    set: Arc<PreparedSet>,
}

impl SetColumn {
    pub fn new(rows: usize, set: Arc<PreparedSet>) -> Self {
        SetColumn { rows, set }
    }

    pub fn set(&self) -> &Arc<PreparedSet> {
        &self.set
    }
}

impl DummyColumn for SetColumn {
    const NAME: &'static str = "Set";

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    fn clone_with_size(&self, rows: usize) -> Self {
        SetColumn::new(rows, self.set.clone())
    }
}

impl RowCount for SetColumn {
    #[inline]
    fn rows_mut(&mut self) -> &mut usize {
        &mut self.rows
    }
}

impl Debug for SetColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(rows={}, keys={})",
            Self::NAME,
            self.rows,
            self.set.len()
        )
    }
}

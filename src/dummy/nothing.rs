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

use std::fmt::Debug;
use std::fmt::Formatter;

use crate::dummy::sealed::RowCount;
use crate::dummy::DummyColumn;

/// The column of the `Nothing` type, which has no values at all.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NothingColumn {
    rows: usize,
}

impl NothingColumn {
    pub fn new(rows: usize) -> Self {
        NothingColumn { rows }
    }
}

impl DummyColumn for NothingColumn {
    const NAME: &'static str = "Nothing";

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    fn clone_with_size(&self, rows: usize) -> Self {
        NothingColumn::new(rows)
    }
}

impl RowCount for NothingColumn {
    #[inline]
    fn rows_mut(&mut self) -> &mut usize {
        &mut self.rows
    }
}

impl Debug for NothingColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(rows={})", Self::NAME, self.rows)
    }
}

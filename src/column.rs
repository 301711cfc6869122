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

use std::any::Any;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Range;
use std::sync::Arc;

use crate::arena::ArenaKeyBuilder;
use crate::exception::Result;
use crate::hash::SipHasher24;
use crate::hash::WeakHash32;
use crate::scalar::Scalar;

pub type ColumnRef = Arc<dyn Column>;
pub type MutableColumn = Box<dyn Column>;
pub type MutableColumns = Vec<MutableColumn>;

/// One byte per row, any non-zero byte keeps the row.
pub type Filter = [u8];
pub type Permutation = [usize];
/// Cumulative row counts, the last entry is the total number of output rows.
pub type Offsets = [usize];
/// Target bucket of every row.
pub type Selector = [usize];
pub type EqualRange = Range<usize>;
/// (block index, row index, repeat count)
pub type BlockRowIndex = (u32, u32, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStability {
    Unstable,
    Stable,
}

/// The capabilities every column of a [`DataBlock`](crate::DataBlock) offers.
///
/// Operations that change the number of rows return a fresh, independently
/// owned column. Operations taking an auxiliary per-row array reject it when
/// its length disagrees with the column.
pub trait Column: Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;

    fn name(&self) -> String;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the column only tracks a row count.
    fn is_dummy(&self) -> bool {
        false
    }

    fn structure_equals(&self, rhs: &dyn Column) -> bool;

    fn clone_resized(&self, rows: usize) -> MutableColumn;

    fn clone_empty(&self) -> MutableColumn {
        self.clone_resized(0)
    }

    fn byte_size(&self) -> usize;

    fn byte_size_at(&self, row: usize) -> usize;

    fn allocated_bytes(&self) -> usize;

    // Value access.

    fn value_at(&self, row: usize) -> Result<Scalar>;

    fn get(&self, row: usize, res: &mut Scalar) -> Result<()>;

    fn is_default_at(&self, row: usize) -> Result<bool>;

    fn get_data_at(&self, row: usize) -> &[u8];

    fn get_extremes(&self, min: &mut Scalar, max: &mut Scalar);

    // Appending.

    fn insert(&mut self, value: &Scalar) -> Result<()>;

    fn insert_data(&mut self, data: &[u8]) -> Result<()>;

    fn insert_default(&mut self) -> Result<()>;

    fn insert_from(&mut self, src: &dyn Column, row: usize) -> Result<()>;

    fn insert_range_from(&mut self, src: &dyn Column, start: usize, length: usize) -> Result<()>;

    /// Remove the last `n` rows, `n` must not exceed the column length.
    fn pop_back(&mut self, n: usize) -> Result<()>;

    // Arena serialization.

    /// Append `row` to the key under construction and return the bytes just
    /// written. The returned span is never empty.
    fn serialize_value_into_arena<'k>(&self, row: usize, key: &'k mut ArenaKeyBuilder<'_>)
    -> &'k [u8];

    /// Append the row serialized at the head of `pos` and return the rest of
    /// the input.
    fn deserialize_and_insert_from_arena<'a>(&mut self, pos: &'a [u8]) -> Result<&'a [u8]>;

    fn skip_serialized_in_arena<'a>(&self, pos: &'a [u8]) -> Result<&'a [u8]>;

    // Hashing.

    fn update_hash_with_value(&self, row: usize, hasher: &mut SipHasher24);

    fn update_weak_hash32(&self, hash: &mut WeakHash32);

    fn update_hash_fast(&self, hasher: &mut SipHasher24);

    // Comparison and sorting.

    fn compare_at(&self, n: usize, m: usize, rhs: &dyn Column, nan_direction_hint: i32)
    -> Ordering;

    /// Compare every row (or the rows listed in `row_indexes`) with row
    /// `rhs_row` of `rhs`, writing the results into `compare_results`.
    #[allow(clippy::too_many_arguments)]
    fn compare_column(
        &self,
        rhs: &dyn Column,
        rhs_row: usize,
        row_indexes: Option<&mut Vec<u64>>,
        compare_results: &mut Vec<i8>,
        direction: SortDirection,
        nan_direction_hint: i32,
    );

    fn has_equal_values(&self) -> bool;

    fn get_permutation(
        &self,
        direction: SortDirection,
        stability: SortStability,
        limit: usize,
        nan_direction_hint: i32,
    ) -> Vec<usize>;

    /// Refine `res` inside every range of rows that compared equal so far.
    #[allow(clippy::too_many_arguments)]
    fn update_permutation(
        &self,
        direction: SortDirection,
        stability: SortStability,
        limit: usize,
        nan_direction_hint: i32,
        res: &mut [usize],
        equal_ranges: &mut Vec<EqualRange>,
    );

    // Structural operations.

    fn filter(&self, filter: &Filter, result_size_hint: Option<usize>) -> MutableColumn;

    fn expand(&mut self, mask: &Filter, inverted: bool);

    fn permute(&self, perm: &Permutation, limit: usize) -> Result<MutableColumn>;

    fn index(&self, indexes: &dyn Column, limit: usize) -> Result<MutableColumn>;

    fn replicate(&self, offsets: &Offsets) -> Result<MutableColumn>;

    fn scatter(&self, num_columns: usize, selector: &Selector) -> Result<MutableColumns>;

    fn gather(&mut self, sources: &[ColumnRef], indices: &[BlockRowIndex]) -> Result<()>;

    // Sparse serialization support.

    fn get_ratio_of_default_rows(&self, sample_ratio: f64) -> Result<f64>;

    fn get_indices_of_non_default_rows(
        &self,
        indices: &mut Vec<u64>,
        from: usize,
        limit: usize,
    ) -> Result<()>;
}

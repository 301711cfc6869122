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

//! Columns that only know how many rows they have.
//!
//! A block requires every column to support the full column algebra, even
//! when the values behind it (a prepared set, a lambda, an aggregate state)
//! cannot be represented as [`Scalar`]s. A dummy column keeps a row count and
//! nothing else: value access fails, hashing and comparison treat all rows as
//! identical, and every structural operation reduces to arithmetic on the row
//! count followed by [`DummyColumn::clone_with_size`].

mod nothing;
mod set;

use std::any::Any;
use std::cmp::Ordering;

pub use nothing::NothingColumn;
pub use set::PreparedSet;
pub use set::SetColumn;
use sealed::RowCount;

use crate::arena::ArenaKeyBuilder;
use crate::column::BlockRowIndex;
use crate::column::Column;
use crate::column::ColumnRef;
use crate::column::EqualRange;
use crate::column::Filter;
use crate::column::MutableColumn;
use crate::column::MutableColumns;
use crate::column::Offsets;
use crate::column::Permutation;
use crate::column::Selector;
use crate::column::SortDirection;
use crate::column::SortStability;
use crate::exception::ErrorCode;
use crate::exception::Result;
use crate::hash::SipHasher24;
use crate::hash::WeakHash32;
use crate::scalar::Scalar;
use crate::utils::count_bytes_in_filter;

/// Byte written into the arena for every row. Serializing into zero bytes
/// would be ambiguous once keys of several columns are concatenated.
const SERIALIZED_ROW: u8 = 0;

mod sealed {
    /// Direct access to the row count. Only this crate can reach it, so the
    /// count changes through the column operations and `add_size` alone.
    pub trait RowCount {
        fn rows_mut(&mut self) -> &mut usize;
    }
}

/// A column that tracks only its number of rows.
///
/// Implementors provide storage for the row count and a factory producing a
/// new instance of the same type; [`Column`] is implemented for them on top of
/// those.
pub trait DummyColumn: RowCount + std::fmt::Debug + Send + Sync + Sized + 'static {
    const NAME: &'static str;

    fn rows(&self) -> usize;

    /// A new column of the same kind with `rows` rows.
    fn clone_with_size(&self, rows: usize) -> Self;

    /// Grow the column by `delta` rows, keeping it aligned with its siblings.
    fn add_size(&mut self, delta: usize) -> Result<()> {
        let rows = self.rows().checked_add(delta).ok_or_else(|| {
            ErrorCode::bad_arguments(format!(
                "Cannot add {delta} rows to {} with {} rows",
                Self::NAME,
                self.rows()
            ))
        })?;
        *self.rows_mut() = rows;
        Ok(())
    }

    fn boxed_with_size(&self, rows: usize) -> MutableColumn {
        Box::new(self.clone_with_size(rows))
    }
}

impl<T: DummyColumn> Column for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> String {
        T::NAME.to_string()
    }

    #[inline]
    fn len(&self) -> usize {
        self.rows()
    }

    fn is_dummy(&self) -> bool {
        true
    }

    fn structure_equals(&self, rhs: &dyn Column) -> bool {
        rhs.as_any().is::<T>()
    }

    fn clone_resized(&self, rows: usize) -> MutableColumn {
        self.boxed_with_size(rows)
    }

    fn byte_size(&self) -> usize {
        0
    }

    fn byte_size_at(&self, _row: usize) -> usize {
        0
    }

    fn allocated_bytes(&self) -> usize {
        0
    }

    fn value_at(&self, _row: usize) -> Result<Scalar> {
        Err(ErrorCode::unimplemented("value_at", T::NAME))
    }

    fn get(&self, _row: usize, _res: &mut Scalar) -> Result<()> {
        Err(ErrorCode::unimplemented("get", T::NAME))
    }

    fn is_default_at(&self, _row: usize) -> Result<bool> {
        Err(ErrorCode::unimplemented("is_default_at", T::NAME))
    }

    fn get_data_at(&self, _row: usize) -> &[u8] {
        &[]
    }

    fn get_extremes(&self, _min: &mut Scalar, _max: &mut Scalar) {}

    fn insert(&mut self, _value: &Scalar) -> Result<()> {
        Err(ErrorCode::unimplemented("insert", T::NAME))
    }

    fn insert_data(&mut self, _data: &[u8]) -> Result<()> {
        self.add_size(1)
    }

    fn insert_default(&mut self) -> Result<()> {
        self.add_size(1)
    }

    fn insert_from(&mut self, _src: &dyn Column, _row: usize) -> Result<()> {
        self.add_size(1)
    }

    fn insert_range_from(
        &mut self,
        _src: &dyn Column,
        _start: usize,
        length: usize,
    ) -> Result<()> {
        self.add_size(length)
    }

    fn pop_back(&mut self, n: usize) -> Result<()> {
        let rows = self.rows();
        if n > rows {
            return Err(ErrorCode::bad_arguments(format!(
                "Cannot pop {n} rows from {} with {rows} rows",
                T::NAME
            )));
        }
        *self.rows_mut() = rows - n;
        Ok(())
    }

    fn serialize_value_into_arena<'k>(
        &self,
        _row: usize,
        key: &'k mut ArenaKeyBuilder<'_>,
    ) -> &'k [u8] {
        let res = key.alloc_continue(1);
        res[0] = SERIALIZED_ROW;
        res
    }

    fn deserialize_and_insert_from_arena<'a>(&mut self, pos: &'a [u8]) -> Result<&'a [u8]> {
        let rest = self.skip_serialized_in_arena(pos)?;
        self.add_size(1)?;
        Ok(rest)
    }

    fn skip_serialized_in_arena<'a>(&self, pos: &'a [u8]) -> Result<&'a [u8]> {
        match pos.split_first() {
            Some((_, rest)) => Ok(rest),
            None => Err(ErrorCode::bad_bytes(format!(
                "Unexpected end of serialized row while reading {}",
                T::NAME
            ))),
        }
    }

    fn update_hash_with_value(&self, _row: usize, _hasher: &mut SipHasher24) {}

    fn update_weak_hash32(&self, _hash: &mut WeakHash32) {}

    fn update_hash_fast(&self, _hasher: &mut SipHasher24) {}

    fn compare_at(
        &self,
        _n: usize,
        _m: usize,
        _rhs: &dyn Column,
        _nan_direction_hint: i32,
    ) -> Ordering {
        Ordering::Equal
    }

    fn compare_column(
        &self,
        _rhs: &dyn Column,
        _rhs_row: usize,
        _row_indexes: Option<&mut Vec<u64>>,
        _compare_results: &mut Vec<i8>,
        _direction: SortDirection,
        _nan_direction_hint: i32,
    ) {
    }

    fn has_equal_values(&self) -> bool {
        true
    }

    // All rows are equal, so the identity is a valid and stable sort order.
    fn get_permutation(
        &self,
        _direction: SortDirection,
        _stability: SortStability,
        _limit: usize,
        _nan_direction_hint: i32,
    ) -> Vec<usize> {
        (0..self.rows()).collect()
    }

    fn update_permutation(
        &self,
        _direction: SortDirection,
        _stability: SortStability,
        _limit: usize,
        _nan_direction_hint: i32,
        _res: &mut [usize],
        _equal_ranges: &mut Vec<EqualRange>,
    ) {
    }

    fn filter(&self, filter: &Filter, _result_size_hint: Option<usize>) -> MutableColumn {
        self.boxed_with_size(count_bytes_in_filter(filter))
    }

    // Keeps the number of selected rows rather than growing to `mask.len()`.
    fn expand(&mut self, mask: &Filter, inverted: bool) {
        let mut rows = count_bytes_in_filter(mask);
        if inverted {
            rows = mask.len() - rows;
        }
        *self.rows_mut() = rows;
    }

    fn permute(&self, perm: &Permutation, limit: usize) -> Result<MutableColumn> {
        let rows = self.rows();
        if perm.len() != rows {
            return Err(ErrorCode::size_mismatch("permutation", rows, perm.len()));
        }
        let rows = if limit > 0 { rows.min(limit) } else { rows };
        Ok(self.boxed_with_size(rows))
    }

    fn index(&self, indexes: &dyn Column, limit: usize) -> Result<MutableColumn> {
        if indexes.len() < limit {
            return Err(ErrorCode::size_mismatch("indexes", limit, indexes.len()));
        }
        let rows = if limit > 0 { limit } else { self.rows() };
        Ok(self.boxed_with_size(rows))
    }

    fn replicate(&self, offsets: &Offsets) -> Result<MutableColumn> {
        let rows = self.rows();
        if offsets.len() != rows {
            return Err(ErrorCode::size_mismatch("offsets", rows, offsets.len()));
        }
        Ok(self.boxed_with_size(offsets.last().copied().unwrap_or(0)))
    }

    fn scatter(&self, num_columns: usize, selector: &Selector) -> Result<MutableColumns> {
        let rows = self.rows();
        if selector.len() != rows {
            return Err(ErrorCode::size_mismatch("selector", rows, selector.len()));
        }

        let mut counts = vec![0usize; num_columns];
        for &idx in selector {
            match counts.get_mut(idx) {
                Some(count) => *count += 1,
                None => {
                    return Err(ErrorCode::bad_arguments(format!(
                        "Selector index {idx} is out of range of {num_columns} buckets"
                    )));
                }
            }
        }

        Ok(counts
            .into_iter()
            .map(|count| self.clone_resized(count))
            .collect())
    }

    fn gather(&mut self, _sources: &[ColumnRef], _indices: &[BlockRowIndex]) -> Result<()> {
        Err(ErrorCode::unimplemented("gather", T::NAME))
    }

    fn get_ratio_of_default_rows(&self, _sample_ratio: f64) -> Result<f64> {
        Err(ErrorCode::unimplemented("get_ratio_of_default_rows", T::NAME))
    }

    fn get_indices_of_non_default_rows(
        &self,
        _indices: &mut Vec<u64>,
        _from: usize,
        _limit: usize,
    ) -> Result<()> {
        Err(ErrorCode::unimplemented(
            "get_indices_of_non_default_rows",
            T::NAME,
        ))
    }
}

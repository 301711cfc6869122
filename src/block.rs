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

use std::sync::Arc;

use crate::arena::ColumnArena;
use crate::column::ColumnRef;
use crate::column::Filter;
use crate::column::MutableColumn;
use crate::column::Offsets;
use crate::column::Permutation;
use crate::column::Selector;
use crate::exception::ErrorCode;
use crate::exception::Result;
use crate::utils::count_bytes_in_filter;

/// A batch of rows stored column by column. All columns have `num_rows` rows.
#[derive(Clone, Debug)]
pub struct DataBlock {
    columns: Vec<ColumnRef>,
    num_rows: usize,
}

impl DataBlock {
    pub fn new(columns: Vec<ColumnRef>, num_rows: usize) -> Result<Self> {
        Self::check_columns_valid(&columns, num_rows)?;
        Ok(DataBlock { columns, num_rows })
    }

    pub fn new_from_columns(columns: Vec<ColumnRef>) -> Result<Self> {
        let num_rows = columns.first().map_or(0, |c| c.len());
        Self::new(columns, num_rows)
    }

    pub fn from_mutable_columns(columns: Vec<MutableColumn>) -> Result<Self> {
        let columns: Vec<ColumnRef> = columns.into_iter().map(Arc::from).collect();
        Self::new_from_columns(columns)
    }

    #[inline]
    pub fn empty_with_rows(rows: usize) -> Self {
        DataBlock {
            columns: vec![],
            num_rows: rows,
        }
    }

    fn check_columns_valid(columns: &[ColumnRef], num_rows: usize) -> Result<()> {
        for column in columns {
            if column.len() != num_rows {
                log::warn!(
                    "DataBlock corrupted, column length mismatch, col rows: {}, num_rows: {num_rows}, column: {}",
                    column.len(),
                    column.name()
                );
                return Err(ErrorCode::size_mismatch(
                    "block column",
                    num_rows,
                    column.len(),
                ));
            }
        }
        Ok(())
    }

    pub fn check_valid(&self) -> Result<()> {
        Self::check_columns_valid(&self.columns, self.num_rows)
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    #[inline]
    pub fn columns(&self) -> &[ColumnRef] {
        &self.columns
    }

    #[inline]
    pub fn get_by_offset(&self, offset: usize) -> Option<&ColumnRef> {
        self.columns.get(offset)
    }

    pub fn filter(&self, filter: &Filter) -> Result<DataBlock> {
        if filter.len() != self.num_rows {
            return Err(ErrorCode::size_mismatch(
                "filter",
                self.num_rows,
                filter.len(),
            ));
        }

        let rows = count_bytes_in_filter(filter);
        let columns: Vec<ColumnRef> = self
            .columns
            .iter()
            .map(|c| Arc::from(c.filter(filter, Some(rows))))
            .collect();
        DataBlock::new(columns, rows)
    }

    pub fn permute(&self, perm: &Permutation, limit: usize) -> Result<DataBlock> {
        if perm.len() != self.num_rows {
            return Err(ErrorCode::size_mismatch(
                "permutation",
                self.num_rows,
                perm.len(),
            ));
        }

        let rows = if limit > 0 {
            self.num_rows.min(limit)
        } else {
            self.num_rows
        };
        let columns: Vec<ColumnRef> = self
            .columns
            .iter()
            .map(|c| c.permute(perm, limit).map(Arc::from))
            .collect::<Result<_>>()?;
        DataBlock::new(columns, rows)
    }

    pub fn replicate(&self, offsets: &Offsets) -> Result<DataBlock> {
        if offsets.len() != self.num_rows {
            return Err(ErrorCode::size_mismatch(
                "offsets",
                self.num_rows,
                offsets.len(),
            ));
        }

        let rows = offsets.last().copied().unwrap_or(0);
        let columns: Vec<ColumnRef> = self
            .columns
            .iter()
            .map(|c| c.replicate(offsets).map(Arc::from))
            .collect::<Result<_>>()?;
        DataBlock::new(columns, rows)
    }

    /// Split the block into `scatter_size` blocks, row `i` going to block
    /// `selector[i]`.
    pub fn scatter(&self, scatter_size: usize, selector: &Selector) -> Result<Vec<DataBlock>> {
        if selector.len() != self.num_rows {
            return Err(ErrorCode::size_mismatch(
                "selector",
                self.num_rows,
                selector.len(),
            ));
        }

        let mut rows = vec![0usize; scatter_size];
        for &idx in selector {
            match rows.get_mut(idx) {
                Some(count) => *count += 1,
                None => {
                    return Err(ErrorCode::bad_arguments(format!(
                        "Selector index {idx} is out of range of {scatter_size} buckets"
                    )));
                }
            }
        }
        log::debug!("scatter {} rows into {scatter_size} blocks", self.num_rows);

        let mut scattered: Vec<Vec<ColumnRef>> = (0..scatter_size)
            .map(|_| Vec::with_capacity(self.num_columns()))
            .collect();
        for column in &self.columns {
            let parts = column.scatter(scatter_size, selector)?;
            for (entries, part) in scattered.iter_mut().zip(parts) {
                entries.push(Arc::from(part));
            }
        }

        scattered
            .into_iter()
            .zip(rows)
            .map(|(columns, rows)| DataBlock::new(columns, rows))
            .collect()
    }

    /// Serialize row `row` of every column into one contiguous key.
    pub fn serialize_row_into_arena<'a>(&self, row: usize, arena: &'a ColumnArena) -> &'a [u8] {
        let mut key = arena.key_builder(self.num_columns());
        for column in &self.columns {
            column.serialize_value_into_arena(row, &mut key);
        }
        key.finish()
    }

    /// Append the row encoded in `key` to `columns`.
    ///
    /// The key is walked once without mutating anything and must be consumed
    /// exactly, so a malformed key leaves `columns` untouched.
    pub fn deserialize_row_from_arena(columns: &mut [MutableColumn], key: &[u8]) -> Result<()> {
        let mut pos = key;
        for column in columns.iter() {
            pos = column.skip_serialized_in_arena(pos)?;
        }
        if !pos.is_empty() {
            return Err(ErrorCode::bad_bytes(format!(
                "Serialized row has {} trailing bytes",
                pos.len()
            )));
        }

        let mut pos = key;
        for column in columns.iter_mut() {
            pos = column.deserialize_and_insert_from_arena(pos)?;
        }
        Ok(())
    }
}

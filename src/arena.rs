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

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

/// Settings of the arena that serialized row keys are written into.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde_types",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ArenaConfig {
    /// Bytes reserved up front, before the first allocation.
    pub initial_capacity: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            initial_capacity: 4096,
        }
    }
}

/// Bump arena holding serialized column values.
///
/// Spans handed out by the arena borrow it, so they stay valid for as long as
/// the arena is alive and are released together when it is reset or dropped.
#[derive(Debug, Default)]
pub struct ColumnArena {
    bump: Bump,
}

impl ColumnArena {
    pub fn create(config: &ArenaConfig) -> Self {
        log::debug!(
            "create column arena, initial capacity: {}",
            config.initial_capacity
        );
        ColumnArena {
            bump: Bump::with_capacity(config.initial_capacity),
        }
    }

    /// Start a new key. `capacity` is a hint for the number of bytes the key
    /// will hold.
    pub fn key_builder(&self, capacity: usize) -> ArenaKeyBuilder<'_> {
        ArenaKeyBuilder {
            buf: BumpVec::with_capacity_in(capacity, &self.bump),
        }
    }

    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Bytes handed out since the arena was created or last reset.
    pub fn used_bytes(&mut self) -> usize {
        self.bump.iter_allocated_chunks().map(|chunk| chunk.len()).sum()
    }

    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

/// A serialized key growing in place inside the arena.
///
/// Columns append their bytes one after another, so the finished key is a
/// single contiguous span and no intermediate copies are left behind.
pub struct ArenaKeyBuilder<'a> {
    buf: BumpVec<'a, u8>,
}

impl<'a> ArenaKeyBuilder<'a> {
    /// Extend the key by `len` zeroed bytes and return them for writing.
    pub fn alloc_continue(&mut self, len: usize) -> &mut [u8] {
        let begin = self.buf.len();
        self.buf.resize(begin + len, 0);
        &mut self.buf[begin..]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> &'a [u8] {
        self.buf.into_bump_slice()
    }
}

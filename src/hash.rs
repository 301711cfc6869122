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

pub use siphasher::sip::SipHasher24;

/// Per-row 32-bit hashes, combined column by column.
///
/// Used where hash quality matters less than speed, e.g. picking the
/// partition a row is shuffled to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeakHash32 {
    data: Vec<u32>,
}

impl WeakHash32 {
    pub fn new(rows: usize) -> Self {
        WeakHash32 {
            data: vec![!0u32; rows],
        }
    }

    pub fn data(&self) -> &[u32] {
        &self.data
    }
}

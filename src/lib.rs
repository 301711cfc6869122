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

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::len_without_is_empty)]

mod arena;
mod block;
mod column;
mod dummy;
mod exception;
mod hash;
mod scalar;
pub mod utils;

pub use crate::arena::*;
pub use crate::block::*;
pub use crate::column::*;
pub use crate::dummy::*;
pub use crate::exception::*;
pub use crate::hash::*;
pub use crate::scalar::*;

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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ErrorCode>;

/// Errors raised by column operations.
///
/// Every variant is returned before the column is mutated, so a failed call
/// leaves the column exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    #[error("Code: {}, Text = Method {method} is not supported for {column}.", ErrorCode::UNIMPLEMENTED)]
    Unimplemented { method: &'static str, column: String },

    #[error("Code: {}, Text = {message}.", ErrorCode::BAD_ARGUMENTS)]
    BadArguments { message: String },

    #[error(
        "Code: {}, Text = Size of {what} doesn't match size of column, expected: {expected}, actual: {actual}.",
        ErrorCode::SIZE_MISMATCH
    )]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Code: {}, Text = {message}.", ErrorCode::BAD_BYTES)]
    BadBytes { message: String },
}

impl ErrorCode {
    pub const UNIMPLEMENTED: u16 = 1002;
    pub const BAD_ARGUMENTS: u16 = 1006;
    pub const SIZE_MISMATCH: u16 = 1016;
    pub const BAD_BYTES: u16 = 1046;

    pub fn code(&self) -> u16 {
        match self {
            ErrorCode::Unimplemented { .. } => Self::UNIMPLEMENTED,
            ErrorCode::BadArguments { .. } => Self::BAD_ARGUMENTS,
            ErrorCode::SizeMismatch { .. } => Self::SIZE_MISMATCH,
            ErrorCode::BadBytes { .. } => Self::BAD_BYTES,
        }
    }

    pub fn unimplemented(method: &'static str, column: impl Into<String>) -> Self {
        ErrorCode::Unimplemented {
            method,
            column: column.into(),
        }
    }

    pub fn size_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        ErrorCode::SizeMismatch {
            what,
            expected,
            actual,
        }
    }

    pub fn bad_arguments(message: impl Into<String>) -> Self {
        ErrorCode::BadArguments {
            message: message.into(),
        }
    }

    pub fn bad_bytes(message: impl Into<String>) -> Self {
        ErrorCode::BadBytes {
            message: message.into(),
        }
    }
}

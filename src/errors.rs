// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed user input; the submit is rejected and the store is
    /// left untouched.
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("transaction '{0}' not found in the active ledger")]
    UnknownTransaction(String),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

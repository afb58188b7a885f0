/*++ @file

  Copyright ©2021-2024 Liu Yi, efikarl@yeah.net

  This program is just made available under the terms and conditions of the
  MIT license: http://www.efikarl.com/mit-license.html

  THE PROGRAM IS DISTRIBUTED UNDER THE MIT LICENSE ON AN "AS IS" BASIS,
  WITHOUT WARRANTIES OR REPRESENTATIONS OF ANY KIND, EITHER EXPRESS OR IMPLIED.
--*/

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An argument lies outside the domain the operation is defined on.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A rejection-sampling search hit its attempt cap without success.
    #[error("{search} search exhausted after {attempts} attempts")]
    RetryExhausted { search: &'static str, attempts: u32 },
    /// The operands are not coprime, so no modular inverse exists.
    #[error("no modular inverse: operands share a common factor")]
    NoInverse,
}

pub type Result<T> = std::result::Result<T, Error>;

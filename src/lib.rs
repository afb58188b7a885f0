/*++ @file

  Copyright ©2021-2024 Liu Yi, efikarl@yeah.net

  This program is just made available under the terms and conditions of the
  MIT license: http://www.efikarl.com/mit-license.html

  THE PROGRAM IS DISTRIBUTED UNDER THE MIT LICENSE ON AN "AS IS" BASIS,
  WITHOUT WARRANTIES OR REPRESENTATIONS OF ANY KIND, EITHER EXPRESS OR IMPLIED.
--*/

//! RSA key generation built directly on arbitrary-precision integers:
//! square-and-multiply modular exponentiation, Miller-Rabin primality
//! testing and extended-Euclidean modular inversion, assembled into a
//! key pair with raw integer encrypt/decrypt.
//!
//! This is a number-theory exercise, not a hardened cryptosystem: there
//! is no padding, no constant-time arithmetic and, by default, a single
//! Miller-Rabin witness per primality check.

mod error;
pub mod euclid;
pub mod key;
pub mod modular;
pub mod prime;

pub use error::{Error,Result};
pub use euclid::{gcd,extended_gcd,extended_gcd_coefficient};
pub use key::{
    RsaKeyPair,
    select_public_exponent,
    DEFAULT_MILLER_RABIN_ROUNDS,
    DEFAULT_PRIME_BITS,
};
pub use modular::{mod_inverse,mod_pow};
pub use prime::{
    generate_prime_candidate,
    generate_prime_candidate_with,
    is_probable_prime,
    miller_rabin,
};

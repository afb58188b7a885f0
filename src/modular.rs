/*++ @file

  Copyright ©2021-2024 Liu Yi, efikarl@yeah.net

  This program is just made available under the terms and conditions of the
  MIT license: http://www.efikarl.com/mit-license.html

  THE PROGRAM IS DISTRIBUTED UNDER THE MIT LICENSE ON AN "AS IS" BASIS,
  WITHOUT WARRANTIES OR REPRESENTATIONS OF ANY KIND, EITHER EXPRESS OR IMPLIED.
--*/

use num_traits::{Zero,One};
use num_bigint::{BigUint,BigInt,Sign};

use crate::error::{Error,Result};
use crate::euclid;

/// `base ^ exponent mod modulus` by right-to-left square-and-multiply.
///
/// The base is reduced first; a reduced base of 0 returns 0 immediately,
/// even when the exponent is 0. That diverges from the `x^0 = 1`
/// convention for the single input `(0, 0)` and is kept on purpose.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidArgument("mod_pow: modulus must be positive"));
    }

    let mut base = base % modulus;
    if base.is_zero() {
        return Ok(BigUint::zero());
    }

    let mut result   = BigUint::one();
    let mut exponent = exponent.clone();
    while !exponent.is_zero() {
        if exponent.bit(0) {
            result = &result * &base % modulus;
        }
        base = &base * &base % modulus;
        exponent >>= 1;
    }

    Ok(result)
}

/// Inverse of `a` mod `modulus`, in `[0, modulus)`.
///
/// Fails with [`Error::NoInverse`] unless `gcd(a, modulus) = 1`.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidArgument("mod_inverse: modulus must be positive"));
    }
    if !euclid::gcd(a, modulus).is_one() {
        return Err(Error::NoInverse);
    }

    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let x = euclid::extended_gcd_coefficient(
        &BigInt::from_biguint(Sign::Plus, a.clone()),
        &m,
    );

    // The coefficient may be negative; shift it into [0, m).
    let x = &x % &m;
    let x = if x < BigInt::zero() { x + &m } else { x };

    Ok(x.to_biguint().unwrap())
}

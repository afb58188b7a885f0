/*++ @file

  Copyright ©2021-2024 Liu Yi, efikarl@yeah.net

  This program is just made available under the terms and conditions of the
  MIT license: http://www.efikarl.com/mit-license.html

  THE PROGRAM IS DISTRIBUTED UNDER THE MIT LICENSE ON AN "AS IS" BASIS,
  WITHOUT WARRANTIES OR REPRESENTATIONS OF ANY KIND, EITHER EXPRESS OR IMPLIED.
--*/

use num_traits::{Zero,One};
use num_bigint::{BigUint,BigInt};

/// Greatest common divisor by the iterative Euclidean algorithm.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }

    a
}

/// Extended Euclidean algorithm: `(g, x, y)` with `a*x + b*y = g`.
///
/// Requires `a, b >= 0` (not enforced). The coefficients track the
/// remainder sequence in parallel, so either may go negative.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut a = a.clone();
    let mut b = b.clone();
    let mut x      = BigInt::zero();
    let mut x_prev = BigInt::one();
    let mut y      = BigInt::one();
    let mut y_prev = BigInt::zero();

    while !b.is_zero() {
        let quotient = &a / &b;

        let x_next = &x_prev - &quotient * &x;
        x_prev = std::mem::replace(&mut x, x_next);
        let y_next = &y_prev - &quotient * &y;
        y_prev = std::mem::replace(&mut y, y_next);

        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }

    (a, x_prev, y_prev)
}

/// Bezout coefficient of `a` in `a*x + b*y = gcd(a, b)`.
///
/// When `gcd(a, b) = 1` this value, reduced mod `b`, is the inverse of `a`
/// mod `b`. It may be negative; the reduction is the caller's job.
pub fn extended_gcd_coefficient(a: &BigInt, b: &BigInt) -> BigInt {
    let (_, x, _) = extended_gcd(a, b);
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        let a = BigUint::from(48u32);
        let b = BigUint::from(18u32);
        assert_eq!(gcd(&a, &b), BigUint::from(6u32));
        assert_eq!(gcd(&b, &a), BigUint::from(6u32));
    }

    #[test]
    fn gcd_is_symmetric() {
        for a in 0u32..40 {
            for b in 0u32..40 {
                let ga = gcd(&BigUint::from(a), &BigUint::from(b));
                let gb = gcd(&BigUint::from(b), &BigUint::from(a));
                assert_eq!(ga, gb, "gcd({a}, {b})");
            }
        }
    }

    #[test]
    fn gcd_with_zero_is_identity() {
        for a in 0u32..100 {
            let a = BigUint::from(a);
            assert_eq!(gcd(&a, &BigUint::zero()), a);
        }
    }

    #[test]
    fn extended_gcd_satisfies_bezout() {
        let pairs = [(240u32, 46u32), (17, 3120), (3120, 17), (1, 1), (99, 0)];
        for (a, b) in pairs {
            let a = BigInt::from(a);
            let b = BigInt::from(b);
            let (g, x, y) = extended_gcd(&a, &b);
            assert_eq!(&a * &x + &b * &y, g, "bezout identity for ({a}, {b})");
        }
    }

    #[test]
    fn coefficient_yields_modular_inverse() {
        let e    = BigInt::from(17u32);
        let phi  = BigInt::from(3120u32);
        let x    = extended_gcd_coefficient(&e, &phi);
        let mut d = &x % &phi;
        if d < BigInt::zero() {
            d += &phi;
        }
        assert_eq!(d, BigInt::from(2753u32));
        assert_eq!(&e * &d % &phi, BigInt::one());
    }
}

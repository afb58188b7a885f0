/*++ @file

  Copyright ©2021-2024 Liu Yi, efikarl@yeah.net

  This program is just made available under the terms and conditions of the
  MIT license: http://www.efikarl.com/mit-license.html

  THE PROGRAM IS DISTRIBUTED UNDER THE MIT LICENSE ON AN "AS IS" BASIS,
  WITHOUT WARRANTIES OR REPRESENTATIONS OF ANY KIND, EITHER EXPRESS OR IMPLIED.
--*/

use num_traits::One;
use num_bigint::{BigUint,RandBigInt};
use rand::Rng;

use crate::error::{Error,Result};
use crate::modular;

/// Attempt cap for the candidate search. Prime density at 512 bits means a
/// few hundred draws on average, so hitting this indicates a broken rng.
const CANDIDATE_SEARCH_LIMIT: u32 = 100_000;

/// Miller-Rabin with `rounds` independent uniform witnesses from
/// `[2, candidate - 2]`.
///
/// A `true` verdict is probabilistic: each round passes a composite with
/// probability at most 1/4. One round reproduces the classic
/// single-witness generator; raise `rounds` for real confidence.
pub fn miller_rabin<R: Rng + ?Sized>(candidate: &BigUint, rounds: u32, rng: &mut R) -> Result<bool> {
    if rounds == 0 {
        return Err(Error::InvalidArgument("miller_rabin: at least one round is required"));
    }
    let two = BigUint::from(2u32);
    if candidate < &two {
        return Err(Error::InvalidArgument("miller_rabin: candidate must be at least 2"));
    }
    if candidate == &two || candidate == &BigUint::from(3u32) {
        return Ok(true);
    }
    if !candidate.bit(0) {
        return Ok(false);
    }

    // candidate - 1 = d * 2^r with d odd
    let candidate_minus_1 = candidate - BigUint::one();
    let mut d = candidate_minus_1.clone();
    let mut r = 0u64;
    while !d.bit(0) {
        d >>= 1;
        r += 1;
    }

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &candidate_minus_1);
        let mut x = modular::mod_pow(&a, &d, candidate)?;
        if x.is_one() || x == candidate_minus_1 {
            continue 'witness;
        }
        for _ in 1..r {
            x = &x * &x % candidate;
            if x.is_one() {
                // Nontrivial square root of 1: certainly composite.
                return Ok(false);
            }
            if x == candidate_minus_1 {
                continue 'witness;
            }
        }
        return Ok(false);
    }

    Ok(true)
}

/// Single-witness probable-prime check with the thread-local rng.
pub fn is_probable_prime(candidate: &BigUint) -> Result<bool> {
    miller_rabin(candidate, 1, &mut rand::thread_rng())
}

/// Single-witness candidate search with the thread-local rng.
pub fn generate_prime_candidate(bits: u64) -> Result<BigUint> {
    generate_prime_candidate_with(bits, 1, &mut rand::thread_rng())
}

/// Draw uniform integers of at most `bits` bits until one passes
/// [`miller_rabin`] with the given round count.
///
/// The top bit is not forced, so the result is only guaranteed to have at
/// most `bits` significant bits; draws below 2 are skipped. Composites
/// that slip through a round are compensated by fresh draws here, never by
/// re-testing the same candidate.
pub fn generate_prime_candidate_with<R: Rng + ?Sized>(
    bits: u64,
    rounds: u32,
    rng: &mut R,
) -> Result<BigUint> {
    if bits == 0 {
        return Err(Error::InvalidArgument("generate_prime_candidate: bit width must be non-zero"));
    }

    let two = BigUint::from(2u32);
    for attempt in 1..=CANDIDATE_SEARCH_LIMIT {
        let candidate = rng.gen_biguint(bits);
        if candidate < two {
            continue;
        }
        if miller_rabin(&candidate, rounds, rng)? {
            log::debug!(
                "accepted {}-bit prime candidate after {} draws",
                candidate.bits(),
                attempt
            );
            return Ok(candidate);
        }
    }

    Err(Error::RetryExhausted { search: "prime candidate", attempts: CANDIDATE_SEARCH_LIMIT })
}

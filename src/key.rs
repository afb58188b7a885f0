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
use crate::euclid;
use crate::modular;
use crate::prime;

/// Default width of each prime factor, giving a roughly 1024-bit modulus.
pub const DEFAULT_PRIME_BITS: u64 = 512;

/// Default witness rounds per primality check. One round keeps the classic
/// single-witness behavior; raise it to shrink the false-positive rate.
pub const DEFAULT_MILLER_RABIN_ROUNDS: u32 = 1;

/// Coprimality is common (well over a quarter of draws for any totient),
/// so this cap is generous.
const EXPONENT_SEARCH_LIMIT: u32 = 10_000;

/// Uniform draw from `[1, totient - 1]` until one is coprime to the
/// totient.
pub fn select_public_exponent<R: Rng + ?Sized>(totient: &BigUint, rng: &mut R) -> Result<BigUint> {
    if totient < &BigUint::from(2u32) {
        return Err(Error::InvalidArgument("select_public_exponent: totient must exceed 1"));
    }

    for _ in 0..EXPONENT_SEARCH_LIMIT {
        let e = rng.gen_biguint_range(&BigUint::one(), totient);
        if euclid::gcd(&e, totient).is_one() {
            return Ok(e);
        }
    }

    Err(Error::RetryExhausted { search: "public exponent", attempts: EXPONENT_SEARCH_LIMIT })
}

#[derive(Clone, Debug)]
pub struct RsaKeyPair {
    modulus             : BigUint,
    public_exponent     : BigUint,
    private_exponent    : BigUint,
}

impl RsaKeyPair {
    /// Generate a key pair from two fresh primes of (at most) `bits` bits
    /// each, with the default single-witness primality testing.
    pub fn generate(bits: u64) -> Result<Self> {
        Self::generate_with(bits, DEFAULT_MILLER_RABIN_ROUNDS, &mut rand::thread_rng())
    }

    /// Like [`generate`](Self::generate) with an explicit rng and witness
    /// round count.
    ///
    /// The two primes are drawn independently: their exact bit length is
    /// not pinned (the top bit is not forced) and `p == q` is not
    /// rejected, both matching the classic generator this reproduces.
    pub fn generate_with<R: Rng + ?Sized>(bits: u64, rounds: u32, rng: &mut R) -> Result<Self> {
        let one = BigUint::one();

        let p = prime::generate_prime_candidate_with(bits, rounds, rng)?;
        let q = prime::generate_prime_candidate_with(bits, rounds, rng)?;

        let n   = &p * &q;
        let phi = (&p - &one) * (&q - &one);
        log::debug!("modulus has {} bits", n.bits());

        let e = select_public_exponent(&phi, rng)?;
        let d = modular::mod_inverse(&e, &phi)?;
        if &e * &d % &phi != one {
            return Err(Error::NoInverse);
        }

        Ok(Self { modulus: n, public_exponent: e, private_exponent: d })
    }

    /// Public half `(N, e)`.
    pub fn public_key(&self) -> (BigUint, BigUint) {
        (self.modulus.clone(), self.public_exponent.clone())
    }

    /// Private half `(N, d)`.
    pub fn private_key(&self) -> (BigUint, BigUint) {
        (self.modulus.clone(), self.private_exponent.clone())
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn public_exponent(&self) -> &BigUint {
        &self.public_exponent
    }

    pub fn private_exponent(&self) -> &BigUint {
        &self.private_exponent
    }

    /// `message ^ e mod N`. The message must be below the modulus.
    pub fn encrypt(&self, message: &BigUint) -> Result<BigUint> {
        if message >= &self.modulus {
            return Err(Error::InvalidArgument("encrypt: message must be below the modulus"));
        }
        modular::mod_pow(message, &self.public_exponent, &self.modulus)
    }

    /// `ciphertext ^ d mod N`. The ciphertext must be below the modulus.
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<BigUint> {
        if ciphertext >= &self.modulus {
            return Err(Error::InvalidArgument("decrypt: ciphertext must be below the modulus"));
        }
        modular::mod_pow(ciphertext, &self.private_exponent, &self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn toy_key() -> RsaKeyPair {
        // p = 61, q = 53: N = 3233, phi = 3120, e = 17, d = 2753.
        RsaKeyPair {
            modulus             : BigUint::from(3233u32),
            public_exponent     : BigUint::from(17u32),
            private_exponent    : BigUint::from(2753u32),
        }
    }

    #[test]
    fn toy_key_encrypts_the_textbook_message() {
        let key = toy_key();
        let c = key.encrypt(&BigUint::from(65u32)).unwrap();
        assert_eq!(c, BigUint::from(2790u32));
        assert_eq!(key.decrypt(&c).unwrap(), BigUint::from(65u32));
    }

    #[test]
    fn toy_key_round_trips_every_message() {
        let key = toy_key();
        for m in 0u32..200 {
            let m = BigUint::from(m);
            let c = key.encrypt(&m).unwrap();
            assert_eq!(key.decrypt(&c).unwrap(), m);
        }
    }

    #[test]
    fn oversized_operands_are_rejected() {
        let key = toy_key();
        let n = key.modulus().clone();
        assert!(key.encrypt(&n).is_err());
        assert!(key.decrypt(&(&n + BigUint::one())).is_err());
    }

    #[test]
    fn key_halves_drive_raw_mod_pow() {
        let key = toy_key();
        let (n, e) = key.public_key();
        let (_, d) = key.private_key();
        let m = BigUint::from(123u32);
        let c = modular::mod_pow(&m, &e, &n).unwrap();
        assert_eq!(modular::mod_pow(&c, &d, &n).unwrap(), m);
    }

    #[test]
    fn selected_exponent_is_coprime_and_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let phi = BigUint::from(3120u32);
        for _ in 0..32 {
            let e = select_public_exponent(&phi, &mut rng).unwrap();
            assert!(e >= BigUint::one() && e < phi);
            assert!(euclid::gcd(&e, &phi).is_one());
        }
    }

    #[test]
    fn degenerate_totient_is_rejected() {
        let mut rng = rand::thread_rng();
        assert!(select_public_exponent(&BigUint::one(), &mut rng).is_err());
    }

    #[test]
    fn generated_key_pair_round_trips() {
        let mut rng = StdRng::seed_from_u64(42);
        let key = RsaKeyPair::generate_with(32, 16, &mut rng).unwrap();

        let one = BigUint::one();
        let messages = [
            BigUint::from(0u32),
            BigUint::from(1u32),
            BigUint::from(13u32),
            key.modulus() - &one,
        ];
        for m in messages {
            let c = key.encrypt(&m).unwrap();
            assert_eq!(key.decrypt(&c).unwrap(), m, "round trip of {m}");
        }
    }

    #[test]
    fn generation_rejects_zero_bit_width() {
        assert!(RsaKeyPair::generate(0).is_err());
    }
}

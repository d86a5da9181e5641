use num::{BigInt, BigUint, Integer, One};
use crate::core::{Int, Storage, Uint};

impl<const BITS: usize, const LIMBS: usize> Storage<BITS, LIMBS> {

  pub fn to_biguint(&self) -> BigUint {
    let mut bytes = Vec::with_capacity(LIMBS * 8);
    for w in self.limbs.iter() {
      bytes.extend_from_slice(&w.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
  }

  /// Keep the low `BITS` bits of the value.
  pub fn from_biguint(value: &BigUint) -> Self {
    let mut limbs = [0; LIMBS];
    for (i, digit) in value.iter_u64_digits().take(LIMBS).enumerate() {
      limbs[i] = digit;
    }
    Self::from_limbs(limbs)
  }
}

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {

  /// The value reduced modulo 2^BITS.
  pub fn from_biguint(value: &BigUint) -> Self {
    Uint { words: Storage::from_biguint(value) }
  }
}

impl<const BITS: usize, const LIMBS: usize> Int<BITS, LIMBS> {

  /// The value reduced modulo 2^BITS, read as two's complement.
  pub fn from_bigint(value: &BigInt) -> Self {
    let modulus = BigInt::one() << BITS;
    let reduced = value.mod_floor(&modulus);
    Int { words: Storage::from_biguint(reduced.magnitude()) }
  }
}

impl<const BITS: usize, const LIMBS: usize>
    From<&Uint<BITS, LIMBS>> for BigUint {
  fn from(value: &Uint<BITS, LIMBS>) -> BigUint {
    value.words.to_biguint()
  }
}

impl<const BITS: usize, const LIMBS: usize>
    From<&Int<BITS, LIMBS>> for BigInt {
  fn from(value: &Int<BITS, LIMBS>) -> BigInt {
    if value.is_negative() {
      let mut magnitude = value.words;
      magnitude.negate();
      -BigInt::from(magnitude.to_biguint())
    } else {
      BigInt::from(value.words.to_biguint())
    }
  }
}

#[cfg(test)]
mod tests {
  use num::BigInt;
  use crate::core::{Int80, Uint360};
  use crate::proptest::*;

  #[test]
  fn bignum_round_trip() {
    do_test(|x: Int80| Some(Int80::from_bigint(&x.sem()) == x));
    do_test(|x: Uint360| Some(Uint360::from_biguint(&x.sem()) == x))
  }

  #[test]
  fn reduction() {
    assert_eq!(Int80::from_bigint(&(BigInt::from(1) << 200)), Int80::ZERO);
    assert_eq!(Int80::from_bigint(&BigInt::from(-1)), Int80::from(-1));
    assert_eq!(Int80::from_bigint(&(BigInt::from(1) << 79)), Int80::MIN);
  }
}

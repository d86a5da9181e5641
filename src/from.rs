use crate::core::{Int, LimbT, Storage, Uint};

impl<const BITS: usize, const LIMBS: usize> From<i64> for Int<BITS, LIMBS> {
  fn from(value: i64) -> Self {
    let mut words = Storage::zero();
    words.as_slice_mut()[0] = value as LimbT;
    if value < 0 {
      for w in &mut words.as_slice_mut()[1 ..] { *w = !0 }
      words.clear_unused_bits();
    }
    Int { words }
  }
}

impl<const BITS: usize, const LIMBS: usize> From<u64> for Uint<BITS, LIMBS> {
  fn from(value: u64) -> Self {
    let mut words = Storage::zero();
    words.as_slice_mut()[0] = value;
    Uint { words }
  }
}

macro_rules! do_from_small {
  ($type:ident, $via:ty, $($small:ty),*) => {
    $(
      impl<const BITS: usize, const LIMBS: usize>
          From<$small> for $type<BITS, LIMBS> {
        fn from(value: $small) -> Self {
          Self::from(value as $via)
        }
      }
    )*
  };
}

do_from_small!(Int, i64, i8, i16, i32);
do_from_small!(Uint, u64, u8, u16, u32);

impl<const BITS: usize, const LIMBS: usize> Int<BITS, LIMBS> {

  /// Parse a decimal string.  An optional leading `-` is honored, and
  /// parsing stops quietly at the first non-digit.
  pub fn from_dec(text: &str) -> Self {
    let bytes = text.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let digits = if negative { &bytes[1 ..] } else { bytes };

    let mut result = Self::ZERO;
    for &c in digits {
      if !c.is_ascii_digit() { break }
      result.words.mul_limb(10);
      result.words.add_limb((c - b'0') as LimbT);
    }

    if negative { result = -result }
    result
  }
}

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {

  /// Parse a decimal string, stopping quietly at the first non-digit.
  pub fn from_dec(text: &str) -> Self {
    let mut result = Self::ZERO;
    for &c in text.as_bytes() {
      if !c.is_ascii_digit() { break }
      result.words.mul_limb(10);
      result.words.add_limb((c - b'0') as LimbT);
    }
    result
  }
}

#[cfg(test)]
mod tests {
  use num::BigInt;
  use crate::core::{Int80, Uint80};
  use crate::proptest::*;

  #[test]
  fn from_native() {
    assert_eq!(Int80::from(1_i64).storage().as_slice(), &[1, 0]);
    assert_eq!(Int80::from(-1_i64).storage().as_slice(), &[!0, 0xFFFF]);
    assert_eq!(Int80::from(-1_i32), Int80::from(-1_i64));
    assert_eq!(Uint80::from(5_u8), Uint80::from(5_u64));
    assert_eq!(Int80::from(i64::MIN).sem(), BigInt::from(i64::MIN));

    do_test(|v: i64| Some(Int80::from(v).sem() == BigInt::from(v)))
  }

  #[test]
  fn parse() {
    assert_eq!(Int80::from_dec("1234"), Int80::from(1234));
    assert_eq!(Int80::from_dec("-1234"), Int80::from(-1234));
    assert_eq!(Int80::from_dec("00123"), Int80::from(123));
    assert_eq!(Int80::from_dec(""), Int80::ZERO);
    assert_eq!(Int80::from_dec("-"), Int80::ZERO);

    // Parsing is lenient and stops at the first non-digit.
    assert_eq!(Int80::from_dec("12ab"), Int80::from(12));
    assert_eq!(Int80::from_dec("-12.5"), Int80::from(-12));

    assert_eq!(Uint80::from_dec("92233720368547758070"),
               Uint80::from_biguint(&"92233720368547758070".parse().unwrap()));
  }
}

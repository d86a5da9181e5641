use std::fmt;
use crate::core::{Int, Storage, Uint};

/// Base-10 digits of the value, most significant first.
fn decimal_digits<const BITS: usize, const LIMBS: usize>
  (words: &Storage<BITS, LIMBS>) -> String {

  if words.is_zero() {
    return String::from("0")
  }

  let mut ten = Storage::zero();
  ten.as_slice_mut()[0] = 10;

  let mut left = *words;
  let mut digits = Vec::new();
  while !left.is_zero() {
    let (quotient, remainder) = left.udivmod(&ten);
    digits.push(b'0' + remainder.as_slice()[0] as u8);
    left = quotient;
  }

  digits.iter().rev().map(|&d| d as char).collect()
}

impl<const BITS: usize, const LIMBS: usize>
    fmt::Display for Int<BITS, LIMBS> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let negative = self.is_negative();
    let mut magnitude = self.words;
    if negative { magnitude.negate() }
    f.pad_integral(!negative, "", &decimal_digits(&magnitude))
  }
}

impl<const BITS: usize, const LIMBS: usize>
    fmt::Display for Uint<BITS, LIMBS> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "", &decimal_digits(&self.words))
  }
}

impl<const BITS: usize, const LIMBS: usize>
    fmt::Debug for Int<BITS, LIMBS> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

impl<const BITS: usize, const LIMBS: usize>
    fmt::Debug for Uint<BITS, LIMBS> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

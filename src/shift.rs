use crate::core::{which_bit, which_word, Int, Limb, LimbT, Storage, Uint};

impl<const BITS: usize, const LIMBS: usize> Storage<BITS, LIMBS> {

  /// Shift by whole limbs.  `amt` is in units of limbs.
  pub fn shift_limbs_left(&mut self, amt: usize) {
    assert!(amt < LIMBS);

    for i in (amt .. LIMBS).rev() {
      self.limbs[i] = self.limbs[i - amt];
    }
    for w in &mut self.limbs[0 .. amt] { *w = 0 }
  }

  /// Shift by whole limbs.  `amt` is in units of limbs.
  /// Does not touch the padding.
  pub fn shift_limbs_right(&mut self, amt: usize) {
    assert!(amt < LIMBS);

    let todo = LIMBS - amt;
    for i in 0 .. todo {
      self.limbs[i] = self.limbs[i + amt];
    }
    for w in &mut self.limbs[todo ..] { *w = 0 }
  }

  /// Shift by less than a limb.  `amt` of 0 is excluded so the carry
  /// distance never reaches the limb width.
  pub fn shift_bits_left(&mut self, amt: usize) {
    assert!(amt > 0 && amt < Limb::BITS);

    let other = Limb::BITS - amt;
    let mut acc: LimbT = 0;
    for w in self.limbs.iter_mut() {
      let x = *w;
      *w = (x << amt) | acc;
      acc = x >> other;
    }
  }

  /// Shift by less than a limb, 0 excluded.  Does not touch the padding.
  pub fn shift_bits_right(&mut self, amt: usize) {
    assert!(amt > 0 && amt < Limb::BITS);

    let other = Limb::BITS - amt;
    let mut acc: LimbT = 0;
    for w in self.limbs.iter_mut().rev() {
      let x = *w;
      *w = acc | (x >> amt);
      acc = x << other;
    }
  }

  /// Left shift by an arbitrary distance, filling with zeros.
  pub fn lshift(&mut self, amt: usize) {
    if amt == 0 { return }
    if amt >= BITS {
      *self = Self::zero();
      return
    }

    let limbs = amt / Limb::BITS;
    let extra = amt % Limb::BITS;
    if limbs != 0 { self.shift_limbs_left(limbs) }
    if extra != 0 { self.shift_bits_left(extra) }
    self.clear_unused_bits();
  }

  /// Right shift by an arbitrary distance.  With `sign_fill` the vacated
  /// bits come in as ones, which is the arithmetic shift of a negative
  /// value; otherwise they come in as zeros.
  pub fn rshift(&mut self, amt: usize, sign_fill: bool) {
    if amt == 0 { return }
    if amt >= BITS {
      if sign_fill {
        *self = Self::from_limbs([!0; LIMBS]);
      } else {
        *self = Self::zero();
      }
      return
    }

    // The padding has to carry the sign while bits slide through it.
    if sign_fill { self.fill_unused_bits() }

    let limbs = amt / Limb::BITS;
    let extra = amt % Limb::BITS;
    if limbs != 0 { self.shift_limbs_right(limbs) }
    if extra != 0 { self.shift_bits_right(extra) }

    if sign_fill {
      // Refill the top `amt` bits of the limb array that just vacated.
      let start = LIMBS * Limb::BITS - amt;
      for w in &mut self.limbs[which_word(start) + 1 ..] { *w = !0 }
      self.limbs[which_word(start)] |= !0 << which_bit(start);
    }
    self.clear_unused_bits();
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::ShlAssign<usize> for Int<BITS, LIMBS> {
  fn shl_assign(&mut self, amt: usize) {
    self.words.lshift(amt)
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::ShlAssign<usize> for Uint<BITS, LIMBS> {
  fn shl_assign(&mut self, amt: usize) {
    self.words.lshift(amt)
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::ShrAssign<usize> for Int<BITS, LIMBS> {
  fn shr_assign(&mut self, amt: usize) {
    let negative = self.is_negative();
    self.words.rshift(amt, negative)
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::ShrAssign<usize> for Uint<BITS, LIMBS> {
  fn shr_assign(&mut self, amt: usize) {
    self.words.rshift(amt, false)
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::Shl<usize> for Int<BITS, LIMBS> {
  type Output = Self;

  fn shl(mut self, amt: usize) -> Self {
    self <<= amt;
    self
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::Shl<usize> for Uint<BITS, LIMBS> {
  type Output = Self;

  fn shl(mut self, amt: usize) -> Self {
    self <<= amt;
    self
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::Shr<usize> for Int<BITS, LIMBS> {
  type Output = Self;

  fn shr(mut self, amt: usize) -> Self {
    self >>= amt;
    self
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::Shr<usize> for Uint<BITS, LIMBS> {
  type Output = Self;

  fn shr(mut self, amt: usize) -> Self {
    self >>= amt;
    self
  }
}

#[cfg(test)]
mod tests {
  use crate::core::{Int360, Int80, Uint360, Uint80};
  use crate::proptest::*;

  #[test]
  fn shl() {
    assert_eq!(Int80::ZERO << 20, Int80::ZERO);
    assert_eq!(Int80::from(1) << 2, Int80::from(4));
    assert_eq!(Int80::from(12) << 0, Int80::from(12));
    assert_eq!(Int80::from(12) << 1, Int80::from(24));

    do_test(|(x, n): (Uint360, usize)| {
      let n = n % 512;
      Some(x << n == Uint360::from_biguint(&(x.sem() << n)))
    })
  }

  #[test]
  fn shr_unsigned() {
    do_test(|(x, n): (Uint360, usize)| {
      let n = n % 512;
      Some(x >> n == Uint360::from_biguint(&(x.sem() >> n)))
    })
  }

  #[test]
  fn shr_signed() {
    assert_eq!(Int80::from(4) >> 2, Int80::from(1));
    assert_eq!(Int80::from(-200) >> 2, Int80::from(-200_i64 >> 2));

    let mut test = Int80::from(i64::MIN + 200);
    test <<= 2;
    test >>= 49;
    assert_eq!(test, Int80::from((i64::MIN + 200) >> 47));

    let mut x = Int360::from(-500);
    x <<= 250;
    x >>= 250;
    assert_eq!(x, Int360::from(-500));

    do_test(|(x, n): (Int80, usize)| {
      let n = n % 100;
      Some(x >> n == Int80::from_bigint(&(x.sem() >> n)))
    })
  }

  #[test]
  fn shift_out() {
    assert_eq!(Int80::from(-1) >> 200, Int80::from(-1));
    assert_eq!(Int80::from(1) >> 200, Int80::ZERO);
    assert_eq!(Int80::from(-1) << 200, Int80::ZERO);
    assert_eq!(Uint80::MAX >> 80, Uint80::ZERO);
    assert_eq!(Int80::from(-1) >> 80, Int80::from(-1));
  }

  #[test]
  fn shift_round_trip() {
    do_test(|(x, n): (Uint80, usize)| {
      let n = n % 80;
      if x.sem() << n < pow2(80) {
        Some((x << n) >> n == x)
      } else {
        Some(true)
      }
    })
  }
}

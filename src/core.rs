// Fixed-width words built from 64-bit limbs.

use std::cmp::Ordering;

pub type LimbT = u64;
pub struct Limb();

impl Limb {
  /// The number of bits in a limb.
  pub const BITS: usize = LimbT::BITS as usize;
}

/// How many limbs are needed for a word of the given size.
pub const fn limbs_for_size(bits: usize) -> usize {
  (bits + Limb::BITS - 1) / Limb::BITS
}

/// The limb holding the given bit position.
pub const fn which_word(bit_pos: usize) -> usize { bit_pos / Limb::BITS }

/// The offset of the given bit position within its limb.
pub const fn which_bit(bit_pos: usize) -> usize { bit_pos % Limb::BITS }

/// A limb with only the given bit position set.
pub const fn mask_bit(bit_pos: usize) -> LimbT { 1 << which_bit(bit_pos) }

const fn low_half(v: LimbT) -> LimbT { v & (!0 >> (Limb::BITS / 2)) }
const fn high_half(v: LimbT) -> LimbT { v >> (Limb::BITS / 2) }

/// Storage for a `BITS` wide word.
///   * Limbs are ordered least significant first.
///   * For widths that are not a multiple of `Limb::BITS`, the value
///     occupies the least significant bits of the last limb, and the
///     bits above it stay 0 between operations.
#[derive(Clone, Copy)]
pub struct Storage<const BITS: usize, const LIMBS: usize> {
  pub(crate) limbs: [LimbT; LIMBS]
}

impl<const BITS: usize, const LIMBS: usize> Storage<BITS, LIMBS> {

  /// The number of bits used in the last limb.
  pub const LAST_WORD_BITS: usize = ((BITS - 1) % Limb::BITS) + 1;

  /// Masks the value bits of the last limb.
  pub const LAST_MASK: LimbT = !0 >> (Limb::BITS - Self::LAST_WORD_BITS);

  /// The size of the word in bits.
  pub const fn bits(&self) -> usize { BITS }

  /// The number of limbs backing the word.
  pub const fn limbs(&self) -> usize { LIMBS }

  /// Create a 0 initialized word.
  pub const fn zero() -> Self {
    // Widths that fit a single limb belong in a native integer.
    assert!(BITS > Limb::BITS && LIMBS == limbs_for_size(BITS));
    Storage { limbs: [0; LIMBS] }
  }

  /// Create the word with only the least significant bit set.
  pub const fn one() -> Self {
    let mut result = Self::zero();
    result.limbs[0] = 1;
    result
  }

  /// Create a word from limbs, least significant first.
  /// Bits at positions past `BITS` are discarded.
  pub const fn from_limbs(mut limbs: [LimbT; LIMBS]) -> Self {
    assert!(BITS > Limb::BITS && LIMBS == limbs_for_size(BITS));
    limbs[LIMBS - 1] &= Self::LAST_MASK;
    Storage { limbs }
  }

  pub fn as_slice(&self) -> &[LimbT] { &self.limbs }

  pub fn as_slice_mut(&mut self) -> &mut [LimbT] { &mut self.limbs }

  pub fn is_zero(&self) -> bool {
    self.limbs.iter().all(|&w| w == 0)
  }

  /// Whether bit `bit_pos` is set.  The position must be within the word.
  pub fn get_bit(&self, bit_pos: usize) -> bool {
    assert!(bit_pos < BITS, "bit position out of bounds");
    self.limbs[which_word(bit_pos)] & mask_bit(bit_pos) != 0
  }

  /// Set bit `bit_pos`, leaving the others alone.
  pub fn set_bit(&mut self, bit_pos: usize) {
    assert!(bit_pos < BITS, "bit position out of bounds");
    self.limbs[which_word(bit_pos)] |= mask_bit(bit_pos);
  }

  /// Reset the bits above `BITS` in the last limb to 0.
  pub fn clear_unused_bits(&mut self) {
    self.limbs[LIMBS - 1] &= Self::LAST_MASK;
  }

  /// Set the bits above `BITS` in the last limb to 1.  Only meaningful
  /// while an operation is in flight; every path doing this masks again
  /// before the value can be observed.
  pub fn fill_unused_bits(&mut self) {
    self.limbs[LIMBS - 1] |= !Self::LAST_MASK;
  }

  /// The number of 0 bits above the most significant set bit.
  pub fn leading_zeros(&self) -> usize {
    let last = self.limbs[LIMBS - 1];
    if last != 0 {
      return last.leading_zeros() as usize
           - (Limb::BITS - Self::LAST_WORD_BITS)
    }

    let mut total = Self::LAST_WORD_BITS;
    for &w in self.limbs[.. LIMBS - 1].iter().rev() {
      if w != 0 {
        return total + w.leading_zeros() as usize
      }
      total += Limb::BITS;
    }
    total
  }

  /// Flip every bit.
  pub fn invert(&mut self) {
    for w in self.limbs.iter_mut() {
      *w = !*w;
    }
    self.clear_unused_bits();
  }

  /// Two's complement negation: invert and add one.
  pub fn negate(&mut self) {
    self.invert();
    self.add_limb(1);
  }

  /// Add limb-by-limb, carrying between limbs.  Comparing against the
  /// previous limb value detects the carry without a wider accumulator.
  /// Identical for the signed and unsigned interpretations.
  pub fn add(&mut self, rhs: &Self) -> bool {
    let mut carry = false;
    for i in 0 .. LIMBS {
      let l = self.limbs[i];
      if carry {
        self.limbs[i] = l.wrapping_add(rhs.limbs[i]).wrapping_add(1);
        carry = self.limbs[i] <= l;
      } else {
        self.limbs[i] = l.wrapping_add(rhs.limbs[i]);
        carry = self.limbs[i] < l;
      }
    }
    self.clear_unused_bits();
    carry
  }

  /// Subtract limb-by-limb, borrowing between limbs.
  /// Identical for the signed and unsigned interpretations.
  pub fn subtract(&mut self, rhs: &Self) -> bool {
    let mut borrow = false;
    for i in 0 .. LIMBS {
      let l = self.limbs[i];
      if borrow {
        self.limbs[i] = l.wrapping_sub(rhs.limbs[i]).wrapping_sub(1);
        borrow = self.limbs[i] >= l;
      } else {
        self.limbs[i] = l.wrapping_sub(rhs.limbs[i]);
        borrow = self.limbs[i] > l;
      }
    }
    self.clear_unused_bits();
    borrow
  }

  /// Add a single limb, rippling the carry as far as it goes.
  pub fn add_limb(&mut self, value: LimbT) -> bool {
    let mut carry = value;
    for w in self.limbs.iter_mut() {
      if carry == 0 { break }
      let (sum, overflow) = w.overflowing_add(carry);
      *w = sum;
      carry = overflow as LimbT;
    }
    self.clear_unused_bits();
    carry != 0
  }

  /// Multiply by a single limb, accumulating through the word.  Each
  /// 64 x 64 product is assembled from four 32-bit half products so no
  /// wider accumulator is needed.  Returns the limb carried out the top.
  pub fn mul_limb(&mut self, rhs: LimbT) -> LimbT {
    let mut carry: LimbT = 0;
    for w in self.limbs.iter_mut() {
      let src = *w;
      if src == 0 || rhs == 0 {
        *w = carry;
        carry = 0;
        continue
      }

      let mut low = low_half(src) * low_half(rhs);
      let mut high = high_half(src) * high_half(rhs);

      let mut mid = low_half(src) * high_half(rhs);
      high += high_half(mid);
      mid <<= Limb::BITS / 2;
      let (sum, overflow) = low.overflowing_add(mid);
      if overflow { high += 1 }
      low = sum;

      mid = high_half(src) * low_half(rhs);
      high += high_half(mid);
      mid <<= Limb::BITS / 2;
      let (sum, overflow) = low.overflowing_add(mid);
      if overflow { high += 1 }
      low = sum;

      let (sum, overflow) = low.overflowing_add(carry);
      if overflow { high += 1 }
      low = sum;

      *w = low;
      carry = high;
    }
    self.clear_unused_bits();
    carry
  }

  /// Unsigned long division producing (quotient, remainder).  The divisor
  /// is aligned with the numerator by leading zero count, then walked back
  /// down one bit at a time, subtracting wherever it fits.
  pub fn udivmod(&self, denom: &Self) -> (Self, Self) {
    assert!(!denom.is_zero(), "division by zero");

    match self.compare(denom) {
      Ordering::Less => return (Self::zero(), *self),
      Ordering::Equal => return (Self::one(), Self::zero()),
      Ordering::Greater => ()
    }

    let mut shift = denom.leading_zeros() - self.leading_zeros();
    let mut divisor = *denom;
    divisor.lshift(shift);

    let mut quotient = Self::zero();
    let mut remainder = *self;

    loop {
      // Nothing further down fits once the remainder drops below the
      // unshifted denominator.
      if remainder.compare(denom) == Ordering::Less { break }

      let comp = divisor.compare(&remainder);
      if comp != Ordering::Greater {
        remainder.subtract(&divisor);
        quotient.set_bit(shift);
        if comp == Ordering::Equal { break }
      }

      if shift == 0 { break }
      shift -= 1;
      divisor.rshift(1, false);
    }

    (quotient, remainder)
  }

  pub fn binary_and(&mut self, rhs: &Self) {
    for (w, r) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
      *w &= r;
    }
  }

  pub fn binary_or(&mut self, rhs: &Self) {
    for (w, r) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
      *w |= r;
    }
  }

  pub fn binary_xor(&mut self, rhs: &Self) {
    for (w, r) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
      *w ^= r;
    }
  }
}

/// A signed two's complement integer that is `BITS` wide.
#[derive(Clone, Copy)]
pub struct Int<const BITS: usize, const LIMBS: usize> {
  pub(crate) words: Storage<BITS, LIMBS>
}

/// An unsigned integer that is `BITS` wide.
#[derive(Clone, Copy)]
pub struct Uint<const BITS: usize, const LIMBS: usize> {
  pub(crate) words: Storage<BITS, LIMBS>
}

impl<const BITS: usize, const LIMBS: usize> Int<BITS, LIMBS> {

  pub const ZERO: Self = Int { words: Storage::zero() };
  pub const ONE: Self = Int { words: Storage::one() };

  /// The most negative value: only the sign bit set.
  pub const MIN: Self = {
    let mut limbs = [0; LIMBS];
    limbs[which_word(BITS - 1)] = mask_bit(BITS - 1);
    Int { words: Storage::from_limbs(limbs) }
  };

  /// The most positive value: everything but the sign bit.
  pub const MAX: Self = {
    let mut limbs = [!0; LIMBS];
    limbs[LIMBS - 1] = Storage::<BITS, LIMBS>::LAST_MASK >> 1;
    Int { words: Storage::from_limbs(limbs) }
  };

  /// Assemble a value from limbs, least significant first.
  pub const fn from_limbs(limbs: [LimbT; LIMBS]) -> Self {
    Int { words: Storage::from_limbs(limbs) }
  }

  /// The sign bit.
  pub fn is_negative(&self) -> bool {
    self.words.get_bit(BITS - 1)
  }

  pub fn storage(&self) -> &Storage<BITS, LIMBS> { &self.words }
}

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {

  pub const ZERO: Self = Uint { words: Storage::zero() };
  pub const ONE: Self = Uint { words: Storage::one() };
  pub const MIN: Self = Self::ZERO;
  pub const MAX: Self = Uint { words: Storage::from_limbs([!0; LIMBS]) };

  /// Assemble a value from limbs, least significant first.
  pub const fn from_limbs(limbs: [LimbT; LIMBS]) -> Self {
    Uint { words: Storage::from_limbs(limbs) }
  }

  pub fn storage(&self) -> &Storage<BITS, LIMBS> { &self.words }
}

/// Declare a signed and an unsigned alias for a width.
macro_rules! declare_width {
  ($sname:ident, $uname:ident, $bits:expr) => {
    #[doc = concat!("A signed ", stringify!($bits), " bit integer.")]
    pub type $sname = Int<$bits, { limbs_for_size($bits) }>;

    #[doc = concat!("An unsigned ", stringify!($bits), " bit integer.")]
    pub type $uname = Uint<$bits, { limbs_for_size($bits) }>;
  };
}

declare_width!(Int80, Uint80, 80);
declare_width!(Int128, Uint128, 128);
declare_width!(Int256, Uint256, 256);
declare_width!(Int360, Uint360, 360);
declare_width!(Int512, Uint512, 512);

use crate::core::{Int, Uint};

macro_rules! do_logic {
  ($type:ident, $atrait:ident, $amethod:ident,
   $etrait:ident, $emethod:ident, $op:ident) => {
    impl<const BITS: usize, const LIMBS: usize>
        std::ops::$atrait for $type<BITS, LIMBS> {
      fn $amethod(&mut self, rhs: Self) {
        self.words.$op(&rhs.words)
      }
    }

    impl<const BITS: usize, const LIMBS: usize>
        std::ops::$etrait for $type<BITS, LIMBS> {
      type Output = Self;

      fn $emethod(mut self, rhs: Self) -> Self {
        std::ops::$atrait::$amethod(&mut self, rhs);
        self
      }
    }
  };
}

do_logic!(Int, BitAndAssign, bitand_assign, BitAnd, bitand, binary_and);
do_logic!(Uint, BitAndAssign, bitand_assign, BitAnd, bitand, binary_and);
do_logic!(Int, BitOrAssign, bitor_assign, BitOr, bitor, binary_or);
do_logic!(Uint, BitOrAssign, bitor_assign, BitOr, bitor, binary_or);
do_logic!(Int, BitXorAssign, bitxor_assign, BitXor, bitxor, binary_xor);
do_logic!(Uint, BitXorAssign, bitxor_assign, BitXor, bitxor, binary_xor);

impl<const BITS: usize, const LIMBS: usize>
    std::ops::Not for Int<BITS, LIMBS> {
  type Output = Self;

  fn not(mut self) -> Self {
    self.words.invert();
    self
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::Not for Uint<BITS, LIMBS> {
  type Output = Self;

  fn not(mut self) -> Self {
    self.words.invert();
    self
  }
}

#[cfg(test)]
mod tests {
  use crate::core::{Int80, Uint80};
  use crate::proptest::*;

  #[test]
  fn not() {
    assert_eq!(!Int80::ZERO, Int80::from(-1));
    assert_eq!(!Int80::from(-1), Int80::ZERO);

    do_test(|x: Int80| Some(!!x == x));
    do_test(|x: Uint80| Some((!x).sem() == pow2(80) - 1_u32 - x.sem()))
  }

  #[test]
  fn masks() {
    do_test(|(x, y): (Uint80, Uint80)| {
      Some((x & y).sem() == (x.sem() & y.sem()))
    });
    do_test(|(x, y): (Uint80, Uint80)| {
      Some((x | y).sem() == (x.sem() | y.sem()))
    });
    do_test(|(x, y): (Uint80, Uint80)| {
      Some((x ^ y).sem() == (x.sem() ^ y.sem()))
    })
  }
}

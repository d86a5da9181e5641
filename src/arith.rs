use crate::core::{Int, Limb, LimbT, Uint};

macro_rules! do_wrapping_assign {
  ($type:ident, $trait:ident, $method:ident, $op:ident) => {
    impl<const BITS: usize, const LIMBS: usize>
        std::ops::$trait for $type<BITS, LIMBS> {
      fn $method(&mut self, rhs: Self) {
        self.words.$op(&rhs.words);
      }
    }
  };
}

do_wrapping_assign!(Int, AddAssign, add_assign, add);
do_wrapping_assign!(Uint, AddAssign, add_assign, add);
do_wrapping_assign!(Int, SubAssign, sub_assign, subtract);
do_wrapping_assign!(Uint, SubAssign, sub_assign, subtract);

macro_rules! do_eval_from_assign {
  ($type:ident, $trait:ident, $method:ident, $atrait:ident, $amethod:ident) => {
    impl<const BITS: usize, const LIMBS: usize>
        std::ops::$trait for $type<BITS, LIMBS> {
      type Output = Self;

      #[inline(always)]
      fn $method(mut self, rhs: Self) -> Self {
        std::ops::$atrait::$amethod(&mut self, rhs);
        self
      }
    }
  };
}

do_eval_from_assign!(Int, Add, add, AddAssign, add_assign);
do_eval_from_assign!(Uint, Add, add, AddAssign, add_assign);
do_eval_from_assign!(Int, Sub, sub, SubAssign, sub_assign);
do_eval_from_assign!(Uint, Sub, sub, SubAssign, sub_assign);
do_eval_from_assign!(Int, Div, div, DivAssign, div_assign);
do_eval_from_assign!(Uint, Div, div, DivAssign, div_assign);
do_eval_from_assign!(Int, Rem, rem, RemAssign, rem_assign);
do_eval_from_assign!(Uint, Rem, rem, RemAssign, rem_assign);

impl<const BITS: usize, const LIMBS: usize>
    std::ops::Neg for Int<BITS, LIMBS> {
  type Output = Self;

  fn neg(mut self) -> Self {
    self.words.negate();
    self
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::Mul for Uint<BITS, LIMBS> {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    let mut result = Self::ZERO;
    for i in 0 .. LIMBS {
      let mut term = self;
      term.words.mul_limb(rhs.words.as_slice()[i]);
      term <<= Limb::BITS * i;
      result += term;
    }
    result
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::Mul for Int<BITS, LIMBS> {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    let mut a = self;
    let mut b = rhs;
    let mut negative = false;

    if a.is_negative() {
      negative = !negative;
      a = -a;
    }
    if b.is_negative() {
      negative = !negative;
      b = -b;
    }

    let mut result = Self::ZERO;
    for i in 0 .. LIMBS {
      let mut term = a;
      term.words.mul_limb(b.words.as_slice()[i]);
      term <<= Limb::BITS * i;
      result += term;
    }

    if negative { result = -result }
    result
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::MulAssign for Int<BITS, LIMBS> {
  fn mul_assign(&mut self, rhs: Self) {
    *self = *self * rhs;
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::MulAssign for Uint<BITS, LIMBS> {
  fn mul_assign(&mut self, rhs: Self) {
    *self = *self * rhs;
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::DivAssign for Uint<BITS, LIMBS> {
  fn div_assign(&mut self, rhs: Self) {
    let (quotient, _) = self.words.udivmod(&rhs.words);
    self.words = quotient;
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::RemAssign for Uint<BITS, LIMBS> {
  fn rem_assign(&mut self, rhs: Self) {
    let (_, remainder) = self.words.udivmod(&rhs.words);
    self.words = remainder;
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::DivAssign for Int<BITS, LIMBS> {
  fn div_assign(&mut self, rhs: Self) {
    let mut negative = false;

    if self.is_negative() {
      negative = !negative;
      *self = -*self;
    }
    let mut divisor = rhs;
    if divisor.is_negative() {
      negative = !negative;
      divisor = -divisor;
    }

    let (quotient, _) = self.words.udivmod(&divisor.words);
    self.words = quotient;

    if negative { *self = -*self }
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::RemAssign for Int<BITS, LIMBS> {
  fn rem_assign(&mut self, rhs: Self) {
    // The remainder keeps the sign of the dividend, no matter the divisor.
    let negative = self.is_negative();
    if negative { *self = -*self }

    let mut divisor = rhs;
    if divisor.is_negative() { divisor = -divisor }

    let (_, remainder) = self.words.udivmod(&divisor.words);
    self.words = remainder;

    if negative { *self = -*self }
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::MulAssign<i64> for Int<BITS, LIMBS> {
  fn mul_assign(&mut self, rhs: i64) {
    // Negating i64::MIN overflows, so split that factor instead.
    if rhs == i64::MIN {
      *self *= 2_i64;
      *self *= i64::MIN / 2;
      return
    }

    let factor = if rhs < 0 {
      *self = -*self;
      -rhs
    } else {
      rhs
    };

    let negative = self.is_negative();
    if negative { *self = -*self }
    self.words.mul_limb(factor as LimbT);
    if negative { *self = -*self }
  }
}

impl<const BITS: usize, const LIMBS: usize>
    std::ops::MulAssign<u64> for Uint<BITS, LIMBS> {
  fn mul_assign(&mut self, rhs: u64) {
    self.words.mul_limb(rhs);
  }
}

macro_rules! do_scalar_assign {
  ($type:ident, $scalar:ty, $trait:ident, $method:ident) => {
    impl<const BITS: usize, const LIMBS: usize>
        std::ops::$trait<$scalar> for $type<BITS, LIMBS> {
      fn $method(&mut self, rhs: $scalar) {
        std::ops::$trait::$method(self, Self::from(rhs));
      }
    }
  };
}

do_scalar_assign!(Int, i64, AddAssign, add_assign);
do_scalar_assign!(Uint, u64, AddAssign, add_assign);
do_scalar_assign!(Int, i64, SubAssign, sub_assign);
do_scalar_assign!(Uint, u64, SubAssign, sub_assign);
do_scalar_assign!(Int, i64, DivAssign, div_assign);
do_scalar_assign!(Uint, u64, DivAssign, div_assign);
do_scalar_assign!(Int, i64, RemAssign, rem_assign);
do_scalar_assign!(Uint, u64, RemAssign, rem_assign);

macro_rules! do_scalar_eval {
  ($type:ident, $scalar:ty, $trait:ident, $method:ident,
   $atrait:ident, $amethod:ident) => {
    impl<const BITS: usize, const LIMBS: usize>
        std::ops::$trait<$scalar> for $type<BITS, LIMBS> {
      type Output = Self;

      #[inline(always)]
      fn $method(mut self, rhs: $scalar) -> Self {
        std::ops::$atrait::$amethod(&mut self, rhs);
        self
      }
    }
  };
}

do_scalar_eval!(Int, i64, Add, add, AddAssign, add_assign);
do_scalar_eval!(Uint, u64, Add, add, AddAssign, add_assign);
do_scalar_eval!(Int, i64, Sub, sub, SubAssign, sub_assign);
do_scalar_eval!(Uint, u64, Sub, sub, SubAssign, sub_assign);
do_scalar_eval!(Int, i64, Mul, mul, MulAssign, mul_assign);
do_scalar_eval!(Uint, u64, Mul, mul, MulAssign, mul_assign);
do_scalar_eval!(Int, i64, Div, div, DivAssign, div_assign);
do_scalar_eval!(Uint, u64, Div, div, DivAssign, div_assign);
do_scalar_eval!(Int, i64, Rem, rem, RemAssign, rem_assign);
do_scalar_eval!(Uint, u64, Rem, rem, RemAssign, rem_assign);

use std::cmp::Ordering;
use crate::core::{Int, Storage, Uint};

impl<const BITS: usize, const LIMBS: usize> Storage<BITS, LIMBS> {

  /// Limb comparison from the most significant end.
  pub fn compare(&self, rhs: &Self) -> Ordering {
    for (lhs, rhs) in self.limbs.iter().rev().zip(rhs.limbs.iter().rev()) {
      if lhs != rhs {
        return if lhs < rhs { Ordering::Less } else { Ordering::Greater }
      }
    }
    Ordering::Equal
  }
}

impl<const BITS: usize, const LIMBS: usize> Int<BITS, LIMBS> {

  /// Negative sorts below non-negative; matching signs fall back to the
  /// limb comparison.
  pub fn compare(&self, rhs: &Self) -> Ordering {
    let l_neg = self.is_negative();
    let r_neg = rhs.is_negative();
    if l_neg != r_neg {
      return if l_neg { Ordering::Less } else { Ordering::Greater }
    }
    self.words.compare(&rhs.words)
  }
}

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {

  pub fn compare(&self, rhs: &Self) -> Ordering {
    self.words.compare(&rhs.words)
  }
}

macro_rules! do_compare_traits {
  ($type:ident) => {
    impl<const BITS: usize, const LIMBS: usize>
        PartialEq for $type<BITS, LIMBS> {
      fn eq(&self, rhs: &Self) -> bool {
        self.compare(rhs) == Ordering::Equal
      }
    }

    impl<const BITS: usize, const LIMBS: usize> Eq for $type<BITS, LIMBS> {}

    impl<const BITS: usize, const LIMBS: usize>
        PartialOrd for $type<BITS, LIMBS> {
      fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.compare(rhs))
      }
    }

    impl<const BITS: usize, const LIMBS: usize>
        Ord for $type<BITS, LIMBS> {
      fn cmp(&self, rhs: &Self) -> Ordering {
        self.compare(rhs)
      }
    }
  };
}

do_compare_traits!(Int);
do_compare_traits!(Uint);

macro_rules! do_compare_scalar {
  ($type:ident, $scalar:ty) => {
    impl<const BITS: usize, const LIMBS: usize>
        PartialEq<$scalar> for $type<BITS, LIMBS> {
      fn eq(&self, rhs: &$scalar) -> bool {
        self.compare(&Self::from(*rhs)) == Ordering::Equal
      }
    }

    impl<const BITS: usize, const LIMBS: usize>
        PartialOrd<$scalar> for $type<BITS, LIMBS> {
      fn partial_cmp(&self, rhs: &$scalar) -> Option<Ordering> {
        Some(self.compare(&Self::from(*rhs)))
      }
    }
  };
}

do_compare_scalar!(Int, i64);
do_compare_scalar!(Uint, u64);

#[cfg(test)]
mod tests {
  use crate::core::{Int80, Uint360, Uint80};
  use crate::proptest::*;

  #[test]
  fn eq() {
    assert_eq!(Int80::from(25), Int80::from(25));
    assert_ne!(Int80::from(25), Int80::from(50));
  }

  #[test]
  fn signed_order() {
    let values = [-2_i64, -1, 0, 1, 2];
    for (i, &a) in values.iter().enumerate() {
      for (j, &b) in values.iter().enumerate() {
        assert_eq!(Int80::from(a) < Int80::from(b), i < j);
        assert_eq!(Int80::from(a) == Int80::from(b), i == j);
        assert_eq!(Int80::from(a) > Int80::from(b), i > j);
      }
    }
  }

  #[test]
  fn matches_reference() {
    do_test(|(x, y): (Int80, Int80)| {
      Some(x.compare(&y) == x.sem().cmp(&y.sem()))
    });
    do_test(|(x, y): (Uint360, Uint360)| {
      Some(x.compare(&y) == x.sem().cmp(&y.sem()))
    })
  }

  #[test]
  fn scalar_compare() {
    let a = Int80::from(-2);
    assert!(a == -2);
    assert!(a < -1);
    assert!(a < 0);
    assert!(a < 1);

    assert!(Uint80::from(7_u64) == 7);
    assert!(Uint80::from(7_u64) > 2);
    assert!(Uint80::from(7_u64) < 8);
  }
}

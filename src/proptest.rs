use num::{BigInt, BigUint};
use proptest::arbitrary::*;
use proptest::strategy::*;
use proptest::test_runner::*;
use proptest::prelude::RngCore;

use crate::core::{Int, LimbT, Uint};

macro_rules! do_word_strategy {
  ($strategy:ident, $type:ident) => {
    impl<const BITS: usize, const LIMBS: usize>
        ValueTree for $type<BITS, LIMBS> {
      type Value = Self;

      fn current(&self) -> Self { *self }

      fn simplify(&mut self) -> bool { false }
      fn complicate(&mut self) -> bool { false }
    }

    #[derive(Debug)]
    pub struct $strategy<const BITS: usize, const LIMBS: usize>;

    impl<const BITS: usize, const LIMBS: usize>
        Strategy for $strategy<BITS, LIMBS> {
      type Tree = $type<BITS, LIMBS>;
      type Value = $type<BITS, LIMBS>;

      fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let mut limbs = [0 as LimbT; LIMBS];
        let rng = runner.rng();
        for w in limbs.iter_mut() {
          *w = rng.next_u64();
        }
        Ok($type::from_limbs(limbs))
      }
    }

    impl<const BITS: usize, const LIMBS: usize>
        Arbitrary for $type<BITS, LIMBS> {
      type Parameters = ();
      type Strategy = $strategy<BITS, LIMBS>;

      fn arbitrary_with(_: ()) -> Self::Strategy { $strategy }
    }
  };
}

do_word_strategy!(IntStrategy, Int);
do_word_strategy!(UintStrategy, Uint);

pub fn do_test<T: Arbitrary>(p: fn(T) -> Option<bool>) {
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  let mut runner = TestRunner::new(cfg);
  runner.run(&any::<T>(), |arg| {
    match p(arg) {
      Some(result) =>
        if result { Ok(()) }
        else {
          Err(TestCaseError::Fail("unexpected result".into()))
        },
      None => Err(TestCaseError::Reject("invalid input".into()))
    }
  }).unwrap()
}

impl<const BITS: usize, const LIMBS: usize> Int<BITS, LIMBS> {
  /// The reference semantics of the value.
  pub fn sem(&self) -> BigInt { BigInt::from(self) }
}

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {
  /// The reference semantics of the value.
  pub fn sem(&self) -> BigUint { BigUint::from(self) }
}

pub fn pow2(bits: usize) -> BigUint {
  let x: BigUint = 2_u64.into();
  x.pow(bits as u32)
}

use super::*;
use algebra::{Affine, CurveGroup, ModGroup, RandomElement, random_exponent};
use core::cell::Cell;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Group wrapper counting the multiplications and squarings it performs.
pub(crate) struct CountingGroup<'a, G> {
    inner: &'a G,
    muls: Cell<usize>,
    squares: Cell<usize>,
}

impl<'a, G> CountingGroup<'a, G> {
    pub(crate) fn new(inner: &'a G) -> Self {
        Self {
            inner,
            muls: Cell::new(0),
            squares: Cell::new(0),
        }
    }

    pub(crate) fn muls(&self) -> usize {
        self.muls.get()
    }

    pub(crate) fn squares(&self) -> usize {
        self.squares.get()
    }

    pub(crate) fn reset(&self) {
        self.muls.set(0);
        self.squares.set(0);
    }
}

impl<G: Group> Group for CountingGroup<'_, G> {
    type Element = G::Element;

    fn identity(&self) -> Self::Element {
        self.inner.identity()
    }

    fn is_identity(&self, a: &Self::Element) -> bool {
        self.inner.is_identity(a)
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.muls.set(self.muls.get() + 1);
        self.inner.mul(a, b)
    }

    fn square(&self, a: &Self::Element) -> Self::Element {
        self.squares.set(self.squares.get() + 1);
        self.inner.square(a)
    }
}

pub(crate) fn mod_group() -> ModGroup {
    ModGroup::new(BigUint::from(101u32)).expect("modulus")
}

// y^2 = x^3 + 2x + 3 over GF(97)
fn small_curve() -> CurveGroup {
    CurveGroup::new(
        BigUint::from(97u32),
        BigUint::from(2u32),
        BigUint::from(3u32),
    )
    .expect("curve")
}

fn exps(values: &[u64]) -> Vec<BigUint> {
    values.iter().map(|&v| BigUint::from(v)).collect()
}

#[test]
fn test_modular_scenario() {
    let group = mod_group();
    let bases = vec![group.element(2u32), group.element(3u32), group.element(5u32)];
    let e = exps(&[7, 11, 13]);

    let expected = (BigUint::from(2u32).pow(7)
        * BigUint::from(3u32).pow(11)
        * BigUint::from(5u32).pow(13))
        % BigUint::from(101u32);

    assert_eq!(simultaneous_exp_batched(&group, &bases, &e, 2, 3).unwrap(), expected);
    assert_eq!(simultaneous_exp_batched(&group, &bases, &e, 1, 3).unwrap(), expected);
    assert_eq!(simultaneous_exp_batched(&group, &bases, &e, 2, 1).unwrap(), expected);
    assert_eq!(simultaneous_exp_batched(&group, &bases, &e, 2, 2).unwrap(), expected);
    assert_eq!(group.simultaneous_exp(&bases, &e).unwrap(), expected);
}

#[test]
fn test_ragged_blocks_match_naive() {
    let group = mod_group();

    // 7 bases in blocks of 3, 3, 1.
    let bases: Vec<BigUint> = (2u32..9).map(|v| group.element(v)).collect();
    let e = exps(&[100, 200, 300, 400, 500, 600, 700]);
    assert_eq!(
        simultaneous_exp_batched(&group, &bases, &e, 3, 7).unwrap(),
        group.product_of_powers(&bases, &e)
    );

    // 2 bases in a single block narrower than 5.
    let bases = vec![group.element(6u32), group.element(10u32)];
    let e = exps(&[31, 1 << 33]);
    assert_eq!(
        simultaneous_exp_batched(&group, &bases, &e, 5, 2).unwrap(),
        group.product_of_powers(&bases, &e)
    );
}

#[test]
fn test_all_widths_and_batch_lengths() {
    let group = mod_group();
    let mut rng = StdRng::seed_from_u64(42);
    let n = 9;
    let bases: Vec<BigUint> = (0..n).map(|_| group.random_element(&mut rng)).collect();
    let e: Vec<BigUint> = (0..n).map(|_| random_exponent(&mut rng, 80)).collect();
    let expected = group.product_of_powers(&bases, &e);

    for width in 1..=n {
        for batch_len in 1..=n {
            assert_eq!(
                simultaneous_exp_batched(&group, &bases, &e, width, batch_len).unwrap(),
                expected,
                "width {width} batch {batch_len}"
            );
        }
    }
}

#[test]
fn test_zero_exponents_give_identity() {
    let group = mod_group();
    let bases: Vec<BigUint> = (2u32..20).map(|v| group.element(v)).collect();
    let e = exps(&[0; 18]);

    let result = group.simultaneous_exp(&bases, &e).unwrap();
    assert!(group.is_identity(&result));
}

#[test]
fn test_large_modulus() {
    let mut rng = StdRng::seed_from_u64(7);
    // 2^127 - 1
    let modulus = (BigUint::from(1u32) << 127u32) - 1u32;
    let group = ModGroup::new(modulus).unwrap();

    let bases: Vec<BigUint> = (0..30).map(|_| group.random_element(&mut rng)).collect();
    let e: Vec<BigUint> = (0..30).map(|_| random_exponent(&mut rng, 127)).collect();
    let expected = group.product_of_powers(&bases, &e);

    assert_eq!(group.simultaneous_exp(&bases, &e).unwrap(), expected);
    let params = SimExpParams::default().with_batch_len(7);
    assert_eq!(group.simultaneous_exp_with(&bases, &e, &params).unwrap(), expected);
}

#[test]
fn test_curve_scenario() {
    let curve = small_curve();
    let p = curve.point(BigUint::from(3u32), BigUint::from(6u32)).unwrap();
    let q = curve.point(BigUint::from(0u32), BigUint::from(10u32)).unwrap();

    // 3P + 4Q by repeated addition.
    let mut expected = Affine::infinity();
    for _ in 0..3 {
        expected = curve.add(&expected, &p);
    }
    for _ in 0..4 {
        expected = curve.add(&expected, &q);
    }

    let bases = vec![p, q];
    let e = exps(&[3, 4]);
    for width in 1..=3 {
        for batch_len in 1..=2 {
            assert_eq!(
                simultaneous_exp_batched(&curve, &bases, &e, width, batch_len).unwrap(),
                expected,
                "width {width} batch {batch_len}"
            );
        }
    }
    assert!(curve.is_on_curve(&expected));
}

#[test]
fn test_curve_fixed_base() {
    let curve = small_curve();
    let p = curve.point(BigUint::from(3u32), BigUint::from(6u32)).unwrap();

    for width in 1..=4 {
        let table = FixedBaseTable::with_width(&curve, &p, 9, width).unwrap();
        for n in 0u64..512 {
            assert_eq!(
                table.exp(&BigUint::from(n)).unwrap(),
                curve.exp_u64(&p, n),
                "width {width} exponent {n}"
            );
        }
    }
}

#[test]
fn test_secp256k1() {
    let curve = CurveGroup::secp256k1();
    let g = CurveGroup::secp256k1_generator();
    let mut rng = StdRng::seed_from_u64(2024);

    let bases: Vec<Affine> = (1..=4u64).map(|k| curve.exp_u64(&g, 1000 + k)).collect();
    let e: Vec<BigUint> = (0..4).map(|_| random_exponent(&mut rng, 256)).collect();

    let result = curve.simultaneous_exp(&bases, &e).unwrap();
    assert_eq!(result, curve.product_of_powers(&bases, &e));
    assert!(curve.is_on_curve(&result));
}

#[test]
fn test_secp256k1_fixed_base_order() {
    let curve = CurveGroup::secp256k1();
    let g = CurveGroup::secp256k1_generator();
    let n = CurveGroup::secp256k1_order();

    let table = curve.fixed_base_table(&g, 256, 16).unwrap();
    assert!(curve.is_identity(&table.exp(&n).unwrap()));

    let k = BigUint::from(0xdead_beef_u64);
    assert_eq!(table.exp(&k).unwrap(), curve.exp(&g, &k));
}

proptest! {
    #[test]
    fn prop_simultaneous_matches_naive(
        pairs in prop::collection::vec((1u64..2305843009213693951, any::<u64>()), 1..12),
        width in 1usize..7,
        batch_len in 1usize..14,
    ) {
        // 2^61 - 1
        let group = ModGroup::new(BigUint::from(2305843009213693951u64)).unwrap();
        let bases: Vec<BigUint> = pairs.iter().map(|&(b, _)| BigUint::from(b)).collect();
        let e: Vec<BigUint> = pairs.iter().map(|&(_, e)| BigUint::from(e)).collect();

        let result = simultaneous_exp_batched(&group, &bases, &e, width, batch_len).unwrap();
        prop_assert_eq!(result, group.product_of_powers(&bases, &e));
    }

    #[test]
    fn prop_fixed_base_matches_naive(
        base in 1u64..2305843009213693951,
        exponent in any::<u128>(),
        width in 1usize..9,
    ) {
        let group = ModGroup::new(BigUint::from(2305843009213693951u64)).unwrap();
        let base = BigUint::from(base);
        let exponent = BigUint::from(exponent);

        let table = FixedBaseTable::with_width(&group, &base, 128, width).unwrap();
        prop_assert_eq!(table.exp(&exponent).unwrap(), group.exp(&base, &exponent));
    }
}

use algebra::{Affine, BigUint, CurveGroup, Group, random_exponent};
use multiexp::{MultiExp, SimExpParams};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let curve = CurveGroup::secp256k1();
    let curve_bytes = bincode::serialize(&curve).expect("serialize curve");
    let curve: CurveGroup = bincode::deserialize(&curve_bytes).expect("deserialize curve");

    let params = SimExpParams::default().with_batch_len(16);
    let params_bytes = bincode::serialize(&params).expect("serialize params");
    let params: SimExpParams = bincode::deserialize(&params_bytes).expect("deserialize params");

    let g = CurveGroup::secp256k1_generator();
    let bases: Vec<Affine> = (1..=40u64).map(|k| curve.exp_u64(&g, k)).collect();
    let exponents: Vec<BigUint> = (0..40).map(|_| random_exponent(&mut rng, 256)).collect();

    let product = curve
        .simultaneous_exp_with(&bases, &exponents, &params)
        .expect("simultaneous exp");
    assert_eq!(product, curve.product_of_powers(&bases, &exponents));
    assert!(curve.is_on_curve(&product));

    let table = curve.fixed_base_table(&g, 256, 100).expect("fixed-base table");
    let k = random_exponent(&mut rng, 256);
    let power = table.exp(&k).expect("fixed-base exp");
    assert_eq!(power, curve.exp(&g, &k));

    println!(
        "40-base product and fixed-base power (width {}, {} bits per slice) agree with the naive method",
        table.width(),
        table.slice_bit_len()
    );
}

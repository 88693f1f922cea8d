use float_eq::assert_float_eq;
use chushin::prelude::*;
use chushin::solver::LinAlg;
use chushin::*;

type La = FloatGeneric<f64>;

type AMatBuild = MatBuild<La>;
type ACentering = Centering<La>;

//

// 5x5 block stacked with its negation into a 10x5 constraint matrix,
// analytic centering example at the end of chapter 4 of the CVXOPT documentation.
fn stacked_mat_a() -> AMatBuild
{
    let bl = AMatBuild::new(5, 5).iter_rowmaj(&[
        -7.44e-01,  1.11e-01,  1.29e+00,  2.62e+00, -1.82e+00,
         4.59e-01,  7.06e-01,  3.16e-01, -1.06e-01,  7.80e-01,
        -2.95e-02, -2.22e-01, -2.07e-01, -9.11e-01, -3.92e-01,
        -7.75e-01,  1.03e-01, -1.22e+00, -5.74e-01, -3.32e-01,
        -1.80e+00,  1.24e+00, -2.61e+00, -9.31e-01, -6.38e-01,
    ]);

    AMatBuild::new(10, 5)
    .submatrix(0, 0, &bl)
    .submatrix(5, 0, &bl.clone().scale(-1.))
}

const VEC_B: [f64; 10] = [
    8.38e-01, 9.92e-01, 9.56e-01, 6.14e-01, 6.56e-01,
    3.57e-01, 6.36e-01, 5.08e-01, 8.81e-03, 7.08e-02,
];

// reference solution and decrement trace computed with CVXOPT on the above data
const REF_X: [f64; 5] = [
    -11.597283739093445, -1.351963891613399, 7.218948993502563,
    -3.291599171420515, 4.904541473853292,
];

const REF_DECR: [f64; 9] = [
    1.5163484265903457, 1.2433928210771914, 1.0562922103520955, 0.8816246051011607,
    0.7271128861543598, 0.42725003346248974, 0.0816777301914883, 0.0005458037072843131,
    1.6259980735305693e-10,
];

//

#[test]
fn test_centering1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mat_a = stacked_mat_a();
    println!("A = {}", mat_a);

    let s = ACentering::new().par(|p| {p.max_iter = 10});
    let cent = s.solve(&mat_a.as_op(), &VEC_B).unwrap();

    assert_eq!(cent.status, CenteringStatus::Converged);

    let mut diff = cent.x.clone();
    La::add(-1., &REF_X, &mut diff);
    assert!(La::norm(&diff) <= 1e-6);

    assert_eq!(cent.decrements.len(), REF_DECR.len());
    assert_float_eq!(cent.decrements.as_slice(), REF_DECR.as_ref(), abs_all <= 1e-6);
    assert!(cent.decrements[8] < 1e-8);
}

//

#[test]
fn test_centering2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // minimal bounded box -1 <= x_i <= 1, centered at the origin already
    let n = 3;
    let mat_a = AMatBuild::new(2 * n, n).by_fn(|r, c| {
        if r == c {
            1.
        }
        else if r == c + n {
            -1.
        }
        else {
            0.
        }
    });
    let vec_b = vec![1.; 2 * n];

    let s = ACentering::new();
    let cent = s.solve(&mat_a.as_op(), &vec_b).unwrap();

    assert_eq!(cent.status, CenteringStatus::Converged);
    assert_eq!(cent.decrements, vec![0.]);
    assert_float_eq!(cent.x.as_slice(), [0.; 3].as_ref(), abs_all <= 1e-12);
}

//

#[test]
fn test_centering3()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mat_a = stacked_mat_a();

    // every accepted iterate stays strictly feasible
    for k in 1..= 10 {
        let s = ACentering::new().par(|p| {p.max_iter = k});
        let cent = s.solve(&mat_a.as_op(), &VEC_B).unwrap();

        let mut slack = vec![0.; 10];
        mat_a.as_op().op(-1., &cent.x, 0., &mut slack);
        for (u, b) in slack.iter_mut().zip(&VEC_B) {
            *u += *b;
        }
        for u in &slack {
            assert!(*u > 0., "max_iter {}: slack {}", k, u);
        }
    }
}

//

#[test]
fn test_centering4()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mat_a = stacked_mat_a();

    // no hidden randomness: reruns are bit-identical
    let s = ACentering::new().par(|p| {p.max_iter = 10});
    let cent1 = s.solve(&mat_a.as_op(), &VEC_B).unwrap();
    let cent2 = s.solve(&mat_a.as_op(), &VEC_B).unwrap();

    assert_eq!(cent1, cent2);
}

//

#[test]
fn test_centering5()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mat_a = stacked_mat_a();
    let mut vec_b = VEC_B;
    vec_b[3] = 0.; // the origin is no longer strictly feasible

    let s = ACentering::new();
    let rslt = s.solve(&mat_a.as_op(), &vec_b).unwrap_err();
    println!("{}", rslt);

    assert_eq!(rslt.err, CenteringError::Infeasible);
    assert_eq!(rslt.iter, 0);
    assert_eq!(rslt.x, vec![0.; 5]);
    assert!(rslt.decrements.is_empty());
}

//

#[test]
fn test_centering6()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let s = ACentering::new();

    // b length mismatch
    let mat_a = stacked_mat_a();
    let rslt = s.solve(&mat_a.as_op(), &[1.; 9]).unwrap_err();
    assert_eq!(rslt.err, CenteringError::InvalidShape);

    // fewer rows than columns
    let wide = AMatBuild::new(2, 5).by_fn(|r, c| ((r + c) % 3) as f64);
    let rslt = s.solve(&wide.as_op(), &[1.; 2]).unwrap_err();
    assert_eq!(rslt.err, CenteringError::InvalidShape);
}

//

#[test]
fn test_centering7()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // duplicated columns violate the full-column-rank assumption
    let mat_a = AMatBuild::new(2, 2).iter_rowmaj(&[
         1.,  1.,
        -1., -1.,
    ]);

    let s = ACentering::new();
    let rslt = s.solve(&mat_a.as_op(), &[1., 1.]).unwrap_err();
    println!("{}", rslt);

    assert_eq!(rslt.err, CenteringError::SingularSystem);
    assert_eq!(rslt.iter, 0);
}

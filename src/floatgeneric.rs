use num_traits::Float;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use crate::solver::LinAlg;
use crate::LinAlgEx;

/// `num::Float`-generic [`LinAlgEx`] implementation
///
/// All numeric operations are written in pure Rust.
#[derive(Clone)]
pub struct FloatGeneric<F>
{
    ph_f: PhantomData<F>,
}

impl<F: Float> LinAlg for FloatGeneric<F>
{
    type F = F;

    fn norm(x: &[F]) -> F
    {
        let mut sum = F::zero();
        for u in x {
            sum = sum + *u * *u;
        }
        sum.sqrt()
    }

    fn copy(x: &[F], y: &mut[F])
    {
        assert_eq!(x.len(), y.len());

        for (u, v) in x.iter().zip(y) {
            *v = *u;
        }
    }

    fn scale(alpha: F, x: &mut[F])
    {
        for u in x {
            *u = alpha * *u;
        }
    }

    fn add(alpha: F, x: &[F], y: &mut[F])
    {
        assert_eq!(x.len(), y.len());

        for (u, v) in x.iter().zip(y) {
            *v = *v + alpha * *u;
        }
    }

    fn dot(x: &[F], y: &[F]) -> F
    {
        assert_eq!(x.len(), y.len());

        let mut sum = F::zero();
        for (u, v) in x.iter().zip(y) {
            sum = sum + *u * *v;
        }
        sum
    }

    fn transform_di(alpha: F, mat: &[F], x: &[F], beta: F, y: &mut[F])
    {
        assert_eq!(mat.len(), x.len());
        assert_eq!(mat.len(), y.len());

        for (i, v) in y.iter_mut().enumerate() {
            *v = alpha * mat[i] * x[i] + beta * *v;
        }
    }
}

//

struct MatIdx<'a, F: Float>
{
    n_row: usize,
    n_col: usize,
    mat: &'a[F],
    transpose: bool,
}

impl<'a, F: Float> MatIdx<'a, F>
{
    fn idx(&self, (r, c): (usize, usize)) -> usize
    {
        let (r, c) = if !self.transpose {(r, c)} else {(c, r)};

        assert!(r < self.n_row);
        assert!(c < self.n_col);

        c * self.n_row + r
    }

    fn col_vec(&self, c: usize) -> &[F]
    {
        assert!(c < self.n_col);
        assert!(!self.transpose);

        let (_, v) = self.mat.split_at(c * self.n_row);
        let (v, _) = v.split_at(self.n_row);

        v
    }
}

impl<'a, F: Float> Index<(usize, usize)> for MatIdx<'a, F>
{
    type Output = F;

    fn index(&self, index: (usize, usize)) -> &Self::Output
    {
        &self.mat[self.idx(index)]
    }
}

//

struct SpMatIdx<'a, F: Float>
{
    n: usize,
    mat: &'a[F],
}

impl<'a, F: Float> SpMatIdx<'a, F>
{
    fn idx(&self, (r, c): (usize, usize)) -> usize
    {
        assert!(r < self.n);
        assert!(c < self.n);

        let (r, c) = if r < c {(r, c)} else {(c, r)};

        c * (c + 1) / 2 + r
    }
}

impl<'a, F: Float> Index<(usize, usize)> for SpMatIdx<'a, F>
{
    type Output = F;

    fn index(&self, index: (usize, usize)) -> &Self::Output
    {
        &self.mat[self.idx(index)]
    }
}

//

struct SpMatIdxMut<'a, F: Float>
{
    n: usize,
    mat: &'a mut[F],
}

impl<'a, F: Float> Index<(usize, usize)> for SpMatIdxMut<'a, F>
{
    type Output = F;

    fn index(&self, index: (usize, usize)) -> &Self::Output
    {
        let sp_mat_idx = SpMatIdx {
            n: self.n,
            mat: self.mat,
        };

        &self.mat[sp_mat_idx.idx(index)]
    }
}

impl<'a, F: Float> IndexMut<(usize, usize)> for SpMatIdxMut<'a, F>
{
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output
    {
        let sp_mat_idx = SpMatIdx {
            n: self.n,
            mat: self.mat,
        };

        &mut self.mat[sp_mat_idx.idx(index)]
    }
}

//

impl<F: Float> LinAlgEx for FloatGeneric<F>
{
    // y = a*mat*x + b*y
    fn transform_ge(transpose: bool, n_row: usize, n_col: usize, alpha: F, mat: &[F], x: &[F], beta: F, y: &mut[F])
    {
        assert_eq!(mat.len(), n_row * n_col);
        if transpose {
            assert_eq!(x.len(), n_row);
            assert_eq!(y.len(), n_col);
        } else {
            assert_eq!(x.len(), n_col);
            assert_eq!(y.len(), n_row);
        };

        let mat = MatIdx {
            n_row, n_col, mat, transpose,
        };

        for r in 0.. y.len() {
            let mut mat_x = F::zero();
            for c in 0.. x.len() {
                mat_x = mat_x + mat[(r, c)] * x[c];
            }
            y[r] = alpha * mat_x + beta * y[r];
        }
    }

    // mat = diag(d)*mat
    fn scale_rows(n_row: usize, n_col: usize, d: &[F], mat: &mut[F])
    {
        assert_eq!(d.len(), n_row);
        assert_eq!(mat.len(), n_row * n_col);

        for col in mat.chunks_mut(n_row) {
            for (u, v) in col.iter_mut().zip(d) {
                *u = *u * *v;
            }
        }
    }

    // spmat = mat^T*mat, packed upper triangle
    fn syrk_sp(n_row: usize, n_col: usize, mat: &[F], spmat: &mut[F])
    {
        assert_eq!(mat.len(), n_row * n_col);
        assert_eq!(spmat.len(), n_col * (n_col + 1) / 2);

        let mat = MatIdx {
            n_row, n_col, mat, transpose: false,
        };
        let mut spmat = SpMatIdxMut {
            n: n_col, mat: spmat,
        };

        for c in 0.. n_col {
            for r in 0..= c {
                spmat[(r, c)] = Self::dot(mat.col_vec(r), mat.col_vec(c));
            }
        }
    }

    // spmat = U, where U^T*U is the input
    fn cholesky_sp(n: usize, spmat: &mut[F]) -> Result<(), ()>
    {
        assert_eq!(spmat.len(), n * (n + 1) / 2);

        let mut spmat = SpMatIdxMut {
            n, mat: spmat,
        };

        // a pivot at or below the roundoff scale of the input diagonals
        // counts as not positive definite
        let mut max_diag = F::zero();
        for i in 0.. n {
            max_diag = max_diag.max(spmat[(i, i)]);
        }
        let tol = F::from(n).unwrap() * F::epsilon() * max_diag;

        for c in 0.. n {
            for r in 0..= c {
                let mut sum = spmat[(r, c)];
                for k in 0.. r {
                    sum = sum - spmat[(k, r)] * spmat[(k, c)];
                }

                if r == c {
                    if sum <= tol {
                        return Err(());
                    }
                    spmat[(c, c)] = sum.sqrt();
                }
                else {
                    spmat[(r, c)] = sum / spmat[(r, r)];
                }
            }
        }

        Ok(())
    }

    // b = (U^T*U)^-1 * b
    fn cholesky_solve_sp(n: usize, spmat: &[F], b: &mut[F])
    {
        assert_eq!(spmat.len(), n * (n + 1) / 2);
        assert_eq!(b.len(), n);

        let spmat = SpMatIdx {
            n, mat: spmat,
        };

        // forward substitution, U^T*w = b
        for i in 0.. n {
            let mut sum = b[i];
            for k in 0.. i {
                sum = sum - spmat[(k, i)] * b[k];
            }
            b[i] = sum / spmat[(i, i)];
        }

        // back substitution, U*x = w
        for i in (0.. n).rev() {
            let mut sum = b[i];
            for k in i + 1.. n {
                sum = sum - spmat[(i, k)] * b[k];
            }
            b[i] = sum / spmat[(i, i)];
        }
    }
}

//

#[test]
fn test_syrk_sp1()
{
    use float_eq::assert_float_eq;

    type L = FloatGeneric<f64>;

    let mat = &[ // column-major
        1., 3., 5.,
        2., 4., 6.,
    ];
    let ref_spmat = &[ // packed upper, column-wise
        35.,
        44., 56.,
    ];
    let spmat = &mut[0.; 3];

    L::syrk_sp(3, 2, mat, spmat);
    assert_float_eq!(spmat.as_ref(), ref_spmat.as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_cholesky_sp1()
{
    use float_eq::assert_float_eq;

    type L = FloatGeneric<f64>;

    let spmat = &mut[ // packed upper, column-wise
        4.,
        2., 3.,
    ];
    let b = &mut[1., 2.];

    L::cholesky_sp(2, spmat).unwrap();
    L::cholesky_solve_sp(2, spmat, b);

    // [[4, 2], [2, 3]]^-1 * [1, 2] = [-1/8, 3/4]
    assert_float_eq!(b.as_ref(), [-0.125, 0.75].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_cholesky_sp2()
{
    type L = FloatGeneric<f64>;

    // rank-deficient: the last pivot only survives 2/sqrt(2) rounding,
    // which the pivot threshold shall reject
    let spmat = &mut[
        2.,
        2., 2.,
    ];
    assert!(L::cholesky_sp(2, spmat).is_err());

    // the rejection shall not depend on the scale of the input
    let spmat = &mut[
        2e6,
        2e6, 2e6,
    ];
    assert!(L::cholesky_sp(2, spmat).is_err());

    let spmat = &mut[ // indefinite
        1.,
        2., 1.,
    ];
    assert!(L::cholesky_sp(2, spmat).is_err());
}

use crate::LinAlgEx;

/// Matrix operator
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Matrix struct which borrows a slice of data array and
/// applies the matrix \\(A\\) (or \\(A^T\\)) to vectors.
#[derive(Debug)]
pub struct MatOp<'a, L: LinAlgEx>
{
    n_row: usize,
    n_col: usize,
    array: &'a[L::F],
}

impl<'a, L: LinAlgEx> MatOp<'a, L>
{
    /// Creates an instance
    ///
    /// Returns [`MatOp`] instance.
    /// * `n_row` is a number of rows of \\(A\\).
    /// * `n_col` is a number of columns of \\(A\\).
    /// * `array` is a data array slice.
    ///   Column-major matrix data shall be stored.
    pub fn new(n_row: usize, n_col: usize, array: &'a[L::F]) -> Self
    {
        assert_eq!(n_row * n_col, array.len());

        MatOp {
            n_row, n_col, array,
        }
    }

    /// Size of \\(A\\).
    ///
    /// Returns a tuple of a number of rows and columns.
    pub fn size(&self) -> (usize, usize)
    {
        (self.n_row, self.n_col)
    }

    /// Calculates \\(\alpha A x + \beta y\\).
    ///
    /// * `alpha` is a scalar \\(\alpha\\).
    /// * `x` is a vector \\(x\\). The length of `x` shall be `n_col`.
    /// * `beta` is a scalar \\(\beta\\).
    /// * `y` is a vector \\(y\\) before entry, \\(\alpha A x + \beta y\\) on exit.
    ///   The length of `y` shall be `n_row`.
    pub fn op(&self, alpha: L::F, x: &[L::F], beta: L::F, y: &mut[L::F])
    {
        if self.n_row > 0 && self.n_col > 0 {
            L::transform_ge(false, self.n_row, self.n_col, alpha, self.array, x, beta, y)
        }
        else {
            L::scale(beta, y);
        }
    }

    /// Calculates \\(\alpha A^T x + \beta y\\).
    ///
    /// * `alpha` is a scalar \\(\alpha\\).
    /// * `x` is a vector \\(x\\). The length of `x` shall be `n_row`.
    /// * `beta` is a scalar \\(\beta\\).
    /// * `y` is a vector \\(y\\) before entry, \\(\alpha A^T x + \beta y\\) on exit.
    ///   The length of `y` shall be `n_col`.
    pub fn trans_op(&self, alpha: L::F, x: &[L::F], beta: L::F, y: &mut[L::F])
    {
        if self.n_row > 0 && self.n_col > 0 {
            L::transform_ge(true, self.n_row, self.n_col, alpha, self.array, x, beta, y)
        }
        else {
            L::scale(beta, y);
        }
    }
}

impl<'a, L: LinAlgEx> AsRef<[L::F]> for MatOp<'a, L>
{
    fn as_ref(&self) -> &[L::F]
    {
        self.array
    }
}

//

#[test]
fn test_matop1()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let array = &[ // column-major
        1., 2., 3.,
        4., 5., 6.,
    ];
    let m = MatOp::<L>::new(3, 2, array);

    let y = &mut[0.; 3];
    m.op(1., &[1., 1.], 0., y);
    assert_float_eq!(y.as_ref(), [5., 7., 9.].as_ref(), abs_all <= 1e-12);

    let t = &mut[0.; 2];
    m.trans_op(1., &[1., 1., 1.], 0., t);
    assert_float_eq!(t.as_ref(), [6., 15.].as_ref(), abs_all <= 1e-12);
}

use crate::solver::LinAlg;

/// Linear algebra extended subtrait
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
pub trait LinAlgEx: LinAlg + Clone
{
    /// Calculates \\(\alpha G x + \beta y\\).
    ///
    /// * If `transpose` is `true`, calculate \\(\alpha G^T x + \beta y\\) instead.
    /// * `alpha` is a scalar \\(\alpha\\).
    /// * `n_row` is a number of rows of \\(G\\).
    /// * `n_col` is a number of columns of \\(G\\).
    /// * `mat` is a matrix \\(G\\), stored in column-major.
    ///   The length of `mat` shall be `n_row * n_col`.
    /// * `x` is a vector \\(x\\).
    ///   The length of `x` shall be `n_col` (or `n_row` if `transpose` is `true`).
    /// * `beta` is a scalar \\(\beta\\).
    /// * `y` is a vector \\(y\\) before entry,
    ///   \\(\alpha G x + \beta y\\) (or \\(\alpha G^T x + \beta y\\) if `transpose` is `true`) on exit.
    ///   The length of `y` shall be `n_row` (or `n_col` if `transpose` is `true`).
    fn transform_ge(transpose: bool, n_row: usize, n_col: usize, alpha: Self::F, mat: &[Self::F], x: &[Self::F], beta: Self::F, y: &mut[Self::F]);

    /// Calculates \\(D G\\), where \\(D={\bf diag}(d)\\) is a diagonal matrix,
    /// overwriting \\(G\\).
    ///
    /// * `n_row` is a number of rows of \\(G\\).
    /// * `n_col` is a number of columns of \\(G\\).
    /// * `d` is a diagonal vector \\(d\\) of \\(D\\).
    ///   The length of `d` shall be `n_row`.
    /// * `mat` is a matrix \\(G\\) before entry, \\(D G\\) on exit,
    ///   stored in column-major.
    ///   The length of `mat` shall be `n_row * n_col`.
    fn scale_rows(n_row: usize, n_col: usize, d: &[Self::F], mat: &mut[Self::F]);

    /// Calculates the symmetric rank-k update \\(S = G^T G\\).
    ///
    /// * `n_row` is a number of rows of \\(G\\).
    /// * `n_col` is a number of columns of \\(G\\).
    /// * `mat` is a matrix \\(G\\), stored in column-major.
    ///   The length of `mat` shall be `n_row * n_col`.
    /// * `spmat` is the matrix \\(S\\) on exit,
    ///   stored in packed form (the upper-triangular part in column-wise).
    ///   The length of `spmat` shall be `n_col * (n_col + 1) / 2`.
    ///   Only the packed triangle is written since \\(S\\) is symmetric by construction.
    fn syrk_sp(n_row: usize, n_col: usize, mat: &[Self::F], spmat: &mut[Self::F]);

    /// Cholesky-factorizes a symmetric positive-definite matrix \\(S = U^T U\\) in place.
    ///
    /// Returns `Err` if \\(S\\) is not positive definite at working precision,
    /// i.e. a pivot falls to the roundoff scale of the diagonals of \\(S\\).
    /// * `n` is a number of rows and columns of \\(S\\).
    /// * `spmat` is the matrix \\(S\\) before entry, the upper-triangular factor
    ///   \\(U\\) on exit, both stored in packed form
    ///   (the upper-triangular part in column-wise).
    ///   The length of `spmat` shall be `n * (n + 1) / 2`.
    fn cholesky_sp(n: usize, spmat: &mut[Self::F]) -> Result<(), ()>;

    /// Solves \\(U^T U x = b\\) by forward/back substitution,
    /// given the factor \\(U\\) computed by [`LinAlgEx::cholesky_sp`].
    ///
    /// * `n` is a number of rows and columns of \\(U\\).
    /// * `spmat` is the factor \\(U\\), stored in packed form
    ///   (the upper-triangular part in column-wise).
    ///   The length of `spmat` shall be `n * (n + 1) / 2`.
    /// * `b` is a vector \\(b\\) before entry, the solution \\(x\\) on exit.
    ///   The length of `b` shall be `n`.
    fn cholesky_solve_sp(n: usize, spmat: &[Self::F], b: &mut[Self::F]);
}

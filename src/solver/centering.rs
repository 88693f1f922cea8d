use num_traits::{Float, Zero, One};
use core::fmt::{Debug, LowerExp};
use crate::solver::{CenteringError, CenteringFailure};
use crate::{LinAlgEx, MatOp};

//

/// Centering parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteringParam<F: Float>
{
    /// Max iteration number of the damped Newton method.
    pub max_iter: usize,
    /// Armijo parameter of the sufficient-decrease condition, in \\((0, 0.5)\\).
    pub alpha: F,
    /// Contraction factor of the backtracking line search, in \\((0, 1)\\).
    pub beta: F,
    /// Tolerance on \\(\sqrt\lambda\\), the square root of the Newton decrement.
    pub tol: F,
    /// Period of iterations to output progress log(for debug/trace level).
    pub log_period: usize,
}

impl<F: Float> Default for CenteringParam<F>
{
    fn default() -> Self
    {
        let ten = F::from(10).unwrap();

        CenteringParam {
            max_iter: 100,
            alpha: ten.powi(-2),
            beta: F::from(0.5).unwrap(),
            tol: ten.powi(-8),
            log_period: 10,
        }
    }
}

//

/// Outcome kind of a completed centering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenteringStatus
{
    /// \\(\sqrt\lambda\\) fell below the tolerance.
    Converged,
    /// The iteration budget ran out; the result is a best-effort approximation.
    ExcessIter,
}

//

/// Completed centering run.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterPoint<F: Float>
{
    /// The analytic center (or its best-effort approximation on [`CenteringStatus::ExcessIter`]).
    pub x: Vec<F>,
    /// Newton decrement trace, one entry per completed iteration.
    /// Entries are \\(\sqrt\lambda\\); a numerically faulty negative \\(\lambda\\)
    /// is recorded verbatim.
    pub decrements: Vec<F>,
    /// Outcome kind.
    pub status: CenteringStatus,
}

//

/// Analytic centering struct.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// This struct abstracts the computation of the analytic center of a polyhedron
/// \\[
/// \\{x \in \mathbb{R}^n \mid Ax \preceq b\\},
/// \\]
/// where \\(A \in \mathbb{R}^{m \times n}\\) with \\(m \ge n\\) and \\({\bf rank}\ A = n\\),
/// i.e. the minimizer of the log-barrier
/// \\(\phi(x) = -\sum_i \log(b_i - a_i^T x)\\).
///
/// The feasible set shall be nonempty and bounded, and \\(b \succ 0\\)
/// so that the origin is strictly feasible. Each iteration takes a damped
/// Newton step: the direction solves \\(H v = -g\\) with
/// \\(g = A^T d\\), \\(H = A^T {\bf diag}(d)^2 A\\), \\(d_i = (b_i - a_i^T x)^{-1}\\),
/// and the step length is chosen by a backtracking line search.
pub struct Centering<L: LinAlgEx>
{
    /// Centering parameters.
    pub par: CenteringParam<L::F>,
}

impl<L: LinAlgEx> Centering<L>
{
    /// Creates an instance.
    ///
    /// Returns [`Centering`] instance.
    pub fn new() -> Self
    {
        Centering {
            par: CenteringParam::default(),
        }
    }

    /// Changes centering parameters.
    ///
    /// Returns [`Centering`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut CenteringParam<L::F>)
    {
        f(&mut self.par);
        self
    }
}

impl<L: LinAlgEx> Centering<L>
where L::F: Float + Debug + LowerExp
{
    /// Starts to compute the analytic center.
    ///
    /// Returns `Ok` with a [`CenterPoint`]
    /// or `Err` with a [`CenteringFailure`] on a fatal numerical condition.
    /// Running out of the iteration budget is not an error:
    /// it yields `Ok` with [`CenteringStatus::ExcessIter`].
    /// * `mat_a` is \\(A\\) as a [`MatOp`].
    /// * `vec_b` is \\(b\\). The length of `vec_b` shall be the number of rows of \\(A\\).
    pub fn solve(&self, mat_a: &MatOp<L>, vec_b: &[L::F]) -> Result<CenterPoint<L::F>, CenteringFailure<L::F>>
    {
        let (m, n) = mat_a.size();

        if vec_b.len() != m || m < n {
            log::error!("Size mismatch: mat_a ({}, {}), vec_b {}", m, n, vec_b.len());
            return Err(CenteringFailure {
                err: CenteringError::InvalidShape,
                iter: 0,
                x: Vec::new(),
                decrements: Vec::new(),
            });
        }

        log::debug!("{:?}", self.par);

        let f0 = L::F::zero();
        let f1 = L::F::one();

        let mut x = vec![f0; n];
        let mut d = vec![f0; m];
        let mut g = vec![f0; n];
        let mut v = vec![f0; n];
        let mut t = vec![f0; m];
        let mut y = vec![f0; m];
        let mut asc = vec![f0; m * n];
        let mut h = vec![f0; n * (n + 1) / 2];
        let mut decrements = Vec::with_capacity(self.par.max_iter);

        log::info!("----- Started");

        for i in 0.. self.par.max_iter {
            let log_trig = self.par.log_period > 0 && i % self.par.log_period == 0;

            // Slacks d = 1./(b - A*x), fatal if the iterate is not strictly feasible.
            mat_a.op(-f1, &x, f0, &mut d);
            L::add(f1, vec_b, &mut d);
            for u in d.iter_mut() {
                if *u > f0 {
                    *u = u.recip();
                }
                else {
                    log::warn!("----- Infeasible");
                    log::warn!("{}: unreliable x {:?}", i, x);
                    return Err(CenteringFailure {
                        err: CenteringError::Infeasible,
                        iter: i, x, decrements,
                    });
                }
            }

            // Gradient g = A^T*d.
            mat_a.trans_op(f1, &d, f0, &mut g);

            // Hessian H = A^T*diag(d)^2*A, formed as Asc^T*Asc with Asc = diag(d)*A
            // on a scratch copy of A.
            L::copy(mat_a.as_ref(), &mut asc);
            L::scale_rows(m, n, &d, &mut asc);
            L::syrk_sp(m, n, &asc, &mut h);

            // Newton step H*v = -g.
            L::copy(&g, &mut v);
            L::scale(-f1, &mut v);
            if L::cholesky_sp(n, &mut h).is_err() {
                log::warn!("----- SingularSystem");
                log::warn!("{}: unreliable x {:?}", i, x);
                return Err(CenteringFailure {
                    err: CenteringError::SingularSystem,
                    iter: i, x, decrements,
                });
            }
            L::cholesky_solve_sp(n, &h, &mut v);

            // Newton decrement lam = -g^T*v.
            // A negative lam indicates a numerical fault: recorded verbatim in the
            // trace, treated as zero for the stopping test.
            let lam = -L::dot(&g, &v);
            let dec = if lam > f0 {lam.sqrt()} else {lam};
            decrements.push(dec);

            if log_trig {
                log::debug!("{}: decrement {:.2e}", i, dec);
            }
            else {
                log::trace!("{}: decrement {:.2e}", i, dec);
            }

            if dec.max(f0) < self.par.tol {
                log::info!("----- Converged");
                log::trace!("{}: x {:?}", i, x);
                return Ok(CenterPoint {
                    x, decrements,
                    status: CenteringStatus::Converged,
                });
            }

            // Backtracking line search over y = d .* (A*v).
            mat_a.op(f1, &v, f0, &mut t);
            L::transform_di(f1, &d, &t, f0, &mut y);
            let s = match Self::line_search(&y, lam, &self.par) {
                Ok(s) => s,
                Err(err) => {
                    log::warn!("----- StepUnderflow");
                    log::warn!("{}: unreliable x {:?}", i, x);
                    return Err(CenteringFailure {
                        err,
                        iter: i, x, decrements,
                    });
                },
            };
            log::trace!("{}: step {:.2e}", i, s);

            // x = x + s*v
            L::add(s, &v, &mut x);
        }

        log::warn!("----- ExcessIter");
        Ok(CenterPoint {
            x, decrements,
            status: CenteringStatus::ExcessIter,
        })
    }

    // Two-phase backtracking over the step length s, starting from a full step.
    fn line_search(y: &[L::F], lam: L::F, par: &CenteringParam<L::F>) -> Result<L::F, CenteringError>
    {
        let f0 = L::F::zero();
        let f1 = L::F::one();

        let mut s = f1;

        let mut max_y = L::F::neg_infinity();
        for u in y {
            max_y = max_y.max(*u);
        }

        // Feasibility phase: keep b - A*(x + s*v) strictly positive so that the
        // logarithms below stay defined.
        while max_y * s >= f1 {
            s = s * par.beta;
            if s < L::F::min_positive_value() {
                return Err(CenteringError::StepUnderflow);
            }
        }

        // Sufficient-decrease phase: Armijo condition on the barrier restricted
        // to the ray, phi(x + s*v) - phi(x) = -sum(log(1 - s*y)) < -alpha*s*lam.
        loop {
            let mut ts = f0;
            for u in y {
                ts = ts + (f1 - s * *u).ln();
            }
            if -ts < -(par.alpha * s * lam) {
                break;
            }
            s = s * par.beta;
            if s < L::F::min_positive_value() {
                return Err(CenteringError::StepUnderflow);
            }
        }

        Ok(s)
    }
}

//

#[test]
fn test_line_search1()
{
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    // the barrier increases along this ray, so no step length achieves
    // sufficient decrease and s shrinks until it underflows
    let y = &[1., 1.];
    let lam = 1.;

    let rslt = Centering::<L>::line_search(y, lam, &CenteringParam::default());

    assert_eq!(rslt.unwrap_err(), CenteringError::StepUnderflow);
}

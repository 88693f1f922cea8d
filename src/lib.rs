/*!
Chūshin ([中心](http://www.decodeunicode.org/en/u+4E2D) in Japanese) means center.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate for Rust computes the **analytic center** of a polyhedron
\\(\\{x \mid Ax \preceq b\\}\\),
i.e. the minimizer of the logarithmic barrier
\\[
\phi(x) = -\sum_i \log(b_i - a_i^T x),
\\]
by a damped Newton method with backtracking line search.

# General usage

1. Express your constraint system as a dense matrix \\(A \in \mathbb{R}^{m \times n}\\)
   (\\(m \ge n\\), \\({\bf rank}\ A = n\\)) and a vector \\(b \in \mathbb{R}^m\\).
   The feasible set shall be nonempty and bounded, and \\(b \succ 0\\) so that
   the origin is strictly feasible.
1. Choose a [`LinAlgEx`] implementation to use:
   * [`FloatGeneric`] -
     `num::Float`-generic, pure Rust, fewer environment-dependent problems.
1. Construct \\(A\\) with [`MatBuild`] and borrow it as a [`MatOp`].
1. Create a [`solver::Centering`] instance and optionally set its parameters.
1. Invoke [`solver::Centering::solve`] to get the center and the
   Newton decrement trace.

# Examples

The analytic center of the box \\(-1 \le x_0 \le 3,\ -2 \le x_1 \le 2\\)
is its midpoint \\((1, 0)\\):

```
use float_eq::assert_float_eq;
use chushin::prelude::*;
use chushin::*;

//env_logger::init(); // Use any logger crate as `chushin` uses `log` crate.

type La = FloatGeneric<f64>;
type AMatBuild = MatBuild<La>;
type ACentering = Centering<La>;

let mat_a = AMatBuild::new(4, 2).iter_rowmaj(&[
     1.,  0.,
     0.,  1.,
    -1.,  0.,
     0., -1.,
]);
let vec_b = [3., 2., 1., 2.];

let s = ACentering::new();
let cent = s.solve(&mat_a.as_op(), &vec_b).unwrap();

assert_eq!(cent.status, CenteringStatus::Converged);
assert_float_eq!(cent.x.as_slice(), [1., 0.].as_ref(), abs_all <= 1e-6);
```
*/

pub mod solver;

//

mod linalg_ex;

pub use linalg_ex::*;

//

mod floatgeneric;

pub use floatgeneric::*;

//

mod matop;

pub use matop::*;

//

mod matbuild;

pub use matbuild::*;

//

/// Prelude
pub mod prelude
{
    pub use crate::solver::{Centering, CenteringParam, CenteringStatus, CenteringError, CenteringFailure, CenterPoint};
    pub use crate::FloatGeneric;
}

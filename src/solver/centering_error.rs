use num_traits::Float;

/// Centering errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CenteringError
{
    /// Mismatched sizes of \\(A\\) and \\(b\\), or fewer rows than columns.
    InvalidShape,
    /// A slack turned non-positive; the iterate is not strictly feasible.
    Infeasible,
    /// Cholesky factorization of the Newton system broke down.
    SingularSystem,
    /// Line-search step length underflowed to zero.
    StepUnderflow,
}

impl core::fmt::Display for CenteringError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            CenteringError::InvalidShape   => "InvalidShape: mismatched sizes of A and b, or fewer rows than columns",
            CenteringError::Infeasible     => "Infeasible: a slack turned non-positive",
            CenteringError::SingularSystem => "SingularSystem: Cholesky factorization broke down",
            CenteringError::StepUnderflow  => "StepUnderflow: line-search step length underflowed to zero",
        })
    }
}

impl std::error::Error for CenteringError {}

//

/// Failed centering run.
///
/// Carries the originating [`CenteringError`] together with the state of the
/// run at the point of failure. `x` is the last iterate before the failing
/// step and shall be treated as unreliable.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteringFailure<F: Float>
{
    /// Originating error.
    pub err: CenteringError,
    /// Index of the outer iteration that failed.
    pub iter: usize,
    /// Last iterate, unreliable.
    pub x: Vec<F>,
    /// Newton decrement trace up to the failure.
    pub decrements: Vec<F>,
}

impl<F: Float> core::fmt::Display for CenteringFailure<F>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{} (iteration {})", self.err, self.iter)
    }
}

impl<F: Float + core::fmt::Debug> std::error::Error for CenteringFailure<F> {}

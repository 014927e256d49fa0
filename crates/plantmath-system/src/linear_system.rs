use faer::{Mat, MatRef};

use crate::discretization::discretize_ab;
use crate::error::{ensure_shape, SystemError};

/// A continuous-time linear time-invariant plant.
///
/// ```text
/// x' = A x + B u
/// y  = C x + D u
/// ```
#[derive(Debug, Clone)]
pub struct LinearSystem {
    a: Mat<f64>,
    b: Mat<f64>,
    c: Mat<f64>,
    d: Mat<f64>,
}

impl LinearSystem {
    /// Create a new plant from its continuous-time matrices.
    ///
    /// # Arguments
    ///
    /// * `a` - The system matrix with shape (states, states).
    /// * `b` - The input matrix with shape (states, inputs).
    /// * `c` - The output matrix with shape (outputs, states).
    /// * `d` - The feedthrough matrix with shape (outputs, inputs).
    pub fn new(a: Mat<f64>, b: Mat<f64>, c: Mat<f64>, d: Mat<f64>) -> Result<Self, SystemError> {
        let states = a.nrows();
        let inputs = b.ncols();
        let outputs = c.nrows();

        ensure_shape("A", a.as_ref(), (states, states))?;
        ensure_shape("B", b.as_ref(), (states, inputs))?;
        ensure_shape("C", c.as_ref(), (outputs, states))?;
        ensure_shape("D", d.as_ref(), (outputs, inputs))?;

        Ok(Self { a, b, c, d })
    }

    /// The system matrix.
    pub fn a(&self) -> MatRef<'_, f64> {
        self.a.as_ref()
    }

    /// The input matrix.
    pub fn b(&self) -> MatRef<'_, f64> {
        self.b.as_ref()
    }

    /// The output matrix.
    pub fn c(&self) -> MatRef<'_, f64> {
        self.c.as_ref()
    }

    /// The feedthrough matrix.
    pub fn d(&self) -> MatRef<'_, f64> {
        self.d.as_ref()
    }

    /// Number of states.
    pub fn num_states(&self) -> usize {
        self.a.nrows()
    }

    /// Number of inputs.
    pub fn num_inputs(&self) -> usize {
        self.b.ncols()
    }

    /// Number of outputs.
    pub fn num_outputs(&self) -> usize {
        self.c.nrows()
    }

    /// Advance the state by `dt` seconds holding the input constant.
    ///
    /// The model is discretized with [`discretize_ab`] on every call; callers stepping with a
    /// fixed timestep may want to cache the discrete matrices themselves.
    ///
    /// # Arguments
    ///
    /// * `x` - The current state with shape (states, 1).
    /// * `u` - The input with shape (inputs, 1).
    /// * `dt` - The timestep in seconds.
    pub fn calculate_x(
        &self,
        x: MatRef<'_, f64>,
        u: MatRef<'_, f64>,
        dt: f64,
    ) -> Result<Mat<f64>, SystemError> {
        ensure_shape("x", x, (self.num_states(), 1))?;
        ensure_shape("u", u, (self.num_inputs(), 1))?;

        let (disc_a, disc_b) = discretize_ab(self.a.as_ref(), self.b.as_ref(), dt)?;
        Ok(&disc_a * x + &disc_b * u)
    }

    /// Compute the output `y = C x + D u`.
    pub fn calculate_y(
        &self,
        x: MatRef<'_, f64>,
        u: MatRef<'_, f64>,
    ) -> Result<Mat<f64>, SystemError> {
        ensure_shape("x", x, (self.num_states(), 1))?;
        ensure_shape("u", u, (self.num_inputs(), 1))?;

        Ok(&self.c * x + &self.d * u)
    }
}

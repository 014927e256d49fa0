use faer::{Mat, MatRef};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{ensure_shape, SystemError};
use crate::linear_system::LinearSystem;
use crate::noise::make_white_noise_vector;

/// Parameters for [`LinearSystemSim`].
#[derive(Debug, Clone)]
pub struct SimParams {
    /// Whether to add white noise to the measured outputs.
    pub add_noise: bool,
    /// Standard deviation of each output measurement. Required when `add_noise` is set.
    pub measurement_std_devs: Option<Vec<f64>>,
    /// Optional RNG seed for deterministic runs.
    pub random_seed: Option<u64>,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            add_noise: false,
            measurement_std_devs: None,
            random_seed: Some(0),
        }
    }
}

/// Simulates a [`LinearSystem`] in discrete steps.
///
/// Each step the user sets the inputs, calls [`LinearSystemSim::update`] and reads the simulated
/// sensor outputs.
#[derive(Debug)]
pub struct LinearSystemSim {
    plant: LinearSystem,
    should_add_noise: bool,
    measurement_std_devs: Option<Vec<f64>>,
    rng: StdRng,
    x: Mat<f64>,
    u: Mat<f64>,
    y: Mat<f64>,
}

impl LinearSystemSim {
    /// Create a simulator with a zero initial state and zero inputs.
    ///
    /// # Errors
    ///
    /// * [`SystemError::MissingMeasurementStdDevs`] if noise is enabled without standard
    ///   deviations.
    /// * [`SystemError::ShapeMismatch`] if the number of standard deviations does not match the
    ///   number of outputs.
    pub fn new(plant: LinearSystem, params: SimParams) -> Result<Self, SystemError> {
        if let Some(std_devs) = &params.measurement_std_devs {
            if std_devs.len() != plant.num_outputs() {
                return Err(SystemError::ShapeMismatch {
                    name: "measurement_std_devs",
                    expected: (plant.num_outputs(), 1),
                    actual: (std_devs.len(), 1),
                });
            }
        } else if params.add_noise {
            return Err(SystemError::MissingMeasurementStdDevs);
        }

        let rng = match params.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => {
                let mut tr = rand::rng();
                StdRng::from_rng(&mut tr)
            }
        };

        Ok(Self {
            x: Mat::<f64>::zeros(plant.num_states(), 1),
            u: Mat::<f64>::zeros(plant.num_inputs(), 1),
            y: Mat::<f64>::zeros(plant.num_outputs(), 1),
            plant,
            should_add_noise: params.add_noise,
            measurement_std_devs: params.measurement_std_devs,
            rng,
        })
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Steps the true state with the current input, then recomputes the outputs and adds
    /// measurement noise if enabled.
    pub fn update(&mut self, dt: f64) -> Result<(), SystemError> {
        self.x = self
            .plant
            .calculate_x(self.x.as_ref(), self.u.as_ref(), dt)?;

        let mut y = self.plant.calculate_y(self.x.as_ref(), self.u.as_ref())?;
        if self.should_add_noise {
            let std_devs = self
                .measurement_std_devs
                .as_deref()
                .ok_or(SystemError::MissingMeasurementStdDevs)?;
            y += make_white_noise_vector(std_devs, &mut self.rng);
        }
        self.y = y;

        log::trace!("sim: stepped {dt}s, y = {:?}", self.y);
        Ok(())
    }

    /// The simulated plant.
    pub fn plant(&self) -> &LinearSystem {
        &self.plant
    }

    /// Whether measurement noise is added on update.
    pub fn should_add_noise(&self) -> bool {
        self.should_add_noise
    }

    /// Enable or disable measurement noise.
    pub fn set_should_add_noise(&mut self, should_add_noise: bool) {
        self.should_add_noise = should_add_noise;
    }

    /// The true state with shape (states, 1).
    pub fn state(&self) -> MatRef<'_, f64> {
        self.x.as_ref()
    }

    /// Overwrite the true state.
    pub fn set_state(&mut self, x: Mat<f64>) -> Result<(), SystemError> {
        ensure_shape("x", x.as_ref(), (self.plant.num_states(), 1))?;
        self.x = x;
        Ok(())
    }

    /// Set the whole input vector with shape (inputs, 1).
    pub fn set_input(&mut self, u: Mat<f64>) -> Result<(), SystemError> {
        ensure_shape("u", u.as_ref(), (self.plant.num_inputs(), 1))?;
        self.u = u;
        Ok(())
    }

    /// Set a single input.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not a valid input index.
    pub fn set_input_at(&mut self, row: usize, value: f64) {
        self.u.write(row, 0, value);
    }

    /// The current input vector.
    pub fn input(&self) -> MatRef<'_, f64> {
        self.u.as_ref()
    }

    /// The simulated outputs from the last update, with shape (outputs, 1).
    pub fn output(&self) -> MatRef<'_, f64> {
        self.y.as_ref()
    }

    /// A single simulated output.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not a valid output index.
    pub fn output_at(&self, row: usize) -> f64 {
        self.y.read(row, 0)
    }
}

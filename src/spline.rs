use crate::control_point::ControlPoint;
use crate::error::{SplineError, SplineResult};
use crate::polynomial::CubicPolynomial;
use crate::sample::Sample;
use crate::tridiagonal;

/// Points closer than this along x are considered coincident.
const MIN_X_SPACING: f64 = 1e-16;

/// C1-continuous piecewise cubic interpolant with constant extrapolation
/// outside the sampled domain. Immutable once constructed; to change the
/// sample data build a new spline.
pub struct Spline {
    control_points: Vec<ControlPoint>,
    polynomials: Vec<CubicPolynomial>,
    min_x: f64,
    max_x: f64,
    is_spacing_uniform: bool,
}

impl Spline {
    /// Builds a spline from fully specified Hermite data, skipping the
    /// derivative solver. Control points are sorted by x.
    ///
    /// # Errors
    /// Returns [SplineError::InvalidInput] when fewer than 2 control points
    /// are supplied or when two control points share an x value.
    pub fn new(control_points: Vec<ControlPoint>) -> SplineResult<Self> {
        if control_points.len() < 2 {
            return Err(SplineError::invalid_input(
                "spline must have at least 2 control points",
            ));
        }

        let number_of_segments = control_points.len() - 1;
        let mut spline = Spline {
            control_points,
            polynomials: Vec::with_capacity(number_of_segments),
            min_x: 0.0,
            max_x: 0.0,
            is_spacing_uniform: false,
        };

        spline.sort_control_points();
        spline.check_spacing()?;
        spline.calculate_polynomials();
        Ok(spline)
    }

    /// Builds a spline through `samples` with prescribed first derivatives at
    /// both ends, solving a tridiagonal system for the interior derivatives.
    ///
    /// The solved derivatives are expressed per normalized segment interval
    /// and the interior equations assume near-uniform sample spacing; with
    /// strongly irregular spacing the curve still interpolates every sample
    /// but its slopes are only approximate.
    ///
    /// # Errors
    /// Returns [SplineError::InvalidInput] when fewer than 2 samples are
    /// supplied or when two samples share an x value.
    pub fn from_samples(
        mut samples: Vec<Sample>,
        tangent_at_start: f64,
        tangent_at_end: f64,
    ) -> SplineResult<Self> {
        if samples.len() < 2 {
            return Err(SplineError::invalid_input(
                "spline must have at least 2 samples",
            ));
        }

        samples.sort();

        let derivatives = Self::solve_derivatives(&samples, tangent_at_start, tangent_at_end)?;
        log::debug!("solved derivatives: {:?}", derivatives);

        let control_points = samples
            .iter()
            .zip(derivatives.iter())
            .map(|(sample, derivative)| {
                ControlPoint::new(sample.get_x(), sample.get_y(), *derivative)
            })
            .collect();

        let spline = Self::new(control_points)?;
        if !spline.is_spacing_uniform {
            log::warn!("sample spacing is not uniform; solved tangents assume near-uniform spacing");
        }
        Ok(spline)
    }

    /// Evaluates the spline at `x`. Queries below the first control point
    /// return the first y value, queries at or above the last control point
    /// return the last y value.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.flat_boundary_value(x) {
            Some(result) => result,
            None => {
                let index = self.find_interval_index(x);
                self.polynomials[index].evaluate(self.normalized_parameter(index, x))
            }
        }
    }

    /// Evaluates the first derivative of the spline with respect to `x`.
    /// Outside the sampled domain the spline is constant, so the derivative
    /// is 0.
    pub fn evaluate_derivative(&self, x: f64) -> f64 {
        if self.flat_boundary_value(x).is_some() {
            return 0.0;
        }
        let index = self.find_interval_index(x);
        let width = self.control_points[index + 1].get_x() - self.control_points[index].get_x();
        self.polynomials[index].derivative(self.normalized_parameter(index, x)) / width
    }

    /// Evaluates the spline at every query in `x_vector`. Ascending query
    /// sequences reuse the previously found interval instead of searching
    /// from scratch.
    pub fn batch_evaluate(&self, x_vector: &Vec<f64>) -> Vec<f64> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            match self.flat_boundary_value(*x) {
                Some(result) => results.push(result),
                None => {
                    index = self.find_interval_index_with_hint(index, *x);
                    results.push(self.polynomials[index].evaluate(self.normalized_parameter(index, *x)));
                }
            }
        }
        results
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    fn solve_derivatives(
        samples: &[Sample],
        tangent_at_start: f64,
        tangent_at_end: f64,
    ) -> SplineResult<Vec<f64>> {
        let size = samples.len();

        // with two samples both derivatives are prescribed, nothing to solve
        if size == 2 {
            return Ok(vec![tangent_at_start, tangent_at_end]);
        }

        // clamped system: identity rows pin the boundary tangents, interior
        // rows are [1, 4, 1] with rhs 3 * (y[i+1] - y[i-1])
        let mut lower = vec![0.0; size];
        let mut diag = vec![0.0; size];
        let mut upper = vec![0.0; size];
        let mut rhs = vec![0.0; size];

        diag[0] = 1.0;
        rhs[0] = tangent_at_start;
        for i in 1..size - 1 {
            lower[i] = 1.0;
            diag[i] = 4.0;
            upper[i] = 1.0;
            rhs[i] = 3.0 * (samples[i + 1].get_y() - samples[i - 1].get_y());
        }
        diag[size - 1] = 1.0;
        rhs[size - 1] = tangent_at_end;

        tridiagonal::solve(&lower, &diag, &upper, &rhs)
    }

    fn sort_control_points(&mut self) {
        self.control_points.sort();
        self.min_x = self.control_points[0].get_x();
        self.max_x = self.control_points[self.control_points.len() - 1].get_x();
    }

    fn check_spacing(&mut self) -> SplineResult<()> {
        let x_spacing_vec: Vec<f64> = self
            .control_points
            .iter()
            .map(|p| p.get_x())
            .collect::<Vec<f64>>()
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect();

        if x_spacing_vec.iter().any(|spacing| *spacing < MIN_X_SPACING) {
            return Err(SplineError::invalid_input(
                "control points have equal x values",
            ));
        }

        self.is_spacing_uniform = x_spacing_vec
            .windows(2)
            .map(|spacing| (spacing[1] - spacing[0]).abs())
            .all(|difference| difference < MIN_X_SPACING);

        Ok(())
    }

    fn calculate_polynomials(&mut self) {
        for pair in self.control_points.windows(2) {
            self.polynomials
                .push(CubicPolynomial::from_hermite(&pair[0], &pair[1]));
        }
    }

    fn flat_boundary_value(&self, x: f64) -> Option<f64> {
        if x < self.min_x {
            Some(self.control_points[0].get_y())
        } else if x >= self.max_x {
            Some(self.control_points[self.control_points.len() - 1].get_y())
        } else {
            None
        }
    }

    fn normalized_parameter(&self, index: usize, x: f64) -> f64 {
        let x0 = self.control_points[index].get_x();
        let x1 = self.control_points[index + 1].get_x();
        (x - x0) / (x1 - x0)
    }

    fn find_interval_index(&self, x: f64) -> usize {
        if self.is_spacing_uniform {
            self.find_interval_index_uniform(x)
        } else {
            self.find_interval_index_bisect(x)
        }
    }

    fn find_interval_index_bisect(&self, x: f64) -> usize {
        let size = self.control_points.len();
        let mut min = 0;
        let mut max = size - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.control_points[mid].get_x() {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_uniform(&self, x: f64) -> usize {
        let number_of_segments = self.control_points.len() - 1;
        let relative_x = (x - self.min_x) / (self.max_x - self.min_x);
        let mut index = (relative_x * number_of_segments as f64).floor() as usize;

        if index > number_of_segments - 1 {
            index = number_of_segments - 1;
        }
        // rounding in relative_x can land one segment off
        if x < self.control_points[index].get_x() {
            index -= 1;
        } else if index < number_of_segments - 1 && x >= self.control_points[index + 1].get_x() {
            index += 1;
        }
        index
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if !self.is_in_interval_range(index_hint, x) {
            if index_hint < self.control_points.len() - 1
                && self.is_in_interval_range(index_hint + 1, x)
            {
                return index_hint + 1;
            } else {
                return self.find_interval_index(x);
            }
        }
        index_hint
    }

    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        self.control_points[interval_index].get_x() <= x
            && x < self.control_points[interval_index + 1].get_x()
    }
}

use crate::control_point::ControlPoint;

/// Cubic polynomial over the normalized segment parameter `t` in `[0, 1]`.
pub struct CubicPolynomial {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl CubicPolynomial {
    /// Hermite-to-power basis transform for the segment spanning `start` to `end`.
    /// The resulting polynomial matches both endpoint values and both endpoint
    /// derivatives: `evaluate(0) = start.y`, `evaluate(1) = end.y`,
    /// `derivative(0) = start.d`, `derivative(1) = end.d`.
    pub fn from_hermite(start: &ControlPoint, end: &ControlPoint) -> Self {
        let y0 = start.get_y();
        let y1 = end.get_y();
        let d0 = start.get_derivative();
        let d1 = end.get_derivative();

        CubicPolynomial {
            a: y0,
            b: d0,
            c: 3.0 * (y1 - y0) - 2.0 * d0 - d1,
            d: 2.0 * (y0 - y1) + d0 + d1,
        }
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        self.a + t * (self.b + t * (self.c + t * self.d))
    }

    pub fn derivative(&self, t: f64) -> f64 {
        self.b + t * (2.0 * self.c + 3.0 * self.d * t)
    }
}

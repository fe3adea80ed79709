use crate::Float;

/// A floating point accumulator.
///
/// Unlike plain summation with the `+` operator, this struct minimizes the
/// cumulative error by using [Kahan's algorithm with Neumaier's
/// improvements](https://en.wikipedia.org/wiki/Kahan_summation_algorithm).
#[derive(Clone, Debug, Default)]
pub(crate) struct Accumulator {
    sum: Float,
    compensation: Float,
}

impl Accumulator {
    /// Create a new accumulator with zero sum.
    #[inline]
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
        }
    }

    /// Get the accumulated total.
    #[inline]
    pub fn total(&self) -> Float {
        self.sum + self.compensation
    }
}

impl std::ops::Add<Float> for Accumulator {
    type Output = Accumulator;

    /// Accumulate the given number.
    ///
    /// This method moves the accumulator into the method upon invocation and
    /// out of the method on completion, so that the accumulator remains
    /// available for continued use. See `AddAssign` for the mutably borrowed
    /// version.
    fn add(self, rhs: Float) -> Self::Output {
        let mut lhs = self;
        lhs += rhs;
        lhs
    }
}

impl std::ops::AddAssign<Float> for Accumulator {
    fn add_assign(&mut self, rhs: Float) {
        let t = self.sum + rhs;
        if rhs.abs() < self.sum.abs() {
            self.compensation += (self.sum - t) + rhs;
        } else {
            self.compensation += (rhs - t) + self.sum;
        }
        self.sum = t;
    }
}

// ----------------------------------------------------------------------------------------------------------

/// Three accumulators summing tristimulus values component by component.
#[derive(Clone, Debug, Default)]
pub(crate) struct ThreeSum {
    x: Accumulator,
    y: Accumulator,
    z: Accumulator,
}

impl ThreeSum {
    /// Create a new three-sum.
    #[inline]
    pub const fn new() -> Self {
        Self {
            x: Accumulator::new(),
            y: Accumulator::new(),
            z: Accumulator::new(),
        }
    }

    /// Get the three totals.
    #[inline]
    pub fn value(&self) -> [Float; 3] {
        [self.x.total(), self.y.total(), self.z.total()]
    }
}

impl std::ops::AddAssign<[Float; 3]> for ThreeSum {
    fn add_assign(&mut self, rhs: [Float; 3]) {
        self.x += rhs[0];
        self.y += rhs[1];
        self.z += rhs[2];
    }
}

#[cfg(test)]
mod test {
    use super::{Accumulator, ThreeSum};

    #[test]
    fn test_accumulator() {
        let mut accum = Accumulator::default();
        accum += 1.0;
        accum += 10e100;
        accum += 1.0;
        accum += -10e100;
        assert_eq!(accum.total(), 2.0);
        assert_eq!(1.0 + 10e100 + 1.0 - 10e100, 0.0);

        let accum = Accumulator::new() + 0.1 + 0.2 + 0.3;
        assert_eq!(accum.total(), 0.6);
    }

    #[test]
    fn test_three_sum() {
        let mut sum = ThreeSum::new();
        sum += [1.0, 10e100, -1.0];
        sum += [1.0, 1.0, -1.0];
        sum += [1.0, -10e100, -1.0];
        assert_eq!(sum.value(), [3.0, 1.0, -3.0]);
    }
}

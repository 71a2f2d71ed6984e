pub struct StatsKernel;

impl StatsKernel {
    /// Sum of squares over a sequence of doubles.
    ///
    /// Accumulates left to right from 0.0. Total over all finite inputs;
    /// overflow to infinity follows IEEE-754 rules and is returned
    /// untouched rather than treated as a fault.
    pub fn sumsq(samples: &[f64]) -> f64 {
        samples.iter().fold(0.0, |acc, &v| acc + v * v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sumsq_empty_sequence_yields_zero() {
        assert_eq!(StatsKernel::sumsq(&[]), 0.0);
    }

    #[test]
    fn sumsq_single_value_is_its_square() {
        assert_eq!(StatsKernel::sumsq(&[4.0]), 16.0);
        assert_eq!(StatsKernel::sumsq(&[-0.5]), 0.25);
    }

    #[test]
    fn sumsq_pair_matches_elementwise_squares() {
        let forward = StatsKernel::sumsq(&[3.0, 4.0]);
        let reversed = StatsKernel::sumsq(&[4.0, 3.0]);
        assert_eq!(forward, 25.0);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn sumsq_known_sequences() {
        assert_eq!(StatsKernel::sumsq(&[1.0, 2.0, 3.0]), 14.0);
        assert_eq!(StatsKernel::sumsq(&[-2.0, 2.0]), 8.0);
        assert_eq!(StatsKernel::sumsq(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn sumsq_is_nonnegative_for_finite_input() {
        let sequences: [&[f64]; 4] = [
            &[-1.5, 2.5, -3.5],
            &[1e-200, -1e-200],
            &[0.0],
            &[7.25, -7.25, 0.125],
        ];
        for samples in sequences {
            assert!(StatsKernel::sumsq(samples) >= 0.0);
        }
    }

    #[test]
    fn sumsq_overflow_saturates_to_positive_infinity() {
        let result = StatsKernel::sumsq(&[1e200, 1e200]);
        assert!(result.is_infinite());
        assert!(result.is_sign_positive());
    }
}

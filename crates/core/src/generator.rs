use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{MAX_ADDEND, MAX_TOTAL, Operator, Problem};

/// Supplies the next problem for a drill.
///
/// The drill reducer only sees this trait, so tests can script exact problems
/// while the app draws them at random.
pub trait ProblemSource {
    fn next_problem(&mut self) -> Problem;
}

/// Draws uniformly random problems within the drill's number ranges.
#[derive(Debug, Clone)]
pub struct ProblemGenerator<R> {
    rng: R,
}

impl<R: Rng> ProblemGenerator<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws one problem.
    ///
    /// Addition picks `lhs` in `1..=5` then `rhs` in `1..=10 - lhs`; subtraction picks
    /// `lhs` in `1..=10` then `rhs` in `1..=lhs`. Neither range can be empty.
    pub fn generate(&mut self) -> Problem {
        let operator = if self.rng.random_bool(0.5) {
            Operator::Add
        } else {
            Operator::Subtract
        };

        let (lhs, rhs) = match operator {
            Operator::Add => {
                let lhs = self.rng.random_range(1..=MAX_ADDEND);
                (lhs, self.rng.random_range(1..=MAX_TOTAL - lhs))
            }
            Operator::Subtract => {
                let lhs = self.rng.random_range(1..=MAX_TOTAL);
                (lhs, self.rng.random_range(1..=lhs))
            }
        };

        Problem::from_drawn(lhs, operator, rhs)
    }
}

impl ProblemGenerator<StdRng> {
    /// Generator with a fixed seed, for reproducible drills.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ProblemSource for ProblemGenerator<R> {
    fn next_problem(&mut self) -> Problem {
        self.generate()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::time::FIXED_TEST_SEED;

    #[test]
    fn addition_problems_stay_within_ten() {
        let mut generator = ProblemGenerator::seeded(FIXED_TEST_SEED);
        for _ in 0..2_000 {
            let problem = generator.generate();
            if problem.operator() == Operator::Add {
                assert!((1..=5).contains(&problem.lhs()), "{problem}");
                assert!(problem.rhs() >= 1, "{problem}");
                assert!(problem.lhs() + problem.rhs() <= 10, "{problem}");
                assert_eq!(problem.answer(), problem.lhs() + problem.rhs());
            }
        }
    }

    #[test]
    fn subtraction_problems_never_go_negative() {
        let mut generator = ProblemGenerator::seeded(FIXED_TEST_SEED + 1);
        for _ in 0..2_000 {
            let problem = generator.generate();
            if problem.operator() == Operator::Subtract {
                assert!(problem.rhs() >= 1, "{problem}");
                assert!(problem.rhs() <= problem.lhs(), "{problem}");
                assert!(problem.lhs() <= 10, "{problem}");
                assert_eq!(problem.answer(), problem.lhs() - problem.rhs());
            }
        }
    }

    #[test]
    fn both_operators_and_edge_values_show_up() {
        let mut generator = ProblemGenerator::seeded(FIXED_TEST_SEED);
        let problems: Vec<Problem> = (0..2_000).map(|_| generator.generate()).collect();

        let operators: HashSet<Operator> = problems.iter().map(Problem::operator).collect();
        assert_eq!(operators.len(), 2);

        assert!(problems.iter().any(|p| p.answer() == 10));
        assert!(problems.iter().any(|p| p.answer() == 0));
        assert!(
            problems
                .iter()
                .any(|p| p.operator() == Operator::Subtract && p.lhs() == 10)
        );
    }

    #[test]
    fn same_seed_yields_same_sequence() {
        let mut left = ProblemGenerator::seeded(42);
        let mut right = ProblemGenerator::seeded(42);
        for _ in 0..50 {
            assert_eq!(left.next_problem(), right.next_problem());
        }
    }
}

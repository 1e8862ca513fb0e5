use super::solvers::traits::Objective;
use std::f64::consts::PI;

/// Rastrigin function: `A*n + sum(x^2 - A*cos(2*pi*x))`
///
/// Global minimum 0 at the origin, surrounded by a regular grid of local minima.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rastrigin {
    pub amplitude: f64,
}

impl Default for Rastrigin {
    fn default() -> Self {
        Self { amplitude: 10.0 }
    }
}

impl Objective for Rastrigin {
    fn cost(&self, position: &[f64]) -> f64 {
        let a = self.amplitude;
        a * position.len() as f64
            + position
                .iter()
                .map(|&x| x * x - a * (2.0 * PI * x).cos())
                .sum::<f64>()
    }

    fn gradient(&self, position: &[f64]) -> Vec<f64> {
        let a = self.amplitude;
        position
            .iter()
            .map(|&x| 2.0 * x + 2.0 * PI * a * (2.0 * PI * x).sin())
            .collect()
    }
}

/// Sum of squares
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sphere;

impl Objective for Sphere {
    fn cost(&self, position: &[f64]) -> f64 {
        position.iter().map(|&x| x * x).sum()
    }

    fn gradient(&self, position: &[f64]) -> Vec<f64> {
        position.iter().map(|&x| 2.0 * x).collect()
    }
}

/// Objective assembled from a pair of closures
pub struct FnObjective<F, G> {
    cost: F,
    gradient: G,
}

impl<F, G> FnObjective<F, G>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64]) -> Vec<f64>,
{
    pub fn new(cost: F, gradient: G) -> Self {
        Self { cost, gradient }
    }
}

impl<F, G> Objective for FnObjective<F, G>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64]) -> Vec<f64>,
{
    fn cost(&self, position: &[f64]) -> f64 {
        (self.cost)(position)
    }

    fn gradient(&self, position: &[f64]) -> Vec<f64> {
        (self.gradient)(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn central_difference(objective: &dyn Objective, x: &[f64]) -> Vec<f64> {
        let h = 1e-6;
        (0..x.len())
            .map(|i| {
                let mut plus = x.to_vec();
                let mut minus = x.to_vec();
                plus[i] += h;
                minus[i] -= h;
                (objective.cost(&plus) - objective.cost(&minus)) / (2.0 * h)
            })
            .collect()
    }

    #[test]
    fn rastrigin_is_zero_at_origin() {
        let f = Rastrigin::default();
        assert!(f.cost(&[0.0, 0.0]).abs() < 1e-12);
        assert!(f.gradient(&[0.0, 0.0]).iter().all(|g| g.abs() < 1e-12));
    }

    #[test]
    fn rastrigin_at_integer_lattice() {
        // cos(2*pi*k) == 1, so each coordinate contributes k^2
        let f = Rastrigin::default();
        assert!((f.cost(&[1.0, 2.0]) - 5.0).abs() < 1e-9);
        assert!((f.cost(&[-3.0]) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn rastrigin_gradient_matches_finite_difference() {
        let f = Rastrigin::default();
        let x = [0.3, -1.7, 4.21];
        for (analytic, numeric) in f.gradient(&x).iter().zip(central_difference(&f, &x)) {
            assert!((analytic - numeric).abs() < 1e-4, "{analytic} vs {numeric}");
        }
    }

    #[test]
    fn sphere_value_and_gradient() {
        assert_eq!(Sphere.cost(&[3.0, 4.0]), 25.0);
        assert_eq!(Sphere.gradient(&[3.0, 4.0]), vec![6.0, 8.0]);
    }

    #[test]
    fn closures_act_as_objective() {
        let shifted = FnObjective::new(
            |x: &[f64]| (x[0] - 1.0).powi(2),
            |x: &[f64]| vec![2.0 * (x[0] - 1.0)],
        );
        assert_eq!(shifted.cost(&[1.0]), 0.0);
        assert_eq!(shifted.gradient(&[3.0]), vec![4.0]);
    }
}

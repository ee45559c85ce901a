//! Cosmic Background
//!
//! Gradient wash with a scatter of pulsing particles behind the screen.

use dioxus::prelude::*;
use rand::Rng;

/// One pulsing dot of the background.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub width_px: f64,
    pub height_px: f64,
    pub top_pct: f64,
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            width_px: rng.random_range(1.0..4.0),
            height_px: rng.random_range(1.0..4.0),
            top_pct: rng.random_range(0.0..100.0),
            left_pct: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..5.0),
            duration_s: rng.random_range(2.0..5.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {width:.2}px; height: {height:.2}px; top: {top:.2}%; left: {left:.2}%; \
             animation-delay: {delay:.2}s; animation-duration: {duration:.2}s;",
            width = self.width_px,
            height = self.height_px,
            top = self.top_pct,
            left = self.left_pct,
            delay = self.delay_s,
            duration = self.duration_s,
        )
    }
}

pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

/// Background layer. Particles are scattered once per mount.
#[component]
pub fn CosmicBackground(count: usize) -> Element {
    let particles = use_hook(move || scatter(count, &mut rand::rng()));

    rsx! {
        div { class: "cosmic-background",
            div { class: "cosmic-wash" }
            for (i, particle) in particles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "particle",
                    style: "{particle.style()}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn scatter_respects_count_and_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = scatter(50, &mut rng);
        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert!((1.0..4.0).contains(&p.width_px));
            assert!((1.0..4.0).contains(&p.height_px));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..5.0).contains(&p.delay_s));
            assert!((2.0..5.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn width_and_height_are_drawn_separately() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = scatter(50, &mut rng);
        assert!(particles.iter().any(|p| p.width_px != p.height_px));
    }

    #[test]
    fn style_sets_each_dimension() {
        let p = Particle {
            width_px: 2.5,
            height_px: 1.25,
            top_pct: 10.0,
            left_pct: 20.0,
            delay_s: 1.0,
            duration_s: 3.0,
        };
        assert!(p.style().starts_with("width: 2.50px; height: 1.25px;"));
    }

    #[test]
    fn zero_particles() {
        assert!(scatter(0, &mut StdRng::seed_from_u64(1)).is_empty());
    }
}

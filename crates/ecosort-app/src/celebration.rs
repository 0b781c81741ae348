//! Celebration and confetti signals drawn from the injected RNG.

use ecosort_core::rng::DeterministicRng;
use serde::Serialize;

/// Number of particles in one confetti burst.
pub const CONFETTI_PARTICLES: u32 = 20;

/// Streak from which a correct answer throws confetti.
pub const CONFETTI_STREAK: u32 = 3;

const CONFETTI_GLYPHS: [&str; 4] = ["🎉", "✨", "🌟", "💫"];

/// Floating points badge for a correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Celebration {
    /// Points awarded.
    pub points: u32,
    /// True while a streak of [`CONFETTI_STREAK`] or more is running.
    pub is_streak: bool,
    /// Glyph shown next to the points.
    pub glyph: &'static str,
}

/// One confetti particle. Positions are percentages of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfettiParticle {
    /// Index within the burst.
    pub id: u32,
    /// Horizontal position, `[0, 100)`.
    pub x: f64,
    /// Vertical position, `[0, 100)`.
    pub y: f64,
    /// Rotation in degrees, `[0, 360)`.
    pub rotation: f64,
    /// Particle glyph.
    pub glyph: &'static str,
}

/// Celebration badge for a correct answer.
#[must_use]
pub fn celebrate(points: u32, streak_after: u32) -> Celebration {
    Celebration {
        points,
        is_streak: streak_after >= CONFETTI_STREAK,
        glyph: if streak_after >= 5 { "🎉" } else { "✨" },
    }
}

/// Confetti for a correct answer; empty below [`CONFETTI_STREAK`].
pub fn confetti_for(streak_after: u32, rng: &mut dyn DeterministicRng) -> Vec<ConfettiParticle> {
    if streak_after < CONFETTI_STREAK {
        return Vec::new();
    }
    (0..CONFETTI_PARTICLES)
        .map(|id| ConfettiParticle {
            id,
            x: rng.next_f64() * 100.0,
            y: rng.next_f64() * 100.0,
            rotation: rng.next_f64() * 360.0,
            glyph: pick_glyph(rng.next_f64()),
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn pick_glyph(roll: f64) -> &'static str {
    let index = (roll * CONFETTI_GLYPHS.len() as f64) as usize;
    CONFETTI_GLYPHS[index.min(CONFETTI_GLYPHS.len() - 1)]
}

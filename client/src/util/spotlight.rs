//! Spotlight glow math for the bento grid.
//!
//! The grid measures each card once per pointer move and hands the rectangles
//! here; the result is written straight to CSS custom properties by the
//! component, so none of this goes through reactive state.

#[cfg(test)]
#[path = "spotlight_test.rs"]
mod spotlight_test;

use crate::config::EffectsConfig;

/// Opacity of the global glow when the pointer is over a card.
pub const MAX_SPOTLIGHT_OPACITY: f64 = 0.8;

/// A card's bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Distance from the pointer to the card centre, less half the larger
    /// side, floored at zero. A pointer anywhere over the card is at 0.
    #[must_use]
    pub fn effective_distance(&self, x: f64, y: f64) -> f64 {
        let (cx, cy) = self.center();
        ((x - cx).hypot(y - cy) - self.width.max(self.height) / 2.0).max(0.0)
    }

    /// Pointer position as percentages of the card box (may fall outside
    /// 0..100 when the pointer is off the card).
    #[must_use]
    pub fn relative_percent(&self, x: f64, y: f64) -> (f64, f64) {
        let pct = |offset: f64, size: f64| if size > 0.0 { offset / size * 100.0 } else { 50.0 };
        (pct(x - self.left, self.width), pct(y - self.top, self.height))
    }
}

/// 1 inside `proximity`, 0 beyond `fade`, linear in between.
#[must_use]
pub fn glow_intensity(distance: f64, proximity: f64, fade: f64) -> f64 {
    if distance <= proximity {
        1.0
    } else if distance >= fade {
        0.0
    } else {
        (fade - distance) / (fade - proximity)
    }
}

/// Per-card output of one pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardGlow {
    pub x_pct: f64,
    pub y_pct: f64,
    pub intensity: f64,
}

/// Everything the grid writes for one pointer move.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotlightFrame {
    pub cards: Vec<CardGlow>,
    pub glow_opacity: f64,
}

impl SpotlightFrame {
    /// Frame for a pointer outside the section: nothing lit.
    #[must_use]
    pub fn inactive(card_count: usize) -> Self {
        Self {
            cards: vec![CardGlow { x_pct: 50.0, y_pct: 50.0, intensity: 0.0 }; card_count],
            glow_opacity: 0.0,
        }
    }
}

/// Compute card glows and the global glow opacity for a pointer at `(x, y)`.
#[must_use]
pub fn compute(cards: &[CardRect], x: f64, y: f64, cfg: &EffectsConfig) -> SpotlightFrame {
    if !cfg.enable_spotlight {
        return SpotlightFrame::inactive(cards.len());
    }
    let proximity = cfg.proximity();
    let fade = cfg.fade_distance();
    let mut nearest = f64::INFINITY;
    let cards = cards
        .iter()
        .map(|rect| {
            let distance = rect.effective_distance(x, y);
            nearest = nearest.min(distance);
            let (x_pct, y_pct) = rect.relative_percent(x, y);
            CardGlow { x_pct, y_pct, intensity: glow_intensity(distance, proximity, fade) }
        })
        .collect::<Vec<_>>();
    let glow_opacity = if nearest.is_finite() {
        MAX_SPOTLIGHT_OPACITY * glow_intensity(nearest, proximity, fade)
    } else {
        0.0
    };
    SpotlightFrame { cards, glow_opacity }
}

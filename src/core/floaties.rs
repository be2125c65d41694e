//! Drifting emoji decoration behind the grid.

use crate::constants::FLOATY_EMOJIS;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Floaty {
    pub emoji: &'static str,
    pub left_pct: f64,
    pub size_px: u32,
    pub delay_sec: f64,
    pub duration_sec: f64,
    pub opacity: f64,
}

impl Floaty {
    pub fn style(&self) -> String {
        format!(
            "left:{:.2}%;animation:floatDown {:.2}s linear {:.2}s infinite;opacity:{:.2};font-size:{}px;filter:saturate(1.2)",
            self.left_pct, self.duration_sec, self.delay_sec, self.opacity, self.size_px
        )
    }
}

pub const FLOAT_DOWN_KEYFRAMES: &str = "@keyframes floatDown{0%{transform:translateY(-10%) translateX(0)}50%{transform:translateY(50vh) translateX(8px)}100%{transform:translateY(110%) translateX(-8px)}}";

pub fn scatter(rng: &mut impl Rng, count: usize) -> Vec<Floaty> {
    (0..count)
        .map(|i| Floaty {
            emoji: FLOATY_EMOJIS[i % FLOATY_EMOJIS.len()],
            left_pct: rng.gen_range(0.0..100.0),
            size_px: 22 + rng.gen_range(0..=22),
            delay_sec: rng.gen_range(0.0..4.0),
            duration_sec: rng.gen_range(10.0..20.0),
            opacity: rng.gen_range(0.2..0.55),
        })
        .collect()
}

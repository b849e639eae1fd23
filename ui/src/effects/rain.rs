//! Falling-glyph background model.
//!
//! The field keeps one drop position (in glyph rows) per screen column and
//! paints through a [`GlyphSurface`], so the tick logic runs the same against
//! a browser canvas or a recording surface in tests.

use rand::Rng;

pub const GLYPHS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz<>{}[]()";

#[derive(Debug, Clone, PartialEq)]
pub struct RainConfig {
    pub tick_ms: u32,
    /// Viewports narrower than this use the small glyph size.
    pub narrow_breakpoint_px: f64,
    pub narrow_glyph_px: f64,
    pub wide_glyph_px: f64,
    /// Chance per tick that a drop below the bottom edge restarts at the top.
    pub reset_probability: f64,
    pub glyphs: &'static str,
    pub fade_color: &'static str,
    pub ink_rgb: (u8, u8, u8),
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            narrow_breakpoint_px: 768.0,
            narrow_glyph_px: 10.0,
            wide_glyph_px: 14.0,
            reset_probability: 0.025,
            glyphs: GLYPHS,
            fade_color: "rgba(248, 250, 252, 0.05)",
            ink_rgb: (70, 130, 200),
        }
    }
}

impl RainConfig {
    pub fn glyph_px_for(&self, viewport_width: f64) -> f64 {
        if viewport_width < self.narrow_breakpoint_px {
            self.narrow_glyph_px
        } else {
            self.wide_glyph_px
        }
    }
}

/// Minimal 2D drawing target for the rain.
pub trait GlyphSurface {
    /// Cover the whole surface with a translucent colour.
    fn fade(&mut self, color: &str, width: f64, height: f64);

    fn set_font(&mut self, font: &str);

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, color: &str);
}

#[derive(Debug, Clone)]
pub struct RainField {
    config: RainConfig,
    glyphs: Vec<char>,
    glyph_px: f64,
    width: f64,
    height: f64,
    drops: Vec<u32>,
}

impl RainField {
    /// Size the field for a viewport. Column count is fixed from here on.
    pub fn new(width: f64, height: f64, config: RainConfig) -> Self {
        let glyph_px = config.glyph_px_for(width);
        let columns = (width.max(0.0) / glyph_px).floor() as usize;
        let glyphs = config.glyphs.chars().collect();
        Self {
            config,
            glyphs,
            glyph_px,
            width,
            height,
            drops: vec![1; columns],
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn glyph_px(&self) -> f64 {
        self.glyph_px
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    /// Track new surface dimensions. Existing drops are kept as they are.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Paint one frame and move every drop down one row.
    pub fn tick<S, R>(&mut self, surface: &mut S, rng: &mut R)
    where
        S: GlyphSurface + ?Sized,
        R: Rng + ?Sized,
    {
        surface.fade(self.config.fade_color, self.width, self.height);
        surface.set_font(&format!("{}px monospace", self.glyph_px));

        let (r, g, b) = self.config.ink_rgb;
        for (column, drop) in self.drops.iter_mut().enumerate() {
            let glyph = match self.glyphs.len() {
                0 => ' ',
                n => self.glyphs[rng.gen_range(0..n)],
            };
            let alpha = (rng.gen::<f64>() * 0.95 + 0.5).min(1.0);
            let x = column as f64 * self.glyph_px;
            let y = f64::from(*drop) * self.glyph_px;
            surface.draw_glyph(glyph, x, y, &format!("rgba({r}, {g}, {b}, {alpha:.3})"));

            if y > self.height && rng.gen::<f64>() > 1.0 - self.config.reset_probability {
                *drop = 0;
            }
            *drop += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Default)]
    struct Recording {
        ops: Vec<Op>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Fade { color: String, width: f64, height: f64 },
        Font(String),
        Glyph { glyph: char, x: f64, y: f64, color: String },
    }

    impl GlyphSurface for Recording {
        fn fade(&mut self, color: &str, width: f64, height: f64) {
            self.ops.push(Op::Fade {
                color: color.to_string(),
                width,
                height,
            });
        }

        fn set_font(&mut self, font: &str) {
            self.ops.push(Op::Font(font.to_string()));
        }

        fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, color: &str) {
            self.ops.push(Op::Glyph {
                glyph,
                x,
                y,
                color: color.to_string(),
            });
        }
    }

    fn zero_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn column_count_follows_breakpoint() {
        let narrow = RainField::new(500.0, 800.0, RainConfig::default());
        assert_eq!(narrow.glyph_px(), 10.0);
        assert_eq!(narrow.columns(), 50);

        let wide = RainField::new(1000.0, 800.0, RainConfig::default());
        assert_eq!(wide.glyph_px(), 14.0);
        assert_eq!(wide.columns(), 71);

        let at_breakpoint = RainField::new(768.0, 800.0, RainConfig::default());
        assert_eq!(at_breakpoint.glyph_px(), 14.0);
        assert_eq!(at_breakpoint.columns(), 54);
    }

    #[test]
    fn drops_start_at_one() {
        let field = RainField::new(140.0, 100.0, RainConfig::default());
        assert!(field.drops().iter().all(|&d| d == 1));
    }

    #[test]
    fn zero_width_has_no_columns() {
        let mut field = RainField::new(0.0, 100.0, RainConfig::default());
        let mut surface = Recording::default();
        field.tick(&mut surface, &mut zero_rng());
        assert_eq!(field.columns(), 0);
        assert_eq!(surface.ops.len(), 2);
    }

    #[test]
    fn fade_is_painted_once_before_glyphs() {
        let mut field = RainField::new(1400.0, 900.0, RainConfig::default());
        let mut surface = Recording::default();
        field.tick(&mut surface, &mut zero_rng());

        assert_eq!(
            surface.ops[0],
            Op::Fade {
                color: "rgba(248, 250, 252, 0.05)".into(),
                width: 1400.0,
                height: 900.0,
            }
        );
        assert_eq!(surface.ops[1], Op::Font("14px monospace".into()));
        let fades = surface.ops.iter().filter(|op| matches!(op, Op::Fade { .. })).count();
        let glyphs = surface.ops.iter().filter(|op| matches!(op, Op::Glyph { .. })).count();
        assert_eq!(fades, 1);
        assert_eq!(glyphs, field.columns());
    }

    #[test]
    fn glyphs_land_on_the_column_grid() {
        let mut field = RainField::new(42.0, 900.0, RainConfig::default());
        let mut surface = Recording::default();
        field.tick(&mut surface, &mut zero_rng());

        let positions: Vec<(f64, f64)> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Glyph { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(positions, vec![(0.0, 10.0), (10.0, 10.0), (20.0, 10.0), (30.0, 10.0)]);
    }

    #[test]
    fn ink_alpha_has_a_floor_of_one_half() {
        let mut field = RainField::new(20.0, 900.0, RainConfig::default());
        let mut surface = Recording::default();
        field.tick(&mut surface, &mut zero_rng());

        match &surface.ops[2] {
            Op::Glyph { glyph, color, .. } => {
                assert_eq!(*glyph, '0');
                assert_eq!(color, "rgba(70, 130, 200, 0.500)");
            }
            other => panic!("expected glyph, got {other:?}"),
        }
    }

    #[test]
    fn drawn_glyphs_come_from_the_alphabet() {
        let mut field = RainField::new(1400.0, 900.0, RainConfig::default());
        let mut surface = Recording::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5 {
            field.tick(&mut surface, &mut rng);
        }
        for op in &surface.ops {
            if let Op::Glyph { glyph, color, .. } = op {
                assert!(GLYPHS.contains(*glyph), "unexpected glyph {glyph}");
                assert!(color.starts_with("rgba(70, 130, 200, "));
            }
        }
    }

    #[test]
    fn every_tick_advances_each_drop_by_one() {
        let mut field = RainField::new(1000.0, 5_000.0, RainConfig::default());
        let mut surface = Recording::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            field.tick(&mut surface, &mut rng);
        }
        assert!(field.drops().iter().all(|&d| d == 11));
    }

    #[test]
    fn drops_reset_only_below_the_bottom_edge() {
        // 10 rows of 14px fit; drops pass the edge after a handful of ticks.
        let mut field = RainField::new(1400.0, 140.0, RainConfig::default());
        let mut surface = Recording::default();
        let mut rng = StdRng::seed_from_u64(1234);

        for _ in 0..400 {
            let before: Vec<u32> = field.drops().to_vec();
            field.tick(&mut surface, &mut rng);
            for (old, new) in before.iter().zip(field.drops()) {
                if *new != old + 1 {
                    assert_eq!(*new, 1, "reset drops restart at the top");
                    assert!(f64::from(*old) * 14.0 > 140.0, "reset above the edge");
                }
            }
        }
        assert!(field.drops().iter().any(|&d| d < 401));
    }

    #[test]
    fn never_resets_when_random_stays_low() {
        let mut field = RainField::new(140.0, 0.0, RainConfig::default());
        let mut surface = Recording::default();
        for _ in 0..20 {
            field.tick(&mut surface, &mut zero_rng());
        }
        assert!(field.drops().iter().all(|&d| d == 21));
    }

    #[test]
    fn resize_keeps_drop_count() {
        let mut field = RainField::new(500.0, 800.0, RainConfig::default());
        field.resize(1920.0, 1080.0);
        assert_eq!(field.columns(), 50);
        assert_eq!(field.size(), (1920.0, 1080.0));
        assert_eq!(field.glyph_px(), 10.0);
    }
}

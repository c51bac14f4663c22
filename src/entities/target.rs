/// Which of the two alternating ring colours a ring is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingColor {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub x: f64,
    pub y: f64,
    /// Current radius in pixels
    pub size: f64,
    pub growing: bool,
}

impl Target {
    pub const MAX_SIZE: f64 = 30.0;
    /// Pixels of radius gained or lost per tick
    pub const GROWTH_RATE: f64 = 0.2;
    /// Radius of each ring relative to `size`, outermost first
    pub const RING_RATIOS: [f64; 4] = [1.0, 0.8, 0.6, 0.4];

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            size: 0.0,
            growing: true,
        }
    }

    /// Advance one tick: grow until the next step would reach MAX_SIZE, then shrink for good
    pub fn advance(&mut self) {
        if self.size + Self::GROWTH_RATE >= Self::MAX_SIZE {
            self.growing = false;
        }

        if self.growing {
            self.size += Self::GROWTH_RATE;
        } else {
            self.size -= Self::GROWTH_RATE;
        }
    }

    pub fn is_expired(&self) -> bool {
        self.size <= 0.0
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        if self.size <= 0.0 {
            return false;
        }
        let dx = self.x - px;
        let dy = self.y - py;
        (dx * dx + dy * dy).sqrt() <= self.size
    }

    /// Concentric rings to draw, outermost first
    pub fn rings(&self) -> [(f64, RingColor); 4] {
        let mut rings = [(0.0, RingColor::Primary); 4];
        for (i, ratio) in Self::RING_RATIOS.iter().enumerate() {
            let color = if i % 2 == 0 {
                RingColor::Primary
            } else {
                RingColor::Secondary
            };
            rings[i] = (self.size * ratio, color);
        }
        rings
    }
}

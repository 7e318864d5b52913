#[cfg(test)]
mod tests;

/// `Color` は 8 ビット 4 チャンネルの RGBA カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Color {
    pub(crate) const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub(crate) const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub(crate) const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// 2 色をチャンネルごとに線形補間する. 比率 `t` は [0, 1] に収める.
    pub(crate) fn lerp(self, end: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t) as u8;
        Self {
            r: ch(self.r, end.r),
            g: ch(self.g, end.g),
            b: ch(self.b, end.b),
            a: ch(self.a, end.a),
        }
    }

    /// アルファを純白の背景へ合成した不透明色を返す.
    pub(crate) fn over_white(self) -> Self {
        let a = self.a as u32;
        let ch = |c: u8| ((c as u32 * a + 255 * (255 - a)) / 255) as u8;
        Self::rgb(ch(self.r), ch(self.g), ch(self.b))
    }
}

/// 周期 1 周の日数.
pub(crate) const CYCLE_DAYS: u8 = 28;

/// `Phase` は周期の中のどの期間かを表す. 日番号は 0 始まり.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// 第 0-4 日. 月経期.
    Menstrual,
    /// 第 5-12 日. 卵胞期.
    Follicular,
    /// 第 13-15 日. 排卵期.
    Ovulation,
    /// 第 16-27 日. 黄体期.
    Luteal,
}

impl Phase {
    /// 日番号の属する期間を返す. 区切りは第 5, 13, 16 日で固定.
    pub(crate) fn of_day(day: u8) -> Self {
        debug_assert!(day < CYCLE_DAYS);
        match day {
            0..=4 => Phase::Menstrual,
            5..=12 => Phase::Follicular,
            13..=15 => Phase::Ovulation,
            _ => Phase::Luteal,
        }
    }
}

/// `MarkShape` はリングに置く印の形を表す.
#[derive(Debug, Clone, Copy)]
pub(crate) enum MarkShape {
    /// 直径 `diameter` の円.
    Dot { diameter: u32 },
    /// 頂点を上に向けた三角形. 底辺は中心の `size * 3 / 4` 下.
    Triangle { size: u32 },
    /// 一辺 `half * 2` の軸平行な正方形.
    Square { half: u32 },
    /// 対角線の半分が `half` のひし形.
    Diamond { half: u32 },
}

impl MarkShape {
    /// 各辺を `amount` だけ外へ広げた同じ形を返す. 縁取りの下地に使う.
    pub(crate) fn inflate(self, amount: u32) -> Self {
        match self {
            MarkShape::Dot { diameter } => MarkShape::Dot {
                diameter: diameter + amount * 2,
            },
            MarkShape::Triangle { size } => MarkShape::Triangle {
                size: size + amount,
            },
            MarkShape::Square { half } => MarkShape::Square {
                half: half + amount,
            },
            MarkShape::Diamond { half } => MarkShape::Diamond {
                half: half + amount,
            },
        }
    }
}

/// `MarkStyle` はある期間の印の描き方を表す.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MarkStyle {
    pub(crate) shape: MarkShape,
    pub(crate) color: Color,
    /// 印の下へ敷く縁取りの色と太さ.
    pub(crate) outline: Option<(Color, u32)>,
}

/// `PhaseTable` は期間ごとの印のスタイルを引けるようにする.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PhaseTable {
    pub(crate) menstrual: MarkStyle,
    pub(crate) follicular: MarkStyle,
    pub(crate) ovulation: MarkStyle,
    pub(crate) luteal: MarkStyle,
}

impl PhaseTable {
    pub(crate) fn style(&self, phase: Phase) -> MarkStyle {
        match phase {
            Phase::Menstrual => self.menstrual,
            Phase::Follicular => self.follicular,
            Phase::Ovulation => self.ovulation,
            Phase::Luteal => self.luteal,
        }
    }
}

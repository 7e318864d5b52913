use crate::basis::Color;


/// `Canvas` は一辺 `side` ピクセルの正方形 RGBA ラスタを表す.
///
/// 描画はすべて上書きで, アルファ合成はしない. キャンバスの外への書き込みは捨てられる.
pub(crate) struct Canvas {
    side: u32,
    /// 行優先に side * side 個並ぶ.
    pixels: Vec<Color>,
    /// 偽の場合は保存時にアルファを持たず, 書き込みも不透明に矯正される.
    has_alpha: bool,
}

impl Canvas {
    /// 全面を透明な白で初期化した RGBA キャンバスを作る.
    pub(crate) fn transparent(side: u32) -> Self {
        Self {
            side,
            pixels: vec![Color::rgba(255, 255, 255, 0); (side * side) as usize],
            has_alpha: true,
        }
    }

    /// 全面を `background` で塗った RGB キャンバスを作る.
    pub(crate) fn opaque(side: u32, background: Color) -> Self {
        Self {
            side,
            pixels: vec![background.with_alpha(255); (side * side) as usize],
            has_alpha: false,
        }
    }

    pub(crate) fn side(&self) -> u32 {
        self.side
    }

    pub(crate) fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// キャンバス中心の座標.
    pub(crate) fn center(&self) -> f64 {
        (self.side / 2) as f64
    }

    pub(crate) fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub(crate) fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.side + x) as usize]
    }

    /// 1 ピクセル書き込む. キャンバスの外は無視する.
    pub(crate) fn put(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || self.side as i64 <= x || self.side as i64 <= y {
            return;
        }
        let color = if self.has_alpha {
            color
        } else {
            color.with_alpha(255)
        };
        self.pixels[(y * self.side as i64 + x) as usize] = color;
    }

    /// 中心 `(cx, cy)`, 半径 `(rx, ry)` の塗り潰した楕円を描く.
    pub(crate) fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Color) {
        for y in (cy - ry).floor() as i64..=(cy + ry).ceil() as i64 {
            for x in (cx - rx).floor() as i64..=(cx + rx).ceil() as i64 {
                let dx = (x as f64 - cx) / rx;
                let dy = (y as f64 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// 半径 `radius` の円の輪郭を太さ `width` で内側へ向けて描く.
    pub(crate) fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, width: f64, color: Color) {
        for y in (cy - radius).floor() as i64..=(cy + radius).ceil() as i64 {
            for x in (cx - radius).floor() as i64..=(cx + radius).ceil() as i64 {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                if radius - width <= d && d <= radius {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// 両端を含む軸平行な矩形を塗り潰す.
    pub(crate) fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put(x, y, color);
            }
        }
    }

    /// 凸多角形を走査線で塗り潰す. 頂点は外周の順に並んでいること.
    pub(crate) fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color) {
        let y0 = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let y1 = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        let mut crossings = vec![];
        for y in y0.floor() as i64..=y1.ceil() as i64 {
            let scan = y as f64;
            crossings.clear();
            for i in 0..points.len() {
                let (ax, ay) = points[i];
                let (bx, by) = points[(i + 1) % points.len()];
                // 走査線をまたぐ辺だけ交点を取る. 半開区間なので水平な辺は落ちる.
                if (ay <= scan && scan < by) || (by <= scan && scan < ay) {
                    crossings.push(ax + (scan - ay) / (by - ay) * (bx - ax));
                }
            }
            crossings.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
            for span in crossings.chunks(2) {
                if let [from, to] = *span {
                    self.fill_rect(from.round() as i64, y, to.round() as i64, y, color);
                }
            }
        }
    }

    /// 太さ `width` の線分を描く.
    pub(crate) fn thick_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 {
            return;
        }
        // 線分と直交する向きへ太さの半分ずつ広げた四角形として塗る
        let nx = -dy / len * width / 2.0;
        let ny = dx / len * width / 2.0;
        self.fill_polygon(
            &[
                (from.0 + nx, from.1 + ny),
                (to.0 + nx, to.1 + ny),
                (to.0 - nx, to.1 - ny),
                (from.0 - nx, from.1 - ny),
            ],
            color,
        );
    }
}

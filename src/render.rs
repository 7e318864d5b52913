use {
    crate::{
        basis::{Color, MarkShape, MarkStyle, Phase, PhaseTable, CYCLE_DAYS},
        canvas::Canvas,
    },
    std::f64::consts::PI,
};


/// 内接円を中心からの距離に応じた `start` と `end` の補間色で塗る.
///
/// 円の外のピクセルには触れない. 中心のピクセルは `start` そのものになる.
pub(crate) fn gradient_fill(canvas: &mut Canvas, start: Color, end: Color) {
    let side = canvas.side();
    let center = canvas.center();
    for y in 0..side {
        for x in 0..side {
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < center {
                canvas.put(x as i64, y as i64, start.lerp(end, distance / center));
            }
        }
    }
}

/// リング 1 周分の印の中心座標を日番号付きで返す.
///
/// 第 0 日が真上に来て, 以降は時計回りに等間隔で並ぶ.
pub(crate) fn ring_positions(
    center: (f64, f64),
    radius: f64,
) -> impl Iterator<Item = (u8, f64, f64)> {
    let step = 2.0 * PI / CYCLE_DAYS as f64;
    (0..CYCLE_DAYS).map(move |day| {
        let angle = day as f64 * step - PI / 2.0;
        (
            day,
            center.0 + radius * angle.cos(),
            center.1 + radius * angle.sin(),
        )
    })
}

/// 半径 `radius` の周期リングを描く. 各日の印は属する期間のスタイルに従う.
pub(crate) fn draw_ring(canvas: &mut Canvas, radius: f64, table: &PhaseTable) {
    let center = canvas.center();
    for (day, x, y) in ring_positions((center, center), radius) {
        draw_mark(canvas, x, y, table.style(Phase::of_day(day)));
    }
}

fn draw_mark(canvas: &mut Canvas, x: f64, y: f64, style: MarkStyle) {
    if let Some((color, width)) = style.outline {
        draw_shape(canvas, x, y, style.shape.inflate(width), color);
    }
    draw_shape(canvas, x, y, style.shape, style.color);
}

fn draw_shape(canvas: &mut Canvas, x: f64, y: f64, shape: MarkShape, color: Color) {
    match shape {
        MarkShape::Dot { diameter } => {
            let r = diameter as f64 / 2.0;
            canvas.fill_ellipse(x, y, r, r, color);
        }
        MarkShape::Triangle { size } => {
            let s = size as f64;
            canvas.fill_polygon(
                &[(x, y - s), (x - s, y + s * 0.75), (x + s, y + s * 0.75)],
                color,
            );
        }
        MarkShape::Square { half } => {
            let h = half as i64;
            let (x, y) = (x.round() as i64, y.round() as i64);
            canvas.fill_rect(x - h, y - h, x + h, y + h, color);
        }
        MarkShape::Diamond { half } => {
            let h = half as f64;
            canvas.fill_polygon(&[(x, y - h), (x - h, y), (x, y + h), (x + h, y)], color);
        }
    }
}

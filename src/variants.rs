use {
    crate::{
        basis::{Color, MarkShape, MarkStyle, PhaseTable},
        canvas::Canvas,
        render,
    },
    std::f64::consts::PI,
};

/// Telegram のプロフィール画像に合わせた一辺のピクセル数.
const SIDE: u32 = 512;

const WHITE: Color = Color::rgb(255, 255, 255);
const PINK: Color = Color::rgb(255, 182, 193);

/// `Variant` は 1 枚のアバターの名前と描画関数の組を表す.
pub(crate) struct Variant {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) render: fn() -> Canvas,
}

/// 生成するアバターの一覧. 上から順に描かれる.
pub(crate) const VARIANTS: [Variant; 5] = [
    Variant {
        name: "cycle_detailed",
        description: "detailed ring with phase colors",
        render: cycle_detailed,
    },
    Variant {
        name: "minimalist",
        description: "white dots and a flower",
        render: minimalist,
    },
    Variant {
        name: "modern",
        description: "geometric marks",
        render: modern,
    },
    Variant {
        name: "simple",
        description: "flat ring with outlined dots",
        render: simple,
    },
    Variant {
        name: "emoji_style",
        description: "heart emblem",
        render: emoji_style,
    },
];

fn dot(diameter: u32, color: Color) -> MarkStyle {
    MarkStyle {
        shape: MarkShape::Dot { diameter },
        color,
        outline: None,
    }
}

/// 周期の 28 日を期間ごとの色の点で書き込んだ詳細版.
fn cycle_detailed() -> Canvas {
    let mut canvas = Canvas::transparent(SIDE);
    render::gradient_fill(&mut canvas, PINK, Color::rgb(155, 82, 143));

    let outlined = |diameter, color| MarkStyle {
        outline: Some((WHITE, 2)),
        ..dot(diameter, color)
    };
    let table = PhaseTable {
        menstrual: outlined(12, Color::rgb(220, 53, 69)),
        follicular: outlined(10, Color::rgb(255, 193, 7)),
        ovulation: outlined(16, Color::rgb(40, 167, 69)),
        luteal: outlined(10, Color::rgb(108, 117, 125)),
    };
    render::draw_ring(&mut canvas, 180.0, &table);

    female_symbol(&mut canvas);

    // 月と星
    let c = canvas.center();
    canvas.fill_ellipse(c - 200.0, c - 150.0, 25.0, 25.0, WHITE.with_alpha(200));
    for &(dx, dy, r) in &[(150.0, -120.0, 8.0), (180.0, 100.0, 6.0), (-150.0, 80.0, 10.0)] {
        canvas.fill_ellipse(c + dx, c + dy, r, r, WHITE.with_alpha(180));
    }
    canvas
}

/// 中央の女性のシンボル. 輪の下に十字を重ねる.
fn female_symbol(canvas: &mut Canvas) {
    let c = canvas.center();
    let radius = 60.0;
    canvas.stroke_circle(c, c, radius, 8.0, WHITE);

    let cross = 40.0;
    canvas.thick_line((c, c + radius - 10.0), (c, c + radius + cross), 8.0, WHITE);
    canvas.thick_line(
        (c - cross / 2.0, c + radius + cross / 2.0),
        (c + cross / 2.0, c + radius + cross / 2.0),
        8.0,
        WHITE,
    );
}

/// 白い点だけで構成した簡素版.
fn minimalist() -> Canvas {
    let mut canvas = Canvas::transparent(SIDE);
    render::gradient_fill(&mut canvas, PINK, Color::rgb(175, 102, 153));

    let table = PhaseTable {
        menstrual: dot(8, WHITE),
        follicular: dot(6, WHITE.with_alpha(200)),
        ovulation: dot(12, WHITE),
        luteal: dot(6, WHITE.with_alpha(150)),
    };
    render::draw_ring(&mut canvas, 200.0, &table);

    // 中央の花: 6 枚の花弁と芯
    let c = canvas.center();
    for petal in 0..6 {
        let angle = petal as f64 * (2.0 * PI / 6.0);
        canvas.fill_ellipse(
            c + 40.0 * angle.cos(),
            c + 40.0 * angle.sin(),
            15.0,
            15.0,
            WHITE,
        );
    }
    canvas.fill_ellipse(c, c, 20.0, 20.0, PINK);
    canvas
}

/// 期間ごとに図形を変えた幾何学版.
fn modern() -> Canvas {
    let mut canvas = Canvas::transparent(SIDE);
    render::gradient_fill(&mut canvas, Color::rgb(255, 105, 180), Color::rgb(195, 185, 230));

    let mark = |shape, alpha| MarkStyle {
        shape,
        color: WHITE.with_alpha(alpha),
        outline: None,
    };
    let table = PhaseTable {
        menstrual: mark(MarkShape::Triangle { size: 8 }, 255),
        follicular: mark(MarkShape::Square { half: 6 }, 220),
        ovulation: mark(MarkShape::Dot { diameter: 20 }, 255),
        luteal: mark(MarkShape::Diamond { half: 6 }, 180),
    };
    render::draw_ring(&mut canvas, 180.0, &table);

    // 中央: 十字に並べた 4 つの円と芯
    let c = canvas.center();
    for i in 0..4 {
        let angle = i as f64 * (PI / 2.0);
        canvas.fill_ellipse(
            c + 80.0 * angle.cos(),
            c + 80.0 * angle.sin(),
            20.0,
            20.0,
            WHITE.with_alpha(200),
        );
    }
    canvas.fill_ellipse(c, c, 25.0, 25.0, WHITE);
    canvas
}

/// 不透明な下地に白い印を置いた簡単版.
fn simple() -> Canvas {
    let mut canvas = Canvas::opaque(SIDE, PINK);
    render::gradient_fill(&mut canvas, PINK, Color::rgb(175, 102, 233));

    let outlined = |diameter| MarkStyle {
        outline: Some((Color::rgb(100, 100, 100), 1)),
        ..dot(diameter, WHITE)
    };
    let table = PhaseTable {
        menstrual: outlined(8),
        follicular: outlined(6),
        ovulation: outlined(12),
        luteal: outlined(6),
    };
    render::draw_ring(&mut canvas, 180.0, &table);

    // 中央の花: 8 方向の花弁と芯
    let c = canvas.center();
    for ray in 0..8 {
        let angle = ray as f64 * (PI / 4.0);
        canvas.fill_ellipse(
            c + 60.0 * angle.cos(),
            c + 60.0 * angle.sin(),
            15.0,
            8.0,
            WHITE,
        );
    }
    canvas.fill_ellipse(c, c, 25.0, 25.0, WHITE);

    // 月と星
    canvas.fill_ellipse(c - 180.0, c - 180.0, 20.0, 20.0, WHITE);
    for &(dx, dy, r) in &[
        (160.0, -140.0, 5.0),
        (180.0, 120.0, 4.0),
        (-160.0, 100.0, 6.0),
        (-180.0, -100.0, 4.0),
    ] {
        canvas.fill_ellipse(c + dx, c + dy, r, r, WHITE);
    }
    canvas
}

/// ハートを大きく置いた絵文字風.
fn emoji_style() -> Canvas {
    let mut canvas = Canvas::opaque(SIDE, PINK);
    render::gradient_fill(&mut canvas, PINK, Color::rgb(195, 122, 223));

    // ハート: 2 つの円に三角形を重ねる
    let c = canvas.center();
    let size = 120.0;
    canvas.fill_ellipse(c - size / 3.0, c - size / 2.0, size / 4.0, size / 4.0, WHITE);
    canvas.fill_ellipse(c + size / 3.0, c - size / 2.0, size / 4.0, size / 4.0, WHITE);
    canvas.fill_polygon(
        &[
            (c - size / 2.0, c - size / 4.0),
            (c + size / 2.0, c - size / 4.0),
            (c, c + size / 2.0),
        ],
        WHITE,
    );

    let table = PhaseTable {
        menstrual: dot(4, WHITE),
        follicular: dot(4, WHITE),
        ovulation: dot(6, WHITE),
        luteal: dot(4, WHITE),
    };
    render::draw_ring(&mut canvas, 160.0, &table);
    canvas
}

use std::path::Path;

mod basis;
mod canvas;
mod encode;
mod render;
mod variants;


use variants::VARIANTS;

fn main() {
    println!("generating {} avatars...", VARIANTS.len());

    let failed = generate_all(Path::new("avatars"));

    println!();
    if failed == 0 {
        println!("all avatars are in avatars/");
        println!("to set one as the bot's picture, send /setuserpic to @BotFather and upload it");
    } else {
        println!("{} of {} avatars failed", failed, VARIANTS.len());
    }
}

/// 全ての変種を `out_dir` へ書き出して, 失敗した数を返す.
///
/// 1 つの変種の失敗は報告するだけで, 残りの変種の生成は続ける.
fn generate_all(out_dir: &Path) -> usize {
    let mut failed = 0;

    for variant in &VARIANTS {
        let avatar = (variant.render)();
        match encode::save_pair(&avatar, out_dir, variant.name) {
            Ok(()) => println!(
                "{} ({}): saved {1}.png and {1}.jpg",
                variant.description, variant.name
            ),
            Err(e) => {
                eprintln!("{}: {:#}", variant.name, e);
                failed += 1;
            }
        }
    }

    failed
}

//! # compare_images — 原项目 / 新项目 PNG 对比入口
//!
//! 对固定的文件名清单，分别读取两个目录中的同名文件并判断是纯遮罩还是装饰性背景。

use png_alpha_probe::error::AppError;
use png_alpha_probe::probe::{AlphaProbe, report};
use png_alpha_probe::settings;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = settings::load_config()?;
    log::info!(
        "📂 原项目目录: {} | 新项目目录: {}",
        config.original_dir.display(),
        config.assets_dir.display()
    );

    let probe = AlphaProbe::new(config);
    let config = probe.config();

    println!("{}", report::comparison_header());
    let rows = probe.compare_directories(
        &config.original_dir,
        &config.assets_dir,
        &config.compare_names,
    );
    for row in &rows {
        println!("{}", report::render_comparison(row));
    }
    println!("{}", report::comparison_footer());

    Ok(())
}

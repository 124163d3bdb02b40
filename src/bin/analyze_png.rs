//! # analyze_png — PNG 结构分析入口
//!
//! 扫描资源目录下的所有 PNG 文件，逐个输出尺寸、模式、透明通道统计与调色板信息。
//! 单个文件失败只打印错误并继续，资源目录不存在时整体失败。

use png_alpha_probe::error::AppError;
use png_alpha_probe::probe::{AlphaProbe, report};
use png_alpha_probe::settings;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = settings::load_config()?;
    let assets_dir = config.assets_dir.clone();
    log::info!("📂 资源目录: {}", assets_dir.display());

    let probe = AlphaProbe::new(config);

    println!("{}", report::analysis_header());
    for outcome in probe.analyze_directory(&assets_dir)? {
        println!("{}", report::render_analysis(&outcome));
    }
    println!("{}", report::analysis_footer());

    Ok(())
}

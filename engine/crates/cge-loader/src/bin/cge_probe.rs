//! 探测本机的 castleengine 动态库
//!
//! 加载库，打印引擎版本与视点信息，列出未解析的导出函数。
//! 库文件需要放在动态库搜索路径中，也可以用第一个命令行参数指定。

use anyhow::Result;
use cge_crate_tools::init_log::init_log;
use cge_loader::{CgeEngine, default_library_name};

fn main() -> Result<()> {
    init_log();

    let mut engine = CgeEngine::new();
    match std::env::args().nth(1) {
        Some(path) => engine.load_from(&path)?,
        None => engine.load()?,
    }

    for symbol in engine.unresolved_symbols() {
        log::warn!("缺失导出: {symbol}");
    }

    // 版本查询不依赖渲染上下文，缺失时直接报错
    engine.check_symbol("CGE_GetCastleEngineVersion")?;
    log::info!("引擎版本: {}", engine.engine_version());
    log::info!("库文件: {}", default_library_name());
    log::info!("场景视点数: {}", engine.viewpoints_count());

    Ok(())
}

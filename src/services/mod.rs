//! Service layer
//!
//! - `grid`: 网格模型与重排算法
//! - `link_store`: 链接状态与持久化
//! - `link_validation`: 链接 / 导入文件校验
//! - `icons`: 图标解析
//! - `search`: 搜索 URL 构造
//! - `seed`: 首次运行的内置链接

pub mod grid;
pub mod icons;
mod link_store;
pub mod link_validation;
pub mod search;
mod seed;

pub use grid::{Grid, Position, relocate};
pub use icons::{CdnFetcher, IconResolver, IconSource, SvgFetcher};
pub use link_store::{
    EXPORT_VERSION, ExportSnapshot, ImportSummary, LinkPatch, LinkSettings, LinkStore,
};
pub use link_validation::{SUPPORTED_VERSIONS, validate_link, validate_snapshot};
pub use search::build_search_url;
pub use seed::default_grid;

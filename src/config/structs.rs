use serde::{Deserialize, Serialize};

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "quicktab.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - storage: 持久化后端
/// - links: 链接网格行为
/// - icons: 图标解析
/// - search: 搜索引擎
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub icons: IconsConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config file > 默认值
    /// ENV 前缀：QT，分隔符：__
    /// 示例：QT__LINKS__ROW_CAPACITY=5
    pub fn load(path: Option<&str>) -> Self {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("QT")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 持久化后端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// `file` or `memory`
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    #[serde(default = "default_storage_path")]
    pub path: String,
}

/// 链接网格配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Preferred number of links per row when placing a new link
    #[serde(default = "default_row_capacity")]
    pub row_capacity: usize,
    /// Populate the built-in link set on first run
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

/// 图标解析配置
///
/// URL 模板使用 `{name}` / `{domain}` 占位符
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconsConfig {
    #[serde(default = "default_simple_icons_url")]
    pub simple_icons_url: String,
    #[serde(default = "default_lucide_url")]
    pub lucide_url: String,
    #[serde(default = "default_favicon_url")]
    pub favicon_url: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_icon_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_icon_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_icon_cache_capacity")]
    pub cache_capacity: u64,
}

/// 搜索配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search results URL, `{query}` is replaced by the escaped query
    #[serde(default = "default_search_engine_url")]
    pub engine_url: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_storage_backend() -> String {
    "file".to_string()
}

fn default_storage_path() -> String {
    "quicktab.json".to_string()
}

fn default_row_capacity() -> usize {
    4
}

fn default_seed_defaults() -> bool {
    true
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_simple_icons_url() -> String {
    "https://cdn.jsdelivr.net/npm/simple-icons@latest/icons/{name}.svg".to_string()
}

fn default_lucide_url() -> String {
    "https://cdn.jsdelivr.net/npm/lucide-static@latest/icons/{name}.svg".to_string()
}

fn default_favicon_url() -> String {
    "https://www.google.com/s2/favicons?domain={domain}&sz=64".to_string()
}

fn default_assets_dir() -> String {
    "assets/icons".to_string()
}

fn default_icon_timeout() -> u64 {
    5
}

fn default_icon_cache_ttl() -> u64 {
    3600
}

fn default_icon_cache_capacity() -> u64 {
    512
}

fn default_search_engine_url() -> String {
    "https://www.google.com/search?q={query}".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            path: default_storage_path(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            row_capacity: default_row_capacity(),
            seed_defaults: default_seed_defaults(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            simple_icons_url: default_simple_icons_url(),
            lucide_url: default_lucide_url(),
            favicon_url: default_favicon_url(),
            assets_dir: default_assets_dir(),
            timeout_secs: default_icon_timeout(),
            cache_ttl_secs: default_icon_cache_ttl(),
            cache_capacity: default_icon_cache_capacity(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine_url: default_search_engine_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = StaticConfig::default();
        assert_eq!(cfg.storage.backend, "file");
        assert_eq!(cfg.links.row_capacity, 4);
        assert_eq!(cfg.links.max_upload_bytes, 5 * 1024 * 1024);
        assert!(cfg.search.engine_url.contains("{query}"));
    }

    #[test]
    fn test_saved_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("quicktab.toml");
        StaticConfig::default().save_to_file(&path).unwrap();

        let parsed: StaticConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.icons.assets_dir, "assets/icons");
        assert_eq!(parsed.logging.level, "warn");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: StaticConfig = toml::from_str("[links]\nrow_capacity = 6\n").unwrap();
        assert_eq!(parsed.links.row_capacity, 6);
        assert!(parsed.links.seed_defaults);
        assert_eq!(parsed.storage.path, "quicktab.json");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[storage]\nbackend = \"memory\"\n").unwrap();

        let cfg = StaticConfig::load(path.to_str());
        assert_eq!(cfg.storage.backend, "memory");
    }
}

//! 远程 SVG 图标获取
//!
//! 使用 ureq 同步请求（在 spawn_blocking 中执行），内置 Moka 缓存。
//! 失败不缓存，下次渲染时重试。

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::{trace, warn};
use ureq::Agent;

use crate::config::IconsConfig;
use crate::errors::{QuicktabError, Result};

/// Fetches SVG markup by URL
#[async_trait]
pub trait SvgFetcher: Send + Sync {
    async fn fetch_svg(&self, url: &str) -> Result<String>;

    /// Provider name (for logs)
    fn name(&self) -> &'static str;
}

/// CDN-backed fetcher
///
/// - TTL 与容量来自 `IconsConfig`
/// - 只缓存成功结果
pub struct CdnFetcher {
    agent: Agent,
    cache: Cache<String, String>,
}

impl CdnFetcher {
    pub fn new(config: &IconsConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();

        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .max_capacity(config.cache_capacity)
            .build();

        Self { agent, cache }
    }

    fn fetch_sync(agent: Agent, url: String) -> Result<String> {
        let resp = agent
            .get(&url)
            .call()
            .map_err(|e| QuicktabError::icon_fetch(format!("GET {} failed: {}", url, e)))?;

        let body = resp
            .into_body()
            .read_to_string()
            .map_err(|e| QuicktabError::icon_fetch(format!("Reading {} failed: {}", url, e)))?;

        if !body.contains("<svg") {
            return Err(QuicktabError::icon_fetch(format!(
                "Response from {} is not SVG",
                url
            )));
        }
        Ok(body)
    }
}

#[async_trait]
impl SvgFetcher for CdnFetcher {
    async fn fetch_svg(&self, url: &str) -> Result<String> {
        if let Some(hit) = self.cache.get(url).await {
            trace!("Icon cache hit: {}", url);
            return Ok(hit);
        }

        let agent = self.agent.clone();
        let owned = url.to_string();
        let body = tokio::task::spawn_blocking(move || Self::fetch_sync(agent, owned))
            .await
            .map_err(|e| {
                warn!("Icon fetch task failed: {}", e);
                QuicktabError::icon_fetch(e.to_string())
            })??;

        self.cache.insert(url.to_string(), body.clone()).await;
        Ok(body)
    }

    fn name(&self) -> &'static str {
        "cdn"
    }
}

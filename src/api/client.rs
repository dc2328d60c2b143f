//! HTTP client for mhw-db.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{MonsterApi, MonsterId, MonsterRecord, MonsterSummary};
use crate::config::ApiConfig;
use crate::error::{MonsterdexError, Result};

const USER_AGENT: &str = concat!("monsterdex/", env!("CARGO_PKG_VERSION"));

/// [`MonsterApi`] backed by the mhw-db REST endpoints.
pub struct HttpMonsterApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMonsterApi {
    /// Build a client from the API section of the config.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Use an existing reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn monsters_url(&self) -> String {
        format!("{}/monsters", self.base_url)
    }

    fn monster_url(&self, id: MonsterId) -> String {
        format!("{}/monsters/{}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!(url = %url, "GET");
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Monster API returned an error status");
            return Err(MonsterdexError::Api {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl MonsterApi for HttpMonsterApi {
    async fn list_monsters(&self) -> Result<Vec<MonsterSummary>> {
        self.get_json(self.monsters_url()).await
    }

    async fn get_monster(&self, id: MonsterId) -> Result<MonsterRecord> {
        self.get_json(self.monster_url(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let api = HttpMonsterApi::with_client(reqwest::Client::new(), "https://mhw-db.com/");
        assert_eq!(api.base_url(), "https://mhw-db.com");
        assert_eq!(api.monsters_url(), "https://mhw-db.com/monsters");
        assert_eq!(api.monster_url(MonsterId(17)), "https://mhw-db.com/monsters/17");
    }

    #[test]
    fn test_new_from_default_config() {
        let api = HttpMonsterApi::new(&ApiConfig::default()).unwrap();
        assert_eq!(api.base_url(), "https://mhw-db.com");
    }

    /// Serve `body` as a single `200 OK` JSON response on a local port.
    async fn serve_once(body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_list_survives_null_detail_fields() {
        let base = serve_once(
            r#"[
                {"id": 1, "name": "Great Jagras", "elements": [], "rewards": []},
                {"id": 2, "name": "Kestodon", "elements": null, "weaknesses": [{"element": "water", "stars": null}]},
                {"id": 3, "name": "Rathalos", "locations": [{"name": "Ancient Forest", "zoneCount": null}]}
            ]"#,
        )
        .await;
        let api = HttpMonsterApi::with_client(reqwest::Client::new(), &base);
        let list = api.list_monsters().await.unwrap();
        let names: Vec<_> = list.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Great Jagras", "Kestodon", "Rathalos"]);
    }

    #[tokio::test]
    async fn test_detail_with_null_fields_decodes() {
        let base = serve_once(
            r#"{"id": 2, "name": "Kestodon", "elements": null, "ailments": null, "rewards": [{"item": {"name": "Kestodon Shell", "rarity": null}, "conditions": null}]}"#,
        )
        .await;
        let api = HttpMonsterApi::with_client(reqwest::Client::new(), &base);
        let record = api.get_monster(MonsterId(2)).await.unwrap();
        assert!(record.elements.is_empty());
        assert!(record.ailments.is_empty());
        assert_eq!(record.rewards[0].item.name, "Kestodon Shell");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 9 on localhost is the discard service; nothing listens in CI.
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
        };
        let api = HttpMonsterApi::new(&config).unwrap();
        let err = api.list_monsters().await.unwrap_err();
        assert!(matches!(err, MonsterdexError::Network(_)));
        assert!(err.is_network());
    }
}

//! 歌词获取客户端
//!
//! 负责从 Meting 兼容的歌词 API 拉取主歌词与翻译歌词原文，
//! 交给 `lyric-core` 解析，并把解析结果缓存到本地。
//! 网络或上游数据异常一律退化为"无歌词"，不会让调用方崩溃。

use anyhow::{anyhow, Result};
use log::{debug, error};
use lyric_core::Lyrics;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::fs;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// 歌词源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Netease,
    Tencent,
    Kugou,
    Baidu,
    Kuwo,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Netease => "netease",
            Provider::Tencent => "tencent",
            Provider::Kugou => "kugou",
            Provider::Baidu => "baidu",
            Provider::Kuwo => "kuwo",
        }
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "netease" => Ok(Provider::Netease),
            "tencent" => Ok(Provider::Tencent),
            "kugou" => Ok(Provider::Kugou),
            "baidu" => Ok(Provider::Baidu),
            "kuwo" => Ok(Provider::Kuwo),
            other => Err(anyhow!("unknown provider: {}", other)),
        }
    }
}

pub struct LyricClient {
    http_client: Client,
    api_url: String,
    lyrics_path: PathBuf,
}

impl LyricClient {
    pub fn new(api_url: String, lyrics_path: PathBuf) -> Self {
        Self {
            http_client: ClientBuilder::new()
                .no_proxy()
                .build()
                .expect("failed to build HTTP client"),
            api_url,
            lyrics_path,
        }
    }

    /// 获取一首歌的歌词
    ///
    /// 优先读本地缓存；缓存未命中时请求 API，解析后写回缓存。
    /// 上游缺失 `lrc`/`tlyric` 字段时按空文本处理，返回空歌词而非报错
    pub async fn get_song_lyrics(&self, provider: Provider, song_id: &str) -> Result<Lyrics> {
        if let Ok(lyrics) = self.try_read_lyrics_cache(provider, song_id) {
            return Ok(lyrics);
        }

        let lyric_response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("server", provider.as_str()),
                ("type", "lyric"),
                ("id", song_id),
            ])
            .send()
            .await?;

        let envelope: Value = serde_json::from_slice(&lyric_response.bytes().await?)?;
        let (lyric_text, trans_lyric_text) = extract_lyric_texts(&envelope);

        let lyrics = lyric_core::parse(&lyric_text, Some(trans_lyric_text.as_str()));

        debug!(
            "fetched lyrics for {}:{}, {} lines",
            provider.as_str(),
            song_id,
            lyrics.lines.len()
        );

        self.store_lyrics_cache(provider, song_id, &lyrics);

        Ok(lyrics)
    }
}

/// private
impl LyricClient {
    fn cache_file(&self, provider: Provider, song_id: &str) -> PathBuf {
        self.lyrics_path
            .join(format!("{}-{}.lyrics", provider.as_str(), song_id))
    }

    /// 缓存歌词
    fn store_lyrics_cache(&self, provider: Provider, song_id: &str, lyrics: &Lyrics) {
        match serde_json::to_string(lyrics) {
            Ok(lyrics_json) => match fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(self.cache_file(provider, song_id))
            {
                Ok(mut lyrics_file) => match lyrics_file.write_all(lyrics_json.as_bytes()) {
                    Ok(_) => debug!("lyrics stored at {:?}", &self.lyrics_path),
                    Err(err) => {
                        error!("failed to store lyrics at {:?}: {}", &self.lyrics_path, err)
                    }
                },
                Err(err) => error!("{:?}", err),
            },
            Err(err) => error!("failed to serialize lyrics: {}", err),
        }
    }

    /// 读歌词缓存
    fn try_read_lyrics_cache(&self, provider: Provider, song_id: &str) -> Result<Lyrics> {
        let mut lyrics_json = String::new();
        File::open(self.cache_file(provider, song_id))?.read_to_string(&mut lyrics_json)?;

        let lyrics: Lyrics = serde_json::from_str(&lyrics_json)?;
        debug!("lyrics cache hit for {}:{}", provider.as_str(), song_id);

        Ok(lyrics)
    }
}

/// 从 API 返回的 JSON 里取出主歌词与翻译歌词原文
///
/// 兼容两种常见包裹格式：
/// 网易云式 `{"lrc":{"lyric":...},"tlyric":{"lyric":...}}`
/// 与 Meting 式 `{"lyric":...,"tlyric":...}`；字段缺失按空文本处理
fn extract_lyric_texts(envelope: &Value) -> (String, String) {
    let lyric_text = envelope["lrc"]["lyric"]
        .as_str()
        .or_else(|| envelope["lyric"].as_str())
        .or_else(|| envelope["lrc"].as_str())
        .unwrap_or("")
        .to_string();

    let trans_lyric_text = envelope["tlyric"]["lyric"]
        .as_str()
        .or_else(|| envelope["tlyric"].as_str())
        .unwrap_or("")
        .to_string();

    (lyric_text, trans_lyric_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_netease_envelope() {
        let envelope = json!({
            "lrc": { "lyric": "[00:01.00]Hello" },
            "tlyric": { "lyric": "[00:01.00]你好" },
        });
        let (lyric, tlyric) = extract_lyric_texts(&envelope);
        assert_eq!(lyric, "[00:01.00]Hello");
        assert_eq!(tlyric, "[00:01.00]你好");
    }

    #[test]
    fn test_extract_meting_envelope() {
        let envelope = json!({
            "lyric": "[00:01.00]Hello",
            "tlyric": "[00:01.00]你好",
        });
        let (lyric, tlyric) = extract_lyric_texts(&envelope);
        assert_eq!(lyric, "[00:01.00]Hello");
        assert_eq!(tlyric, "[00:01.00]你好");
    }

    #[test]
    fn test_extract_missing_fields_degrade_to_empty() {
        let envelope = json!({ "error": "not found" });
        let (lyric, tlyric) = extract_lyric_texts(&envelope);
        assert_eq!(lyric, "");
        assert_eq!(tlyric, "");
        // 空文本解析出空歌词，调用方视为"无歌词"
        assert!(lyric_core::parse(&lyric, Some(tlyric.as_str())).is_empty());
    }

    #[test]
    fn test_lyrics_cache_roundtrip() {
        let cache_dir = tempfile::tempdir().expect("tempdir");
        let client = LyricClient::new(
            "http://localhost:3000/api".to_string(),
            cache_dir.path().to_path_buf(),
        );

        let lyrics = lyric_core::parse("[00:01.00]Hello", Some("[00:01.10]你好"));
        client.store_lyrics_cache(Provider::Netease, "12345", &lyrics);

        let cached = client
            .try_read_lyrics_cache(Provider::Netease, "12345")
            .expect("cache should hit");
        assert_eq!(cached, lyrics);

        // 其他歌不命中
        assert!(client
            .try_read_lyrics_cache(Provider::Netease, "67890")
            .is_err());
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!("netease".parse::<Provider>().unwrap(), Provider::Netease);
        assert_eq!("tencent".parse::<Provider>().unwrap(), Provider::Tencent);
        assert!("spotify".parse::<Provider>().is_err());
    }
}

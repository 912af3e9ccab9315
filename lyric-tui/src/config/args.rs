use anyhow::{anyhow, Result};
use lyric_client::Provider;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:3000/api";

const USAGE: &str =
    "usage: lyric-tui <primary.lrc> [translation.lrc]\n       lyric-tui --id <id> [--provider <name>] [--api <url>]";

/// 启动参数：本地歌词文件，或通过歌词 API 拉取
pub enum RunArgs {
    File {
        primary: PathBuf,
        translation: Option<PathBuf>,
    },
    Remote {
        provider: Provider,
        id: String,
        api_url: String,
    },
}

impl RunArgs {
    pub fn parse(args: impl Iterator<Item = String>) -> Result<Self> {
        let args: Vec<String> = args.collect();

        if args.iter().any(|arg| arg.starts_with("--")) {
            let mut provider = Provider::Netease;
            let mut id = None;
            let mut api_url = DEFAULT_API_URL.to_string();

            let mut iter = args.iter();
            while let Some(arg) = iter.next() {
                match arg.as_str() {
                    "--provider" => {
                        provider = iter
                            .next()
                            .ok_or_else(|| anyhow!("--provider: Missing argument NAME"))?
                            .parse()?;
                    }
                    "--id" => {
                        id = Some(
                            iter.next()
                                .ok_or_else(|| anyhow!("--id: Missing argument ID"))?
                                .clone(),
                        );
                    }
                    "--api" => {
                        api_url = iter
                            .next()
                            .ok_or_else(|| anyhow!("--api: Missing argument URL"))?
                            .clone();
                    }
                    other => return Err(anyhow!("Invalid argument: {}\n{}", other, USAGE)),
                }
            }

            Ok(Self::Remote {
                provider,
                id: id.ok_or_else(|| anyhow!("--id: Missing argument ID\n{}", USAGE))?,
                api_url,
            })
        } else {
            match args.len() {
                1 => Ok(Self::File {
                    primary: args[0].clone().into(),
                    translation: None,
                }),
                2 => Ok(Self::File {
                    primary: args[0].clone().into(),
                    translation: Some(args[1].clone().into()),
                }),
                _ => Err(anyhow!("{}", USAGE)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_args() {
        let args = RunArgs::parse(["song.lrc".to_string()].into_iter()).unwrap();
        assert!(matches!(args, RunArgs::File { translation: None, .. }));

        let args =
            RunArgs::parse(["song.lrc".to_string(), "song.trans.lrc".to_string()].into_iter())
                .unwrap();
        assert!(matches!(args, RunArgs::File { translation: Some(_), .. }));
    }

    #[test]
    fn test_parse_remote_args() {
        let args = RunArgs::parse(
            [
                "--provider".to_string(),
                "tencent".to_string(),
                "--id".to_string(),
                "0039MnYb0qxYhV".to_string(),
            ]
            .into_iter(),
        )
        .unwrap();

        match args {
            RunArgs::Remote {
                provider,
                id,
                api_url,
            } => {
                assert_eq!(provider, Provider::Tencent);
                assert_eq!(id, "0039MnYb0qxYhV");
                assert_eq!(api_url, DEFAULT_API_URL);
            }
            _ => panic!("expected remote args"),
        }
    }

    #[test]
    fn test_missing_id_is_an_error() {
        assert!(RunArgs::parse(["--provider".to_string(), "netease".to_string()].into_iter())
            .is_err());
    }

    #[test]
    fn test_no_args_is_an_error() {
        assert!(RunArgs::parse(std::iter::empty()).is_err());
    }
}

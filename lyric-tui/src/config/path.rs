use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "lyric-tui";

#[allow(unused)]
pub struct Path {
    // 一级目录
    pub data: PathBuf,
    pub cache: PathBuf,

    // 二级目录
    pub lyrics: PathBuf,
}

impl Path {
    pub fn new() -> Self {
        let data = dirs_next::data_dir().unwrap().join(APP_NAME);
        if !data.exists() {
            fs::create_dir(&data).expect("Couldn't create data dir.");
        }

        let cache = dirs_next::cache_dir().unwrap().join(APP_NAME);
        if !cache.exists() {
            fs::create_dir(&cache).expect("Couldn't create cache dir.");
        }

        let lyrics = cache.clone().join("lyrics");
        if !lyrics.exists() {
            fs::create_dir(&lyrics).expect("Couldn't create lyrics dir.");
        }

        Self {
            data,
            cache,
            lyrics,
        }
    }
}

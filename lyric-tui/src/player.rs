use lyric_core::{active_index, Lyrics};
use std::time::Instant;

/// 无音频后端的播放时钟
///
/// 进度按墙钟推进，可暂停、可跳转；外部播放器接入时只需改用它的进度信号
pub struct Player {
    lyrics: Lyrics,
    title: String,
    duration: f64,
    position: f64,
    playing: bool,
    last_tick: Instant,
}

/// public
impl Player {
    pub fn new() -> Self {
        Self {
            lyrics: Lyrics::default(),
            title: String::new(),
            duration: 0.0,
            position: 0.0,
            playing: false,
            last_tick: Instant::now(),
        }
    }

    /// 装载新歌词：旧值整体丢弃，进度清零
    pub fn load(&mut self, title: String, lyrics: Lyrics) {
        // 没有音频时长信息，进度条以最后一句的时间戳再留 5s 余量兜底
        self.duration = lyrics
            .lines
            .last()
            .and_then(|line| line.time)
            .map_or(0.0, |time| time + 5.0);
        self.lyrics = lyrics;
        self.title = title;
        self.position = 0.0;
        self.playing = false;
        self.last_tick = Instant::now();
    }

    /// 推进播放时钟，每轮事件循环调用一次
    pub fn tick(&mut self) {
        let now = Instant::now();
        if self.playing {
            self.position += now.duration_since(self.last_tick).as_secs_f64();
            if self.duration > 0.0 && self.position >= self.duration {
                self.position = self.duration;
                self.playing = false;
            }
        }
        self.last_tick = now;
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// 跳转到指定时间，当前行由下一次重算得出
    pub fn seek(&mut self, time: f64) {
        self.position = if self.duration > 0.0 {
            time.clamp(0.0, self.duration)
        } else {
            time.max(0.0)
        };
    }

    pub fn seek_by(&mut self, delta: f64) {
        self.seek(self.position + delta);
    }

    /// 点击歌词行跳转到对应时间戳
    pub fn seek_to_line(&mut self, index: usize) {
        if let Some(time) = self.lyrics.lines.get(index).and_then(|line| line.time) {
            self.seek(time);
        }
    }

    /// 当前歌词行下标
    ///
    /// 每次基于当前进度重算，不缓存上一次的结果
    pub fn current_lyric_line_index(&self) -> Option<usize> {
        active_index(&self.lyrics.lines, self.position)
    }

    pub fn lyrics(&self) -> &Lyrics {
        &self.lyrics
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_player() -> Player {
        let mut player = Player::new();
        player.load(
            "test".to_string(),
            lyric_core::parse("[00:00.00]a\n[00:05.00]b\n[00:10.00]c", None),
        );
        player
    }

    #[test]
    fn test_load_resets_progress() {
        let mut player = sample_player();
        player.seek(8.0);
        player.load("next".to_string(), lyric_core::parse("[00:01.00]x", None));
        assert_eq!(player.position(), 0.0);
        assert!(!player.is_playing());
        assert_eq!(player.duration(), 6.0);
    }

    #[test]
    fn test_seek_to_line_forwards_line_timestamp() {
        let mut player = sample_player();
        player.seek_to_line(1);
        assert_eq!(player.position(), 5.0);
        assert_eq!(player.current_lyric_line_index(), Some(1));
        // 越界下标不动
        player.seek_to_line(99);
        assert_eq!(player.position(), 5.0);
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let mut player = sample_player();
        player.seek(100.0);
        assert_eq!(player.position(), 15.0);
        player.seek(-3.0);
        assert_eq!(player.position(), 0.0);
    }

    #[test]
    fn test_current_index_follows_seeks() {
        let mut player = sample_player();
        assert_eq!(player.current_lyric_line_index(), Some(0));
        player.seek(4.9);
        // 前瞻 0.2s：提前点亮下一句
        assert_eq!(player.current_lyric_line_index(), Some(1));
        player.seek(12.0);
        assert_eq!(player.current_lyric_line_index(), Some(2));
    }
}

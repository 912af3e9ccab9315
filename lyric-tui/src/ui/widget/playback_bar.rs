use crate::player::Player;
use ratatui::widgets::Gauge;

/// 构建底部播放进度条
pub fn build_playback_bar<'a>(playback_bar: Gauge<'a>, player: &Player) -> Gauge<'a> {
    let position = player.position();
    let duration = player.duration();

    playback_bar
        .label(if duration > 0.0 {
            format!(
                "{} {:02}:{:02}/{:02}:{:02}",
                if player.is_playing() {
                    '\u{25B6}'
                } else {
                    '\u{23F8}'
                },
                // Minutes into playback
                position as u64 / 60,
                // Seconds into playback
                position as u64 % 60,
                // Track length minutes
                duration as u64 / 60,
                // Track length seconds
                duration as u64 % 60,
            )
        } else {
            String::from("--:--/--:--")
        })
        .ratio({
            let ratio = if duration > 0.0 {
                position / duration
            } else {
                0.0
            };
            if ratio < 0.0 || ratio.is_nan() {
                0.0
            } else if ratio > 1.0 {
                1.0
            } else {
                ratio
            }
        })
}

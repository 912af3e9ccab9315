use crate::model::LyricLine;

/// 当前行判定的前瞻量（s）
///
/// 抵消渲染与音频管线的延迟：高亮行最多领先节拍 200ms，而不是滞后
pub const LOOKAHEAD: f64 = 0.2;

/// 计算播放进度对应的当前行下标
///
/// 从尾部向前扫描，返回最后一个满足 `time <= current_time + LOOKAHEAD` 的行；
/// 第一句之前返回 `None`。
///
/// 纯函数：结果只取决于参数，不依赖上一次调用，
/// 因此播放进度单调推进时返回的下标也单调不回退，与重算频率无关
pub fn active_index(lines: &[LyricLine], current_time: f64) -> Option<usize> {
    for (index, line) in lines.iter().enumerate().rev() {
        if let Some(time) = line.time {
            if time <= current_time + LOOKAHEAD {
                return Some(index);
            }
        }
    }

    None
}

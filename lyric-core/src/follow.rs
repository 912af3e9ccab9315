/// 歌词视口的滚动跟随模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowMode {
    /// 当前行变化时视口自动滚动居中
    #[default]
    Auto,
    /// 视口停留在用户离开的位置，当前行变化不移动视口
    Manual,
}

/// 滚动跟随状态机
///
/// 只负责模式切换；视口居中的几何计算属于展示层，这里不感知。
/// 点击歌词行发起的跳转只转发给播放器，本身不改变跟随模式。
#[derive(Debug, Default)]
pub struct ScrollFollow {
    mode: FollowMode,
}

impl ScrollFollow {
    /// 初始为 Auto
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FollowMode {
        self.mode
    }

    pub fn is_auto(&self) -> bool {
        self.mode == FollowMode::Auto
    }

    /// 用户在歌词视口上滚动/触摸：无条件进入 Manual
    pub fn on_user_scroll(&mut self) {
        self.mode = FollowMode::Manual;
    }

    /// 恢复跟随：回到 Auto，调用方应在此刻把视口重新居中到当前行
    pub fn resume_follow(&mut self) {
        self.mode = FollowMode::Auto;
    }
}

/// 按键解析出的命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    TogglePlay,
    //
    Down,
    Up,
    GoToTop,
    GoToBottom,
    EnterOrPlay,
    ResumeFollow,
    //
    SeekForward,
    SeekBackward,

    Nop,
}

//! 统一错误定义
//!
//! 命令本身的全部失败路径（守卫拦截、重复注册、越界切换目标等）都以布尔
//! 返回值表达，不会升级为错误；这里只定义载荷还原这一处接缝的诊断类型，
//! 便于调用方区分“已处于目标状态”与“载荷类型不符”。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("payload type mismatch: expected={expected}")]
    PayloadMismatch { expected: &'static str },
}

/// 统一 Result 类型别名
pub type CommandResult<T> = Result<T, CommandError>;

//! 能力接口（CommandOps）
//!
//! 定义批量处理所需的最小操作集，使不同载荷类型的命令可以被统一对待：
//! - 类型化视图：`Command<D>` 直接实现 `CommandOps<D>`；
//! - 擦除视图：`Command<D>` 同时实现 `CommandOps<dyn Any>`，载荷在边界处
//!   通过 `downcast_ref` 还原为具体类型，类型不符时操作返回 `false`，
//!   不改变状态、不广播信号（与守卫拦截一致，失败不升级为错误）。
//!
//! 同一集合需要容纳不同载荷类型的命令时，以 [`AnyCommand`] 特征对象装箱。
//!
use crate::command::Command;
use crate::error::{CommandError, CommandResult};
use std::any::{Any, type_name};
use std::sync::Arc;

/// 命令能力接口：批量操作据此统一驱动异构的命令实现
pub trait CommandOps<D: ?Sized> {
    /// 最近一次实际执行的状态转换是否为 apply
    fn is_applied(&self) -> bool;

    /// 应用命令；守卫拦截或载荷类型不符时返回 `false`
    fn apply(&self, data: &D, force: bool) -> bool;

    /// 回退命令；守卫拦截或载荷类型不符时返回 `false`
    fn revert(&self, data: &D, force: bool) -> bool;

    /// 按 `applying` 分派到 apply 或 revert
    fn execute(&self, data: &D, applying: bool, force: bool) -> bool;

    /// 清空全部指令
    fn clear_instructions(&self);

    /// 硬复位（见 [`Command::dispose`]）
    fn dispose(&self);
}

/// 擦除视图的特征对象别名：载荷为 `dyn Any` 的命令能力接口
pub type AnyCommand = dyn CommandOps<dyn Any> + Send + Sync;

/// 将擦除载荷还原为具体类型；类型不符时返回 [`CommandError::PayloadMismatch`]
pub fn try_payload<D: 'static>(data: &dyn Any) -> CommandResult<&D> {
    data.downcast_ref::<D>().ok_or(CommandError::PayloadMismatch {
        expected: type_name::<D>(),
    })
}

impl<D: ?Sized> CommandOps<D> for Command<D> {
    fn is_applied(&self) -> bool {
        Command::is_applied(self)
    }

    fn apply(&self, data: &D, force: bool) -> bool {
        Command::apply(self, data, force)
    }

    fn revert(&self, data: &D, force: bool) -> bool {
        Command::revert(self, data, force)
    }

    fn execute(&self, data: &D, applying: bool, force: bool) -> bool {
        Command::execute(self, data, applying, force)
    }

    fn clear_instructions(&self) {
        Command::clear_instructions(self)
    }

    fn dispose(&self) {
        Command::dispose(self)
    }
}

// 擦除视图：载荷在边界处还原，失败即报告 false（无状态变化、无通知）
impl<D: 'static> CommandOps<dyn Any> for Command<D> {
    fn is_applied(&self) -> bool {
        Command::is_applied(self)
    }

    fn apply(&self, data: &dyn Any, force: bool) -> bool {
        match try_payload::<D>(data) {
            Ok(data) => Command::apply(self, data, force),
            Err(_) => false,
        }
    }

    fn revert(&self, data: &dyn Any, force: bool) -> bool {
        match try_payload::<D>(data) {
            Ok(data) => Command::revert(self, data, force),
            Err(_) => false,
        }
    }

    fn execute(&self, data: &dyn Any, applying: bool, force: bool) -> bool {
        match try_payload::<D>(data) {
            Ok(data) => Command::execute(self, data, applying, force),
            Err(_) => false,
        }
    }

    fn clear_instructions(&self) {
        Command::clear_instructions(self)
    }

    fn dispose(&self) {
        Command::dispose(self)
    }
}

impl<D: ?Sized, T: CommandOps<D> + ?Sized> CommandOps<D> for &T {
    fn is_applied(&self) -> bool {
        (**self).is_applied()
    }

    fn apply(&self, data: &D, force: bool) -> bool {
        (**self).apply(data, force)
    }

    fn revert(&self, data: &D, force: bool) -> bool {
        (**self).revert(data, force)
    }

    fn execute(&self, data: &D, applying: bool, force: bool) -> bool {
        (**self).execute(data, applying, force)
    }

    fn clear_instructions(&self) {
        (**self).clear_instructions()
    }

    fn dispose(&self) {
        (**self).dispose()
    }
}

impl<D: ?Sized, T: CommandOps<D> + ?Sized> CommandOps<D> for Box<T> {
    fn is_applied(&self) -> bool {
        (**self).is_applied()
    }

    fn apply(&self, data: &D, force: bool) -> bool {
        (**self).apply(data, force)
    }

    fn revert(&self, data: &D, force: bool) -> bool {
        (**self).revert(data, force)
    }

    fn execute(&self, data: &D, applying: bool, force: bool) -> bool {
        (**self).execute(data, applying, force)
    }

    fn clear_instructions(&self) {
        (**self).clear_instructions()
    }

    fn dispose(&self) {
        (**self).dispose()
    }
}

impl<D: ?Sized, T: CommandOps<D> + ?Sized> CommandOps<D> for Arc<T> {
    fn is_applied(&self) -> bool {
        (**self).is_applied()
    }

    fn apply(&self, data: &D, force: bool) -> bool {
        (**self).apply(data, force)
    }

    fn revert(&self, data: &D, force: bool) -> bool {
        (**self).revert(data, force)
    }

    fn execute(&self, data: &D, applying: bool, force: bool) -> bool {
        (**self).execute(data, applying, force)
    }

    fn clear_instructions(&self) {
        (**self).clear_instructions()
    }

    fn dispose(&self) {
        (**self).dispose()
    }
}

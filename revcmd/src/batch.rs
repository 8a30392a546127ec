//! 批量操作（batch）
//!
//! 对有序命令集合的三种纯函数操作：
//! - [`apply_all`] / [`revert_all`]：按集合顺序逐个转换，单个命令的结果
//!   （守卫拦截、载荷不符）不影响其余命令获得尝试机会；
//! - [`switch_to`]：互斥切换，先按集合顺序回退目标以外的全部命令
//!   （目标在回退阶段被完全跳过），回退完成后若目标在界内再应用目标。
//!
//! 三个函数都以能力接口 [`CommandOps`] 为参数约束，同一份实现同时服务
//! 类型化集合（`&[Command<D>]`）与擦除集合（`&[Box<AnyCommand>]`）。
//! 集合本身不被修改，空集合为无操作。
//!
use crate::ops::CommandOps;

/// 按集合顺序应用全部命令
pub fn apply_all<D, C>(commands: &[C], data: &D, force: bool)
where
    D: ?Sized,
    C: CommandOps<D>,
{
    for command in commands {
        command.apply(data, force);
    }
}

/// 按集合顺序回退全部命令
pub fn revert_all<D, C>(commands: &[C], data: &D, force: bool)
where
    D: ?Sized,
    C: CommandOps<D>,
{
    for command in commands {
        command.revert(data, force);
    }
}

/// 互斥切换：回退 `target` 以外的全部命令，再应用 `target` 指向的命令
///
/// `target` 为 `None` 或越界时表示“切换到无选中”：只执行回退阶段，
/// 不应用任何命令。先回退后应用的顺序是有意为之：当命令竞争互斥的
/// 外部资源时，先释放其余命令可避免瞬时的重复占用。
pub fn switch_to<D, C>(commands: &[C], data: &D, target: Option<usize>, force: bool)
where
    D: ?Sized,
    C: CommandOps<D>,
{
    for (index, command) in commands.iter().enumerate() {
        if Some(index) == target {
            continue;
        }
        command.revert(data, force);
    }

    if let Some(index) = target
        && let Some(command) = commands.get(index)
    {
        command.apply(data, force);
    }
}

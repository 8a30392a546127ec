//! 命令状态机（Command）
//!
//! 约束一个可逆命令的核心行为：
//! - `apply`/`revert` 在两个可观测状态之间转换，转换时先广播信号再派发指令；
//! - 已处于目标状态且未加 `force` 时为守卫拦截（返回 `false`，无任何副作用）；
//! - `dispose` 为硬复位：不触发信号与指令，直接回到未应用状态并清空注册。
//!
//! 指令派发采用“先快照再派发”：派发期间对指令表的增删不影响本轮。
//! 信号与指令表相互独立，清空一方不影响另一方。
//!
use crate::signal::Signal;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 指令：在命令每次 apply/revert 转换时执行的回调，
/// 参数为（载荷, 本次转换是否为 apply）。
///
/// 以 `Arc` 指针身份判定相同性：同一个 `Instruction` 克隆后注册视为重复，
/// 两个内容相同但独立创建的闭包则互不冲突。
pub type Instruction<D: ?Sized> = Arc<dyn Fn(&D, bool) + Send + Sync>;

/// 可逆命令：带信号广播与指令派发的双态状态机
///
/// 所有操作以 `&self` 进行（内部使用 `AtomicBool`/`Mutex` 提供共享可变性），
/// 因此命令可置于 `Arc` 中共享，批量操作也只需共享切片。
/// 契约本身仍是同步、单线程的：不存在并发的 apply/revert。
pub struct Command<D: ?Sized> {
    applied: AtomicBool,
    on_apply: Option<Arc<dyn Signal<D>>>,
    on_revert: Option<Arc<dyn Signal<D>>>,
    instructions: Mutex<Vec<Instruction<D>>>,
}

impl<D: ?Sized> Command<D> {
    /// 创建一个未应用、无信号、无指令的命令
    pub fn new() -> Self {
        Self {
            applied: AtomicBool::new(false),
            on_apply: None,
            on_revert: None,
            instructions: Mutex::new(Vec::new()),
        }
    }

    /// 创建命令并注入 apply/revert 两个通知信号
    ///
    /// 信号以 `Arc` 传入，调用方可保留自己的句柄在构造后继续注册订阅者
    /// （订阅者集合由外部协作方管理，命令只负责广播与 `dispose` 时的清空）。
    pub fn with_signals(on_apply: Arc<dyn Signal<D>>, on_revert: Arc<dyn Signal<D>>) -> Self {
        Self {
            applied: AtomicBool::new(false),
            on_apply: Some(on_apply),
            on_revert: Some(on_revert),
            instructions: Mutex::new(Vec::new()),
        }
    }

    /// 设置 apply 信号（替换原有信号，不迁移订阅者）
    pub fn set_on_apply(&mut self, signal: Arc<dyn Signal<D>>) {
        self.on_apply = Some(signal);
    }

    /// 设置 revert 信号（替换原有信号，不迁移订阅者）
    pub fn set_on_revert(&mut self, signal: Arc<dyn Signal<D>>) {
        self.on_revert = Some(signal);
    }

    /// apply 信号（未设置时为 `None`）
    pub fn on_apply(&self) -> Option<&dyn Signal<D>> {
        self.on_apply.as_deref()
    }

    /// revert 信号（未设置时为 `None`）
    pub fn on_revert(&self) -> Option<&dyn Signal<D>> {
        self.on_revert.as_deref()
    }

    /// 最近一次实际执行的状态转换是否为 apply
    pub fn is_applied(&self) -> bool {
        self.applied.load(Ordering::SeqCst)
    }

    /// 应用命令：广播 apply 信号并派发全部指令
    ///
    /// 已应用且 `force == false` 时为守卫拦截：返回 `false`，不产生任何副作用。
    /// 成功执行返回 `true`。
    pub fn apply(&self, data: &D, force: bool) -> bool {
        if self.is_applied() && !force {
            return false;
        }

        self.applied.store(true, Ordering::SeqCst);
        if let Some(signal) = &self.on_apply {
            signal.emit(data);
        }
        self.perform_instructions(data, true);
        true
    }

    /// 回退命令：广播 revert 信号并派发全部指令
    ///
    /// 未应用且 `force == false` 时为守卫拦截：返回 `false`，不产生任何副作用。
    /// 成功执行返回 `true`。
    pub fn revert(&self, data: &D, force: bool) -> bool {
        if !self.is_applied() && !force {
            return false;
        }

        self.applied.store(false, Ordering::SeqCst);
        if let Some(signal) = &self.on_revert {
            signal.emit(data);
        }
        self.perform_instructions(data, false);
        true
    }

    /// 按 `applying` 分派到 [`apply`](Self::apply) 或 [`revert`](Self::revert)
    pub fn execute(&self, data: &D, applying: bool, force: bool) -> bool {
        if applying {
            self.apply(data, force)
        } else {
            self.revert(data, force)
        }
    }

    /// 指令是否已注册（按 `Arc` 指针身份判定）
    pub fn has_instruction(&self, instruction: &Instruction<D>) -> bool {
        self.lock().iter().any(|known| Arc::ptr_eq(known, instruction))
    }

    /// 注册一条指令；重复注册返回 `false`
    pub fn add_instruction(&self, instruction: Instruction<D>) -> bool {
        let mut instructions = self.lock();
        if instructions.iter().any(|known| Arc::ptr_eq(known, &instruction)) {
            return false;
        }
        instructions.push(instruction);
        true
    }

    /// 移除已注册的指令；未注册返回 `false`
    pub fn remove_instruction(&self, instruction: &Instruction<D>) -> bool {
        let mut instructions = self.lock();
        match instructions.iter().position(|known| Arc::ptr_eq(known, instruction)) {
            Some(index) => {
                instructions.remove(index);
                true
            }
            None => false,
        }
    }

    /// 清空全部指令；不影响 `is_applied` 与信号
    pub fn clear_instructions(&self) {
        self.lock().clear();
    }

    /// 硬复位：`is_applied` 置回 `false`（不广播信号、不派发指令），
    /// 清空指令表，并清空两个信号的订阅者集合。可重复调用。
    pub fn dispose(&self) {
        self.applied.store(false, Ordering::SeqCst);
        self.clear_instructions();
        if let Some(signal) = &self.on_apply {
            signal.clear();
        }
        if let Some(signal) = &self.on_revert {
            signal.clear();
        }
    }

    fn perform_instructions(&self, data: &D, applying: bool) {
        // 先快照再派发：本轮执行不受派发期间增删指令的影响，
        // 指令回调执行时不持有锁，回调中回查自身命令不会死锁
        let snapshot = self.lock().clone();
        for instruction in snapshot {
            instruction(data, applying);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Instruction<D>>> {
        // 回调不在持锁期间执行，锁中毒时取回内部数据继续使用
        self.instructions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<D: ?Sized> Default for Command<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized> fmt::Debug for Command<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("applied", &self.is_applied())
            .field("instructions", &self.lock().len())
            .finish_non_exhaustive()
    }
}

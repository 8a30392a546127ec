//! 可逆命令基础库（revcmd）
//!
//! 提供以“可逆命令”为中心的通用抽象与构件，用于在应用中实现：
//! - 命令状态机（`command`）：apply/revert 双态转换、指令（instruction）注册与派发
//! - 信号（`signal`）：转换时的通知广播协议，以及内存版实现（`signal_inmemory`）
//! - 能力接口（`ops`）：类型化与擦除两种视图共用的最小操作集
//! - 批量操作（`batch`）：对命令序列的 apply-all / revert-all / switch-to
//!
//! 本 crate 完全同步、单线程、确定性：所有信号广播与指令派发都是调用方线程上的
//! 直接调用，不含任何挂起点。内部使用 `Mutex`/`AtomicBool` 仅为共享可变性
//! （命令可置于 `Arc` 中、指令可在派发中回查自身命令），而非并行。
//!
//! 典型用法：
//! 1. 以 `Command::with_signals` 构造命令并注册指令；
//! 2. 对互斥状态（如页签视图、单选项）将命令放入有序集合；
//! 3. 通过 `batch::switch_to` 切换唯一生效的命令；
//! 4. 需要在同一集合中容纳不同载荷类型时，使用 `ops::AnyCommand` 擦除视图。
//!
pub mod batch;
pub mod command;
pub mod error;
pub mod ops;
pub mod signal;
pub mod signal_inmemory;

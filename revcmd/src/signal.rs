//! 信号（Signal）协议
//!
//! 定义通知广播与订阅管理的统一抽象：命令在每次 apply/revert 转换时通过
//! 信号将载荷广播给订阅者。核心不绑定任何具体事件投递机制，宿主可注入
//! 自己的实现（如对接 UI 事件系统），或直接使用内存版
//! [`InMemorySignal`](crate::signal_inmemory::InMemorySignal)。
//!
use std::sync::Arc;

/// 订阅者：接收广播载荷的单参数回调
pub type Subscriber<D: ?Sized> = Arc<dyn Fn(&D) + Send + Sync>;

/// 信号：负责广播载荷与管理订阅者集合
///
/// 所有方法均以 `&self` 调用（实现内部自行处理可变性），
/// 使信号可由命令持有的同时仍被外部协作方注册订阅。
pub trait Signal<D: ?Sized>: Send + Sync {
    /// 注册一个订阅者
    fn subscribe(&self, subscriber: Subscriber<D>);

    /// 将载荷广播给全部订阅者；无订阅者时为无操作
    fn emit(&self, data: &D);

    /// 移除全部订阅者
    fn clear(&self);
}

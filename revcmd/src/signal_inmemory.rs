//! 内存版信号（InMemorySignal）
//!
//! 基于锁保护的订阅者列表实现 [`Signal`] 协议：
//! - `subscribe`：按注册顺序追加订阅者；
//! - `emit`：对订阅者快照逐一同步调用；
//! - `clear`：清空订阅者集合；
//! - 典型用途：测试环境、示例与不依赖外部事件系统的宿主。
//!
//! 注意：广播在订阅者回调期间不持有内部锁，回调中再注册/清空订阅者
//! 不会影响本轮广播，也不会死锁。

use crate::signal::{Signal, Subscriber};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 简单的内存信号实现
pub struct InMemorySignal<D: ?Sized> {
    subscribers: Mutex<Vec<Subscriber<D>>>,
}

// 手写 Default：派生版本会给 D 附加不必要的 Default 约束
impl<D: ?Sized> Default for InMemorySignal<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized> InMemorySignal<D> {
    /// 创建一个空信号
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// 当前订阅者数量
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// 是否没有任何订阅者
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Subscriber<D>>> {
        // 回调不在持锁期间执行，锁中毒时取回内部数据继续使用
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<D: ?Sized> Signal<D> for InMemorySignal<D> {
    fn subscribe(&self, subscriber: Subscriber<D>) {
        self.lock().push(subscriber);
    }

    fn emit(&self, data: &D) {
        let snapshot = self.lock().clone();
        for subscriber in snapshot {
            subscriber(data);
        }
    }

    fn clear(&self) {
        self.lock().clear();
    }
}

impl<D: ?Sized> fmt::Debug for InMemorySignal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemorySignal")
            .field("subscribers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // 测试按订阅顺序广播
    #[test]
    fn test_emit_in_subscription_order() {
        let signal = InMemorySignal::<i32>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let seen = seen.clone();
            signal.subscribe(Arc::new(move |data: &i32| {
                seen.lock().unwrap().push(format!("{tag}:{data}"));
            }));
        }

        signal.emit(&7);
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["first:7", "second:7", "third:7"]
        );
    }

    // 测试无订阅者时广播为无操作
    #[test]
    fn test_emit_without_subscribers() {
        let signal = InMemorySignal::<String>::new();
        assert!(signal.is_empty());
        signal.emit(&"ignored".to_string());
    }

    // 测试 clear 清空订阅者且后续广播不再送达
    #[test]
    fn test_clear_removes_all_subscribers() {
        let signal = InMemorySignal::<i32>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        signal.subscribe(Arc::new(move |data: &i32| {
            seen_clone.lock().unwrap().push(*data);
        }));
        signal.emit(&1);

        signal.clear();
        assert_eq!(signal.len(), 0);
        signal.emit(&2);

        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    // 测试回调中再订阅不影响本轮广播
    #[test]
    fn test_subscribe_during_emit_is_deferred() {
        let signal = Arc::new(InMemorySignal::<i32>::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let reentrant = {
            let signal = signal.clone();
            let seen = seen.clone();
            Arc::new(move |data: &i32| {
                seen.lock().unwrap().push(format!("outer:{data}"));
                let seen = seen.clone();
                signal.subscribe(Arc::new(move |data: &i32| {
                    seen.lock().unwrap().push(format!("inner:{data}"));
                }));
            })
        };
        signal.subscribe(reentrant);

        signal.emit(&1);
        assert_eq!(*seen.lock().unwrap(), vec!["outer:1"]);

        signal.emit(&2);
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["outer:1", "outer:2", "inner:2"]
        );
    }
}

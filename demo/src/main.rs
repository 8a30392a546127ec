//! 互斥视图切换示例
//!
//! 三个“视图”命令共享一个激活槽位，通过 `switch_to` 保证任意时刻
//! 至多一个视图处于应用状态；信号负责打印进出轨迹，指令负责维护槽位。

use revcmd::batch::switch_to;
use revcmd::command::{Command, Instruction};
use revcmd::signal::Signal;
use revcmd::signal_inmemory::InMemorySignal;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// 切换载荷：记录本次切换的来源，供订阅者与指令消费
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ViewChange {
    reason: String,
}

impl ViewChange {
    fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

fn view_command(
    index: usize,
    name: &'static str,
    active: &Arc<Mutex<Option<usize>>>,
) -> Command<ViewChange> {
    let on_apply = Arc::new(InMemorySignal::new());
    let on_revert = Arc::new(InMemorySignal::new());

    on_apply.subscribe(Arc::new(move |change: &ViewChange| {
        println!("  -> enter {name} ({})", change.reason);
    }));
    on_revert.subscribe(Arc::new(move |change: &ViewChange| {
        println!("  <- leave {name} ({})", change.reason);
    }));

    let command = Command::with_signals(on_apply, on_revert);
    let slot = active.clone();
    let track: Instruction<ViewChange> = Arc::new(move |_, applying| {
        let mut slot = slot.lock().unwrap();
        if applying {
            *slot = Some(index);
        } else if *slot == Some(index) {
            *slot = None;
        }
    });
    command.add_instruction(track);
    command
}

fn main() {
    let active: Arc<Mutex<Option<usize>>> = Arc::new(Mutex::new(None));

    let names = ["overview", "details", "settings"];
    let views: Vec<Command<ViewChange>> = names
        .iter()
        .enumerate()
        .map(|(index, name)| view_command(index, name, &active))
        .collect();

    let startup = ViewChange::new("startup");
    println!(
        "switch_to(Some(0)), payload = {}",
        serde_json::to_string(&startup).expect("payload serializes")
    );
    switch_to(&views, &startup, Some(0), false);
    println!("active = {:?}\n", active.lock().unwrap());

    println!("switch_to(Some(2))");
    switch_to(&views, &ViewChange::new("user clicked settings"), Some(2), false);
    println!("active = {:?}\n", active.lock().unwrap());

    // 重复切换到同一目标：apply 被守卫拦截，无任何输出
    println!("switch_to(Some(2)) again");
    switch_to(&views, &ViewChange::new("noop"), Some(2), false);
    println!("active = {:?}\n", active.lock().unwrap());

    // None 表示切换到无选中
    println!("switch_to(None)");
    switch_to(&views, &ViewChange::new("shutdown"), None, false);
    println!("active = {:?}", active.lock().unwrap());
}

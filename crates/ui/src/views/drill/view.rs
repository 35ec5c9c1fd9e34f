use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;

use drill_core::TimerTicket;
use services::DrillLoopService;

use super::scripts::focus_script;
use crate::context::AppContext;
use crate::vm::{DrillIntent, DrillVm, KeypadButtonVm, digit_for_key, map_keypad_buttons};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const ROOT_ID: &str = "drill-root";

/// Fires each ticket after its delay. The reducer ignores tickets that went stale
/// in the meantime, so nothing here needs cancelling.
fn schedule_timers(
    vm: Signal<DrillVm>,
    drill_loop: Arc<DrillLoopService>,
    timers: Vec<TimerTicket>,
) {
    for ticket in timers {
        let drill_loop = Arc::clone(&drill_loop);
        let mut vm = vm;
        spawn(async move {
            tokio::time::sleep(ticket.delay()).await;
            tracing::trace!(kind = ?ticket.kind(), generation = ticket.generation(), "timer elapsed");
            let follow_up = vm.write().fire(&drill_loop, ticket);
            schedule_timers(vm, drill_loop, follow_up);
        });
    }
}

#[component]
pub fn DrillView() -> Element {
    let ctx = use_context::<AppContext>();
    let drill_loop = ctx.drill_loop();

    let vm = {
        let drill_loop = Arc::clone(&drill_loop);
        use_signal(move || DrillVm::new(drill_loop.start_drill()))
    };
    let keypad = use_hook(map_keypad_buttons);

    use_effect(move || {
        let _ = eval(&focus_script(ROOT_ID));
    });

    let dispatch_intent = {
        let drill_loop = Arc::clone(&drill_loop);
        use_callback(move |intent: DrillIntent| {
            let mut vm = vm;
            let timers = vm.write().dispatch(&drill_loop, intent);
            schedule_timers(vm, Arc::clone(&drill_loop), timers);
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DrillTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let Key::Character(value) = evt.data.key() else {
            return;
        };
        if let Some(digit) = digit_for_key(&value) {
            evt.prevent_default();
            dispatch_intent.call(DrillIntent::Digit(digit));
        }
    });

    let vm_guard = vm.read();
    let prompt = vm_guard.prompt_text();
    let input = vm_guard.input_text().to_string();
    let score = vm_guard.score();
    let message = vm_guard.feedback_message().unwrap_or_default();
    let celebrating = vm_guard.is_celebrating();
    drop(vm_guard);

    let message_class = if message.is_empty() {
        "drill-message"
    } else {
        "drill-message drill-message--visible"
    };

    rsx! {
        div { class: "drill-page", id: ROOT_ID, tabindex: "0", onkeydown: on_key,
            h1 { class: "drill-title", "趣味数字游戏" }
            div { class: "drill-card",
                if celebrating {
                    div { class: "drill-celebration", id: "drill-celebration",
                        span { class: "drill-celebration__star", "★" }
                    }
                }
                div { class: "drill-question", id: "drill-question", "{prompt}" }
                div { class: "{message_class}", id: "drill-message", "{message}" }
                div { class: "keypad",
                    for button in keypad.iter() {
                        KeypadButton {
                            key: "{button.id}",
                            button: button.clone(),
                            bounce: celebrating,
                            on_intent: dispatch_intent,
                        }
                    }
                }
                div { class: "drill-status",
                    p {
                        "你的答案: "
                        span { class: "drill-answer", id: "drill-answer", "{input}" }
                    }
                    p { class: "drill-score-line",
                        "得分: "
                        span { class: "drill-score", id: "drill-score", "{score}" }
                    }
                }
            }
            div { class: "drill-hint",
                span { class: "drill-hint__icon", "⌨" }
                span { "使用键盘数字键也可以哦！" }
            }
        }
    }
}

#[component]
fn KeypadButton(button: KeypadButtonVm, bounce: bool, on_intent: EventHandler<DrillIntent>) -> Element {
    let class = if bounce {
        "keypad__button keypad__button--bounce"
    } else {
        "keypad__button"
    };
    let digit = button.digit;
    rsx! {
        button {
            class: "{class}",
            id: "{button.id}",
            style: "{button.style}",
            r#type: "button",
            onclick: move |_| on_intent.call(DrillIntent::Digit(digit)),
            "{button.label}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DrillTestHandles {
    dispatch: Rc<RefCell<Option<Callback<DrillIntent>>>>,
    vm: Rc<RefCell<Option<Signal<DrillVm>>>>,
}

#[cfg(test)]
impl DrillTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<DrillIntent>, vm: Signal<DrillVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<DrillIntent> {
        (*self.dispatch.borrow()).expect("drill dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<DrillVm> {
        (*self.vm.borrow()).expect("drill vm registered")
    }
}

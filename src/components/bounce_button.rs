use crate::components::bounce::{settle_after, BouncePhase, ButtonViewState, BOUNCE_DURATION};
use dioxus::core::Task;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Background used when no Bootstrap color is given.
pub const FALLBACK_BACKGROUND: &str = "#ff8c00";

#[derive(Props, Debug, Clone, PartialEq)]
pub struct BounceButtonProps {
    /// Rendered as the button's id so the host can address this instance.
    pub id: Option<String>,
    /// Text shown on the button.
    #[props(into)]
    pub label: String,
    /// Bootstrap color name such as `primary` or `success`. Not validated.
    pub color: Option<String>,
    /// Extra classes, appended after the color class.
    pub class_name: Option<String>,
}

impl BounceButtonProps {
    /// An empty color counts as no color at all.
    fn color(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| !c.is_empty())
    }

    // Empty segments are kept, so the result may carry extra spaces.
    pub fn class(&self, state: &ButtonViewState) -> String {
        let color_class = self
            .color()
            .map(|c| format!("btn-{c}"))
            .unwrap_or_default();
        let class_name = self.class_name.as_deref().unwrap_or_default();
        let bouncing = match state.phase() {
            BouncePhase::Bouncing => "bouncing",
            BouncePhase::Idle => "",
        };

        format!("btn {color_class} {class_name} {bouncing}")
    }

    pub fn style(&self, state: &ButtonViewState) -> String {
        // A named color hands the background over to the btn-<color> class
        let background = match self.color() {
            Some(_) => String::new(),
            None => format!("background-color: {FALLBACK_BACKGROUND}; "),
        };
        let transform = match state.phase() {
            BouncePhase::Bouncing => "translateY(-10px)",
            BouncePhase::Idle => "translateY(0)",
        };

        format!(
            "padding: 10px 20px; border: none; border-radius: 5px; {background}color: white; \
             font-size: 16px; cursor: pointer; outline: none; position: relative; \
             transition: transform 0.3s ease; transform: {transform};"
        )
    }
}

/// A button that jumps up for [`BOUNCE_DURATION`] every time it is clicked.
#[component]
pub fn BounceButton(props: BounceButtonProps) -> Element {
    let mut state = use_signal(ButtonViewState::default);

    // Revert tasks in the order they were spawned. Each one pops itself when
    // it fires. The scope cancels its own tasks on unmount anyway; draining
    // here is what lets us log how many reverts never landed.
    let reverts = use_hook(|| Rc::new(RefCell::new(VecDeque::<Task>::new())));

    use_drop({
        let reverts = reverts.clone();
        move || {
            let pending: Vec<Task> = reverts.borrow_mut().drain(..).collect();
            if !pending.is_empty() {
                tracing::debug!(count = pending.len(), "cancelling pending bounce reverts");
            }
            for task in pending {
                task.cancel();
            }
        }
    });

    let handle_click = {
        let reverts = reverts.clone();
        move |_: MouseEvent| {
            state.write().click();
            tracing::debug!(pending = state.peek().pending(), "bounce started");

            let fired = reverts.clone();
            let task = spawn(async move {
                settle_after(BOUNCE_DURATION, move || {
                    state.write().settle();
                    fired.borrow_mut().pop_front();
                    tracing::debug!(pending = state.peek().pending(), "bounce settled");
                })
                .await;
            });
            reverts.borrow_mut().push_back(task);
        }
    };

    let current = state();
    let class = props.class(&current);
    let style = props.style(&current);

    rsx! {
        button {
            id: props.id.clone(),
            class: "{class}",
            style: "{style}",
            onclick: handle_click,
            "{props.label}"
        }
    }
}

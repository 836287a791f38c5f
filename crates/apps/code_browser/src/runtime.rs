//! Reactive container around [`reduce_browser`] and its fetch executor.

use std::rc::Rc;

use leptos::logging::{log, warn};
use leptos::*;
use portfolio_host::PortfolioApi;

use crate::effects::execute_effect;
use crate::reducer::{reduce_browser, BrowserAction, BrowserEffect, BrowserState};

#[derive(Clone, Copy)]
/// Reducer state, effect queue, and backend handle for one mounted browser.
pub struct BrowserRuntime {
    /// Backend used by the effect executor.
    pub api: StoredValue<Rc<dyn PortfolioApi>>,
    /// Reactive browser state.
    pub state: RwSignal<BrowserState>,
    /// Fetch intents waiting for the executor.
    pub effects: RwSignal<Vec<BrowserEffect>>,
}

impl BrowserRuntime {
    /// Creates the runtime in the current reactive owner and starts its effect executor.
    pub fn new(api: Rc<dyn PortfolioApi>) -> Self {
        let runtime = Self {
            api: store_value(api),
            state: create_rw_signal(BrowserState::default()),
            effects: create_rw_signal(Vec::new()),
        };
        runtime.install_executor();
        runtime
    }

    /// Applies `action` and queues any fetches it emits.
    ///
    /// Results arriving after the owning view was unmounted are dropped.
    pub fn dispatch_action(self, action: BrowserAction) {
        let Some(mut browser) = self.state.try_get_untracked() else {
            log!("code browser unmounted; dropping late result");
            return;
        };
        let previous = browser.clone();

        match reduce_browser(&mut browser, action) {
            Ok(new_effects) => {
                if browser != previous {
                    self.state.set(browser);
                }
                if !new_effects.is_empty() {
                    self.effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => warn!("code browser reducer error: {err}"),
        }
    }

    fn install_executor(self) {
        create_effect(move |_| {
            let queued = self.effects.get();
            if queued.is_empty() {
                return;
            }
            self.effects.set(Vec::new());

            for effect in queued {
                let api = self.api.get_value();
                spawn_local(async move {
                    let action = execute_effect(api.as_ref(), effect).await;
                    self.dispatch_action(action);
                });
            }
        });
    }
}

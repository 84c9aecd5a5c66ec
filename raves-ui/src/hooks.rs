//! Shared hooks

use dioxus::prelude::*;

/// Hook that trails `value` by `delay_ms`.
///
/// The returned signal takes on `value` once it has stayed the same for
/// `delay_ms`. Each new value cancels the pending update, and pending updates
/// are dropped with the component.
pub fn use_debounce<T>(value: T, delay_ms: u64) -> ReadSignal<T>
where
    T: Clone + PartialEq + 'static,
{
    let mut debounced = use_signal({
        let value = value.clone();
        move || value
    });
    let mut pending = use_signal(|| None::<Task>);

    use_effect(use_reactive!(|(value, delay_ms)| {
        if let Some(task) = pending.take() {
            task.cancel();
        }
        if *debounced.peek() == value {
            return;
        }
        let task = spawn(async move {
            sleep_ms(delay_ms).await;
            debounced.set(value);
        });
        pending.set(Some(task));
    }));

    debounced.into()
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

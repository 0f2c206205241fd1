use crate::Observation;
use std::fmt::Debug;
use std::sync::Arc;

/// Observer function type
pub type ObserverFn<ActionType, ToastType> =
    Arc<dyn for<'a> Fn(&Observation<'a, ActionType, ToastType>) + Send + Sync>;

/// Tracing observer - logs to tracing crate
pub fn tracing_observer<ActionType, ToastType>() -> ObserverFn<ActionType, ToastType>
where
    ActionType: Debug + 'static,
    ToastType: Debug + 'static,
{
    Arc::new(
        move |observation: &Observation<'_, ActionType, ToastType>| match observation {
            Observation::Dispatch { data, .. } => {
                tracing::info!(target: "console-core::Action", "Action({:?})", data);
            }
            Observation::Toast { data, .. } => {
                tracing::debug!(target: "console-core::Toast", "Toast({:?})", data);
            }
        },
    )
}

/// Tee observer - call multiple observers
pub fn tee_observer<ActionType, ToastType>(
    observers: Vec<ObserverFn<ActionType, ToastType>>,
) -> ObserverFn<ActionType, ToastType>
where
    ActionType: 'static,
    ToastType: 'static,
{
    Arc::new(
        move |observation: &Observation<'_, ActionType, ToastType>| {
            for observer in &observers {
                observer(observation);
            }
        },
    )
}

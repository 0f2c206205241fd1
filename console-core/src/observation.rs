use std::time::SystemTime;

/// Observation variants emitted by the router
///
/// Borrows the routed value so observers can pattern-match without the
/// router cloning every action. No trait bounds are imposed here; helpers
/// add whatever bounds they need.
pub enum Observation<'a, ActionType, ToastType> {
    Dispatch { ts: SystemTime, data: &'a ActionType },
    Toast { ts: SystemTime, data: &'a ToastType },
}

mod batch;
mod observation;
mod observer;
mod router;
mod toast;

pub use batch::Batch;
pub use observation::Observation;
pub use observer::{tee_observer, tracing_observer, ObserverFn};
pub use router::{Router, RouterChannels};
pub use toast::{Toast, ToastKind};

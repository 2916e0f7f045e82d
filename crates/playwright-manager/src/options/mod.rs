// Option sets for resource creation, and the resolution chain that picks
// the effective one: explicit argument -> ambient stored value -> default.

mod connection;
mod context;
mod launch;
mod tracing_options;

pub use connection::ConnectionOption;
pub use context::{ContextOption, Viewport};
pub use launch::LaunchOption;
pub use tracing_options::{TracingStartOption, TracingStopOption};

/// Picks the effective option value for a creation call.
///
/// Precedence: an explicitly passed option wins; otherwise the value stored
/// by the most recent creation of the same kind; otherwise a fresh default.
/// Side-effect-free apart from logging which source was used.
pub(crate) fn resolve<T: Default>(explicit: Option<T>, stored: Option<T>, label: &str) -> T {
    if let Some(option) = explicit {
        return option;
    }
    if let Some(option) = stored {
        tracing::info!("Reusing existing {label}.");
        return option;
    }
    tracing::info!("Using default {label}.");
    T::default()
}

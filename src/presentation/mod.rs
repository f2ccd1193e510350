//! Presentation seam
//!
//! The client calls a [`PresentationAdapter`] after every store write. Chart
//! drawing and layout live with the consumer; [`LogPresenter`] is the console
//! implementation used by the binary.

mod console;

pub use console::{ERROR_PLACEHOLDER, LogPresenter, render_lines};

use crate::client::ConnectionState;
use crate::monitoring::StoreUpdate;

/// Consumer of store updates
pub trait PresentationAdapter: Send {
    /// Called after every write to the store, including error flags
    fn on_update(&mut self, update: &StoreUpdate<'_>);

    /// Called when the push channel changes state
    fn on_connection_state(&mut self, _state: ConnectionState) {}
}

impl<P: PresentationAdapter + ?Sized> PresentationAdapter for Box<P> {
    fn on_update(&mut self, update: &StoreUpdate<'_>) {
        (**self).on_update(update)
    }

    fn on_connection_state(&mut self, state: ConnectionState) {
        (**self).on_connection_state(state)
    }
}

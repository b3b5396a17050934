use tokio::sync::mpsc;

use crate::api::Photo;

/// Navigation requests emitted by the state machines for the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Open the detail screen for a photo.
    Detail(Photo),
    /// Leave the detail screen showing `photo_id`. Ignored unless that
    /// screen is on top.
    Back { photo_id: String },
}

pub type RouteSender = mpsc::UnboundedSender<Route>;
pub type RouteReceiver = mpsc::UnboundedReceiver<Route>;

pub fn route_channel() -> (RouteSender, RouteReceiver) {
    mpsc::unbounded_channel()
}

/// Forward a route; a gone coordinator is not an error for the sender.
pub(crate) fn send_route(routes: &RouteSender, route: Route) {
    if routes.send(route).is_err() {
        tracing::trace!("Route dropped (coordinator gone)");
    }
}

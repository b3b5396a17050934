//! Screen state machines and the ports the view layer talks to.

pub mod detail;
pub mod favorites;
pub mod list;
pub mod mvi;
pub mod notice;
pub mod port;
pub mod routing;

pub use notice::Notice;
pub use port::{PortError, ViewModelHandle};
pub use routing::{Route, RouteReceiver, RouteSender};

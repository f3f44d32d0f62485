mod genres;
mod layout;
mod users;
mod wallet;

use std::future::Future;

use dioxus::core::spawn_forever;

pub use genres::GenresPanel;
pub use layout::ConsoleLayout;
pub use users::UsersPanel;
pub use wallet::WalletPanel;

/// Run a dispatcher action at the root scope so that leaving the tab that
/// started it does not cancel it.
pub(crate) fn spawn_action(action: impl Future<Output = ()> + 'static) {
    let _ = spawn_forever(action);
}

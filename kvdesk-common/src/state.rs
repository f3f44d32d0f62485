use crate::identity::ActiveIdentifier;
use crate::notification::NotificationChannel;
use crate::tab::TabRouter;
use crate::view_models::{GenresModel, ProfileModel, WalletModel};

/// Everything the console holds for one session.
///
/// The three view models are independent; the profile and wallet handlers
/// both address the backend through `active_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleState {
    pub genres: GenresModel,
    pub profile: ProfileModel,
    pub wallet: WalletModel,
    pub active_id: ActiveIdentifier,
    pub notification: NotificationChannel,
    pub tabs: TabRouter,
}

impl ConsoleState {
    pub fn with_user(id: impl Into<String>) -> Self {
        Self {
            active_id: ActiveIdentifier::new(id),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::Tab;

    #[test]
    fn test_switching_tabs_keeps_state() {
        let mut state = ConsoleState::default();
        state.genres.form.name = "Synthwave".into();
        state.wallet.form.amount = "5".into();
        state.active_id.set("user:77");

        state.tabs.select(Tab::Wallet);
        state.tabs.select(Tab::Users);

        assert_eq!(state.genres.form.name, "Synthwave");
        assert_eq!(state.wallet.form.amount, "5");
        assert_eq!(state.active_id.get(), "user:77");
    }
}

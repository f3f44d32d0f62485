//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod card;
pub mod genres;
pub mod icons;
pub mod identity_field;
pub mod notification_toast;
pub mod profile;
pub mod segmented_control;
pub mod tab_bar;
pub mod text_input;
pub mod utils;
pub mod wallet;

pub use app_layout::ConsoleLayoutView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use card::{Card, EmptyState, PanelSection};
pub use genres::GenresView;
pub use icons::{ArrowRightLeftIcon, PencilIcon, PlusIcon, RefreshIcon, XIcon};
pub use identity_field::IdentityField;
pub use notification_toast::NotificationToast;
pub use profile::ProfileView;
pub use segmented_control::{Segment, SegmentedControl};
pub use tab_bar::TabBar;
pub use text_input::{InputKind, TextInput};
pub use utils::format_count;
pub use wallet::WalletView;

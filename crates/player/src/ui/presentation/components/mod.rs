pub mod game_host;
pub mod overlays;
pub mod umi_provider;

pub use game_host::GameHost;
pub use overlays::{MusicControl, PauseButton, ScoreDisplay};
pub use umi_provider::{UmiProvider, WalletBadge};

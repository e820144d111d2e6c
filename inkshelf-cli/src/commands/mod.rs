//! CLI command implementations

mod add;
mod edit;
mod info;
mod list;
mod read;
mod remove;
mod session;
mod share;
mod sweep;

pub use add::{add, AddArgs};
pub use edit::{edit, EditArgs};
pub use info::info;
pub use list::list;
pub use read::read;
pub use remove::remove;
pub use session::{login, logout};
pub use share::share;
pub use sweep::sweep;

use anyhow::{bail, Result};
use inkshelf_core::{DirStore, Notice, SessionGate};

/// Print a notice the way the UI would show a banner
pub(crate) fn present(notice: &Notice) {
    println!("[{}] {}", notice.severity, notice.message);
}

/// Refuse admin commands without an open session
pub(crate) async fn require_admin(store: &DirStore) -> Result<()> {
    let gate = SessionGate::new(store.clone());
    if !gate.is_authorized().await? {
        present(&Notice::danger("not logged in; run `inkshelf login` first"));
        bail!("admin session required");
    }
    Ok(())
}

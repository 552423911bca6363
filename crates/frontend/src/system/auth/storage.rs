use contracts::system::auth::AuthSnapshot;

use crate::shared::local_storage;

/// Restore the session saved under `toy-store-auth`
pub fn load_session() -> AuthSnapshot {
    let snapshot: AuthSnapshot = local_storage::load_or_default();
    // a flag without a user is not a session
    if snapshot.is_authenticated && snapshot.user.is_none() {
        return AuthSnapshot::logged_out();
    }
    snapshot
}

pub fn save_session(snapshot: &AuthSnapshot) {
    local_storage::store(snapshot);
}

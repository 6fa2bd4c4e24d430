mod error;

use crate::Shell;

use hr_app::AppState;
use hr_auth::SessionStore;

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

pub(crate) fn create_shell() -> Shell {
    let state = AppState::new(
        SessionStore::seeded(Duration::ZERO),
        StdRng::seed_from_u64(3),
    );
    Shell::new(state, false)
}

/// Run one line and parse its JSON reply.
pub(crate) async fn reply(shell: &mut Shell, line: &str) -> Value {
    match shell.handle_line(line).await {
        crate::Reply::Output(text) => serde_json::from_str(&text).unwrap(),
        other => panic!("expected output for {line:?}, got {other:?}"),
    }
}

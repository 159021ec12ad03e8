//! Login screen

use crate::auth::Credentials;
use crate::engine::Prompt;

use super::console::Console;

/// Run the login loop until the user authenticates or gives up.
/// Returns `false` if input was closed or the user typed `quit`.
pub fn run(console: &mut Console, credentials: &Credentials) -> bool {
    console.say("\n=== Inventory System Login ===");

    loop {
        let Some(username) = console.read_line("Username: ") else {
            return false;
        };
        if username.eq_ignore_ascii_case("quit") {
            return false;
        }

        let Some(password) = console.read_line("Password: ") else {
            return false;
        };

        if credentials.verify(&username, &password) {
            tracing::info!(%username, "login succeeded");
            return true;
        }

        tracing::warn!(%username, "login failed");
        console.notify("Login Failed", "Invalid Username or Password");
    }
}

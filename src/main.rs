// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging and config, then hand an empty
//   user list to the prompt loop.
// - Returns `anyhow::Result` so prompt failures exit with a non-zero code.

use tracing::info;
use users_app::config::Config;
use users_app::logging;
use users_app::message::Console;
use users_app::ui::{main_menu, print_banner, DialoguerPrompter};
use users_app::users::UsersData;

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = Config::load();

    let mut console = Console::stdout(config.display.color);
    if config.display.banner {
        print_banner(&mut console)?;
    }

    // This call blocks until the user types `quit`.
    let mut users = UsersData::new();
    main_menu(&mut users, &mut DialoguerPrompter, &mut console)?;
    info!(remaining = users.len(), "Session finished");
    Ok(())
}

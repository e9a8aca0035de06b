//! Entry menu: login, registration, and session hand-off.

use dialoguer::theme::ColorfulTheme;

use crate::cli::menus::dashboard_menu;
use crate::cli::{io, output};
use crate::config::StoreConfig;
use crate::core::accounts::AccountManager;
use crate::core::session::Session;
use crate::errors::TrackerError;

/// Runs the interactive front end until the user quits.
pub fn run_cli() -> Result<(), TrackerError> {
    let config = StoreConfig::from_env();
    let mut accounts = AccountManager::open(config)?;
    let theme = ColorfulTheme::default();

    loop {
        output::section("Finance Tracker");
        let choice = io::select_action(&theme, "Choose an action", &["Login", "Register", "Quit"])?;
        match choice {
            0 => login(&accounts, &theme)?,
            1 => register(&mut accounts, &theme)?,
            _ => break,
        }
    }
    Ok(())
}

fn login(accounts: &AccountManager, theme: &ColorfulTheme) -> Result<(), TrackerError> {
    let username = io::prompt_text(theme, "Username")?;
    let password = io::prompt_password(theme, "Password")?;
    if !accounts.login(&username, &password) {
        output::error("Invalid credentials.");
        return Ok(());
    }
    output::success(format!("Welcome, {}!", username));
    let mut session = Session::open(accounts.config(), &username)?;
    dashboard_menu::run(&mut session, theme)
}

fn register(accounts: &mut AccountManager, theme: &ColorfulTheme) -> Result<(), TrackerError> {
    let username = io::prompt_text(theme, "New username")?;
    let password = io::prompt_password(theme, "New password")?;
    match accounts.register(&username, &password) {
        Ok(()) => {
            output::success("Registration successful.");
            Ok(())
        }
        Err(TrackerError::InvalidInput(message)) => {
            output::error(message);
            Ok(())
        }
        Err(err) => Err(err),
    }
}

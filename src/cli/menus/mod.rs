mod dashboard_menu;
mod login_menu;

pub use login_menu::run_cli;

fn main() {
    fintrack::init();
    if let Err(err) = fintrack::cli::run_cli() {
        fintrack::cli::output::error(&err);
        std::process::exit(1);
    }
}

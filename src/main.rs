fn main() {
    relaygen::app::cli::run();
}

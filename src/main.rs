fn main() {
    reuseit::app::cli::run();
}

fn main() {
    std::process::exit(ftools_cli::run_from_env())
}

fn main() {
    token_claimer::run_app();
}

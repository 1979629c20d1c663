fn main() {
    crescendo_frontend::run();
}

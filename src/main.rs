fn main() {
    soy_outline_lib::run()
}

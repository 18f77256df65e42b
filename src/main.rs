fn main() {
    file_insight_lib::run()
}

fn main() -> anyhow::Result<()> {
    wikimapper::app::run()
}

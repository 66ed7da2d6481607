fn main() -> anyhow::Result<()> {
    klondike_rules::run()
}

fn main() -> anyhow::Result<()> {
    calview::Cli::run()
}

fn main() -> anyhow::Result<()> {
    mcq_shuffle::run()
}

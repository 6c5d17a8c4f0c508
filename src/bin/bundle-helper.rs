use anyhow::Result;

fn main() -> Result<()> {
    bundle_helper::cli::run()
}

use anyhow::Result;

fn main() -> Result<()> {
    msg_viewer::cli::run()
}

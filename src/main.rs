use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = pw_io::cli::parse();
    app::run(args)
}

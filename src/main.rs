use clap::Parser;
use route_gpx::{web, Configuration};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Configuration::parse();
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(web::main(config))
}

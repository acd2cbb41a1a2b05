use std::sync::Arc;

use plotter::{
    canvas,
    client::PointClient,
    config::Config,
    menu::DialogNotifier,
    server,
    store::MemoryStore
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = Config::parse_args();
    let store = Arc::new(MemoryStore::new());

    if config.serve {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(server::serve(config.addr, store))?;
        return Ok(());
    }

    // The embedded store lives as long as the window does
    let (_server, url) = match config.server_url {
        Some(url) => (None, url),
        None => {
            let handle = server::spawn(config.addr, store)?;
            let url = handle.url();
            (Some(handle), url)
        }
    };

    let client = PointClient::new(url)?;

    pollster::block_on(
        canvas::run(client, DialogNotifier::new()?)
    )?;

    Ok(())
}

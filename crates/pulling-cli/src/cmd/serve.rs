use super::load_config;
use std::path::Path;

pub fn run(config_path: Option<&Path>, bind: &str, port: u16) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    for w in config.validate() {
        tracing::warn!("config: {}", w.message);
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}")).await?;
        let addr = listener.local_addr()?;
        println!("pulling API → http://{addr}");

        tokio::select! {
            res = pulling_server::serve_on(config, listener) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}

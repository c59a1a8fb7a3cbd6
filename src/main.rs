use core::{convert::Infallible, future::Future, pin::pin};
use hyper::{server::conn::http1, service::service_fn};
use hyper_util::{rt::TokioIo, server::graceful::GracefulShutdown};
use std::{env, io, net::Ipv4Addr};
use tokio::{net::TcpListener, runtime::Runtime};

/// Accepts connections until `stop` resolves, then waits for open connections to finish the
/// request they are serving.
async fn serve<F>(listener: TcpListener, stop: F) -> anyhow::Result<()>
where
    F: Future<Output = io::Result<()>>,
{
    let graceful = GracefulShutdown::new();
    let mut stop = pin!(stop);
    loop {
        let (stream, peer) = tokio::select! {
            biased;
            result = &mut stop => {
                result?;
                break;
            }
            conn = listener.accept() => match conn {
                Ok(conn) => conn,
                Err(err) => {
                    log::warn!("cannot accept connection: {err}");
                    continue;
                }
            },
        };

        let service = service_fn(|req| async move { Ok::<_, Infallible>(api::respond(req).await) });
        let conn = graceful.watch(http1::Builder::new().serve_connection(TokioIo::new(stream), service));
        tokio::spawn(async move {
            if let Err(err) = conn.await {
                log::error!("connection with {peer} failed: {err}");
            }
        });
    }

    drop(listener);
    log::info!("shutting down");
    graceful.shutdown().await;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse environment variables
    let port: u16 = env::var("PORT")?.parse()?;

    let runtime = Runtime::new()?;
    runtime.block_on(async move {
        let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await?;
        log::info!("listening on {}", listener.local_addr()?);
        serve(listener, tokio::signal::ctrl_c()).await
    })
}

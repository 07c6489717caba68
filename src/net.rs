//! Graceful-shutdown driver for network listeners.
//!
//! [`run_with_shutdown`] runs a listener future until a cancellation future
//! resolves, then triggers a graceful shutdown bounded by a timeout while
//! still driving the listener so in-flight work can drain.

use std::{future::Future, io, time::Duration};

use thiserror::Error;
use tokio::time;

/// Error running a listener with graceful shutdown.
#[derive(Debug, Error)]
pub enum RunError {
	/// The listener itself failed.
	#[error("listen and serve")]
	Serve(#[source] io::Error),
	/// The graceful shutdown failed after cancellation.
	#[error("shutdown")]
	Shutdown(#[source] io::Error),
	/// The graceful shutdown did not complete within the timeout.
	#[error("shutdown timed out after {0:?}")]
	ShutdownTimeout(Duration),
}

/// Drive `serve` to completion, triggering `shutdown` once `cancel`
/// resolves.
///
/// `serve` is the future running the listener; it must resolve `Ok(())`
/// once the listener has been closed by `shutdown`. `shutdown` produces
/// the future that closes the listener gracefully and is given at most
/// `timeout` to finish.
///
/// A listener error always takes precedence over a shutdown error. If the
/// shutdown fails or times out, the listener is abandoned rather than
/// awaited forever.
pub async fn run_with_shutdown<S, D, DF, C>(
	serve: S,
	shutdown: D,
	cancel: C,
	timeout: Duration,
) -> Result<(), RunError>
where
	S: Future<Output = io::Result<()>>,
	D: FnOnce() -> DF,
	DF: Future<Output = io::Result<()>>,
	C: Future<Output = ()>,
{
	tokio::pin!(serve);

	tokio::select! {
		res = &mut serve => return res.map_err(RunError::Serve),
		() = cancel => {}
	}

	tracing::debug!(?timeout, "cancelled, shutting down listener");

	let shutdown = time::timeout(timeout, shutdown());
	tokio::pin!(shutdown);

	// The listener must keep being polled while the shutdown runs, or
	// in-flight work could never drain.
	let mut serve_res = None;
	let shutdown_res = loop {
		tokio::select! {
			res = &mut serve, if serve_res.is_none() => serve_res = Some(res),
			res = &mut shutdown => break res,
		}
	};

	match (serve_res, shutdown_res) {
		(Some(Err(err)), _) => Err(RunError::Serve(err)),
		(_, Ok(Err(err))) => Err(RunError::Shutdown(err)),
		(_, Err(_)) => Err(RunError::ShutdownTimeout(timeout)),
		(Some(Ok(())), Ok(Ok(()))) => Ok(()),
		(None, Ok(Ok(()))) => serve.await.map_err(RunError::Serve),
	}
}

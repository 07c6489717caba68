#![cfg(feature = "net")]

use std::{future, io, time::Duration};

use tokio::sync::oneshot;
use vec_range_map::net::{run_with_shutdown, RunError};

const TIMEOUT: Duration = Duration::from_secs(1);

fn broken_pipe() -> io::Error {
	io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe")
}

#[tokio::test]
async fn serve_error_passes_through() {
	let res = run_with_shutdown(
		future::ready(Err(broken_pipe())),
		|| future::ready(Ok(())),
		future::pending(),
		TIMEOUT,
	)
	.await;

	assert!(matches!(res, Err(RunError::Serve(_))));
}

#[tokio::test]
async fn serve_finishing_cleanly_is_ok() {
	let res = run_with_shutdown(
		future::ready(Ok(())),
		|| future::ready(Ok(())),
		future::pending(),
		TIMEOUT,
	)
	.await;

	assert!(res.is_ok());
}

#[tokio::test]
async fn cancel_triggers_graceful_shutdown() {
	// The fake listener runs until the fake shutdown tells it to close.
	let (close_tx, close_rx) = oneshot::channel::<()>();

	let serve = async move {
		let _ = close_rx.await;
		Ok(())
	};

	let shutdown = move || async move {
		close_tx.send(()).map_err(|_| broken_pipe())?;
		Ok(())
	};

	let res = run_with_shutdown(serve, shutdown, future::ready(()), TIMEOUT).await;

	assert!(res.is_ok());
}

#[tokio::test]
async fn shutdown_error_is_reported() {
	let res = run_with_shutdown(
		future::pending(),
		|| future::ready(Err(broken_pipe())),
		future::ready(()),
		TIMEOUT,
	)
	.await;

	assert!(matches!(res, Err(RunError::Shutdown(_))));
}

#[tokio::test]
async fn serve_error_wins_over_shutdown_error() {
	let (close_tx, close_rx) = oneshot::channel::<()>();
	let (done_tx, done_rx) = oneshot::channel::<()>();

	// The listener fails while closing; the shutdown waits for it to
	// finish before failing too. The listener error must win.
	let serve = async move {
		let _ = close_rx.await;
		let _ = done_tx.send(());
		Err(broken_pipe())
	};

	let shutdown = move || async move {
		let _ = close_tx.send(());
		let _ = done_rx.await;
		Err(broken_pipe())
	};

	let res = run_with_shutdown(serve, shutdown, future::ready(()), TIMEOUT).await;

	assert!(matches!(res, Err(RunError::Serve(_))));
}

#[tokio::test(start_paused = true)]
async fn hanging_shutdown_times_out() {
	let res = run_with_shutdown(
		future::pending(),
		|| future::pending(),
		future::ready(()),
		TIMEOUT,
	)
	.await;

	assert!(matches!(res, Err(RunError::ShutdownTimeout(_))));
}

//! SIGINT outside the raw-mode line editor
//!
//! Piped stdin is read with blocking calls that std retries on `EINTR`, so the
//! reading thread never learns about a signal. A watcher thread takes over
//! the signal instead.

use signal_hook::{consts::SIGINT, iterator::Signals};
use std::io;
use std::thread::{self, JoinHandle};
use tracing::info;

/// Run `on_interrupt` on a background thread the first time SIGINT arrives.
pub fn watch<F>(on_interrupt: F) -> io::Result<JoinHandle<()>>
where
    F: FnOnce() + Send + 'static,
{
    let mut signals = Signals::new([SIGINT])?;
    thread::Builder::new()
        .name("gurt-sigint".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                info!(signal, "interrupt signal received");
                on_interrupt();
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gurt_core::input::{LineSource, ReaderSource};
    use std::io::{BufReader, Read};
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    /// A pipe whose writer decides when bytes arrive
    struct ChannelReader(Receiver<Vec<u8>>);

    impl Read for ChannelReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.recv() {
                Ok(bytes) => {
                    let n = bytes.len().min(buf.len());
                    buf[..n].copy_from_slice(&bytes[..n]);
                    Ok(n)
                }
                Err(_) => Ok(0),
            }
        }
    }

    #[test]
    fn test_sigint_is_seen_while_a_read_is_blocked() {
        let (seen_tx, seen_rx) = mpsc::channel();
        let watcher = watch(move || {
            let _ = seen_tx.send(());
        })
        .unwrap();

        let (line_tx, line_rx) = mpsc::channel::<Vec<u8>>();
        let reader = thread::spawn(move || {
            let mut source = ReaderSource::new(BufReader::new(ChannelReader(line_rx)));
            source.next_line().unwrap()
        });
        thread::sleep(Duration::from_millis(50));

        signal_hook::low_level::raise(SIGINT).unwrap();

        seen_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("interrupt was not delivered");
        assert!(!reader.is_finished());

        drop(line_tx);
        assert_eq!(reader.join().unwrap(), None);
        watcher.join().unwrap();
    }
}

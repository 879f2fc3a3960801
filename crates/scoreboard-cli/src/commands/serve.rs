//! Serve the UI ports over stdin/stdout.
//!
//! Each stdin line is one inbound port message and each stdout line one
//! outbound message. End of input shuts the bridge down.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::{Result, anyhow};
use scoreboard_core::{
    BridgeEvent, Config, LocalAuthProvider, Outbound, ScoreBridge, decode_inbound,
    encode_outbound,
};
use tracing::{info, warn};

use crate::cli_utils;

pub fn run(config: &Config) -> Result<()> {
    let store = cli_utils::open_store(config)?;
    let auth = LocalAuthProvider::new(&config.auth);

    let (outbound_tx, outbound_rx) = mpsc::channel();
    let mut bridge = ScoreBridge::new(store, auth, outbound_tx);

    let events = bridge.event_sender();
    let reader = thread::spawn(move || read_ports(io::stdin().lock(), events));
    let writer = thread::spawn(move || write_ports(outbound_rx, io::stdout().lock()));

    info!("Serving ports on stdin/stdout");
    bridge.run(config.store.refresh_interval());

    // Dropping the bridge closes the outbound channel and ends the writer
    drop(bridge);

    writer
        .join()
        .map_err(|_| anyhow!("Port writer thread panicked"))??;
    reader
        .join()
        .map_err(|_| anyhow!("Port reader thread panicked"))??;

    info!("Shutdown complete");
    Ok(())
}

/// Forward decoded inbound lines to the bridge, then ask it to shut down.
fn read_ports<R: BufRead>(input: R, events: Sender<BridgeEvent>) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match decode_inbound(&line) {
            Ok(message) => {
                if events.send(BridgeEvent::Port(message)).is_err() {
                    return Ok(());
                }
            }
            Err(e) => warn!("Ignoring malformed port message: {}", e),
        }
    }

    let _ = events.send(BridgeEvent::Shutdown);
    Ok(())
}

/// Write every outbound message as one JSON line until the bridge is dropped.
fn write_ports<W: Write>(outbound: Receiver<Outbound>, mut output: W) -> Result<()> {
    for message in outbound {
        let line = encode_outbound(&message)?;
        writeln!(output, "{}", line)?;
        output.flush()?;
    }
    Ok(())
}

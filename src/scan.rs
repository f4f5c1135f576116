// src/scan.rs
//
// Code-scanning collaborators. A scanner is a restartable stream of decoded
// text; every code goes through `Controller::submit`, exactly like typed input.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::controller::Controller;
use crate::error::{LookupError, ScanError};
use crate::resolver::Hit;

pub trait Scanner {
    fn start(&mut self) -> Result<(), ScanError>;

    /// Idempotent. Also switches the torch off.
    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Block until the next decoded code. `Ok(None)` once stopped or exhausted.
    fn next_code(&mut self) -> Result<Option<String>, ScanError>;

    fn supports_torch(&self) -> bool { false }

    fn set_torch(&mut self, _on: bool) -> Result<(), ScanError> {
        Err(ScanError::TorchUnsupported)
    }

    /// Lazy iterator over decoded codes.
    fn codes(&mut self) -> Codes<'_, Self>
    where
        Self: Sized,
    {
        Codes { scanner: self }
    }
}

pub struct Codes<'a, S: ?Sized> {
    scanner: &'a mut S,
}

impl<S: Scanner + ?Sized> Iterator for Codes<'_, S> {
    type Item = Result<String, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scanner.next_code().transpose()
    }
}

/* ---------------- Line-oriented scanners ---------------- */

/// Keyboard-wedge and serial scanners: one decoded code per line.
/// Blank lines are skipped.
pub struct LineScanner<R> {
    reader: R,
    running: bool,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, running: false }
    }
}

impl<R: BufRead> Scanner for LineScanner<R> {
    fn start(&mut self) -> Result<(), ScanError> {
        self.running = true;
        logd!("Scan: line scanner on");
        Ok(())
    }

    fn stop(&mut self) {
        if self.running {
            logd!("Scan: line scanner off");
        }
        self.running = false;
    }

    fn is_running(&self) -> bool { self.running }

    /// Invalid UTF-8 is replaced rather than ending the session.
    fn next_code(&mut self) -> Result<Option<String>, ScanError> {
        let mut buf = Vec::new();
        while self.running {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                self.running = false;
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let code = line.trim_end_matches(['\r', '\n']);
            if !code.trim().is_empty() {
                return Ok(Some(s!(code)));
            }
        }
        Ok(None)
    }
}

/* ---------------- Channel-fed scanner ---------------- */

/// Sending half handed to whatever decodes codes (a thread, GUI key capture).
#[derive(Clone)]
pub struct ScanFeed {
    tx: Sender<String>,
}

impl ScanFeed {
    /// `false` once the scanner has been dropped.
    pub fn send(&self, code: impl Into<String>) -> bool {
        self.tx.send(code.into()).is_ok()
    }
}

/// Codes arrive over a channel. Codes sent while stopped are discarded on
/// the next `start`.
pub struct ChannelScanner {
    rx: Receiver<String>,
    running: bool,
    torch_capable: bool,
    torch_on: bool,
}

impl ChannelScanner {
    pub fn channel() -> (Self, ScanFeed) {
        let (tx, rx) = mpsc::channel();
        let scanner = Self { rx, running: false, torch_capable: false, torch_on: false };
        (scanner, ScanFeed { tx })
    }

    /// Mark the device behind the feed as having a controllable light.
    pub fn with_torch(mut self) -> Self {
        self.torch_capable = true;
        self
    }

    pub fn torch_on(&self) -> bool { self.torch_on }

    /// Non-blocking poll, for frame-driven callers.
    pub fn try_next_code(&mut self) -> Option<String> {
        if !self.running {
            return None;
        }
        match self.rx.try_recv() {
            Ok(code) => Some(code),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.running = false;
                None
            }
        }
    }
}

impl Scanner for ChannelScanner {
    fn start(&mut self) -> Result<(), ScanError> {
        let stale = self.rx.try_iter().count();
        if stale > 0 {
            logd!("Scan: dropped {} stale code(s)", stale);
        }
        self.running = true;
        logd!("Scan: channel scanner on");
        Ok(())
    }

    fn stop(&mut self) {
        if self.torch_on {
            // Best effort; a stop never fails.
            let _ = self.set_torch(false);
        }
        self.running = false;
    }

    fn is_running(&self) -> bool { self.running }

    fn next_code(&mut self) -> Result<Option<String>, ScanError> {
        if !self.running {
            return Ok(None);
        }
        match self.rx.recv() {
            Ok(code) => Ok(Some(code)),
            Err(_) => {
                self.running = false;
                Ok(None)
            }
        }
    }

    fn supports_torch(&self) -> bool { self.torch_capable }

    fn set_torch(&mut self, on: bool) -> Result<(), ScanError> {
        if !self.torch_capable {
            return Err(ScanError::TorchUnsupported);
        }
        if !self.running && on {
            return Err(ScanError::NotRunning);
        }
        self.torch_on = on;
        logd!("Scan: torch → {}", on);
        Ok(())
    }
}

/* ---------------- Session ---------------- */

/// Start `scanner` and route every decoded code through `controller`.
///
/// `on_outcome` gets the raw code and its lookup result. With
/// `stop_after_read` the scanner is stopped as soon as one code arrives,
/// before the lookup runs. The scanner is always stopped on return.
/// Returns how many codes were handled.
pub fn run_session<S, F>(
    scanner: &mut S,
    controller: &Controller,
    stop_after_read: bool,
    mut on_outcome: F,
) -> Result<usize, ScanError>
where
    S: Scanner + ?Sized,
    F: FnMut(&str, &Result<Hit, LookupError>),
{
    scanner.start()?;
    let mut handled = 0;
    let mut result = Ok(());

    loop {
        match scanner.next_code() {
            Ok(Some(code)) => {
                if stop_after_read {
                    scanner.stop();
                }
                let outcome = controller.submit(&code);
                handled += 1;
                on_outcome(&code, &outcome);
                if stop_after_read {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                loge!("Scan: {}", e);
                result = Err(e);
                break;
            }
        }
    }

    scanner.stop();
    logd!("Scan: session handled {} code(s)", handled);
    result.map(|_| handled)
}

/// Toggle the torch, logging instead of failing when the device has none.
pub fn toggle_torch<S: Scanner + ?Sized>(scanner: &mut S, on: bool) -> bool {
    match scanner.set_torch(on) {
        Ok(()) => true,
        Err(e) => {
            logw!("Scan: torch: {}", e);
            false
        }
    }
}

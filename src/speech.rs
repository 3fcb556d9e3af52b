use crate::logger;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::process::{Command, Stdio};
use std::thread;

/// A phrase to pronounce. Best-effort: no reply channel, no result.
#[derive(Debug, Clone)]
pub enum SpeechRequest {
    Say(String),
}

/// Cloneable handle the screens use to queue pronunciation feedback.
/// Dropping every handle disconnects the channel and stops the worker.
#[derive(Debug, Clone)]
pub struct SpeechHandle {
    tx: Sender<SpeechRequest>,
}

impl SpeechHandle {
    pub fn say(&self, text: &str) {
        let _ = self.tx.send(SpeechRequest::Say(text.to_string()));
    }

    /// A handle whose requests go nowhere; used in tests.
    #[cfg(test)]
    pub fn disconnected() -> Self {
        let (tx, _) = unbounded();
        Self { tx }
    }
}

pub fn spawn_speech_worker() -> (SpeechHandle, thread::JoinHandle<()>) {
    let (tx, rx) = unbounded::<SpeechRequest>();
    let handle = thread::Builder::new()
        .name("learning-fun-galaxy::speech".to_string())
        .spawn(move || worker_loop(rx))
        .expect("Failed to spawn speech worker thread");
    (SpeechHandle { tx }, handle)
}

fn worker_loop(rx: Receiver<SpeechRequest>) {
    loop {
        match rx.recv() {
            Ok(SpeechRequest::Say(text)) => {
                if !speak(&text) {
                    logger::log(&format!("speech: no backend spoke \"{}\"", text));
                }
            }
            Err(_) => {
                // Channel disconnected, exit worker
                logger::log("speech worker channel disconnected, exiting");
                break;
            }
        }
    }
}

/// Try the usual on-device synthesizers in order. The exit status is
/// consulted only to fall through to the next candidate.
fn speak(text: &str) -> bool {
    for program in ["espeak", "say", "spd-say"] {
        let status = Command::new(program)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        if let Ok(status) = status
            && status.success()
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_say_never_blocks_or_panics() {
        let handle = SpeechHandle::disconnected();
        handle.say("A as in Apple");
        handle.say("");
    }

    #[test]
    fn test_worker_exits_on_disconnect() {
        let (handle, join) = spawn_speech_worker();
        drop(handle);
        join.join().unwrap();
    }
}

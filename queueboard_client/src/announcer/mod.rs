use crate::mirror::Announcement;
use anyhow::Result;
use async_trait::async_trait;
use std::io::Write;


/// Where the tone and speech for a called ticket go.
#[async_trait]
pub trait Announcer: Send + Sync {
    /// Plays the notification tone and returns once it has finished.
    async fn play_tone(&self) -> Result<()>;
    async fn speak(&self, text: &str) -> Result<()>;
}

/// Rings, then speaks once the tone has finished.
pub async fn announce(announcer: &dyn Announcer, announcement: &Announcement) -> Result<()> {
    announcer.play_tone().await?;
    announcer.speak(&announcement.speech()).await
}

/// Terminal stand-in for audio: rings the bell and logs the spoken line.
pub struct TerminalAnnouncer;

#[async_trait]
impl Announcer for TerminalAnnouncer {
    async fn play_tone(&self) -> Result<()> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }

    async fn speak(&self, text: &str) -> Result<()> {
        tracing::info!(lang = "en-US", "{}", text);
        Ok(())
    }
}

//! Sentence playback, one clip after another.

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::catalog::AudioCatalog;
use crate::error::AudioError;
use crate::player::ClipPlayer;

/// What happened to one spoken sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    pub played: usize,
    /// Words with no clip, or whose clip could not be played.
    pub skipped: Vec<String>,
    /// A newer sentence (or [`Narrator::interrupt`]) cut this one off.
    pub interrupted: bool,
}

/// Speaks word sequences through a [`ClipPlayer`].
///
/// Only one sentence plays at a time: starting a new one cancels the one in
/// progress, and the cancelled call returns with `interrupted` set.
pub struct Narrator<P> {
    catalog: AudioCatalog,
    player: P,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl<P: ClipPlayer> Narrator<P> {
    pub fn new(catalog: AudioCatalog, player: P) -> Self {
        Self {
            catalog,
            player,
            in_flight: Mutex::new(None),
        }
    }

    pub fn catalog(&self) -> &AudioCatalog {
        &self.catalog
    }

    /// Stop whatever is playing.
    pub fn interrupt(&self) {
        if let Some(token) = self.in_flight.lock().take() {
            token.cancel();
        }
    }

    /// Play `words` in order, waiting for each clip to end before the next.
    pub async fn speak<I, S>(&self, words: I) -> Result<PlaybackReport, AudioError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
        let token = CancellationToken::new();
        if let Some(previous) = self.in_flight.lock().replace(token.clone()) {
            tracing::debug!("Interrupting previous sentence");
            previous.cancel();
        }

        let mut report = PlaybackReport::default();
        for word in words {
            if token.is_cancelled() {
                report.interrupted = true;
                break;
            }

            let Some(clip) = self.catalog.resolve(&word) else {
                tracing::debug!("No clip for {:?}, skipping", word);
                report.skipped.push(word);
                continue;
            };

            if !tokio::fs::try_exists(clip).await.unwrap_or(false) {
                tracing::debug!("Clip {} missing, skipping", clip.display());
                report.skipped.push(word);
                continue;
            }

            tokio::select! {
                _ = token.cancelled() => {
                    report.interrupted = true;
                    break;
                }
                result = self.player.play(clip) => match result {
                    Ok(()) => report.played += 1,
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(e) => {
                        tracing::warn!("{}", e);
                        report.skipped.push(word);
                    }
                },
            }
        }

        tracing::debug!(
            played = report.played,
            skipped = report.skipped.len(),
            interrupted = report.interrupted,
            "Sentence finished"
        );
        Ok(report)
    }
}

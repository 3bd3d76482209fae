use hablame_audio::AudioError as ServiceAudioError;
use hablame_core::{AppError, AudioError};

pub fn audio_error(e: ServiceAudioError) -> AppError {
    match e {
        ServiceAudioError::Spawn { .. } => {
            AppError::Audio(AudioError::PlayerUnavailable(e.to_string()))
        }
        ServiceAudioError::PlayerFailed { .. } => {
            AppError::Audio(AudioError::PlaybackFailed(e.to_string()))
        }
        ServiceAudioError::Catalog { .. } => {
            AppError::Audio(AudioError::ClipsUnavailable(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failure_is_player_unavailable() {
        let err = audio_error(ServiceAudioError::Spawn {
            program: "mpg123".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert!(matches!(err, AppError::Audio(AudioError::PlayerUnavailable(_))));
        assert!(err.user_message().contains("audio.player"));
    }
}

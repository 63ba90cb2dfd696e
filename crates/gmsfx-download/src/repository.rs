//! Remote sound repository URLs

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the sound name in a URL template
pub const NAME_PLACEHOLDER: &str = "{name}";

pub const SOUND_URL_TEMPLATE: &str =
    "https://github.com/xzripper/gmsfx3-sounds/blob/main/sounds/{name}.wav?raw=true";

pub const BASE_VERSION_URL: &str =
    "https://github.com/xzripper/gmsfx3-sounds/blob/main/sounds/BASE-VERSION?raw=true";

/// Build the download URL of a sound in the default repository.
///
/// The name is inserted verbatim.
pub fn sound_url(name: &str) -> String {
    SOUND_URL_TEMPLATE.replace(NAME_PLACEHOLDER, name)
}

/// Where sounds and the base version are fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundRepository {
    /// Sound URL template containing one `{name}` placeholder
    pub sound_url_template: String,
    pub base_version_url: String,
}

impl SoundRepository {
    pub fn new(sound_url_template: impl Into<String>, base_version_url: impl Into<String>) -> Self {
        Self {
            sound_url_template: sound_url_template.into(),
            base_version_url: base_version_url.into(),
        }
    }

    pub fn sound_url(&self, name: &str) -> String {
        self.sound_url_template.replace(NAME_PLACEHOLDER, name)
    }

    pub fn base_version_url(&self) -> &str {
        &self.base_version_url
    }

    /// Number of `{name}` placeholders in the template
    pub fn placeholder_count(&self) -> usize {
        self.sound_url_template.matches(NAME_PLACEHOLDER).count()
    }
}

impl Default for SoundRepository {
    fn default() -> Self {
        Self::new(SOUND_URL_TEMPLATE, BASE_VERSION_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_url() {
        assert_eq!(
            sound_url("click"),
            "https://github.com/xzripper/gmsfx3-sounds/blob/main/sounds/click.wav?raw=true"
        );
    }

    #[test]
    fn test_sound_url_contains_name_once() {
        let prefix = "https://github.com/xzripper/gmsfx3-sounds/blob/main/sounds/";
        let suffix = ".wav?raw=true";

        for name in ["click", "", "door-open", "a b", "../escape", "{name}"] {
            let url = sound_url(name);
            assert!(url.starts_with(prefix));
            assert!(url.ends_with(suffix));
            assert_eq!(&url[prefix.len()..url.len() - suffix.len()], name);
        }
    }

    #[test]
    fn test_custom_repository() {
        let repo = SoundRepository::new(
            "http://127.0.0.1:8080/sfx/{name}.wav",
            "http://127.0.0.1:8080/sfx/BASE-VERSION",
        );

        assert_eq!(repo.sound_url("beep"), "http://127.0.0.1:8080/sfx/beep.wav");
        assert_eq!(repo.base_version_url(), "http://127.0.0.1:8080/sfx/BASE-VERSION");
        assert_eq!(repo.placeholder_count(), 1);
    }

    #[test]
    fn test_default_repository() {
        let repo = SoundRepository::default();

        assert_eq!(repo.sound_url("click"), sound_url("click"));
        assert_eq!(repo.base_version_url(), BASE_VERSION_URL);
    }
}

// Hash-based page mode.

pub const ABOUT_HASH: &str = "#about";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Hero,
    About,
}

impl Mode {
    pub fn from_hash(hash: &str) -> Self {
        if hash == ABOUT_HASH {
            Mode::About
        } else {
            Mode::Hero
        }
    }

    pub fn hash(self) -> &'static str {
        match self {
            Mode::Hero => "",
            Mode::About => ABOUT_HASH,
        }
    }

    /// Body overflow while this mode is shown.
    pub fn body_overflow(self) -> &'static str {
        match self {
            Mode::Hero => "hidden",
            Mode::About => "auto",
        }
    }

    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|h| Self::from_hash(&h))
            .unwrap_or_default()
    }

    /// Navigates by rewriting the location hash; `hashchange` does the rest.
    pub fn navigate(self) {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().set_hash(self.hash()) {
                log::warn!("could not set location hash: {e:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_about_hash_opens_overlay() {
        assert_eq!(Mode::from_hash("#about"), Mode::About);
        assert_eq!(Mode::from_hash(""), Mode::Hero);
        assert_eq!(Mode::from_hash("#"), Mode::Hero);
        assert_eq!(Mode::from_hash("#About"), Mode::Hero);
        assert_eq!(Mode::from_hash("#about/team"), Mode::Hero);
    }

    #[test]
    fn hash_round_trips() {
        for mode in [Mode::Hero, Mode::About] {
            assert_eq!(Mode::from_hash(mode.hash()), mode);
        }
    }

    #[test]
    fn overlay_unlocks_body_scroll() {
        assert_eq!(Mode::Hero.body_overflow(), "hidden");
        assert_eq!(Mode::About.body_overflow(), "auto");
    }
}

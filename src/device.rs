//! One-shot capability checks: device class from the user agent, and which
//! background renderer the browser can run.

use std::fmt::Display;
use std::sync::LazyLock;
use std::time::Duration;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

static MOBILE_AGENT: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new("android|webos|iphone|ipad|ipod|blackberry|iemobile|opera mini")
        .case_insensitive(true)
        .build()
        .expect("mobile user agent pattern should compile")
});

/// How long the "call from mobile" hint stays up on desktop.
pub const PHONE_TOOLTIP_DURATION: Duration = Duration::from_secs(3);

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_AGENT.is_match(user_agent)
}

/// The browser's user agent, or `None` outside the browser.
pub fn current_user_agent() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.navigator().user_agent().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Mobile check against the live user agent. Always false off the browser.
pub fn current_device_is_mobile() -> bool {
    current_user_agent().is_some_and(|ua| is_mobile_user_agent(&ua))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneAction {
    /// A live link the device can dial.
    Dial { href: String },
    /// Swallow the click and show a hint instead.
    ShowTooltip,
}

impl PhoneAction {
    pub fn for_device(is_mobile: bool, phone: &str) -> Self {
        if is_mobile {
            Self::Dial {
                href: tel_href(phone),
            }
        } else {
            Self::ShowTooltip
        }
    }

    pub fn href(&self) -> &str {
        match self {
            Self::Dial { href } => href,
            Self::ShowTooltip => "#",
        }
    }

    pub fn navigates(&self) -> bool {
        matches!(self, Self::Dial { .. })
    }
}

pub fn tel_href(phone: &str) -> String {
    let number: String = phone.split_whitespace().collect();
    format!("tel:{number}")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("no WebGL context available")]
    Unavailable,
    #[error("couldn't acquire WebGL context: {0}")]
    Acquire(String),
    #[error("shader failed to compile: {0}")]
    Shader(String),
    #[error("shader program failed to link: {0}")]
    Link(String),
    #[error("couldn't allocate {0}")]
    Resource(&'static str),
    #[error("WebGL context was lost")]
    ContextLost,
    #[error("draw failed with GL error {0:#06x}")]
    Draw(u32),
}

/// Background renderer chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    Accelerated,
    Fallback,
}

impl RenderStrategy {
    /// Runs `acquire` once. Any error, or no context at all, pins the
    /// session to the CSS fallback.
    pub fn probe<T, E: Display>(acquire: impl FnOnce() -> Result<Option<T>, E>) -> Self {
        match acquire() {
            Ok(Some(_)) => Self::Accelerated,
            Ok(None) => {
                log::debug!("no hardware drawing context, using CSS background");
                Self::Fallback
            }
            Err(e) => {
                log::warn!("graphics probe failed, using CSS background: {e}");
                Self::Fallback
            }
        }
    }

    /// Strategy after a runtime fault in the accelerated layer. There is no
    /// way back from `Fallback`.
    pub fn demote(self, fault: &RenderError) -> Self {
        if self == Self::Accelerated {
            log::error!("background renderer fault, switching to CSS: {fault}");
        }
        Self::Fallback
    }

    pub fn mounts_accelerated(self) -> bool {
        self == Self::Accelerated
    }
}

/// What the background slot shows for a (possibly unresolved) strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundLayer {
    /// Nothing yet; the probe hasn't run.
    Pending,
    Accelerated,
    Css,
}

impl BackgroundLayer {
    pub fn for_strategy(strategy: Option<RenderStrategy>) -> Self {
        match strategy {
            None => Self::Pending,
            Some(s) if s.mounts_accelerated() => Self::Accelerated,
            Some(_) => Self::Css,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const DESKTOP_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const IPHONE_SAFARI: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

    #[test]
    fn test_mobile_agents() {
        assert!(is_mobile_user_agent(IPHONE_SAFARI));
        assert!(is_mobile_user_agent("something iphone something"));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(is_mobile_user_agent("BlackBerry9700/5.0.0.351"));
        assert!(!is_mobile_user_agent(DESKTOP_CHROME));
        assert!(!is_mobile_user_agent(""));
    }

    #[test]
    fn test_phone_action_mobile_dials() {
        let action = PhoneAction::for_device(is_mobile_user_agent(IPHONE_SAFARI), "+1 313 690 1673");
        assert_eq!(
            action,
            PhoneAction::Dial {
                href: "tel:+13136901673".to_string()
            }
        );
        assert!(action.navigates());
        assert_eq!(action.href(), "tel:+13136901673");
    }

    #[test]
    fn test_phone_action_desktop_shows_tooltip() {
        let action = PhoneAction::for_device(is_mobile_user_agent(DESKTOP_CHROME), "+1 313 690 1673");
        assert_eq!(action, PhoneAction::ShowTooltip);
        assert!(!action.navigates());
        assert_eq!(action.href(), "#");
        assert_eq!(PHONE_TOOLTIP_DURATION, Duration::from_secs(3));
    }

    #[test]
    fn test_probe_success_is_accelerated() {
        let strategy = RenderStrategy::probe(|| Ok::<_, RenderError>(Some(())));
        assert_eq!(strategy, RenderStrategy::Accelerated);
        assert!(strategy.mounts_accelerated());
    }

    #[test]
    fn test_probe_failure_never_mounts_accelerated() {
        let none = RenderStrategy::probe(|| Ok::<Option<()>, RenderError>(None));
        assert_eq!(none, RenderStrategy::Fallback);
        assert!(!none.mounts_accelerated());

        let err = RenderStrategy::probe(|| Err::<Option<()>, _>(RenderError::Unavailable));
        assert_eq!(err, RenderStrategy::Fallback);
        assert!(!err.mounts_accelerated());
    }

    #[test]
    fn test_failed_probe_selects_css_layer() {
        let failed = RenderStrategy::probe(|| Err::<Option<()>, _>(RenderError::Unavailable));
        assert_eq!(BackgroundLayer::for_strategy(Some(failed)), BackgroundLayer::Css);
        let missing = RenderStrategy::probe(|| Ok::<Option<()>, RenderError>(None));
        assert_eq!(BackgroundLayer::for_strategy(Some(missing)), BackgroundLayer::Css);

        let ok = RenderStrategy::probe(|| Ok::<_, RenderError>(Some(())));
        assert_eq!(BackgroundLayer::for_strategy(Some(ok)), BackgroundLayer::Accelerated);
        let demoted = ok.demote(&RenderError::ContextLost);
        assert_eq!(BackgroundLayer::for_strategy(Some(demoted)), BackgroundLayer::Css);

        assert_eq!(BackgroundLayer::for_strategy(None), BackgroundLayer::Pending);
    }

    #[test]
    fn test_probe_runs_once() {
        let calls = Cell::new(0);
        let _ = RenderStrategy::probe(|| {
            calls.set(calls.get() + 1);
            Ok::<_, RenderError>(Some(()))
        });
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_runtime_fault_is_permanent() {
        let s = RenderStrategy::Accelerated.demote(&RenderError::ContextLost);
        assert_eq!(s, RenderStrategy::Fallback);
        let s = s.demote(&RenderError::Draw(0x0505));
        assert_eq!(s, RenderStrategy::Fallback);
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_server_has_no_user_agent() {
        assert_eq!(current_user_agent(), None);
        // re-running the check on every resize never flips it off the browser
        for _ in 0..3 {
            assert!(!current_device_is_mobile());
        }
    }
}

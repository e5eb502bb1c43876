//! Document-preview sessions: the environment branch, the viewer embed
//! URL, and the loading-resolution state machine.
//!
//! A session opened against a networked origin starts `Loading` with
//! the remote viewer embedded; the frame's load event and a fallback
//! timer then race, and whichever fires first settles the session.
//! Both triggers funnel through [`PreviewSession::resolved`], which
//! only acts on a session that is still loading and still the same
//! open (by generation), so a late or stale trigger is inert.

/// How long a remote preview may stay loading before the download
/// fallback takes over.
pub const FALLBACK_DELAY_MS: u32 = 15_000;

const VIEWER_ENDPOINT: &str = "https://view.officeapps.live.com/op/embed.aspx?src=";

/// True when the page is served from a context the remote viewer
/// cannot reach back into, so embedding it would only ever time out.
pub fn is_local_context(hostname: &str, protocol: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1" || protocol == "file:"
}

/// Viewer URL for a file served relative to the page origin.
pub fn viewer_embed_url(origin: &str, file: &str) -> String {
    let absolute = format!("{origin}/{file}");
    format!("{VIEWER_ENDPOINT}{}", urlencoding::encode(&absolute))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewPhase {
    Loading,
    Ready,
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewTrigger {
    FrameLoaded,
    TimerElapsed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewSession {
    pub generation: u64,
    pub phase: PreviewPhase,
}

impl PreviewSession {
    /// A local context skips straight to the fallback; anything else
    /// starts loading the embedded viewer.
    pub fn open(generation: u64, local: bool) -> Self {
        let phase = if local {
            PreviewPhase::Fallback
        } else {
            PreviewPhase::Loading
        };
        Self { generation, phase }
    }

    /// Applies a trigger armed for `generation`. Triggers from another
    /// open, and triggers arriving after the session settled, change
    /// nothing.
    pub fn resolved(self, generation: u64, trigger: PreviewTrigger) -> Self {
        if generation != self.generation || self.phase != PreviewPhase::Loading {
            return self;
        }

        let phase = match trigger {
            PreviewTrigger::FrameLoaded => PreviewPhase::Ready,
            PreviewTrigger::TimerElapsed => PreviewPhase::Fallback,
        };
        Self { phase, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_contexts_are_detected() {
        assert!(is_local_context("localhost", "http:"));
        assert!(is_local_context("127.0.0.1", "http:"));
        assert!(is_local_context("anything", "file:"));
    }

    #[test]
    fn served_origins_are_not_local() {
        assert!(!is_local_context("studio.example", "https:"));
        assert!(!is_local_context("www.northlight.studio", "http:"));
    }

    #[test]
    fn embed_url_escapes_the_absolute_file_url() {
        let url = viewer_embed_url("https://studio.example", "assets/docs/atlas-annual-report.docx");
        assert_eq!(
            url,
            "https://view.officeapps.live.com/op/embed.aspx?src=https%3A%2F%2Fstudio.example%2Fassets%2Fdocs%2Fatlas-annual-report.docx"
        );
    }

    #[test]
    fn local_open_reaches_fallback_without_loading() {
        let session = PreviewSession::open(1, true);
        assert_eq!(session.phase, PreviewPhase::Fallback);
    }

    #[test]
    fn remote_open_starts_loading() {
        let session = PreviewSession::open(1, false);
        assert_eq!(session.phase, PreviewPhase::Loading);
    }

    #[test]
    fn frame_load_settles_a_loading_session() {
        let session = PreviewSession::open(3, false).resolved(3, PreviewTrigger::FrameLoaded);
        assert_eq!(session.phase, PreviewPhase::Ready);
    }

    #[test]
    fn timer_settles_a_session_still_loading() {
        let session = PreviewSession::open(3, false).resolved(3, PreviewTrigger::TimerElapsed);
        assert_eq!(session.phase, PreviewPhase::Fallback);
    }

    #[test]
    fn late_triggers_cannot_unsettle_a_session() {
        let loaded = PreviewSession::open(4, false).resolved(4, PreviewTrigger::FrameLoaded);
        assert_eq!(loaded.resolved(4, PreviewTrigger::TimerElapsed).phase, PreviewPhase::Ready);

        let timed_out = PreviewSession::open(5, false).resolved(5, PreviewTrigger::TimerElapsed);
        assert_eq!(
            timed_out.resolved(5, PreviewTrigger::FrameLoaded).phase,
            PreviewPhase::Fallback
        );
    }

    #[test]
    fn triggers_from_a_previous_open_are_ignored() {
        // Timer armed for open #6 fires after the modal was reopened as #7.
        let reopened = PreviewSession::open(7, false);
        assert_eq!(reopened.resolved(6, PreviewTrigger::TimerElapsed).phase, PreviewPhase::Loading);
    }

    #[test]
    fn local_fallback_ignores_every_trigger() {
        let session = PreviewSession::open(2, true);
        assert_eq!(session.resolved(2, PreviewTrigger::FrameLoaded).phase, PreviewPhase::Fallback);
        assert_eq!(session.resolved(2, PreviewTrigger::TimerElapsed).phase, PreviewPhase::Fallback);
    }
}
